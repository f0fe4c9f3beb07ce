// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors that abort the remaining pipeline stages and exit non-zero.
///
/// Dependency-install and git-init failures are deliberately absent: those
/// are expected outcomes, captured as failed [`crate::pipeline::StageOutcome`]s
/// and downgraded to warnings.
#[derive(Error, Debug)]
pub enum CreateError {
  #[error("{0}")]
  Validation(String),

  #[error("Failed to create project directory '{path}': {source}")]
  Structure {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to acquire {role} template: {reason}")]
  Acquisition { role: String, reason: String },

  #[error("Failed to generate project files: {source}")]
  Generation {
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to launch '{program}': {source}")]
  CommandExec {
    program: String,
    #[source]
    source: std::io::Error,
  },

  #[error("IO Error: {0}")]
  Io(#[from] std::io::Error),

  #[error("User interaction failed: {0}")]
  Prompt(#[from] dialoguer::Error),
}
