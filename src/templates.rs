// src/templates.rs
use std::fmt;

use clap::ValueEnum;

pub const FRONTEND_REPO: &str = "https://github.com/tacbuild/starter-frontend.git";
pub const HARDHAT_REPO: &str = "https://github.com/tacbuild/starter-hardhat.git";
pub const FOUNDRY_REPO: &str = "https://github.com/tacbuild/starter-foundry.git";

/// Smart contract framework the contracts template is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Framework {
  /// Hardhat (JavaScript/TypeScript)
  Hardhat,
  /// Foundry (Solidity)
  Foundry,
  /// Frontend only, no contracts template
  None,
}

impl fmt::Display for Framework {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Framework::Hardhat => write!(f, "hardhat"),
      Framework::Foundry => write!(f, "foundry"),
      Framework::None => write!(f, "none"),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateRole {
  Frontend,
  Contracts,
}

impl fmt::Display for TemplateRole {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      TemplateRole::Frontend => write!(f, "frontend"),
      TemplateRole::Contracts => write!(f, "contracts"),
    }
  }
}

/// One remote template and where it lands inside the project.
/// An empty `subpath` means the project root.
#[derive(Debug, Clone)]
pub struct TemplateEntry {
  pub role: TemplateRole,
  pub source_url: String,
  pub subpath: String,
}

impl TemplateEntry {
  fn new(role: TemplateRole, source_url: &str, subpath: &str) -> Self {
    TemplateEntry {
      role,
      source_url: source_url.to_string(),
      subpath: subpath.to_string(),
    }
  }
}

/// Maps a framework choice to the ordered set of templates to clone.
/// Pure mapping; acquisition happens later, in its own pipeline stage.
pub fn resolve(framework: Framework) -> Vec<TemplateEntry> {
  let frontend = TemplateEntry::new(TemplateRole::Frontend, FRONTEND_REPO, "");

  match framework {
    Framework::Hardhat => vec![
      frontend,
      TemplateEntry::new(TemplateRole::Contracts, HARDHAT_REPO, "contracts"),
    ],
    Framework::Foundry => vec![
      frontend,
      TemplateEntry::new(TemplateRole::Contracts, FOUNDRY_REPO, "contracts"),
    ],
    Framework::None => vec![frontend],
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn hardhat_resolves_frontend_then_contracts() {
    let set = resolve(Framework::Hardhat);
    assert_eq!(set.len(), 2);
    assert_eq!(set[0].role, TemplateRole::Frontend);
    assert_eq!(set[0].subpath, "");
    assert_eq!(set[1].role, TemplateRole::Contracts);
    assert_eq!(set[1].source_url, HARDHAT_REPO);
    assert_eq!(set[1].subpath, "contracts");
  }

  #[test]
  fn foundry_swaps_the_contracts_source() {
    let set = resolve(Framework::Foundry);
    assert_eq!(set[1].source_url, FOUNDRY_REPO);
    assert_eq!(set[1].subpath, "contracts");
  }

  #[test]
  fn none_resolves_frontend_only() {
    let set = resolve(Framework::None);
    assert_eq!(set.len(), 1);
    assert_eq!(set[0].role, TemplateRole::Frontend);
  }
}
