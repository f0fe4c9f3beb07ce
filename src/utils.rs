// src/utils.rs
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Output;

use duct::cmd;
use log::{debug, error, trace};

use crate::error::CreateError;

/// Runs an external program with captured output, working directory set to
/// `working_dir`. Non-zero exits come back as `Ok(Output)` (unchecked); the
/// `Err` path is reserved for spawn/wait failures such as a missing binary.
pub fn run_command(program: &str, args: &[&str], working_dir: &Path) -> Result<Output, CreateError> {
  debug!(
    "Executing (duct unchecked): `{} {}` in {}",
    program,
    args.join(" "),
    working_dir.display()
  );

  let expression = cmd(program, args)
    .dir(working_dir)
    .stdout_capture()
    .stderr_capture()
    .unchecked(); // Non-zero exit is data, not an error

  let output = match expression.run() {
    Ok(output) => output,
    Err(e) => {
      error!("Failed to run `{}`: {}", program, e);
      if e.kind() == ErrorKind::NotFound {
        return Err(CreateError::CommandExec {
          program: program.to_string(),
          source: std::io::Error::new(
            ErrorKind::NotFound,
            format!("command not found: {}", program),
          ),
        });
      }
      return Err(CreateError::CommandExec {
        program: program.to_string(),
        source: e,
      });
    }
  };

  if log::log_enabled!(log::Level::Trace) {
    trace!(
      "`{}` stdout:\n{}",
      program,
      String::from_utf8_lossy(&output.stdout)
    );
    trace!(
      "`{}` stderr:\n{}",
      program,
      String::from_utf8_lossy(&output.stderr)
    );
  }

  Ok(output)
}

/// First stderr line of a finished command, for one-line failure reports.
pub fn stderr_excerpt(output: &Output) -> String {
  let stderr = String::from_utf8_lossy(&output.stderr);
  let first_line = stderr.lines().find(|line| !line.trim().is_empty());
  match first_line {
    Some(line) => line.trim().to_string(),
    None => format!("exited with status {}", output.status),
  }
}

/// Removes a cloned template's `.git` directory so the generated project does
/// not inherit the template's commit history. Absent metadata is not an error.
pub fn strip_vcs_metadata(clone_path: &Path) -> std::io::Result<()> {
  let git_dir = clone_path.join(".git");
  match fs::remove_dir_all(&git_dir) {
    Ok(()) => {
      debug!("Removed template VCS metadata: {}", git_dir.display());
      Ok(())
    }
    Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
    Err(e) => Err(e),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs::{self, File};
  use tempfile::tempdir;

  #[test]
  fn nonzero_exit_is_data_not_error() {
    let dir = tempdir().unwrap();
    let output = run_command("false", &[], dir.path()).unwrap();
    assert!(!output.status.success());
  }

  #[test]
  fn missing_binary_is_a_command_exec_error() {
    let dir = tempdir().unwrap();
    let result = run_command("definitely-not-a-real-binary-xyz", &[], dir.path());
    assert!(matches!(result, Err(CreateError::CommandExec { .. })));
  }

  #[test]
  fn stderr_excerpt_prefers_first_nonempty_line() {
    let dir = tempdir().unwrap();
    let output = run_command("sh", &["-c", "echo oops >&2; exit 3"], dir.path()).unwrap();
    assert_eq!(stderr_excerpt(&output), "oops");
  }

  #[test]
  fn stderr_excerpt_falls_back_to_status() {
    let dir = tempdir().unwrap();
    let output = run_command("sh", &["-c", "exit 2"], dir.path()).unwrap();
    assert!(stderr_excerpt(&output).contains("status"));
  }

  #[test]
  fn strip_vcs_metadata_removes_git_dir() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    File::create(dir.path().join(".git").join("HEAD")).unwrap();
    strip_vcs_metadata(dir.path()).unwrap();
    assert!(!dir.path().join(".git").exists());
  }

  #[test]
  fn strip_vcs_metadata_tolerates_missing_git_dir() {
    let dir = tempdir().unwrap();
    strip_vcs_metadata(dir.path()).unwrap();
  }
}
