// src/validate.rs
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use regex::Regex;

/// Outcome of a single validation check. Consumed immediately, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
  pub valid: bool,
  pub error: Option<String>,
}

impl ValidationResult {
  pub fn ok() -> Self {
    ValidationResult {
      valid: true,
      error: None,
    }
  }

  pub fn fail(message: impl Into<String>) -> Self {
    ValidationResult {
      valid: false,
      error: Some(message.into()),
    }
  }
}

/// Names npm refuses, plus Windows device names that break checkouts.
const RESERVED_NAMES: &[&str] = &[
  "node_modules",
  "favicon.ico",
  "package.json",
  "package-lock.json",
  "npm",
  "node",
  "con",
  "prn",
  "aux",
  "nul",
  "com1",
  "com2",
  "com3",
  "com4",
  "com5",
  "com6",
  "com7",
  "com8",
  "com9",
  "lpt1",
  "lpt2",
  "lpt3",
  "lpt4",
  "lpt5",
  "lpt6",
  "lpt7",
  "lpt8",
  "lpt9",
];

/// Checks a candidate project name against npm-style package naming rules.
/// Rules apply in order; the first failure wins. Pure function, no I/O.
pub fn validate_project_name(name: &str) -> ValidationResult {
  if name.is_empty() {
    return ValidationResult::fail("Project name cannot be empty");
  }

  if name.len() > 214 {
    return ValidationResult::fail("Project name cannot exceed 214 characters");
  }

  if name.to_lowercase() != name {
    return ValidationResult::fail("Project name must be lowercase");
  }

  if name.starts_with('.') {
    return ValidationResult::fail("Project name cannot start with a dot");
  }

  if name.starts_with('_') {
    return ValidationResult::fail("Project name cannot start with an underscore");
  }

  let invalid_chars = Regex::new(r"[~)('!*]").expect("invalid-characters pattern is valid");
  if invalid_chars.is_match(name) {
    return ValidationResult::fail("Project name contains invalid characters");
  }

  let valid_pattern = Regex::new(r"^[a-z0-9\-_.]+$").expect("name pattern is valid");
  if !valid_pattern.is_match(name) {
    return ValidationResult::fail(
      "Project name can only contain lowercase letters, numbers, hyphens, underscores, and dots",
    );
  }

  if RESERVED_NAMES.contains(&name.to_lowercase().as_str()) {
    return ValidationResult::fail(format!("\"{}\" is a reserved name", name));
  }

  ValidationResult::ok()
}

/// Checks that the target path is usable: absent, or an empty directory.
/// Never mutates the filesystem.
pub fn validate_project_path(path: &Path) -> ValidationResult {
  match fs::metadata(path) {
    Ok(metadata) => {
      if metadata.is_dir() {
        match fs::read_dir(path) {
          Ok(mut entries) => {
            if entries.next().is_some() {
              return ValidationResult::fail("Directory already exists and is not empty");
            }
            ValidationResult::ok()
          }
          Err(e) => ValidationResult::fail(e.to_string()),
        }
      } else {
        // A file occupies the target path.
        ValidationResult::fail("Directory already exists and is not empty")
      }
    }
    Err(e) if e.kind() == ErrorKind::NotFound => ValidationResult::ok(),
    Err(e) => ValidationResult::fail(e.to_string()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs::File;
  use tempfile::tempdir;

  #[test]
  fn accepts_well_formed_names() {
    for name in ["my-tac-app", "app", "my_app.v2", "a0-b1"] {
      let result = validate_project_name(name);
      assert!(result.valid, "expected '{}' to be valid", name);
      assert!(result.error.is_none());
    }
  }

  #[test]
  fn rejects_empty_name() {
    let result = validate_project_name("");
    assert!(!result.valid);
    assert_eq!(result.error.as_deref(), Some("Project name cannot be empty"));
  }

  #[test]
  fn rejects_overlong_name() {
    let name = "a".repeat(215);
    assert!(!validate_project_name(&name).valid);
    assert!(validate_project_name(&"a".repeat(214)).valid);
  }

  #[test]
  fn rejects_uppercase_with_lowercase_message() {
    for name in ["MyApp", "My App", "APP"] {
      let result = validate_project_name(name);
      assert!(!result.valid);
      assert_eq!(result.error.as_deref(), Some("Project name must be lowercase"));
    }
  }

  #[test]
  fn rejects_leading_dot_and_underscore() {
    assert_eq!(
      validate_project_name(".hidden").error.as_deref(),
      Some("Project name cannot start with a dot")
    );
    assert_eq!(
      validate_project_name("_private").error.as_deref(),
      Some("Project name cannot start with an underscore")
    );
  }

  #[test]
  fn rejects_forbidden_characters() {
    for name in ["app~1", "app)", "app(", "app'", "app!", "app*"] {
      let result = validate_project_name(name);
      assert!(!result.valid, "expected '{}' to be invalid", name);
      assert_eq!(
        result.error.as_deref(),
        Some("Project name contains invalid characters")
      );
    }
  }

  #[test]
  fn rejects_names_outside_pattern() {
    let result = validate_project_name("my app");
    assert!(!result.valid);
    assert_eq!(
      result.error.as_deref(),
      Some("Project name can only contain lowercase letters, numbers, hyphens, underscores, and dots")
    );
  }

  #[test]
  fn rejects_reserved_names() {
    for name in ["node_modules", "npm", "con", "com7", "lpt9", "package.json"] {
      let result = validate_project_name(name);
      assert!(!result.valid, "expected '{}' to be reserved", name);
      assert_eq!(
        result.error.as_deref(),
        Some(format!("\"{}\" is a reserved name", name).as_str())
      );
    }
  }

  #[test]
  fn missing_path_is_valid() {
    let dir = tempdir().unwrap();
    let result = validate_project_path(&dir.path().join("does-not-exist"));
    assert!(result.valid);
  }

  #[test]
  fn empty_directory_is_valid() {
    let dir = tempdir().unwrap();
    assert!(validate_project_path(dir.path()).valid);
  }

  #[test]
  fn non_empty_directory_is_invalid() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("occupant.txt")).unwrap();
    let result = validate_project_path(dir.path());
    assert!(!result.valid);
    assert_eq!(
      result.error.as_deref(),
      Some("Directory already exists and is not empty")
    );
  }

  #[test]
  fn existing_file_is_invalid() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("taken");
    File::create(&file_path).unwrap();
    assert!(!validate_project_path(&file_path).valid);
  }
}
