// src/pipeline.rs
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::CreateError;
use crate::generate;
use crate::report::Reporter;
use crate::templates::{self, Framework, TemplateEntry};
use crate::utils;

/// Everything one run needs, gathered up front from CLI arguments or prompt
/// answers. Immutable once constructed; the pipeline holds no other state.
#[derive(Debug, Clone)]
pub struct ProjectRequest {
  pub name: String,
  pub target_path: PathBuf,
  pub framework: Framework,
  pub skip_install: bool,
  pub verbose: bool,
}

/// One stage's result. The sequence of outcomes is the audit trail of a run.
#[derive(Debug, Clone)]
pub struct StageOutcome {
  pub stage: String,
  pub succeeded: bool,
  pub detail: Option<String>,
}

impl StageOutcome {
  fn success(stage: &str) -> Self {
    StageOutcome {
      stage: stage.to_string(),
      succeeded: true,
      detail: None,
    }
  }

  fn failure(stage: &str, detail: impl Into<String>) -> Self {
    StageOutcome {
      stage: stage.to_string(),
      succeeded: false,
      detail: Some(detail.into()),
    }
  }
}

/// Runs the whole creation pipeline for `request`, resolving the template set
/// from the framework choice. Returns the per-stage audit trail, or the first
/// fatal error. Install and git-init failures are downgraded to warnings and
/// never produce an `Err`.
pub fn run(
  request: &ProjectRequest,
  reporter: &dyn Reporter,
) -> Result<Vec<StageOutcome>, CreateError> {
  let template_set = templates::resolve(request.framework);
  run_with_templates(request, &template_set, reporter)
}

/// Pipeline body with an explicit template set, so tests can point the
/// acquisition stage at local fixture repositories.
pub fn run_with_templates(
  request: &ProjectRequest,
  template_set: &[TemplateEntry],
  reporter: &dyn Reporter,
) -> Result<Vec<StageOutcome>, CreateError> {
  debug!(
    "Creating TAC app '{}' at {}",
    request.name,
    request.target_path.display()
  );
  let mut outcomes = Vec::new();

  // Stage 1: structure creation. Nothing can proceed without the directory.
  outcomes.push(create_structure(&request.target_path, reporter)?);

  // Stage 2: template acquisition. Any entry's failure aborts the run;
  // partial clones are deliberately left on disk for the user to inspect.
  for entry in template_set {
    outcomes.push(acquire_template(entry, &request.target_path, reporter)?);
  }

  // Stage 3: README and ignore-file generation.
  outcomes.push(generate_files(request, reporter)?);

  // Stage 4: dependency installation. Best-effort; the user can retry by hand.
  if request.skip_install {
    reporter.info("Skipping dependency installation (--skip-install)");
  } else {
    outcomes.extend(install_dependencies(request, reporter));
  }

  // Stage 5: fresh repository with an initial commit. A missing commit does
  // not prevent the user from using the generated project, so this stage
  // only warns on failure.
  outcomes.push(initialize_repository(&request.target_path, reporter));

  Ok(outcomes)
}

fn create_structure(
  target_path: &Path,
  reporter: &dyn Reporter,
) -> Result<StageOutcome, CreateError> {
  let label = "Setting up project structure";
  reporter.begin_stage(label);

  match fs::create_dir_all(target_path) {
    Ok(()) => {
      debug!("Created directory: {}", target_path.display());
      reporter.end_stage(label, true, None);
      Ok(StageOutcome::success(label))
    }
    Err(e) => {
      reporter.end_stage(label, false, Some(&e.to_string()));
      Err(CreateError::Structure {
        path: target_path.to_path_buf(),
        source: e,
      })
    }
  }
}

fn acquire_template(
  entry: &TemplateEntry,
  target_path: &Path,
  reporter: &dyn Reporter,
) -> Result<StageOutcome, CreateError> {
  let label = format!("Cloning {} template", entry.role);
  reporter.begin_stage(&label);

  let destination = if entry.subpath.is_empty() {
    target_path.to_path_buf()
  } else {
    target_path.join(&entry.subpath)
  };
  debug!(
    "Cloning {} into {}",
    entry.source_url,
    destination.display()
  );

  let destination_arg = destination.to_string_lossy();
  let output = match utils::run_command(
    "git",
    &["clone", entry.source_url.as_str(), &destination_arg],
    target_path,
  ) {
    Ok(output) => output,
    Err(e) => {
      reporter.end_stage(&label, false, Some(&e.to_string()));
      return Err(e);
    }
  };

  if !output.status.success() {
    let reason = utils::stderr_excerpt(&output);
    reporter.end_stage(&label, false, Some(&reason));
    return Err(CreateError::Acquisition {
      role: entry.role.to_string(),
      reason,
    });
  }

  // The template's commit history must not leak into the generated project.
  if let Err(e) = utils::strip_vcs_metadata(&destination) {
    let reason = format!("could not remove template VCS metadata: {}", e);
    reporter.end_stage(&label, false, Some(&reason));
    return Err(CreateError::Acquisition {
      role: entry.role.to_string(),
      reason,
    });
  }

  reporter.end_stage(&label, true, None);
  Ok(StageOutcome::success(&label))
}

fn generate_files(
  request: &ProjectRequest,
  reporter: &dyn Reporter,
) -> Result<StageOutcome, CreateError> {
  let label = "Generating project configuration";
  reporter.begin_stage(label);

  match generate::generate_project_files(&request.name, &request.target_path, request.framework) {
    Ok(()) => {
      reporter.end_stage(label, true, None);
      Ok(StageOutcome::success(label))
    }
    Err(e) => {
      reporter.end_stage(label, false, Some(&e.to_string()));
      Err(e)
    }
  }
}

fn install_dependencies(request: &ProjectRequest, reporter: &dyn Reporter) -> Vec<StageOutcome> {
  let mut outcomes = Vec::new();

  outcomes.push(run_best_effort(
    "Installing frontend dependencies",
    "npm",
    &["install"],
    &request.target_path,
    reporter,
  ));

  let contracts_path = request.target_path.join("contracts");
  match request.framework {
    Framework::Hardhat => outcomes.push(run_best_effort(
      "Installing contract dependencies",
      "npm",
      &["install"],
      &contracts_path,
      reporter,
    )),
    Framework::Foundry => outcomes.push(run_best_effort(
      "Installing contract dependencies",
      "forge",
      &["install"],
      &contracts_path,
      reporter,
    )),
    Framework::None => {}
  }

  outcomes
}

/// Runs one best-effort external command as its own sub-stage. Failure is
/// reported as a warning and folded into the outcome, never propagated.
fn run_best_effort(
  label: &str,
  program: &str,
  args: &[&str],
  working_dir: &Path,
  reporter: &dyn Reporter,
) -> StageOutcome {
  reporter.begin_stage(label);

  match utils::run_command(program, args, working_dir) {
    Ok(output) if output.status.success() => {
      reporter.end_stage(label, true, None);
      StageOutcome::success(label)
    }
    Ok(output) => {
      let reason = utils::stderr_excerpt(&output);
      reporter.end_stage(label, false, Some(&reason));
      reporter.warn(&format!("{} failed; you can retry it manually", label));
      warn!("{} failed: {}", label, reason);
      StageOutcome::failure(label, reason)
    }
    Err(e) => {
      let reason = e.to_string();
      reporter.end_stage(label, false, Some(&reason));
      reporter.warn(&format!("{} failed; you can retry it manually", label));
      warn!("{} failed: {}", label, reason);
      StageOutcome::failure(label, reason)
    }
  }
}

fn initialize_repository(project_path: &Path, reporter: &dyn Reporter) -> StageOutcome {
  let label = "Initializing git repository";
  reporter.begin_stage(label);

  let steps: [&[&str]; 3] = [
    &["init"],
    &["add", "."],
    &["commit", "-m", "Initial commit from create-tac-app"],
  ];

  for args in steps {
    let failure = match utils::run_command("git", args, project_path) {
      Ok(output) if output.status.success() => None,
      Ok(output) => Some(utils::stderr_excerpt(&output)),
      Err(e) => Some(e.to_string()),
    };

    if let Some(reason) = failure {
      reporter.end_stage(label, false, Some(&reason));
      reporter.warn("Git initialization failed, but the project was created successfully");
      warn!("git {} failed: {}", args.join(" "), reason);
      return StageOutcome::failure(label, reason);
    }
  }

  reporter.end_stage(label, true, None);
  StageOutcome::success(label)
}
