// src/main.rs
mod cli;
mod error;
mod generate;
mod pipeline;
mod report;
mod templates;
mod utils;
mod validate;

use std::env;
use std::error::Error;
use std::fs;
use std::process::ExitCode;

use clap::Parser;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use log::LevelFilter;

use cli::Cli;
use error::CreateError;
use pipeline::ProjectRequest;
use report::{ConsoleReporter, Reporter};
use templates::Framework;

const TAC_LOGO: &str = r"
  ⚡ ████████╗ █████╗  ██████╗
    ╚══██╔══╝██╔══██╗██╔════╝
       ██║   ███████║██║
       ██║   ██╔══██║██║
       ██║   ██║  ██║╚██████╗
       ╚═╝   ╚═╝  ╚═╝ ╚═════╝
";

fn main() -> ExitCode {
  let cli = Cli::parse();

  // Setup logging based on verbosity
  let log_level = match cli.verbose {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };
  env_logger::Builder::new().filter_level(log_level).init();

  log::debug!("CLI args: {:?}", cli);

  let verbose = cli.verbose > 0;
  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("✗ {}", e);
      if verbose {
        let mut source = e.source();
        while let Some(cause) = source {
          eprintln!("  caused by: {}", cause);
          source = cause.source();
        }
      }
      ExitCode::FAILURE
    }
  }
}

fn run(cli: Cli) -> Result<(), CreateError> {
  println!("{}", TAC_LOGO);
  println!("Welcome to TAC - Build hybrid dApps in seconds!\n");

  let request = gather_request(cli)?;
  log::debug!("Gathered request: {:?}", request);

  let reporter = ConsoleReporter::new(request.verbose);
  let outcomes = pipeline::run(&request, &reporter)?;

  let warnings = outcomes.iter().filter(|o| !o.succeeded).count();
  if warnings > 0 {
    reporter.warn(&format!(
      "{} stage(s) did not complete; see the messages above to finish by hand",
      warnings
    ));
  }

  show_success_message(&request, &reporter);
  Ok(())
}

/// Collects and validates a complete `ProjectRequest` before any filesystem
/// mutation, prompting for whatever the command line did not supply. The only
/// destructive action here, removing an existing target directory, happens
/// strictly after explicit user consent.
fn gather_request(cli: Cli) -> Result<ProjectRequest, CreateError> {
  let theme = ColorfulTheme::default();

  let name = match cli.name {
    Some(name) => {
      let result = validate::validate_project_name(&name);
      if !result.valid {
        return Err(CreateError::Validation(
          result.error.unwrap_or_else(|| "Invalid project name".to_string()),
        ));
      }
      name
    }
    None => Input::with_theme(&theme)
      .with_prompt("What would you like to name your TAC project?")
      .default("my-tac-app".to_string())
      .validate_with(|input: &String| -> Result<(), String> {
        let result = validate::validate_project_name(input);
        match result.error {
          Some(message) => Err(message),
          None => Ok(()),
        }
      })
      .interact_text()?,
  };

  let framework = match cli.framework {
    Some(framework) => framework,
    None => {
      let choices = [
        "Hardhat (JavaScript/TypeScript)",
        "Foundry (Solidity)",
        "None (frontend only)",
      ];
      let selection = Select::with_theme(&theme)
        .with_prompt("Select a smart contract framework")
        .items(&choices)
        .default(0)
        .interact()?;
      match selection {
        0 => Framework::Hardhat,
        1 => Framework::Foundry,
        _ => Framework::None,
      }
    }
  };

  let target_path = env::current_dir()?.join(&name);
  let path_check = validate::validate_project_path(&target_path);
  if !path_check.valid {
    let message = path_check
      .error
      .unwrap_or_else(|| "Target path is not usable".to_string());
    if !target_path.exists() {
      // Not an occupancy problem; surface the underlying access failure.
      return Err(CreateError::Validation(message));
    }

    // Existing non-empty target: overwriting needs explicit consent.
    let overwrite = Confirm::with_theme(&theme)
      .with_prompt(format!(
        "Directory {} already exists. Do you want to overwrite it?",
        name
      ))
      .default(false)
      .interact()?;
    if !overwrite {
      return Err(CreateError::Validation(message));
    }
    if target_path.is_dir() {
      fs::remove_dir_all(&target_path)?;
    } else {
      fs::remove_file(&target_path)?;
    }
  }

  Ok(ProjectRequest {
    name,
    target_path,
    framework,
    skip_install: cli.skip_install,
    verbose: cli.verbose > 0,
  })
}

fn show_success_message(request: &ProjectRequest, reporter: &ConsoleReporter) {
  println!();
  reporter.info(&format!("Created TAC application: {}", request.name));
  println!();
  println!("Next steps:");
  println!("  1. Start the frontend:");
  println!("     cd {}", request.name);
  println!("     npm run dev");

  match request.framework {
    Framework::Hardhat => {
      println!();
      println!("  2. Deploy contracts:");
      println!("     cd {}/contracts", request.name);
      println!("     npx hardhat run scripts/deploy.js --network tacTestnet");
    }
    Framework::Foundry => {
      println!();
      println!("  2. Deploy contracts:");
      println!("     cd {}/contracts", request.name);
      println!("     forge script script/DeployMessage.s.sol --rpc-url tac_testnet --broadcast");
    }
    Framework::None => {}
  }

  if request.skip_install {
    println!();
    println!("  Dependencies were not installed (--skip-install); run `npm install` first.");
  }

  println!();
  println!("To learn more about TAC, visit:");
  println!("  https://docs.tac.build");
}
