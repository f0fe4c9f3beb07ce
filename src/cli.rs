// src/cli.rs
use clap::Parser;

use crate::templates::Framework;

#[derive(Parser, Debug)]
#[command(
    name = "create-tac-app", // Command name users type
    author,
    version,
    about = "Scaffolds a hybrid TAC dApp: a frontend plus Hardhat or Foundry smart contracts.",
    long_about = None
)]
pub struct Cli {
  /// Project name (prompted for interactively when omitted)
  pub name: Option<String>,

  /// Smart contract framework to scaffold
  #[arg(short, long, value_enum)]
  pub framework: Option<Framework>,

  /// Skip dependency installation after cloning the templates
  #[arg(long)]
  pub skip_install: bool,

  /// Increase verbosity level (e.g., -v, -vv)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,
}
