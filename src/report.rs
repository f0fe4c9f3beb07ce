// src/report.rs
use std::cell::RefCell;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

/// Status-event sink the pipeline writes progress into. Write-only from the
/// pipeline's perspective; implementations decide how (or whether) to render.
pub trait Reporter {
  fn begin_stage(&self, label: &str);
  fn end_stage(&self, label: &str, succeeded: bool, detail: Option<&str>);
  fn info(&self, message: &str);
  fn warn(&self, message: &str);
  fn error(&self, message: &str);
}

/// Terminal reporter: one spinner per in-flight stage, ✓/✗ status lines on
/// completion. Single-threaded, so interior mutability via RefCell is enough.
pub struct ConsoleReporter {
  verbose: bool,
  spinner: RefCell<Option<ProgressBar>>,
}

impl ConsoleReporter {
  pub fn new(verbose: bool) -> Self {
    ConsoleReporter {
      verbose,
      spinner: RefCell::new(None),
    }
  }

  fn finish_spinner(&self) -> Option<ProgressBar> {
    self.spinner.borrow_mut().take()
  }
}

impl Reporter for ConsoleReporter {
  fn begin_stage(&self, label: &str) {
    // A stage left unfinished is cleared silently before the next one starts.
    if let Some(stale) = self.finish_spinner() {
      stale.finish_and_clear();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
      ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .expect("Failed to set spinner style"),
    );
    pb.set_message(label.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    *self.spinner.borrow_mut() = Some(pb);
  }

  fn end_stage(&self, label: &str, succeeded: bool, detail: Option<&str>) {
    let mark = if succeeded { "✓" } else { "✗" };
    let line = format!("{} {}", mark, label);

    if let Some(pb) = self.finish_spinner() {
      pb.finish_and_clear();
      pb.println(line);
    } else {
      println!("{}", line);
    }

    if let Some(detail) = detail {
      if self.verbose || !succeeded {
        debug!("Stage '{}' detail: {}", label, detail);
      }
    }
  }

  fn info(&self, message: &str) {
    println!("ℹ {}", message);
  }

  fn warn(&self, message: &str) {
    println!("⚠ {}", message);
  }

  fn error(&self, message: &str) {
    eprintln!("✗ {}", message);
  }
}
