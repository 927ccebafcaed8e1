use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use log::LevelFilter;

/// Command line interface for mono
#[derive(Parser, Debug)]
#[command(author, version, about = "mono: render lightweight markup to HTML")]
pub struct Cli {
  /// Markup file to render. Reads standard input when absent or `-`.
  pub input: Option<PathBuf>,

  /// Write the rendered HTML here instead of standard output.
  #[arg(short, long)]
  pub output: Option<PathBuf>,

  /// Load markup options from this TOML file instead of discovering
  /// `mono.toml`.
  #[arg(short, long)]
  pub config: Option<PathBuf>,

  /// Keep backslashes that escape punctuation in the output.
  #[arg(long)]
  pub no_escapes: bool,

  /// Increase log verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = ArgAction::Count)]
  pub verbose: u8,
}

impl Cli {
  /// Parse command line arguments
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }

  /// Input path, or `None` when reading standard input.
  #[must_use]
  pub fn input_path(&self) -> Option<&Path> {
    self.input.as_deref().filter(|path| path.as_os_str() != "-")
  }

  #[must_use]
  pub const fn log_level(&self) -> LevelFilter {
    match self.verbose {
      0 => LevelFilter::Warn,
      1 => LevelFilter::Info,
      2 => LevelFilter::Debug,
      _ => LevelFilter::Trace,
    }
  }
}
