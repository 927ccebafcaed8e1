use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised by the mono command line tool.
#[derive(Debug, Error)]
pub enum CliError {
  #[error("Failed to read {}: {source}", path.display())]
  Read {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Failed to write {}: {source}", path.display())]
  Write {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("I/O error on standard streams: {0}")]
  Stdio(#[from] io::Error),

  #[error("Failed to parse TOML config from {}: {source}", path.display())]
  Config {
    path:   PathBuf,
    #[source]
    source: toml::de::Error,
  },

  #[error(transparent)]
  Markup(#[from] mono_markup::MarkupError),
}

pub type Result<T> = std::result::Result<T, CliError>;
