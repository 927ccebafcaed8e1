//! Markup option loading for the command line tool.
use std::{
  fs,
  path::{Path, PathBuf},
};

use log::{debug, info};
use mono_markup::MarkupOptions;

use crate::error::{CliError, Result};

/// Config file names looked up in the working directory, in order.
const LOCAL_CONFIG_FILES: [&str; 3] =
  ["mono.toml", ".mono.toml", ".config/mono.toml"];

/// Parse markup options from a TOML file. Fields the file leaves out keep
/// their defaults.
pub fn from_file(path: &Path) -> Result<MarkupOptions> {
  let content = fs::read_to_string(path).map_err(|source| {
    CliError::Read {
      path: path.to_path_buf(),
      source,
    }
  })?;

  toml::from_str(&content).map_err(|source| {
    CliError::Config {
      path: path.to_path_buf(),
      source,
    }
  })
}

/// Load options from `explicit`, or from a discovered config file, or fall
/// back to the defaults.
pub fn load(explicit: Option<&Path>) -> Result<MarkupOptions> {
  if let Some(path) = explicit {
    debug!("Loading config from {}", path.display());
    return from_file(path);
  }

  let discovered = std::env::current_dir()
    .ok()
    .and_then(|dir| find_config_file(&dir));
  match discovered {
    Some(path) => {
      info!("Using discovered config file: {}", path.display());
      from_file(&path)
    },
    None => Ok(MarkupOptions::default()),
  }
}

/// Search for a config file under `dir`, then in the user's config
/// directories.
#[must_use]
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
  let local = LOCAL_CONFIG_FILES.iter().map(|name| dir.join(name));

  let xdg = std::env::var_os("XDG_CONFIG_HOME")
    .map(|home| PathBuf::from(home).join("mono.toml"));
  let home = std::env::var_os("HOME").map(|home| {
    PathBuf::from(home)
      .join(".config")
      .join("mono")
      .join("config.toml")
  });

  local.chain(xdg).chain(home).find(|path| path.is_file())
}
