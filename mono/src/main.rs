use std::{
  fs,
  io::{self, Read, Write},
  path::Path,
};

use color_eyre::eyre::{Context, Result};
use log::{debug, info};
use mono_markup::MarkupProcessor;

mod cli;
mod config;
mod error;

use cli::Cli;
use error::CliError;

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
  let cli = Cli::parse_args();

  // Initialize logging first so we can log during option loading
  env_logger::Builder::new()
    .filter_level(cli.log_level())
    .init();

  let mut options = config::load(cli.config.as_deref())
    .wrap_err("Failed to load markup options")?;
  if cli.no_escapes {
    options.strip_escapes = false;
  }

  let processor = MarkupProcessor::new(options)
    .wrap_err("Failed to compile markup templates")?;

  let text = read_input(cli.input_path()).wrap_err("Failed to read input")?;
  debug!("Read {} bytes of markup", text.len());

  let html = processor
    .render(&text)
    .map_err(CliError::from)
    .wrap_err("Failed to render markup")?;

  write_output(cli.output.as_deref(), &html)
    .wrap_err("Failed to write output")?;
  if let Some(path) = &cli.output {
    info!("Wrote {}", path.display());
  }

  Ok(())
}

fn read_input(path: Option<&Path>) -> error::Result<String> {
  match path {
    Some(path) => {
      fs::read_to_string(path).map_err(|source| {
        CliError::Read {
          path: path.to_path_buf(),
          source,
        }
      })
    },
    None => {
      let mut text = String::new();
      io::stdin().read_to_string(&mut text)?;
      Ok(text)
    },
  }
}

fn write_output(path: Option<&Path>, html: &str) -> error::Result<()> {
  match path {
    Some(path) => {
      fs::write(path, html).map_err(|source| {
        CliError::Write {
          path: path.to_path_buf(),
          source,
        }
      })
    },
    None => {
      let mut stdout = io::stdout().lock();
      stdout.write_all(html.as_bytes())?;
      stdout.flush()?;
      Ok(())
    },
  }
}
