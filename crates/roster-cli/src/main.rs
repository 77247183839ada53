//! `roster` — search a contact roster from the terminal.
//!
//! # Usage
//!
//! ```text
//! roster --roster people.json
//! echo "search n/amy r/speaker" | roster --config roster.toml
//! ```

mod seed;
mod settings;
mod shell;

use std::{io, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use roster_core::model::AddressBook;
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "roster", version, about = "Search a roster of contacts")]
struct Args {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "roster.toml")]
  config: PathBuf,

  /// JSON file of persons; overrides `roster_path` from the config.
  #[arg(short, long, value_name = "FILE")]
  roster: Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  // Logs go to stderr so command output stays clean.
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();
  let settings = Settings::load(&args.config)?;
  let vocabulary = settings.vocabulary()?;

  // CLI flag overrides config file.
  let mut book = match args.roster.or(settings.roster_path) {
    Some(path) => seed::load(&path, &vocabulary)?,
    None => AddressBook::new(),
  };
  tracing::info!(persons = book.len(), "roster loaded");

  shell::run(&mut book, &vocabulary, io::stdin().lock(), io::stdout().lock())
}
