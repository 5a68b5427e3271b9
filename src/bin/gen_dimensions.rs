
//! Regenerates `src/units/named.rs` from a dimension table.
//!
//! With no `INPUT`, the built-in table is used. With no `--output`,
//! the generated source is written to stdout. Set `RUST_LOG` to
//! adjust log output, which always goes to stderr.

use unit_aware::codegen::{self, DEFAULT_TABLE};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "gen_dimensions")]
#[command(about = "Generate the named SI dimension table as Rust source")]
struct Args {
  /// Dimension table to read (defaults to the built-in table)
  input: Option<PathBuf>,

  /// File to write the generated source to (defaults to stdout)
  #[arg(short, long)]
  output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(io::stderr))
    .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
    .init();

  let args = Args::parse();

  let rows = match &args.input {
    Some(path) => codegen::read_table(path)
      .with_context(|| format!("Failed to read dimension table {}", path.display()))?,
    None => codegen::parse_table(DEFAULT_TABLE)?,
  };
  let source = codegen::render_declarations(&rows);

  match &args.output {
    Some(path) => fs::write(path, source)
      .with_context(|| format!("Failed to write {}", path.display()))?,
    None => io::stdout().write_all(source.as_bytes())?,
  }
  tracing::info!(rows = rows.len(), "generated named dimension table");
  Ok(())
}
