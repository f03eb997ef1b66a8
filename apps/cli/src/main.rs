//! diagramdex CLI — consolidate Mermaid diagrams from a docs tree.
//!
//! Scans `docs/` under the working directory and writes every extracted
//! diagram, grouped by domain, to `diagrams.md`.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(&cli)
}
