//! CLI definition, tracing setup, and progress output.

use std::path::Path;

use clap::Parser;
use color_eyre::eyre::Result;
use diagramdex_core::{ExtractConfig, ProgressReporter};
use diagramdex_shared::DiagramdexError;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

/// diagramdex — collect every Mermaid diagram in `docs/` into `diagrams.md`.
///
/// The tool takes no arguments: the scan root, the output path, and the
/// reserved-name exclusion are fixed conventions.
#[derive(Parser)]
#[command(
    name = "diagramdex",
    version,
    about = "Extract Mermaid diagrams from a docs tree into one grouped document.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the extraction and print the summary.
pub(crate) fn run(_cli: &Cli) -> Result<()> {
    let config = ExtractConfig::from_cwd()?;

    info!(
        root = %config.docs_dir.display(),
        output = %config.output_path.display(),
        "extracting diagrams"
    );

    let progress = CliProgress::new();

    let outcome = diagramdex_core::run(&config, &progress);
    progress.clear();

    let result = outcome?;

    println!();
    println!("Diagrams by domain:");
    for (domain, count) in &result.domain_totals {
        println!("  {domain}: {count} diagram(s)");
    }

    println!();
    println!(
        "[SUCCESS] Diagrams extracted and saved to {}",
        result.output_path.display()
    );
    println!("  Total diagrams: {}", result.block_count);
    println!("  Domains: {}", result.domain_totals.len());

    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// Progress reporter printing the run's progress lines, with an indicatif
/// spinner while documents are being scanned.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .expect("valid template")
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }

    fn clear(&self) {
        self.spinner.finish_and_clear();
    }
}

impl ProgressReporter for CliProgress {
    fn scan_started(&self, root: &Path) {
        println!("Scanning {} for Mermaid diagrams...", root.display());
    }

    fn documents_found(&self, count: usize) {
        println!("Found {count} markdown files");
    }

    fn document_scanned(&self, rel_path: &str, blocks: usize) {
        self.spinner.set_message(format!("Scanning {rel_path}"));
        println!("  Found {blocks} diagram(s) in {rel_path}");
    }

    fn document_failed(&self, path: &Path, error: &DiagramdexError) {
        println!("Error reading {}: {error}", path.display());
    }

    fn scan_finished(&self, total: usize) {
        self.spinner.finish_and_clear();
        println!();
        println!("Total diagrams found: {total}");
    }

    fn domain_total(&self, _domain: &str, _count: usize) {
        // Domain totals are printed as a summary table after the run.
    }

    fn finished(&self, _result: &diagramdex_core::ExtractResult) {}
}
