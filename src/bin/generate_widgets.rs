//! Scaffolds the widget documentation tree for the learning site.
//!
//! With no arguments it generates from the builtin catalog into
//! `<site root>/docs/widgets`, creating one stub page per widget that does not
//! have a page yet and regenerating every index page. Progress goes to stderr;
//! the final summary goes to stdout.
//!
//! Usage:
//!   generate-widgets
//!   generate-widgets --output /tmp/widgets --dry-run
//!   generate-widgets --catalog catalogs/flutter_widgets.json -v

use anyhow::Result;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use widgetdocs::{StubGenerator, load_catalog, resolve_output_root};

#[derive(Parser, Debug)]
#[command(name = "generate-widgets")]
#[command(about = "Scaffold Markdown stub pages for the widget catalog")]
struct Cli {
    /// Output root for the generated tree (defaults to <site root>/docs/widgets).
    #[arg(long, env = "WIDGET_DOCS_OUTPUT")]
    output: Option<PathBuf>,
    /// Catalog JSON file to generate from instead of the builtin catalog.
    #[arg(long, env = "WIDGET_CATALOG_PATH")]
    catalog: Option<PathBuf>,
    /// Validate the catalog and report what would be written without writing.
    #[arg(long)]
    dry_run: bool,
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("generate-widgets: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalog = load_catalog(cli.catalog.as_deref())?;
    let output_root = resolve_output_root(cli.output.as_deref())?;
    let generator = StubGenerator::new(&output_root).dry_run(cli.dry_run);
    let written = generator.run(&catalog)?;

    let verb = if cli.dry_run { "would generate" } else { "generated" };
    println!(
        "{verb} {written} of {} widget stub(s) under {}",
        catalog.entry_count(),
        output_root.display()
    );
    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
