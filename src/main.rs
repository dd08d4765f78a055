//! CLI entry point for building and printing tile grids

use clap::Parser;
use tilegrid::io::cli::{Cli, GridPrinter};
use tilegrid::io::configuration::{DEFAULT_LOG_FILTER, LOG_FILTER_ENV};
use tracing_subscriber::EnvFilter;

fn main() -> tilegrid::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let printer = GridPrinter::new(cli);
    printer.run()
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
