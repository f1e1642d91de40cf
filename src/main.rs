//! CLI entry point for rewriting transparent pixel colors in PNG files

use clap::Parser;
use edgebleed::io::cli::{Cli, FileProcessor};
use edgebleed::io::configuration::DEFAULT_LOG_FILTER;
use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER)).init();

    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    let summary = processor.process();

    log::info!(
        "{} processed, {} skipped, {} failed",
        summary.processed,
        summary.skipped,
        summary.failed
    );
}
