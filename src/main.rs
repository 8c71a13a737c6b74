//! CLI entry point for the read-offset sweep leakage analysis tool

use clap::Parser;
use nandleak::io::cli::{Cli, SweepProcessor};

fn main() -> nandleak::Result<()> {
    let cli = Cli::parse();
    let mut processor = SweepProcessor::new(cli);
    processor.process()
}
