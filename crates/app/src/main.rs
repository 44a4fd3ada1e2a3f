//! Postenv - Main Entry Point
//!
//! Rewrites the Postman collection named on the command line and writes the
//! result next to it.

use anyhow::Result;
use clap::Parser;
use postenv::{Cli, init_tracing};

fn main() -> Result<()> {
    // Usage errors exit here with status 2
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let output = cli.execute()?;
    cli.print_summary(&output);

    Ok(())
}
