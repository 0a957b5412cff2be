//! Binary crate for the `wxpanel` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Rendering the weather panel

use clap::Parser;

mod cli;
mod logging;
mod panel;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    logging::init(cmd.verbose);
    cmd.run().await
}
