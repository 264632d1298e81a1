//! # fcsparse
//!
//! A command-line tool for inspecting Flow Cytometry Standard (FCS) files.
//!
//! ## Usage
//!
//! ```bash
//! # Print HEADER offsets and all TEXT keywords
//! fcsparse info sample.fcs
//!
//! # Only a few keywords, as JSON
//! fcsparse info sample.fcs --json -k '$TOT' -k '$PAR'
//!
//! # Check offsets and required keywords
//! fcsparse validate sample.fcs
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
