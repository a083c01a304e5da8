//! subsync CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, build the job settings,
//! and exit with appropriate status. Parse errors exit with status 2.

use clap::Parser;

use subsync::cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
