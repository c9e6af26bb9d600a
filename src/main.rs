//! Binary entry point: parse the CLI, set up logging, dispatch the command.

use anyhow::Result;
use clap::Parser;

use dotscan_cli::{cli, commands, logging};

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose);

    match args.command {
        cli::Command::Scan(opts) => commands::scan::run(&opts),
        cli::Command::Analyze(opts) => commands::analyze::run(&opts),
        cli::Command::Version => {
            let version = option_env!("DOTSCAN_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
            println!("dotscan {version}");
            Ok(())
        }
    }
}
