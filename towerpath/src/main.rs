//! towerpath — least-damage crossing of a tower board.

use std::process::ExitCode;

use clap::Parser;
use towerpath_cli::{Cli, run};

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
