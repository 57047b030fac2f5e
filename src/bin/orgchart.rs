// src/bin/orgchart.rs
use clap::Parser;
use colored::Colorize;

use orgchart_core::cli::{self, Cli};
use orgchart_core::exit::OrgExit;

fn main() -> OrgExit {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    match cli::handle_analyze(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "Error :".red().bold());
            OrgExit::for_error(&e)
        }
    }
}
