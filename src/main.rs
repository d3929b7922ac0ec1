//! themesync - command-line entry point for the theme synchronization engine.

use std::{error::Error, process};

use clap::Parser;
use themesync::{
    cli::{self, Cli, formatting::format_error},
    tracing_config,
};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_config::init()?;

    let cli = Cli::parse();

    match cli::run(cli) {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}
