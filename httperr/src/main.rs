#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;
mod commands;

use std::process::ExitCode;

use args::{Args, Command};
use clap::Parser;
use httperr_config::Config;

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // Load configuration
    let config = Config::load_or_default(&args.config)?;

    // Initialize logging
    httperr_telemetry::init(&config.log)?;

    tracing::debug!(config_path = %args.config.display(), "starting httperr");

    let pretty = args.pretty || config.output.pretty;

    match args.command {
        Command::Build { inputs } => {
            println!("{}", commands::render(&commands::build(&inputs), pretty)?);
        }
        Command::Create { code, message } => {
            let catalog = config.catalog.build()?;
            let error = commands::create(&catalog, &code, message.as_deref());
            println!("{}", commands::render(&error, pretty)?);
        }
        Command::Status { value } => {
            let Some(code) = commands::status(&value) else {
                eprintln!("no status code");
                return Ok(ExitCode::FAILURE);
            };
            println!("{code}");
        }
        Command::List => {
            let catalog = config.catalog.build()?;
            for line in commands::list(&catalog) {
                println!("{line}");
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
