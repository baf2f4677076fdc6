//! Main entry point for the digestr CLI application

use clap::Parser;
use digestr_cli::Cli;
use digestr_common::error::LoggingTransformer;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize structured logging
    LoggingTransformer::init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();
    match digestr_cli::run(&cli, &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            LoggingTransformer::log_crypto_error("digestr", &e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
