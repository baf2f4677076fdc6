//! `digestr` command line: SHA-256 over text arguments, files and stdin

#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;

pub use cli::Cli;
pub use commands::run;
