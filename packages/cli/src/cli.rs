//! CLI argument definitions

use clap::Parser;
use digestr_hashing::Digest;
use std::ffi::OsString;
use std::path::PathBuf;

/// Command line arguments for `digestr`
#[derive(Debug, Parser)]
#[command(name = "digestr")]
#[command(about = "Compute the SHA-256 digest of text arguments and files")]
#[command(version)]
pub struct Cli {
    /// Hash the contents of a file after the text inputs ("-" reads stdin)
    #[arg(long = "file", short = 'f', value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Expected digest as 64 hex digits; exit with an error on mismatch
    #[arg(long, value_name = "HEX")]
    pub check: Option<Digest>,

    /// Print only the hex digest
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Text inputs, each fed to the hash as its raw bytes in the order given
    ///
    /// Options must come before the first text. From there on every token,
    /// including ones starting with `-`, is hashed as text.
    #[arg(value_name = "TEXT", allow_hyphen_values = true, trailing_var_arg = true)]
    pub texts: Vec<OsString>,
}

impl Cli {
    /// Whether any input at all was supplied
    #[must_use]
    pub fn has_input(&self) -> bool {
        !self.texts.is_empty() || !self.files.is_empty()
    }
}
