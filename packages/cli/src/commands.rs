//! Digest command implementation

use crate::cli::Cli;
use digestr_common::error::LoggingTransformer;
use digestr_hashing::{Digest, HashContext, HashError, Result, ALGORITHM};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

/// Hash every input named by `cli` into one context and print the digest
///
/// Text arguments go in first, one `update` each, followed by the files in
/// order. Output is `SHA-256: <hex>` unless `--quiet` is set.
///
/// # Errors
///
/// - [`HashError::InvalidArgument`] when no input was supplied
/// - [`HashError::Io`] when a file or stdin cannot be read, or output fails
/// - [`HashError::VerificationFailed`] when `--check` does not match
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<Digest> {
    if !cli.has_input() {
        return Err(HashError::invalid_argument("Expecting at least one argument"));
    }

    let started = Instant::now();
    let mut ctx = HashContext::new();

    for (index, text) in cli.texts.iter().enumerate() {
        let bytes = text.as_encoded_bytes();
        LoggingTransformer::log_input_source("argument", &format!("#{}", index + 1), bytes.len() as u64);
        ctx.update(bytes)?;
    }

    for path in &cli.files {
        let copied = hash_file(path, &mut ctx)?;
        LoggingTransformer::log_input_source("file", &path.display().to_string(), copied);
    }

    let digest = ctx.finish()?;
    LoggingTransformer::log_performance_metric("sha256", started.elapsed(), ctx.total_len());
    LoggingTransformer::log_digest_computed(ALGORITHM, ctx.total_len(), &digest.to_hex());

    if cli.quiet {
        writeln!(out, "{digest}")?;
    } else {
        writeln!(out, "{ALGORITHM}: {digest}")?;
    }

    if let Some(expected) = &cli.check {
        let verified = digest.verify(expected.as_bytes());
        LoggingTransformer::log_verification(&expected.to_hex(), verified.is_ok());
        verified?;
    }

    Ok(digest)
}

fn hash_file(path: &Path, ctx: &mut HashContext) -> Result<u64> {
    if path == Path::new("-") {
        return Ok(io::copy(&mut io::stdin().lock(), ctx)?);
    }
    let mut file = File::open(path)
        .map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", path.display())))?;
    Ok(io::copy(&mut file, ctx)?)
}
