//! Structured logging infrastructure
//!
//! Provides env_logger-based logging shared by the digestr crates. Nothing
//! logged here ever includes the bytes being hashed.

use log::{debug, info, warn};
use std::sync::Once;
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Logging bootstrap and structured log helpers backed by `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (call once at application startup)
    ///
    /// Configure logging levels via `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - Enable all debug logs
    /// - `RUST_LOG=info` - Enable info and above
    /// - `RUST_LOG=digestr_hashing=trace` - Per-block tracing of the hash core
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            debug!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Safe to call from every test; repeated initialization is ignored.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log an input source being fed to a hash context
    pub fn log_input_source(kind: &str, label: &str, bytes: u64) {
        debug!("Input: {kind} {label} ({bytes} bytes)");
    }

    /// Log a completed digest computation
    pub fn log_digest_computed(algorithm: &str, total_bytes: u64, hex: &str) {
        info!("{algorithm} digest over {total_bytes} bytes: {hex}");
    }

    /// Log the outcome of comparing a digest with an expected value
    pub fn log_verification(expected: &str, success: bool) {
        if success {
            info!("Digest verification succeeded (expected: {expected})");
        } else {
            warn!("Digest verification failed (expected: {expected})");
        }
    }

    /// Secure logging of cryptographic errors
    ///
    /// Records the operation and the concrete error type without exposing
    /// input data. Logged at debug level; user-facing reporting belongs to
    /// the caller.
    pub fn log_crypto_error<E: std::error::Error + ?Sized>(operation: &str, error: &E) {
        debug!(
            "Cryptographic operation failed: {} (error_type: {}): {}",
            operation,
            error_type_name(error),
            error
        );
    }

    /// Log performance metrics and timing information
    pub fn log_performance_metric(operation: &str, duration: Duration, bytes: u64) {
        debug!(
            "Performance: {operation} processed {bytes} bytes in {}us",
            duration.as_micros()
        );
    }
}

/// Name of the concrete type behind `error`
fn error_type_name<E: ?Sized>(_error: &E) -> &'static str {
    std::any::type_name::<E>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct SampleError;

    impl std::fmt::Display for SampleError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "sample failure")
        }
    }

    impl std::error::Error for SampleError {}

    #[test]
    fn test_init_test_is_repeatable() {
        LoggingTransformer::init_test();
        LoggingTransformer::init_test();
    }

    #[test]
    fn test_error_type_names_the_concrete_type() {
        let name = error_type_name(&SampleError);
        assert!(name.ends_with("SampleError"), "got {name}");
        assert!(!name.contains("dyn"));
    }

    #[test]
    fn test_logging_operations() {
        LoggingTransformer::init_test();

        // These should not panic and should produce log output
        LoggingTransformer::log_input_source("argument", "#1", 3);
        LoggingTransformer::log_digest_computed("SHA-256", 3, "ba7816bf");
        LoggingTransformer::log_verification("ba7816bf", true);
        LoggingTransformer::log_verification("00000000", false);
        LoggingTransformer::log_crypto_error("finish", &SampleError);
        LoggingTransformer::log_performance_metric("hash", Duration::from_micros(150), 1024);
    }
}
