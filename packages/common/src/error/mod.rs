//! Error reporting support shared across the workspace
//!
//! Each crate owns its own `thiserror` error enum; this module only carries
//! the logging side of error handling.

pub mod logging;

pub use logging::LoggingTransformer;
