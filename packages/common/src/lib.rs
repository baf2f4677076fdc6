//! Common infrastructure for the digestr crates
//!
//! This crate provides shared functionality used across the workspace:
//! - `env_logger` bootstrap controlled by `RUST_LOG`
//! - Structured log helpers that never record hashed input

#![forbid(unsafe_code)]

pub mod error;

pub use error::LoggingTransformer;
