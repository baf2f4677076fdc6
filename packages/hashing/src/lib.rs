//! Incremental SHA-256 hashing
//!
//! ```
//! use digestr_hashing::{hex_encode, HashContext};
//!
//! # fn main() -> digestr_hashing::Result<()> {
//! let mut ctx = HashContext::new();
//! ctx.update(b"a")?;
//! ctx.update(b"bc")?;
//! let digest = ctx.finish()?;
//! assert_eq!(
//!     hex_encode(digest.as_bytes()),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod compress;
pub mod context;
pub mod digest;
pub mod error;
pub mod streaming;

pub use compress::{BLOCK_SIZE, DIGEST_SIZE};
pub use context::HashContext;
pub use digest::{hex_decode, hex_encode, Digest};
pub use error::{HashError, Result};
pub use streaming::{collect_hash, stream_sha256, StreamHashChunk, StreamHashResult, StreamingHasher};

/// Human-readable algorithm name used in output and logs
pub const ALGORITHM: &str = "SHA-256";
