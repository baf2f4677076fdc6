//! Incremental SHA-256 hash context
//!
//! A [`HashContext`] is created fresh, fed any number of byte buffers through
//! [`HashContext::update`] and consumed once by [`HashContext::finish`]. The
//! digest does not depend on how the input was split across `update` calls.

use crate::compress::{compress, BLOCK_SIZE, DIGEST_SIZE, H0};
use crate::{Digest, HashError, Result};
use std::fmt;
use std::io;
use zeroize::Zeroize;

/// Offset of the 64-bit length field inside the final block
const LENGTH_OFFSET: usize = BLOCK_SIZE - 8;

/// Running SHA-256 computation
///
/// Owned by exactly one caller; not meant to be shared between threads
/// without external synchronization. Buffered input and the running state
/// are wiped on drop.
#[derive(Clone)]
pub struct HashContext {
    state: [u32; 8],
    buffer: [u8; BLOCK_SIZE],
    buffer_len: usize,
    /// Total input bytes, wrapping at 2^64
    total_len: u64,
    finished: bool,
}

impl Default for HashContext {
    fn default() -> Self {
        Self::new()
    }
}

impl HashContext {
    /// Create a context in the initial SHA-256 state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: H0,
            buffer: [0u8; BLOCK_SIZE],
            buffer_len: 0,
            total_len: 0,
            finished: false,
        }
    }

    /// Hash `data` in one call
    #[must_use]
    pub fn digest(data: impl AsRef<[u8]>) -> Digest {
        let mut ctx = Self::new();
        ctx.absorb(data.as_ref());
        ctx.seal()
    }

    /// Feed more input into the context
    ///
    /// Zero-length input is accepted and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidState`] if [`finish`](Self::finish) has
    /// already been called.
    pub fn update(&mut self, data: impl AsRef<[u8]>) -> Result<()> {
        if self.finished {
            return Err(HashError::InvalidState("update called after finish"));
        }
        self.absorb(data.as_ref());
        Ok(())
    }

    /// Apply padding, compress the final block(s) and return the digest
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidState`] if called more than once without
    /// an intervening [`reset`](Self::reset).
    pub fn finish(&mut self) -> Result<Digest> {
        if self.finished {
            return Err(HashError::InvalidState("finish called twice"));
        }
        Ok(self.seal())
    }

    /// Return the context to its freshly initialized state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether [`finish`](Self::finish) has already produced the digest
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of input bytes supplied so far, modulo 2^64
    #[must_use]
    pub fn total_len(&self) -> u64 {
        self.total_len
    }

    fn absorb(&mut self, mut data: &[u8]) {
        if data.is_empty() {
            return;
        }
        tracing::trace!(bytes = data.len(), buffered = self.buffer_len, "sha256 update");

        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        if self.buffer_len > 0 {
            let take = (BLOCK_SIZE - self.buffer_len).min(data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if self.buffer_len < BLOCK_SIZE {
                return;
            }
            compress(&mut self.state, &self.buffer);
            self.buffer_len = 0;
        }

        let mut blocks = data.chunks_exact(BLOCK_SIZE);
        for block in &mut blocks {
            let mut full = [0u8; BLOCK_SIZE];
            full.copy_from_slice(block);
            compress(&mut self.state, &full);
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_len = rest.len();
    }

    fn seal(&mut self) -> Digest {
        // Bit length modulo 2^64, as encoded by FIPS 180-4
        let bit_len = self.total_len.wrapping_mul(8);

        let mut pos = self.buffer_len;
        self.buffer[pos] = 0x80;
        pos += 1;

        if pos > LENGTH_OFFSET {
            self.buffer[pos..].fill(0);
            compress(&mut self.state, &self.buffer);
            pos = 0;
        }

        self.buffer[pos..LENGTH_OFFSET].fill(0);
        self.buffer[LENGTH_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());
        compress(&mut self.state, &self.buffer);

        self.buffer.zeroize();
        self.buffer_len = 0;
        self.finished = true;

        let mut out = [0u8; DIGEST_SIZE];
        for (bytes, word) in out.chunks_exact_mut(4).zip(self.state.iter()) {
            bytes.copy_from_slice(&word.to_be_bytes());
        }
        tracing::debug!(total_bytes = self.total_len, "sha256 finish");
        Digest::new(out)
    }
}

impl Drop for HashContext {
    fn drop(&mut self) {
        self.state.zeroize();
        self.buffer.zeroize();
    }
}

impl fmt::Debug for HashContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashContext")
            .field("buffer_len", &self.buffer_len)
            .field("total_len", &self.total_len)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

/// Lets readers be hashed with [`std::io::copy`]
impl io::Write for HashContext {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
