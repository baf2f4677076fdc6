//! Digest value type with encoding support

use crate::compress::DIGEST_SIZE;
use crate::{HashError, Result};
use std::fmt;
use std::str::FromStr;
use subtle::ConstantTimeEq;

/// Encode a digest as 64 lowercase hex characters, most-significant nibble first
#[must_use]
pub fn hex_encode(digest: &[u8; DIGEST_SIZE]) -> String {
    hex::encode(digest)
}

/// Decode 64 hex characters (either case) back into digest bytes
///
/// # Errors
///
/// Returns [`HashError::InvalidHex`] if `text` is not exactly 64 hex digits.
/// Surrounding whitespace is not stripped.
pub fn hex_decode(text: &str) -> Result<[u8; DIGEST_SIZE]> {
    let mut out = [0u8; DIGEST_SIZE];
    hex::decode_to_slice(text, &mut out)
        .map_err(|e| HashError::InvalidHex(format!("{e} (expected {} hex digits)", DIGEST_SIZE * 2)))?;
    Ok(out)
}

/// A finished SHA-256 digest
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    /// Wrap raw digest bytes
    #[must_use]
    pub const fn new(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes of the digest
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// Take the raw bytes out of the digest
    #[must_use]
    pub fn into_bytes(self) -> [u8; DIGEST_SIZE] {
        self.0
    }

    /// Get the digest as a lowercase hexadecimal string
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex_encode(&self.0)
    }

    /// Get the digest as a base64 string
    #[must_use]
    pub fn to_base64(&self) -> String {
        use base64::{engine::general_purpose, Engine as _};
        general_purpose::STANDARD.encode(self.0)
    }

    /// Compare against an expected digest in constant time
    ///
    /// # Errors
    ///
    /// Returns [`HashError::VerificationFailed`] when `expected` differs in
    /// content or length.
    pub fn verify(&self, expected: &[u8]) -> Result<()> {
        if bool::from(self.0.as_slice().ct_eq(expected)) {
            Ok(())
        } else {
            Err(HashError::VerificationFailed)
        }
    }

    /// Length of the digest in bytes, always 32
    #[must_use]
    pub const fn len(&self) -> usize {
        DIGEST_SIZE
    }

    /// Always false; present for API symmetry with byte containers
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl From<[u8; DIGEST_SIZE]> for Digest {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self::new(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_SIZE] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl From<Digest> for Vec<u8> {
    fn from(digest: Digest) -> Self {
        digest.0.to_vec()
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self> {
        hex_decode(s).map(Self)
    }
}
