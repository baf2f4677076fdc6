//! Streaming hash computation over async chunk streams
//!
//! Each chunk pulled from the input stream goes through one
//! [`HashContext::update`]; the digest is produced once the input ends.

use crate::{Digest, HashContext, HashError, Result};
use futures::Stream;
use pin_project_lite::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

pin_project! {
    /// Streaming hasher that processes chunks incrementally
    pub struct StreamingHasher<S> {
        #[pin]
        input: S,
        context: HashContext,
        done: bool,
    }
}

impl<S> StreamingHasher<S>
where
    S: Stream<Item = Vec<u8>>,
{
    /// Create a new streaming hasher over `input`
    pub fn new(input: S) -> Self {
        Self {
            input,
            context: HashContext::new(),
            done: false,
        }
    }

    /// Get the total number of bytes processed so far
    pub fn total_bytes(&self) -> u64 {
        self.context.total_len()
    }
}

/// Result of streaming hash computation
#[derive(Debug, Clone)]
pub struct StreamHashResult {
    /// The final digest
    pub digest: Digest,
    /// Total bytes processed
    pub total_bytes: u64,
}

/// Progress record emitted for every consumed chunk
#[derive(Debug, Clone)]
pub struct StreamHashChunk {
    /// Bytes processed in this chunk
    pub bytes_processed: u64,
    /// Total bytes processed so far
    pub total_bytes: u64,
    /// Final digest, present only on the last record
    pub digest: Option<Digest>,
}

impl StreamHashChunk {
    /// Whether this is the last record of the stream
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.digest.is_some()
    }
}

impl<S> Stream for StreamingHasher<S>
where
    S: Stream<Item = Vec<u8>>,
{
    type Item = Result<StreamHashChunk>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();

        if *this.done {
            return Poll::Ready(None);
        }

        match this.input.poll_next(cx) {
            Poll::Ready(Some(chunk)) => {
                if let Err(e) = this.context.update(&chunk) {
                    *this.done = true;
                    return Poll::Ready(Some(Err(e)));
                }
                Poll::Ready(Some(Ok(StreamHashChunk {
                    bytes_processed: chunk.len() as u64,
                    total_bytes: this.context.total_len(),
                    digest: None,
                })))
            }
            Poll::Ready(None) => {
                *this.done = true;
                let result = this.context.finish().map(|digest| StreamHashChunk {
                    bytes_processed: 0,
                    total_bytes: this.context.total_len(),
                    digest: Some(digest),
                });
                Poll::Ready(Some(result))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Create a streaming SHA-256 hasher from any stream of byte chunks
pub fn stream_sha256<S>(input: S) -> StreamingHasher<S>
where
    S: Stream<Item = Vec<u8>>,
{
    StreamingHasher::new(input)
}

/// Drive a streaming hasher to completion and return the final digest
///
/// # Errors
///
/// Returns `HashError` if the stream ends without producing a digest or the
/// underlying context rejects input.
pub async fn collect_hash<S>(mut hasher: StreamingHasher<S>) -> Result<StreamHashResult>
where
    S: Stream<Item = Vec<u8>> + Unpin,
{
    use futures::StreamExt;

    while let Some(chunk) = hasher.next().await {
        let chunk = chunk?;
        if let Some(digest) = chunk.digest {
            return Ok(StreamHashResult {
                digest,
                total_bytes: chunk.total_bytes,
            });
        }
    }

    Err(HashError::internal(
        "Stream ended without producing final digest",
    ))
}
