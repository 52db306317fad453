//! Digest runners for differential testing.

use super::ConformanceResult;
use crate::sha3::{HashState, Variant};

/// Result from a digest computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OracleOutput {
    /// Lowercase hex digest.
    Ok(String),
    /// Error name.
    Err(String),
}

impl OracleOutput {
    /// Check if this is an Ok result.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Check if this is an Err result.
    pub fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Get the value as a string (either hex digest or error name).
    pub fn as_string(&self) -> &str {
        match self {
            Self::Ok(s) => s,
            Self::Err(s) => s,
        }
    }

    /// Decoded digest bytes, if this is an Ok result with valid hex.
    pub fn digest_bytes(&self) -> Option<Vec<u8>> {
        match self {
            Self::Ok(s) => hex::decode(s).ok(),
            Self::Err(_) => None,
        }
    }
}

/// Anything that can compute a SHA-3 digest.
pub trait DigestRunner {
    /// Digest `msg` under `variant`.
    fn digest(&self, variant: Variant, msg: &[u8]) -> ConformanceResult<OracleOutput>;

    /// Get the runner name for reporting.
    fn name(&self) -> &str;
}

/// Runner backed by this crate's [`HashState`].
///
/// With a chunk size set, the message is absorbed in pieces of that size to
/// exercise block-boundary handling across calls.
#[derive(Debug, Clone, Default)]
pub struct SpongeRunner {
    chunk: Option<usize>,
}

impl SpongeRunner {
    /// Runner that absorbs the whole message in one call.
    pub fn new() -> Self {
        Self { chunk: None }
    }

    /// Runner that absorbs in `chunk`-byte pieces. A zero chunk means one call.
    pub fn chunked(chunk: usize) -> Self {
        Self {
            chunk: (chunk > 0).then_some(chunk),
        }
    }
}

impl DigestRunner for SpongeRunner {
    fn digest(&self, variant: Variant, msg: &[u8]) -> ConformanceResult<OracleOutput> {
        let mut state = HashState::new(variant);
        let absorbed = match self.chunk {
            Some(n) => msg.chunks(n).try_for_each(|c| state.absorb(c)),
            None => state.absorb(msg),
        };

        let result = absorbed.and_then(|_| state.finalize());
        Ok(match result {
            Ok(digest) => OracleOutput::Ok(hex::encode(digest)),
            Err(e) => OracleOutput::Err(e.name().to_string()),
        })
    }

    fn name(&self) -> &str {
        "sponge"
    }
}
