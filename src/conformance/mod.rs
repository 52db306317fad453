//! Known-answer and differential conformance testing.
//!
//! - [`corpus`] runs JSON test-vector files against this crate.
//! - [`DiffTestHarness`] compares the sponge against any other SHA-3
//!   implementation plugged in through [`DigestRunner`], byte for byte, and
//!   emits a [`ReproBundle`] on mismatch.

pub mod corpus;
mod harness;
mod repro;
mod runner;

pub use corpus::{Corpus, CorpusResults, CorpusRunner, TestResult, TestVector};
pub use harness::{BatchResult, DiffResult, DiffTestHarness};
pub use repro::ReproBundle;
pub use runner::{DigestRunner, OracleOutput, SpongeRunner};

use thiserror::Error;

/// Result type for conformance operations.
pub type ConformanceResult<T> = Result<T, ConformanceError>;

/// Errors that can occur during conformance testing.
#[derive(Debug, Error)]
pub enum ConformanceError {
    /// Reference implementation failed to produce a digest
    #[error("Reference execution failed: {0}")]
    ReferenceFailed(String),
    /// Corpus file could not be read
    #[error("I/O error: {0}")]
    IoError(String),
    /// Corpus file is not valid corpus JSON
    #[error("Failed to parse corpus: {0}")]
    ParseError(String),
}

/// Index of the first byte where `a` and `b` differ, or the shorter length
/// if one is a prefix of the other.
pub fn first_difference(a: &[u8], b: &[u8]) -> Option<usize> {
    match a.iter().zip(b).position(|(x, y)| x != y) {
        Some(i) => Some(i),
        None if a.len() != b.len() => Some(a.len().min(b.len())),
        None => None,
    }
}
