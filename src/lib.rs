//! SHA-3 hash functions built on the Keccak sponge.
//!
//! This crate computes SHA3-224, SHA3-256, SHA3-384 and SHA3-512 digests
//! (FIPS 202) with a portable Keccak-f[1600] permutation.
//!
//! # Architecture
//!
//! - [`keccak`] - Keccak-f[1600] permutation and the 1600-bit state
//! - [`sha3`] - Variant table, sponge driver (absorb, pad, squeeze)
//! - [`request`] - JSON digest requests and size limits for the CLI
//! - [`conformance`] - Known-answer corpus runner and differential harness
//! - [`error`] - Error codes
//!
//! # Example
//!
//! ```
//! use sha3_sponge::sha3::{HashState, Variant};
//!
//! let mut state = HashState::new(Variant::Sha3_256);
//! state.absorb(b"abc").unwrap();
//! let digest = state.finalize().unwrap();
//! assert_eq!(
//!     hex::encode(digest),
//!     "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
//! );
//! ```

// Library code must avoid unwrap/expect/panic.
// Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod conformance;
pub mod error;
pub mod keccak;
pub mod request;
pub mod sha3;

// Re-export commonly used types
pub use conformance::{DiffResult, DiffTestHarness};
pub use error::{ErrorCode, Sha3Result};
pub use sha3::{hash, sha3_224, sha3_256, sha3_384, sha3_512, HashState, Variant};
