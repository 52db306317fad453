//! SHA-3 fixed-output hash functions (FIPS 202).
//!
//! Implements the SHA-3 sponge over Keccak-f[1600] with the `0x06 .. 0x80`
//! padding rule.
//!
//! ```
//! use sha3_sponge::sha3::{create, absorb, finalize, sha3_256};
//!
//! let mut state = create(256);
//! absorb(&mut state, b"ab").unwrap();
//! absorb(&mut state, b"c").unwrap();
//! let digest = finalize(state).unwrap();
//! assert_eq!(digest, sha3_256(b"abc"));
//! ```

mod sponge;
mod variant;

pub use sponge::{HashState, Mode};
pub use variant::Variant;

use crate::error::Sha3Result;

/// Create a state from a digest-width selector (224, 256, 384 or 512).
///
/// Any other selector yields a SHA3-256 state.
pub fn create(bits: u32) -> HashState {
    HashState::from_bits(bits)
}

/// Absorb `input` into `state`.
pub fn absorb(state: &mut HashState, input: &[u8]) -> Sha3Result<()> {
    state.absorb(input)
}

/// Finish `state` and return its digest.
pub fn finalize(state: HashState) -> Sha3Result<Vec<u8>> {
    state.finalize()
}

/// One-shot digest of `msg` under `variant`.
pub fn hash(variant: Variant, msg: &[u8]) -> Vec<u8> {
    let mut state = HashState::new(variant);
    state.absorb_bytes(msg);
    state.squeeze()
}

fn hash_array<const N: usize>(variant: Variant, msg: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&hash(variant, msg));
    out
}

/// SHA3-224 of `msg`.
pub fn sha3_224(msg: &[u8]) -> [u8; 28] {
    hash_array(Variant::Sha3_224, msg)
}

/// SHA3-256 of `msg`.
pub fn sha3_256(msg: &[u8]) -> [u8; 32] {
    hash_array(Variant::Sha3_256, msg)
}

/// SHA3-384 of `msg`.
pub fn sha3_384(msg: &[u8]) -> [u8; 48] {
    hash_array(Variant::Sha3_384, msg)
}

/// SHA3-512 of `msg`.
pub fn sha3_512(msg: &[u8]) -> [u8; 64] {
    hash_array(Variant::Sha3_512, msg)
}
