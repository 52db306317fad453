//! Keccak-f[1600] permutation.
//!
//! The 1600-bit state is 25 lanes of 64 bits, indexed `x + 5 * y`. One round
//! applies Theta, Rho+Pi, Chi and Iota in that order; the full permutation is
//! [`ROUNDS`] rounds.
//!
//! The tables below are structural constants of the permutation. A single
//! transcription error yields wrong digests with no internal symptom, so they
//! are pinned by the known-answer tests in `tests/keccak_permutation.rs`.

mod permute;
mod state;

pub use permute::{keccak_f, keccak_f_with_trace};
pub use state::KeccakState;

/// Number of rounds in Keccak-f[1600].
pub const ROUNDS: usize = 24;

/// Number of 64-bit lanes in the state.
pub const LANES: usize = 25;

/// Size of the state in bytes (1600 bits).
pub const STATE_BYTES: usize = 200;

/// Bytes per lane.
pub const LANE_BYTES: usize = 8;

/// Iota round constants, one per round.
pub const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Rho rotation offsets, in the order lanes are visited by [`PI_LANES`].
pub const RHO_OFFSETS: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Pi destination lanes. Lane 0 is never relocated.
pub const PI_LANES: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];
