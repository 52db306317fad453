//! Keccak-f[1600] round function.
//!
//! Each round consists of:
//! 1. Theta (column parity diffusion)
//! 2. Rho and Pi (lane rotation and relocation, table-driven)
//! 3. Chi (non-linear row mixing)
//! 4. Iota (round constant into lane 0)

use super::{LANES, PI_LANES, RHO_OFFSETS, ROUNDS, ROUND_CONSTANTS};

/// Theta: XOR each lane with the parities of its two neighbouring columns.
#[inline]
fn theta(st: &mut [u64; LANES]) {
    let mut bc = [0u64; 5];
    for i in 0..5 {
        bc[i] = st[i] ^ st[i + 5] ^ st[i + 10] ^ st[i + 15] ^ st[i + 20];
    }

    for i in 0..5 {
        let t = bc[(i + 4) % 5] ^ bc[(i + 1) % 5].rotate_left(1);
        for j in (0..LANES).step_by(5) {
            st[j + i] ^= t;
        }
    }
}

/// Rho and Pi combined: walk the Pi cycle starting at lane 1, rotating each
/// carried lane by its Rho offset as it lands.
#[inline]
fn rho_pi(st: &mut [u64; LANES]) {
    let mut carry = st[1];
    for (&j, &rot) in PI_LANES.iter().zip(RHO_OFFSETS.iter()) {
        let displaced = st[j];
        st[j] = carry.rotate_left(rot);
        carry = displaced;
    }
}

/// Chi: `a[i] ^= !a[i+1] & a[i+2]` along each row, on pre-Chi values.
#[inline]
fn chi(st: &mut [u64; LANES]) {
    for j in (0..LANES).step_by(5) {
        let mut row = [0u64; 5];
        row.copy_from_slice(&st[j..j + 5]);
        for i in 0..5 {
            st[j + i] ^= !row[(i + 1) % 5] & row[(i + 2) % 5];
        }
    }
}

/// Iota: break symmetry with the round constant.
#[inline]
fn iota(st: &mut [u64; LANES], round: usize) {
    st[0] ^= ROUND_CONSTANTS[round];
}

fn round(st: &mut [u64; LANES], round: usize) {
    theta(st);
    rho_pi(st);
    chi(st);
    iota(st, round);
}

/// Apply the full 24-round Keccak-f[1600] permutation in place.
pub fn keccak_f(st: &mut [u64; LANES]) {
    for r in 0..ROUNDS {
        round(st, r);
    }
}

/// Keccak-f[1600] with per-round trace output.
///
/// Returns `(final_state, round_traces)` where entry `r` is the state after
/// round `r`. Used to localize a divergence to a single round.
pub fn keccak_f_with_trace(state: &[u64; LANES]) -> ([u64; LANES], Vec<[u64; LANES]>) {
    let mut st = *state;
    let mut traces = Vec::with_capacity(ROUNDS);

    for r in 0..ROUNDS {
        round(&mut st, r);
        traces.push(st);
    }

    (st, traces)
}
