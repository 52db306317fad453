//! Keccak-f[1600] permutation tests.
//!
//! Pins the constant tables and the permutation itself against known
//! outputs of Keccak-f[1600] on the all-zero state.

use sha3_sponge::keccak::{
    keccak_f, keccak_f_with_trace, KeccakState, LANES, PI_LANES, RHO_OFFSETS, ROUNDS,
    ROUND_CONSTANTS, STATE_BYTES,
};

/// Keccak-f[1600] applied once to the zero state.
const ZERO_ONCE: [u64; LANES] = [
    0xf1258f7940e1dde7,
    0x84d5ccf933c0478a,
    0xd598261ea65aa9ee,
    0xbd1547306f80494d,
    0x8b284e056253d057,
    0xff97a42d7f8e6fd4,
    0x90fee5a0a44647c4,
    0x8c5bda0cd6192e76,
    0xad30a6f71b19059c,
    0x30935ab7d08ffc64,
    0xeb5aa93f2317d635,
    0xa9a6e6260d712103,
    0x81a57c16dbcf555f,
    0x43b831cd0347c826,
    0x01f22f1a11a5569f,
    0x05e5635a21d9ae61,
    0x64befef28cc970f2,
    0x613670957bc46611,
    0xb87c5a554fd00ecb,
    0x8c3ee88a1ccf32c8,
    0x940c7922ae3a2614,
    0x1841f924a2c509e4,
    0x16f53526e70465c2,
    0x75f644e97f30a13b,
    0xeaf1ff7b5ceca249,
];

#[test]
fn table_sizes() {
    assert_eq!(ROUNDS, 24);
    assert_eq!(ROUND_CONSTANTS.len(), ROUNDS);
    assert_eq!(RHO_OFFSETS.len(), 24);
    assert_eq!(PI_LANES.len(), 24);
    assert_eq!(STATE_BYTES, LANES * 8);
}

#[test]
fn pi_visits_every_lane_but_zero_once() {
    let mut seen = [false; LANES];
    for &j in PI_LANES.iter() {
        assert!(j > 0 && j < LANES);
        assert!(!seen[j], "lane {} visited twice", j);
        seen[j] = true;
    }
    assert!(!seen[0]);
}

#[test]
fn rho_offsets_are_triangular_numbers_mod_64() {
    // Offset t is (t+1)(t+2)/2 mod 64 along the Pi walk.
    for (t, &r) in RHO_OFFSETS.iter().enumerate() {
        let t = t as u32;
        assert_eq!(r, ((t + 1) * (t + 2) / 2) % 64, "offset {}", t);
        assert!((1..64).contains(&r));
    }
}

#[test]
fn round_constants_spot_check() {
    assert_eq!(ROUND_CONSTANTS[0], 0x0000000000000001);
    assert_eq!(ROUND_CONSTANTS[1], 0x0000000000008082);
    assert_eq!(ROUND_CONSTANTS[12], 0x000000008000808b);
    assert_eq!(ROUND_CONSTANTS[23], 0x8000000080008008);
}

#[test]
fn zero_state_once() {
    let mut lanes = [0u64; LANES];
    keccak_f(&mut lanes);
    assert_eq!(lanes, ZERO_ONCE);
}

#[test]
fn zero_state_twice() {
    let mut lanes = [0u64; LANES];
    keccak_f(&mut lanes);
    keccak_f(&mut lanes);
    assert_eq!(lanes[0], 0x2d5c954df96ecb3c);
    assert_eq!(lanes[1], 0x6a332cd07057b56d);
    assert_eq!(lanes[2], 0x093d8d1270d76b6c);
}

#[test]
fn byte_state_permute_matches_lanes() {
    let mut state = KeccakState::new();
    state.permute();
    assert_eq!(state.lanes(), ZERO_ONCE);
    assert_eq!(&state.as_bytes()[..8], &0xf1258f7940e1dde7u64.to_le_bytes());
}

#[test]
fn trace_localizes_rounds() {
    let (final_state, trace) = keccak_f_with_trace(&[0u64; LANES]);
    assert_eq!(trace.len(), ROUNDS);
    assert_eq!(final_state, ZERO_ONCE);

    // First round on zero only injects the first round constant.
    let mut after_first = [0u64; LANES];
    after_first[0] = ROUND_CONSTANTS[0];
    assert_eq!(trace[0], after_first);

    // Rounds are distinct: no round leaves the state unchanged.
    for pair in trace.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
}

#[test]
fn permutation_is_injective_on_samples() {
    let mut a = [0u64; LANES];
    let mut b = [0u64; LANES];
    b[24] = 1 << 63;
    keccak_f(&mut a);
    keccak_f(&mut b);
    assert_ne!(a, b);
}
