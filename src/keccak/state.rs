//! Byte-addressable Keccak state with little-endian lane accessors.
//!
//! The sponge XORs input and reads output byte-wise, while the permutation
//! works on 64-bit lanes. Both views are served from one `[u8; 200]`; lane `i`
//! occupies bytes `8 * i .. 8 * i + 8` in little-endian order.

use super::{keccak_f, LANES, LANE_BYTES, STATE_BYTES};

/// The 1600-bit Keccak state.
#[derive(Clone, PartialEq, Eq)]
pub struct KeccakState {
    bytes: [u8; STATE_BYTES],
}

impl KeccakState {
    /// All-zero state.
    pub const fn new() -> Self {
        Self {
            bytes: [0u8; STATE_BYTES],
        }
    }

    /// Read lane `index` (0..25).
    #[inline]
    pub fn lane(&self, index: usize) -> u64 {
        let off = index * LANE_BYTES;
        let mut buf = [0u8; LANE_BYTES];
        buf.copy_from_slice(&self.bytes[off..off + LANE_BYTES]);
        u64::from_le_bytes(buf)
    }

    /// Overwrite lane `index` (0..25).
    #[inline]
    pub fn set_lane(&mut self, index: usize, value: u64) {
        let off = index * LANE_BYTES;
        self.bytes[off..off + LANE_BYTES].copy_from_slice(&value.to_le_bytes());
    }

    /// Snapshot of all 25 lanes.
    pub fn lanes(&self) -> [u64; LANES] {
        let mut lanes = [0u64; LANES];
        for (i, lane) in lanes.iter_mut().enumerate() {
            *lane = self.lane(i);
        }
        lanes
    }

    /// Store all 25 lanes.
    pub fn set_lanes(&mut self, lanes: &[u64; LANES]) {
        for (i, &lane) in lanes.iter().enumerate() {
            self.set_lane(i, lane);
        }
    }

    /// Byte view of the state.
    pub fn as_bytes(&self) -> &[u8; STATE_BYTES] {
        &self.bytes
    }

    /// XOR `block` into the leading bytes of the state.
    ///
    /// Bytes past `block.len()` are left untouched; `block` longer than the
    /// state is truncated to [`STATE_BYTES`].
    pub fn xor_bytes(&mut self, block: &[u8]) {
        for (s, b) in self.bytes.iter_mut().zip(block) {
            *s ^= *b;
        }
    }

    /// Apply Keccak-f[1600] to the state.
    pub fn permute(&mut self) {
        let mut lanes = self.lanes();
        keccak_f(&mut lanes);
        self.set_lanes(&lanes);
    }
}

impl Default for KeccakState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for KeccakState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.lanes().iter().map(|l| format!("{:016x}", l)))
            .finish()
    }
}
