//! SHA-3 sponge: absorb into the rate, pad, squeeze one block.

use super::Variant;
use crate::error::{ErrorCode, Sha3Result};
use crate::keccak::{KeccakState, ROUNDS, STATE_BYTES};

/// SHA-3 domain-separation suffix `01` followed by the first pad bit.
const DOMAIN_PAD: u8 = 0x06;

/// Final pad bit, set in the last byte of the rate.
const FINAL_BIT: u8 = 0x80;

/// Sponge operation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Accepting input
    Absorbing,
    /// Digest has been extracted; the state is spent
    Finalized,
}

/// Hash state for one digest computation.
///
/// Created with [`HashState::new`], fed with [`HashState::absorb`] any number
/// of times, then consumed by [`HashState::finalize`].
#[derive(Debug, Clone)]
pub struct HashState {
    /// Keccak state (lanes)
    state: KeccakState,
    /// Input staged for the next permutation
    block: [u8; STATE_BYTES],
    /// Bytes currently staged in `block`; always `< rate` between calls
    fill: usize,
    /// Digest width this state was created for
    variant: Variant,
    /// Current mode
    mode: Mode,
}

impl HashState {
    /// Fresh state for `variant`.
    pub fn new(variant: Variant) -> Self {
        Self {
            state: KeccakState::new(),
            block: [0u8; STATE_BYTES],
            fill: 0,
            variant,
            mode: Mode::Absorbing,
        }
    }

    /// Fresh state from a raw digest-width selector.
    ///
    /// Unrecognised widths resolve to SHA3-256; see [`Variant::from_bits`].
    pub fn from_bits(bits: u32) -> Self {
        Self::new(Variant::from_bits(bits))
    }

    /// Variant this state computes.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Sponge rate in bytes.
    pub fn block_size(&self) -> usize {
        self.variant.rate()
    }

    /// Output size in bytes.
    pub fn digest_length(&self) -> usize {
        self.variant.digest_len()
    }

    /// Permutation rounds (always 24).
    pub fn round_count(&self) -> usize {
        ROUNDS
    }

    /// Bytes staged but not yet permuted.
    pub fn buffered(&self) -> usize {
        self.fill
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Absorb `input`. Any split of a message across calls gives the same
    /// digest as a single call on the whole message.
    pub fn absorb(&mut self, input: &[u8]) -> Sha3Result<()> {
        if self.mode == Mode::Finalized {
            return Err(ErrorCode::E101_AbsorbAfterFinalize);
        }
        self.absorb_bytes(input);
        Ok(())
    }

    /// Pad, permute once more and return the digest, leaving the state spent.
    pub fn finalize_in_place(&mut self) -> Sha3Result<Vec<u8>> {
        if self.mode == Mode::Finalized {
            return Err(ErrorCode::E102_AlreadyFinalized);
        }
        self.mode = Mode::Finalized;
        Ok(self.squeeze())
    }

    /// Consume the state and return its digest.
    pub fn finalize(mut self) -> Sha3Result<Vec<u8>> {
        self.finalize_in_place()
    }

    /// Absorb without the mode check. Callers own a fresh state.
    pub(crate) fn absorb_bytes(&mut self, input: &[u8]) {
        let rate = self.block_size();
        let mut rest = input;

        while !rest.is_empty() {
            let take = (rate - self.fill).min(rest.len());
            self.block[self.fill..self.fill + take].copy_from_slice(&rest[..take]);
            self.fill += take;
            rest = &rest[take..];

            if self.fill == rate {
                self.transform();
                self.fill = 0;
            }
        }
    }

    /// Pad the staged block, run the final permutation and copy out the
    /// digest. Callers own a fresh state.
    pub(crate) fn squeeze(&mut self) -> Vec<u8> {
        let rate = self.block_size();
        tracing::trace!(variant = %self.variant, buffered = self.fill, "sha3 finalize");

        self.block[self.fill] = DOMAIN_PAD;
        self.block[self.fill + 1..rate].fill(0);
        // OR, not store: with one free byte this lands on the 0x06 just written.
        self.block[rate - 1] |= FINAL_BIT;
        self.fill = 0;
        self.transform();

        self.state.as_bytes()[..self.digest_length()].to_vec()
    }

    /// Mix a full rate block into the state and run Keccak-f[1600].
    fn transform(&mut self) {
        let rate = self.block_size();
        self.state.xor_bytes(&self.block[..rate]);
        self.state.permute();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let st = HashState::new(Variant::Sha3_384);
        assert_eq!(st.block_size(), 104);
        assert_eq!(st.digest_length(), 48);
        assert_eq!(st.round_count(), 24);
        assert_eq!(st.buffered(), 0);
        assert_eq!(st.mode(), Mode::Absorbing);
    }

    #[test]
    fn test_fill_wraps_at_rate() {
        let mut st = HashState::new(Variant::Sha3_512);
        st.absorb(&[0u8; 71]).unwrap();
        assert_eq!(st.buffered(), 71);
        st.absorb(&[0u8; 1]).unwrap();
        assert_eq!(st.buffered(), 0);
        st.absorb(&[0u8; 73]).unwrap();
        assert_eq!(st.buffered(), 1);
    }

    #[test]
    fn test_empty_absorb_is_noop() {
        let mut st = HashState::new(Variant::Sha3_256);
        st.absorb(b"abc").unwrap();
        let before = st.clone();
        st.absorb(&[]).unwrap();
        assert_eq!(st.buffered(), before.buffered());
        assert_eq!(st.finalize().unwrap(), before.finalize().unwrap());
    }

    #[test]
    fn test_absorb_after_finalize_rejected() {
        let mut st = HashState::new(Variant::Sha3_256);
        st.finalize_in_place().unwrap();
        assert_eq!(st.absorb(b"x"), Err(ErrorCode::E101_AbsorbAfterFinalize));
        assert_eq!(st.finalize_in_place(), Err(ErrorCode::E102_AlreadyFinalized));
        assert_eq!(st.mode(), Mode::Finalized);
    }

    #[test]
    fn test_pad_combines_in_last_byte() {
        // 135 bytes leaves one free byte in a SHA3-256 block.
        let mut st = HashState::new(Variant::Sha3_256);
        st.absorb(&[0u8; 135]).unwrap();
        let digest = st.finalize_in_place().unwrap();
        assert_eq!(digest.len(), 32);
        assert_eq!(st.block[135], 0x86);
        assert!(st.block[..135].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_pad_on_empty_block() {
        let mut st = HashState::new(Variant::Sha3_224);
        st.finalize_in_place().unwrap();
        assert_eq!(st.block[0], 0x06);
        assert!(st.block[1..143].iter().all(|&b| b == 0));
        assert_eq!(st.block[143], 0x80);
        // Beyond the rate the buffer is never written.
        assert!(st.block[144..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_pad_clears_stale_bytes() {
        // A full block leaves 0xff in the buffer; padding must zero it.
        let mut st = HashState::new(Variant::Sha3_512);
        st.absorb(&[0xffu8; 72 + 3]).unwrap();
        st.finalize_in_place().unwrap();
        assert_eq!(&st.block[..3], &[0xff, 0xff, 0xff]);
        assert_eq!(st.block[3], 0x06);
        assert!(st.block[4..71].iter().all(|&b| b == 0));
        assert_eq!(st.block[71], 0x80);
    }

    #[test]
    fn test_digest_lengths() {
        for v in Variant::ALL {
            let digest = HashState::new(v).finalize().unwrap();
            assert_eq!(digest.len(), v.digest_len());
        }
    }
}
