//! SHA-3 digest widths and their sponge parameters.

use crate::error::{ErrorCode, Sha3Result};
use crate::keccak::STATE_BYTES;
use std::fmt;

/// One of the four SHA-3 fixed-output functions.
///
/// The digest width fixes the sponge rate: capacity is twice the digest
/// length, and rate is whatever remains of the 200-byte state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// SHA3-224: rate 144, digest 28 bytes.
    Sha3_224,
    /// SHA3-256: rate 136, digest 32 bytes.
    #[default]
    Sha3_256,
    /// SHA3-384: rate 104, digest 48 bytes.
    Sha3_384,
    /// SHA3-512: rate 72, digest 64 bytes.
    Sha3_512,
}

impl Variant {
    /// Every variant, narrowest first.
    pub const ALL: [Variant; 4] = [
        Variant::Sha3_224,
        Variant::Sha3_256,
        Variant::Sha3_384,
        Variant::Sha3_512,
    ];

    /// Lenient selector: 224, 384 and 512 pick their variant, anything else
    /// resolves to SHA3-256.
    pub const fn from_bits(bits: u32) -> Self {
        match bits {
            224 => Variant::Sha3_224,
            384 => Variant::Sha3_384,
            512 => Variant::Sha3_512,
            _ => Variant::Sha3_256,
        }
    }

    /// Digest width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Variant::Sha3_224 => 224,
            Variant::Sha3_256 => 256,
            Variant::Sha3_384 => 384,
            Variant::Sha3_512 => 512,
        }
    }

    /// Sponge rate (block size) in bytes.
    pub const fn rate(self) -> usize {
        match self {
            Variant::Sha3_224 => 144,
            Variant::Sha3_256 => 136,
            Variant::Sha3_384 => 104,
            Variant::Sha3_512 => 72,
        }
    }

    /// Digest length in bytes.
    pub const fn digest_len(self) -> usize {
        match self {
            Variant::Sha3_224 => 28,
            Variant::Sha3_256 => 32,
            Variant::Sha3_384 => 48,
            Variant::Sha3_512 => 64,
        }
    }

    /// Capacity in bytes.
    pub const fn capacity(self) -> usize {
        STATE_BYTES - self.rate()
    }

    /// Display name, e.g. `SHA3-256`.
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Sha3_224 => "SHA3-224",
            Variant::Sha3_256 => "SHA3-256",
            Variant::Sha3_384 => "SHA3-384",
            Variant::Sha3_512 => "SHA3-512",
        }
    }
}

/// Strict selector: only the four SHA-3 widths are accepted.
impl TryFrom<u32> for Variant {
    type Error = ErrorCode;

    fn try_from(bits: u32) -> Sha3Result<Self> {
        match bits {
            224 | 256 | 384 | 512 => Ok(Variant::from_bits(bits)),
            other => Err(ErrorCode::E100_UnknownVariant(other as u64)),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
