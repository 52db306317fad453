//! Error codes for the SHA-3 sponge.
//!
//! The hashing core itself is total: every byte sequence has a digest. The
//! codes below cover the API guards around it (finalize-once, strict variant
//! selection) and the request layer used by the CLI.
//!
//! Numeric codes are stable and appear in CLI output and corpus files.

use thiserror::Error;

/// All error codes reported by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    /// Digest width outside {224, 256, 384, 512} under strict parsing (code 100)
    #[error("E100_UnknownVariant({0})")]
    E100_UnknownVariant(/* bits */ u64),

    /// Absorb called on a state that has already produced its digest (code 101)
    #[error("E101_AbsorbAfterFinalize")]
    E101_AbsorbAfterFinalize,

    /// Finalize called twice on the same state (code 102)
    #[error("E102_AlreadyFinalized")]
    E102_AlreadyFinalized,

    /// Request exceeds the configured size limit (code 110)
    #[error("E110_InputTooLarge({0}, {1})")]
    E110_InputTooLarge(/* size */ u64, /* limit */ u64),

    /// Request is not a well-formed digest request (code 111)
    #[error("E111_InvalidRequest({0})")]
    E111_InvalidRequest(/* reason */ String),

    /// Hex payload could not be decoded (code 112)
    #[error("E112_InvalidHex({0})")]
    E112_InvalidHex(/* reason */ String),

    /// Request names zero or more than one payload field (code 113)
    #[error("E113_PayloadConflict")]
    E113_PayloadConflict,
}

impl ErrorCode {
    /// Get the numeric error code.
    pub fn code(&self) -> u32 {
        match self {
            ErrorCode::E100_UnknownVariant(_) => 100,
            ErrorCode::E101_AbsorbAfterFinalize => 101,
            ErrorCode::E102_AlreadyFinalized => 102,
            ErrorCode::E110_InputTooLarge(_, _) => 110,
            ErrorCode::E111_InvalidRequest(_) => 111,
            ErrorCode::E112_InvalidHex(_) => 112,
            ErrorCode::E113_PayloadConflict => 113,
        }
    }

    /// Get the error name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::E100_UnknownVariant(_) => "E100_UnknownVariant",
            ErrorCode::E101_AbsorbAfterFinalize => "E101_AbsorbAfterFinalize",
            ErrorCode::E102_AlreadyFinalized => "E102_AlreadyFinalized",
            ErrorCode::E110_InputTooLarge(_, _) => "E110_InputTooLarge",
            ErrorCode::E111_InvalidRequest(_) => "E111_InvalidRequest",
            ErrorCode::E112_InvalidHex(_) => "E112_InvalidHex",
            ErrorCode::E113_PayloadConflict => "E113_PayloadConflict",
        }
    }
}

/// Result type for sponge operations.
pub type Sha3Result<T> = Result<T, ErrorCode>;
