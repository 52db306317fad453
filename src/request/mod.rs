//! JSON digest requests for the CLI.
//!
//! A request names a digest width and exactly one payload form:
//!
//! ```json
//! {"bits": 256, "hex": "616263"}
//! {"bits": 512, "text": "abc"}
//! ```
//!
//! `bits` is parsed strictly: widths other than 224/256/384/512 are
//! rejected with E100 rather than falling back to SHA3-256.

mod limits;

pub use limits::Limits;

use crate::error::{ErrorCode, Sha3Result};
use crate::sha3::Variant;
use serde::Deserialize;

/// Raw request as it appears on the wire.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRequest {
    bits: u32,
    hex: Option<String>,
    text: Option<String>,
}

/// A validated digest request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestRequest {
    /// Digest width
    pub variant: Variant,
    /// Message bytes
    pub payload: Vec<u8>,
}

/// Parse and validate a request.
pub fn parse_request(input: &str, limits: &Limits) -> Sha3Result<DigestRequest> {
    if input.len() as u64 > limits.max_request_size {
        return Err(ErrorCode::E110_InputTooLarge(
            input.len() as u64,
            limits.max_request_size,
        ));
    }

    let raw: RawRequest = serde_json::from_str(input)
        .map_err(|e| ErrorCode::E111_InvalidRequest(e.to_string()))?;

    let variant = Variant::try_from(raw.bits)?;

    let payload = match (raw.hex, raw.text) {
        (Some(h), None) => decode_hex(&h)?,
        (None, Some(t)) => t.into_bytes(),
        _ => return Err(ErrorCode::E113_PayloadConflict),
    };

    if payload.len() as u64 > limits.max_payload_size {
        return Err(ErrorCode::E110_InputTooLarge(
            payload.len() as u64,
            limits.max_payload_size,
        ));
    }

    Ok(DigestRequest { variant, payload })
}

/// Decode a hex string, accepting an optional `0x` prefix.
pub fn decode_hex(s: &str) -> Sha3Result<Vec<u8>> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    hex::decode(digits).map_err(|e| ErrorCode::E112_InvalidHex(e.to_string()))
}
