//! Size limits for digest requests.
//!
//! The hashing core accepts input of any length; these caps only bound what
//! the CLI is willing to buffer from stdin before hashing.
//!
//! - E110_InputTooLarge: raw request or decoded payload over the limit

/// Size limits applied while parsing a digest request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum raw request size in bytes
    pub max_request_size: u64,
    /// Maximum decoded payload size in bytes
    pub max_payload_size: u64,
}

impl Limits {
    /// Default limits for CLI use.
    pub const fn strict() -> Self {
        Self {
            max_request_size: 1024 * 1024, // 1 MiB
            max_payload_size: 512 * 1024,  // 512 KiB
        }
    }

    /// Larger limits for bulk hashing.
    pub const fn lenient() -> Self {
        Self {
            max_request_size: 64 * 1024 * 1024, // 64 MiB
            max_payload_size: 32 * 1024 * 1024, // 32 MiB
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::strict()
    }
}
