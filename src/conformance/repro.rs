//! Reproduction bundle for debugging conformance mismatches.

use super::first_difference;
use super::runner::OracleOutput;
use crate::sha3::Variant;
use std::path::Path;

/// Everything needed to replay a digest mismatch.
#[derive(Debug)]
pub struct ReproBundle {
    /// Test name that failed.
    pub test_name: String,
    /// Variant under test.
    pub variant: Variant,
    /// Message as hex.
    pub message_hex: String,
    /// Name of the reference runner.
    pub reference_name: String,
    /// Sponge output.
    pub sponge_output: OracleOutput,
    /// Reference output.
    pub reference_output: OracleOutput,
}

impl ReproBundle {
    /// Create a new repro bundle.
    pub fn new(
        test_name: String,
        variant: Variant,
        message: &[u8],
        reference_name: String,
        sponge_output: OracleOutput,
        reference_output: OracleOutput,
    ) -> Self {
        Self {
            test_name,
            variant,
            message_hex: hex::encode(message),
            reference_name,
            sponge_output,
            reference_output,
        }
    }

    /// First differing digest byte, when both sides produced a digest.
    pub fn first_diff(&self) -> Option<usize> {
        let ours = self.sponge_output.digest_bytes()?;
        let theirs = self.reference_output.digest_bytes()?;
        first_difference(&ours, &theirs)
    }

    /// Message length in bytes.
    pub fn message_len(&self) -> usize {
        self.message_hex.len() / 2
    }

    /// Format as a human-readable report.
    pub fn to_report(&self) -> String {
        let first_diff = match self.first_diff() {
            Some(i) => i.to_string(),
            None => "n/a".to_string(),
        };
        format!(
            r#"=== Conformance Mismatch Report ===
Test: {}
Variant: {} (rate {} bytes)
Message length: {} bytes
Message: {}

Sponge Output: {:?}
{} Output: {:?}
First differing byte: {}

To reproduce:
  echo '{{"bits":{},"hex":"{}"}}' | sha3-sponge digest
"#,
            self.test_name,
            self.variant,
            self.variant.rate(),
            self.message_len(),
            self.message_hex,
            self.sponge_output,
            self.reference_name,
            self.reference_output,
            first_diff,
            self.variant.bits(),
            self.message_hex,
        )
    }

    /// Save the repro bundle to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        std::fs::write(path, self.to_report())
    }

    /// Format as JSON for machine parsing.
    pub fn to_json(&self) -> String {
        serde_json::json!({
            "test_name": self.test_name,
            "bits": self.variant.bits(),
            "message_hex": self.message_hex,
            "reference": self.reference_name,
            "sponge_output": self.sponge_output.as_string(),
            "reference_output": self.reference_output.as_string(),
            "first_diff": self.first_diff(),
        })
        .to_string()
    }
}
