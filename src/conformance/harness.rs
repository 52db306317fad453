//! Differential test harness comparing the sponge with a reference runner.

use super::repro::ReproBundle;
use super::runner::{DigestRunner, OracleOutput, SpongeRunner};
use super::{ConformanceError, ConformanceResult};
use crate::sha3::Variant;

/// Result of a differential test.
#[derive(Debug)]
pub enum DiffResult {
    /// Both implementations produced the same output.
    Match {
        /// The matching output value.
        value: String,
    },
    /// Implementations produced different outputs.
    Mismatch {
        /// Sponge output.
        sponge: OracleOutput,
        /// Reference output.
        reference: OracleOutput,
        /// Repro bundle for debugging.
        repro: ReproBundle,
    },
    /// No reference runner is configured.
    ReferenceUnavailable,
}

impl DiffResult {
    /// Check if the result is a match.
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match { .. })
    }

    /// Check if the result is a mismatch.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch { .. })
    }
}

/// Differential test harness for comparing implementations.
pub struct DiffTestHarness {
    /// Runner for this crate.
    sponge: SpongeRunner,
    /// Reference runner (optional).
    reference: Option<Box<dyn DigestRunner>>,
}

impl DiffTestHarness {
    /// Harness comparing against `reference`.
    pub fn new(reference: Box<dyn DigestRunner>) -> Self {
        Self {
            sponge: SpongeRunner::new(),
            reference: Some(reference),
        }
    }

    /// Harness with only the sponge runner.
    pub fn sponge_only() -> Self {
        Self {
            sponge: SpongeRunner::new(),
            reference: None,
        }
    }

    /// Absorb in `chunk`-byte pieces on the sponge side.
    pub fn with_chunk(mut self, chunk: usize) -> Self {
        self.sponge = SpongeRunner::chunked(chunk);
        self
    }

    /// Check if a reference runner is configured.
    pub fn has_reference(&self) -> bool {
        self.reference.is_some()
    }

    /// Compare one digest between the sponge and the reference.
    pub fn compare_digest(
        &self,
        test_name: &str,
        variant: Variant,
        msg: &[u8],
    ) -> ConformanceResult<DiffResult> {
        let sponge_output = self.sponge.digest(variant, msg)?;

        let reference = match &self.reference {
            Some(r) => r,
            None => return Ok(DiffResult::ReferenceUnavailable),
        };

        let reference_output = reference.digest(variant, msg)?;
        tracing::debug!(test = test_name, %variant, len = msg.len(), "differential digest");

        if sponge_output == reference_output {
            Ok(DiffResult::Match {
                value: sponge_output.as_string().to_string(),
            })
        } else {
            tracing::warn!(test = test_name, %variant, "digest mismatch");
            let repro = ReproBundle::new(
                test_name.to_string(),
                variant,
                msg,
                reference.name().to_string(),
                sponge_output.clone(),
                reference_output.clone(),
            );

            Ok(DiffResult::Mismatch {
                sponge: sponge_output,
                reference: reference_output,
                repro,
            })
        }
    }

    /// Run the sponge only.
    pub fn run_sponge(&self, variant: Variant, msg: &[u8]) -> ConformanceResult<OracleOutput> {
        self.sponge.digest(variant, msg)
    }

    /// Run a batch of differential tests.
    pub fn run_batch<'a>(
        &self,
        tests: impl Iterator<Item = (&'a str, Variant, &'a [u8])>,
    ) -> BatchResult {
        let mut results = BatchResult::new();

        for (name, variant, msg) in tests {
            match self.compare_digest(name, variant, msg) {
                Ok(DiffResult::Match { .. }) => results.passed += 1,
                Ok(DiffResult::Mismatch { repro, .. }) => results.record_fail(name, repro),
                Ok(DiffResult::ReferenceUnavailable) => results.skipped += 1,
                Err(e) => results.record_error(name, e),
            }
        }

        results
    }
}

/// Results from running a batch of differential tests.
#[derive(Debug, Default)]
pub struct BatchResult {
    /// Number of tests that passed.
    pub passed: usize,
    /// Number of tests that failed.
    pub failed: usize,
    /// Number of tests that were skipped.
    pub skipped: usize,
    /// Number of tests that errored.
    pub errors: usize,
    /// Repro bundles for failures.
    pub failures: Vec<(String, ReproBundle)>,
    /// Errors by test name.
    pub error_details: Vec<(String, ConformanceError)>,
}

impl BatchResult {
    /// Create a new empty batch result.
    pub fn new() -> Self {
        Self::default()
    }

    fn record_fail(&mut self, name: &str, repro: ReproBundle) {
        self.failed += 1;
        self.failures.push((name.to_string(), repro));
    }

    fn record_error(&mut self, name: &str, error: ConformanceError) {
        self.errors += 1;
        self.error_details.push((name.to_string(), error));
    }

    /// Get total number of tests.
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped + self.errors
    }

    /// Check if all tests passed (no failures or errors).
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed, {} skipped, {} errors (total: {})",
            self.passed,
            self.failed,
            self.skipped,
            self.errors,
            self.total()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference that flips the first digest byte.
    struct Corrupting;

    impl DigestRunner for Corrupting {
        fn digest(&self, variant: Variant, msg: &[u8]) -> ConformanceResult<OracleOutput> {
            let mut d = crate::sha3::hash(variant, msg);
            d[0] ^= 1;
            Ok(OracleOutput::Ok(hex::encode(d)))
        }

        fn name(&self) -> &str {
            "corrupting"
        }
    }

    /// Reference that always fails.
    struct Broken;

    impl DigestRunner for Broken {
        fn digest(&self, _: Variant, _: &[u8]) -> ConformanceResult<OracleOutput> {
            Err(ConformanceError::ReferenceFailed("offline".to_string()))
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    #[test]
    fn test_harness_sponge_only() {
        let harness = DiffTestHarness::sponge_only();
        assert!(!harness.has_reference());
        let result = harness
            .compare_digest("empty", Variant::Sha3_256, b"")
            .unwrap();
        assert!(matches!(result, DiffResult::ReferenceUnavailable));
        assert!(harness.run_sponge(Variant::Sha3_256, b"").unwrap().is_ok());
    }

    #[test]
    fn test_harness_against_self_matches() {
        let harness = DiffTestHarness::new(Box::new(SpongeRunner::chunked(3)));
        let result = harness
            .compare_digest("abc", Variant::Sha3_512, b"abc")
            .unwrap();
        assert!(result.is_match());
    }

    #[test]
    fn test_harness_reports_mismatch() {
        let harness = DiffTestHarness::new(Box::new(Corrupting));
        match harness
            .compare_digest("flip", Variant::Sha3_224, b"x")
            .unwrap()
        {
            DiffResult::Mismatch { repro, .. } => {
                assert_eq!(repro.first_diff(), Some(0));
                assert_eq!(repro.reference_name, "corrupting");
            }
            other => panic!("Expected mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_batch_counts() {
        let msgs: Vec<(&str, Variant, &[u8])> = vec![
            ("a", Variant::Sha3_256, &b"a"[..]),
            ("b", Variant::Sha3_384, &b"b"[..]),
        ];

        let ok = DiffTestHarness::new(Box::new(SpongeRunner::new())).run_batch(msgs.clone().into_iter());
        assert_eq!(ok.passed, 2);
        assert!(ok.all_passed());

        let bad = DiffTestHarness::new(Box::new(Corrupting)).run_batch(msgs.clone().into_iter());
        assert_eq!(bad.failed, 2);
        assert_eq!(bad.failures.len(), 2);

        let broken = DiffTestHarness::new(Box::new(Broken)).run_batch(msgs.into_iter());
        assert_eq!(broken.errors, 2);
        assert!(!broken.all_passed());
        assert_eq!(broken.summary(), "0 passed, 0 failed, 0 skipped, 2 errors (total: 2)");
    }
}
