//! Corpus-based conformance testing.
//!
//! A corpus is a JSON file of known-answer vectors:
//!
//! ```json
//! {
//!   "manifest": {"format_version": "corpus-v1", "version": "1", "source": "FIPS 202"},
//!   "vectors": [
//!     {"id": "sha3_256_empty", "op": "sha3_digest",
//!      "input": {"bits": 256, "hex": ""},
//!      "expected": {"ok": {"digest": "a7ffc6f8..."}}}
//!   ]
//! }
//! ```
//!
//! Supported operations: `sha3_digest`, `variant_params`, `keccak_f`.

use super::{ConformanceError, ConformanceResult};
use crate::error::{ErrorCode, Sha3Result};
use crate::keccak::{keccak_f, KeccakState, LANES, STATE_BYTES};
use crate::request::decode_hex;
use crate::sha3::{HashState, Variant};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Corpus manifest with metadata.
#[derive(Debug, Deserialize)]
pub struct CorpusManifest {
    /// Format version of the corpus file.
    pub format_version: String,
    /// Corpus version.
    pub version: String,
    /// Where the expected values come from.
    #[serde(default)]
    pub source: String,
}

/// A corpus containing test vectors.
#[derive(Debug, Deserialize)]
pub struct Corpus {
    /// Corpus metadata.
    pub manifest: CorpusManifest,
    /// List of test vectors.
    pub vectors: Vec<TestVector>,
}

/// A single test vector.
#[derive(Debug, Deserialize)]
pub struct TestVector {
    /// Unique identifier for the test.
    pub id: String,
    /// Operation to test (e.g. "sha3_digest", "keccak_f").
    pub op: String,
    /// Input parameters for the operation.
    pub input: serde_json::Value,
    /// Expected result (`{"ok": ...}` or `{"err": {"code": n}}`).
    pub expected: serde_json::Value,
}

/// Message forms accepted by `sha3_digest` vectors.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Message {
    Hex(String),
    Text(String),
    /// `count` copies of `byte`
    Repeat { byte: u8, count: usize },
    /// Bytes `0, 1, 2, ...` wrapping at 256
    Counter { len: usize },
}

impl Message {
    fn to_bytes(&self) -> Sha3Result<Vec<u8>> {
        Ok(match self {
            Message::Hex(h) => decode_hex(h)?,
            Message::Text(t) => t.as_bytes().to_vec(),
            Message::Repeat { byte, count } => vec![*byte; *count],
            Message::Counter { len } => (0..*len).map(|i| i as u8).collect(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct DigestInput {
    bits: u32,
    #[serde(flatten)]
    message: Message,
    #[serde(default)]
    chunk: Option<usize>,
    #[serde(default)]
    lenient: bool,
}

#[derive(Debug, Deserialize)]
struct ParamsInput {
    bits: u32,
    #[serde(default)]
    lenient: bool,
}

#[derive(Debug, Deserialize)]
struct PermuteInput {
    /// Initial state as 200 bytes of hex; all-zero when absent.
    #[serde(default)]
    state: Option<String>,
    #[serde(default = "one")]
    iterations: usize,
}

fn one() -> usize {
    1
}

fn select_variant(bits: u32, lenient: bool) -> Sha3Result<Variant> {
    if lenient {
        Ok(Variant::from_bits(bits))
    } else {
        Variant::try_from(bits)
    }
}

/// Result of running a single test vector.
#[derive(Debug)]
pub enum TestResult {
    /// Test passed.
    Pass,
    /// Test failed with mismatch.
    Fail {
        /// Expected result from the corpus.
        expected: String,
        /// Actual result from this crate.
        actual: String,
    },
    /// Test was skipped (operation not implemented).
    Skip {
        /// Reason for skipping.
        reason: String,
    },
    /// Test errored during execution.
    Error {
        /// Error message.
        message: String,
    },
}

impl TestResult {
    /// Returns true if this is a passing result.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns true if this is a failing result.
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }
}

/// Results from running the corpus.
#[derive(Debug, Default)]
pub struct CorpusResults {
    /// Number of tests that passed.
    pub passed: usize,
    /// Number of tests that failed.
    pub failed: usize,
    /// Number of tests that were skipped.
    pub skipped: usize,
    /// Number of tests that errored.
    pub errors: usize,
    /// Detailed results for each test.
    pub details: Vec<(String, TestResult)>,
}

impl CorpusResults {
    /// Create a new empty results container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a test result.
    pub fn record(&mut self, id: &str, result: TestResult) {
        match &result {
            TestResult::Pass => self.passed += 1,
            TestResult::Fail { .. } => self.failed += 1,
            TestResult::Skip { .. } => self.skipped += 1,
            TestResult::Error { .. } => self.errors += 1,
        }
        self.details.push((id.to_string(), result));
    }

    /// Get total number of tests run.
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped + self.errors
    }

    /// Returns true if all tests passed (no failures or errors).
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }

    /// Get a summary string of the results.
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

    /// Get failures only.
    pub fn failures(&self) -> Vec<&(String, TestResult)> {
        self.details
            .iter()
            .filter(|(_, r)| matches!(r, TestResult::Fail { .. }))
            .collect()
    }

    /// Get errors only.
    pub fn error_details(&self) -> Vec<&(String, TestResult)> {
        self.details
            .iter()
            .filter(|(_, r)| matches!(r, TestResult::Error { .. }))
            .collect()
    }
}

/// Corpus runner that executes test vectors.
pub struct CorpusRunner {
    corpus: Corpus,
}

impl CorpusRunner {
    /// Load corpus from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> ConformanceResult<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ConformanceError::IoError(format!("{}: {}", path.as_ref().display(), e)))?;
        Self::from_json(&content)
    }

    /// Parse a corpus from JSON text.
    pub fn from_json(content: &str) -> ConformanceResult<Self> {
        let corpus: Corpus = serde_json::from_str(content)
            .map_err(|e| ConformanceError::ParseError(e.to_string()))?;
        Ok(Self { corpus })
    }

    /// Get the corpus manifest.
    pub fn manifest(&self) -> &CorpusManifest {
        &self.corpus.manifest
    }

    /// Get the number of test vectors.
    pub fn vector_count(&self) -> usize {
        self.corpus.vectors.len()
    }

    /// Run all test vectors and return results.
    pub fn run_all(&self) -> CorpusResults {
        let mut results = CorpusResults::new();

        for vector in &self.corpus.vectors {
            let result = self.run_vector(vector);
            tracing::debug!(id = %vector.id, op = %vector.op, pass = result.is_pass(), "corpus vector");
            results.record(&vector.id, result);
        }

        results
    }

    /// Run a single test vector.
    fn run_vector(&self, vector: &TestVector) -> TestResult {
        match vector.op.as_str() {
            "sha3_digest" => self.run_sha3_digest(vector),
            "variant_params" => self.run_variant_params(vector),
            "keccak_f" => self.run_keccak_f(vector),
            _ => TestResult::Skip {
                reason: format!("Unknown operation: {}", vector.op),
            },
        }
    }

    /// Run sha3_digest test.
    fn run_sha3_digest(&self, vector: &TestVector) -> TestResult {
        let input: DigestInput = match parse_input(vector) {
            Ok(i) => i,
            Err(result) => return result,
        };

        let result = select_variant(input.bits, input.lenient).and_then(|variant| {
            let msg = input.message.to_bytes()?;
            let mut state = HashState::new(variant);
            match input.chunk.filter(|&n| n > 0) {
                Some(n) => msg.chunks(n).try_for_each(|c| state.absorb(c))?,
                None => state.absorb(&msg)?,
            }
            state.finalize()
        });

        check(vector, result, |ok, digest| {
            expect_str(ok, "digest", &hex::encode(digest))
        })
    }

    /// Run variant_params test.
    fn run_variant_params(&self, vector: &TestVector) -> TestResult {
        let input: ParamsInput = match parse_input(vector) {
            Ok(i) => i,
            Err(result) => return result,
        };

        let result = select_variant(input.bits, input.lenient);

        check(vector, result, |ok, variant| {
            let actual = [
                ("bits", variant.bits() as u64),
                ("rate", variant.rate() as u64),
                ("capacity", variant.capacity() as u64),
                ("digest_len", variant.digest_len() as u64),
            ];
            for (key, value) in actual {
                if let Some(expected) = ok.get(key) {
                    if expected.as_u64() != Some(value) {
                        return TestResult::Fail {
                            expected: format!("{}={}", key, expected),
                            actual: format!("{}={}", key, value),
                        };
                    }
                }
            }
            TestResult::Pass
        })
    }

    /// Run keccak_f test.
    ///
    /// `expected.ok.lanes` may list a prefix of the 25 output lanes.
    fn run_keccak_f(&self, vector: &TestVector) -> TestResult {
        let input: PermuteInput = match parse_input(vector) {
            Ok(i) => i,
            Err(result) => return result,
        };

        let mut state = KeccakState::new();
        if let Some(h) = &input.state {
            match decode_hex(h) {
                Ok(bytes) if bytes.len() == STATE_BYTES => state.xor_bytes(&bytes),
                Ok(bytes) => {
                    return TestResult::Error {
                        message: format!("State must be {} bytes, got {}", STATE_BYTES, bytes.len()),
                    }
                }
                Err(e) => {
                    return TestResult::Error {
                        message: format!("Invalid state hex: {}", e),
                    }
                }
            }
        }

        let mut lanes: [u64; LANES] = state.lanes();
        for _ in 0..input.iterations {
            keccak_f(&mut lanes);
        }

        check(vector, Ok::<_, ErrorCode>(lanes), |ok, lanes| {
            let expected = match ok.get("lanes").and_then(|v| v.as_array()) {
                Some(list) => list,
                None => {
                    return TestResult::Error {
                        message: "Missing 'lanes' in expected".to_string(),
                    }
                }
            };
            for (i, want) in expected.iter().enumerate() {
                let got = format!("{:016x}", lanes.get(i).copied().unwrap_or_default());
                let want = want.as_str().unwrap_or("").to_lowercase();
                if got != want {
                    return TestResult::Fail {
                        expected: format!("lane[{}]={}", i, want),
                        actual: format!("lane[{}]={}", i, got),
                    };
                }
            }
            TestResult::Pass
        })
    }
}

/// Deserialize a vector's input, mapping failure to `TestResult::Error`.
fn parse_input<T: DeserializeOwned>(vector: &TestVector) -> Result<T, TestResult> {
    serde_json::from_value(vector.input.clone()).map_err(|e| TestResult::Error {
        message: format!("Invalid input for {}: {}", vector.op, e),
    })
}

/// Compare a result against `expected`, delegating the ok-case to `on_ok`.
fn check<T>(
    vector: &TestVector,
    result: Sha3Result<T>,
    on_ok: impl FnOnce(&serde_json::Value, &T) -> TestResult,
) -> TestResult {
    if let Some(ok) = vector.expected.get("ok") {
        match result {
            Ok(value) => on_ok(ok, &value),
            Err(e) => TestResult::Fail {
                expected: format!("ok: {}", ok),
                actual: format!("err: {}", e),
            },
        }
    } else if let Some(err) = vector.expected.get("err") {
        let expected_code = err.get("code").and_then(|v| v.as_u64()).unwrap_or(0) as u32;
        match result {
            Ok(_) => TestResult::Fail {
                expected: format!("err: E{}", expected_code),
                actual: "ok".to_string(),
            },
            Err(e) if e.code() == expected_code => TestResult::Pass,
            Err(e) => TestResult::Fail {
                expected: format!("E{}", expected_code),
                actual: format!("E{}", e.code()),
            },
        }
    } else {
        TestResult::Error {
            message: "Invalid expected format".to_string(),
        }
    }
}

fn expect_str(ok: &serde_json::Value, key: &str, actual: &str) -> TestResult {
    match ok.get(key).and_then(|v| v.as_str()) {
        Some(expected) if expected.eq_ignore_ascii_case(actual) => TestResult::Pass,
        Some(expected) => TestResult::Fail {
            expected: expected.to_string(),
            actual: actual.to_string(),
        },
        None => TestResult::Error {
            message: format!("Missing '{}' in expected", key),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(vectors: &str) -> CorpusRunner {
        let json = format!(
            r#"{{"manifest":{{"format_version":"corpus-v1","version":"1"}},"vectors":[{}]}}"#,
            vectors
        );
        CorpusRunner::from_json(&json).unwrap()
    }

    #[test]
    fn test_digest_vector_pass() {
        let runner = corpus(
            r#"{"id":"abc","op":"sha3_digest","input":{"bits":256,"text":"abc"},
                "expected":{"ok":{"digest":"3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"}}}"#,
        );
        let results = runner.run_all();
        assert_eq!(results.passed, 1, "{}", results.summary());
    }

    #[test]
    fn test_digest_vector_fail() {
        let runner = corpus(
            r#"{"id":"abc","op":"sha3_digest","input":{"bits":256,"text":"abc"},
                "expected":{"ok":{"digest":"00"}}}"#,
        );
        let results = runner.run_all();
        assert_eq!(results.failed, 1);
        assert_eq!(results.failures().len(), 1);
    }

    #[test]
    fn test_strict_and_lenient_bits() {
        let runner = corpus(
            r#"{"id":"strict","op":"variant_params","input":{"bits":100},
                "expected":{"err":{"code":100}}},
               {"id":"lenient","op":"variant_params","input":{"bits":100,"lenient":true},
                "expected":{"ok":{"bits":256,"rate":136}}}"#,
        );
        let results = runner.run_all();
        assert_eq!(results.passed, 2, "{:?}", results.details);
    }

    #[test]
    fn test_repeat_and_counter_messages() {
        let repeat: Message = serde_json::from_str(r#"{"repeat":{"byte":97,"count":3}}"#).unwrap();
        assert_eq!(repeat.to_bytes().unwrap(), b"aaa");
        let counter: Message = serde_json::from_str(r#"{"counter":{"len":258}}"#).unwrap();
        let bytes = counter.to_bytes().unwrap();
        assert_eq!(bytes.len(), 258);
        assert_eq!(bytes[255], 255);
        assert_eq!(bytes[256], 0);
    }

    #[test]
    fn test_keccak_f_vector() {
        let runner = corpus(
            r#"{"id":"zero","op":"keccak_f","input":{},
                "expected":{"ok":{"lanes":["f1258f7940e1dde7","84d5ccf933c0478a"]}}}"#,
        );
        let results = runner.run_all();
        assert!(results.all_passed(), "{:?}", results.details);
        assert_eq!(results.passed, 1);
    }

    #[test]
    fn test_unknown_op_skipped() {
        let runner = corpus(r#"{"id":"x","op":"shake128","input":{},"expected":{}}"#);
        let results = runner.run_all();
        assert_eq!(results.skipped, 1);
        assert!(results.all_passed());
    }

    #[test]
    fn test_bad_input_is_error() {
        let runner = corpus(r#"{"id":"x","op":"sha3_digest","input":{"bits":256},"expected":{}}"#);
        let results = runner.run_all();
        assert_eq!(results.errors, 1);
        assert_eq!(results.error_details().len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = CorpusRunner::load("/nonexistent/corpus.json").err().unwrap();
        assert!(matches!(err, ConformanceError::IoError(_)));
    }
}
