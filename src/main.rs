//! sha3-sponge CLI.
//!
//! Every command writes a single JSON document to stdout. Diagnostics go to
//! stderr through `tracing`, filtered by `RUST_LOG` (off by default).

use clap::{Parser, Subcommand};
use serde_json::json;
use sha3_sponge::conformance::{CorpusRunner, TestResult};
use sha3_sponge::request::{parse_request, Limits};
use sha3_sponge::{hash, ErrorCode, Variant};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sha3-sponge")]
#[command(about = "SHA-3 digests over the Keccak sponge", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information
    Version,

    /// Print the rate/capacity/digest table for every variant
    Params,

    /// Digest a JSON request read from stdin: {"bits":256,"hex":"..."} or {"bits":256,"text":"..."}
    Digest {
        /// Raise the request size caps for bulk input
        #[arg(long)]
        lenient_limits: bool,
    },

    /// Run a known-answer corpus file
    Corpus {
        /// Path to the corpus JSON file
        path: PathBuf,
    },
}

fn setup_logger() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();
}

fn main() -> ExitCode {
    setup_logger();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Version) | None => {
            println!(
                "{}",
                json!({"name": env!("CARGO_PKG_NAME"), "version": env!("CARGO_PKG_VERSION")})
            );
            ExitCode::SUCCESS
        }
        Some(Commands::Params) => {
            let variants: Vec<_> = Variant::ALL
                .iter()
                .map(|v| {
                    json!({
                        "name": v.name(),
                        "bits": v.bits(),
                        "rate": v.rate(),
                        "capacity": v.capacity(),
                        "digest_len": v.digest_len(),
                    })
                })
                .collect();
            println!("{}", json!({ "ok": { "variants": variants } }));
            ExitCode::SUCCESS
        }
        Some(Commands::Digest { lenient_limits }) => {
            let limits = if lenient_limits {
                Limits::lenient()
            } else {
                Limits::strict()
            };
            cmd_digest(&limits)
        }
        Some(Commands::Corpus { path }) => cmd_corpus(&path),
    }
}

fn cmd_digest(limits: &Limits) -> ExitCode {
    let mut input = String::new();
    // Read one byte past the cap so oversize input is reported, not truncated.
    let cap = limits.max_request_size.saturating_add(1);
    if let Err(e) = std::io::stdin().take(cap).read_to_string(&mut input) {
        return emit_err(&ErrorCode::E111_InvalidRequest(e.to_string()));
    }

    match parse_request(&input, limits) {
        Ok(req) => {
            tracing::debug!(variant = %req.variant, len = req.payload.len(), "digest request");
            let digest = hash(req.variant, &req.payload);
            println!(
                "{}",
                json!({ "ok": { "variant": req.variant.name(), "digest": hex::encode(digest) } })
            );
            ExitCode::SUCCESS
        }
        Err(e) => emit_err(&e),
    }
}

fn cmd_corpus(path: &Path) -> ExitCode {
    let runner = match CorpusRunner::load(path) {
        Ok(r) => r,
        Err(e) => {
            println!("{}", json!({ "err": { "message": e.to_string() } }));
            return ExitCode::FAILURE;
        }
    };

    let results = runner.run_all();
    tracing::info!(summary = %results.summary(), "corpus complete");

    let failures: Vec<_> = results
        .details
        .iter()
        .filter_map(|(id, r)| match r {
            TestResult::Fail { expected, actual } => {
                Some(json!({ "id": id, "expected": expected, "actual": actual }))
            }
            TestResult::Error { message } => Some(json!({ "id": id, "error": message })),
            _ => None,
        })
        .collect();

    println!(
        "{}",
        json!({
            "passed": results.passed,
            "failed": results.failed,
            "skipped": results.skipped,
            "errors": results.errors,
            "failures": failures,
        })
    );

    if results.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn emit_err(e: &ErrorCode) -> ExitCode {
    tracing::debug!(error = %e, "request rejected");
    println!(
        "{}",
        json!({ "err": { "code": e.code(), "name": e.name(), "message": e.to_string() } })
    );
    ExitCode::FAILURE
}
