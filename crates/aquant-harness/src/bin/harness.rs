//! CLI entrypoint for the aquant harness.

use std::io::Write;
use std::path::{Path, PathBuf};

use aquant_core::input::Prompter;
use aquant_core::{PairRelation, has_pair_naive, pair};
use aquant_harness::config::runtime_config;
use aquant_harness::structured_log::{LogEmitter, LogLevel, now_utc, validate_log_file};
use aquant_harness::{ConformanceReport, FixtureSet, HarnessError, TestRunner, VerificationSummary};
use clap::{Parser, Subcommand};

/// Upper bound accepted for an interactively entered array length.
const MAX_INTERACTIVE_LEN: i32 = 1 << 20;

/// Verification tooling for the aquant library.
#[derive(Debug, Parser)]
#[command(name = "harness")]
#[command(about = "Fixture verification and pair-relation checks for aquant")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a fixture file through the library and compare outputs.
    Verify {
        /// Fixture JSON file.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown; a .json sibling is also written).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Structured JSONL log path (overrides AQUANT_LOG_PATH).
        #[arg(long)]
        log: Option<PathBuf>,
        /// Log threshold (overrides AQUANT_LOG_LEVEL).
        #[arg(long)]
        log_level: Option<String>,
        /// Optional fixed timestamp string for deterministic reports.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Evaluate one relation over the given values.
    Check {
        /// Relation: sum, product or difference.
        #[arg(long)]
        relation: String,
        #[arg(long, allow_negative_numbers = true)]
        target: i32,
        /// Array elements.
        #[arg(allow_negative_numbers = true)]
        values: Vec<i32>,
    },
    /// Read an array and a target from stdin and test every relation.
    Interactive,
    /// Validate a structured JSONL log file.
    ValidateLog {
        #[arg(long)]
        log: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Verify {
            fixture,
            report,
            log,
            log_level,
            timestamp,
        } => verify(&fixture, report, log, log_level.as_deref(), timestamp)?,
        Command::Check {
            relation,
            target,
            values,
        } => {
            let relation = PairRelation::from_str_loose(&relation)
                .ok_or(HarnessError::UnknownRelation(relation))?;
            let found = pair::try_has_pair(relation, Some(&values), target)?;
            let reference = has_pair_naive(relation, Some(&values), target);
            let line = serde_json::json!({
                "relation": relation.name(),
                "target": target,
                "values": values,
                "found": found,
                "reference": reference,
            });
            println!("{line}");
            if found != reference {
                return Err("detector disagrees with the quadratic reference".into());
            }
        }
        Command::Interactive => interactive()?,
        Command::ValidateLog { log } => {
            let (lines, errors) = validate_log_file(&log)?;
            for err in &errors {
                eprintln!("{err}");
            }
            println!(
                "{}",
                serde_json::json!({"log": log.display().to_string(), "lines": lines, "errors": errors.len()})
            );
            if !errors.is_empty() {
                return Err(format!("{} invalid field(s) in {}", errors.len(), log.display()).into());
            }
        }
    }

    Ok(())
}

fn verify(
    fixture: &Path,
    report: Option<PathBuf>,
    log: Option<PathBuf>,
    log_level: Option<&str>,
    timestamp: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match log_level {
        Some(raw) => Some(
            LogLevel::from_str_loose(raw).ok_or_else(|| format!("unknown log level: {raw}"))?,
        ),
        None => None,
    };
    let config = runtime_config().clone().with_overrides(level, log);

    eprintln!("Verifying against {}", fixture.display());
    let (set, digest) = FixtureSet::load(fixture)?;

    let run_id = format!("run-{}", std::process::id());
    let mut emitter = match &config.log_path {
        Some(path) => LogEmitter::to_file(path, &run_id, "verify")?,
        None => LogEmitter::to_stderr(&run_id, "verify"),
    }
    .with_threshold(config.log_level);

    let results = TestRunner::new("verify").run_logged(&set, &mut emitter)?;
    let report_doc = ConformanceReport {
        title: format!("aquant {} verification", set.family),
        fixture: fixture.display().to_string(),
        fixture_sha256: digest,
        timestamp: timestamp.unwrap_or_else(now_utc),
        summary: VerificationSummary::from_results(results),
    };

    println!(
        "{}",
        serde_json::json!({
            "fixture": report_doc.fixture,
            "sha256": report_doc.fixture_sha256,
            "total": report_doc.summary.total,
            "passed": report_doc.summary.passed,
            "failed": report_doc.summary.failed,
        })
    );

    if let Some(report_path) = report {
        eprintln!("Writing report to {}", report_path.display());
        std::fs::write(&report_path, report_doc.to_markdown())?;
        std::fs::write(report_path.with_extension("json"), report_doc.to_json())?;
    }

    if !report_doc.summary.all_passed() {
        return Err("Fixture verification failed".into());
    }
    Ok(())
}

fn interactive() -> Result<(), Box<dyn std::error::Error>> {
    let mut prompter = Prompter::stdio();
    let ended = || HarnessError::Io(std::io::ErrorKind::UnexpectedEof.into());

    let len = prompter
        .get_int_range(Some("Array length: "), 0, MAX_INTERACTIVE_LEN)?
        .ok_or_else(ended)?;
    let mut values = Vec::new();
    for i in 0..len {
        let prompt = format!("Value {}: ", i + 1);
        values.push(prompter.get_int(Some(&prompt))?.ok_or_else(ended)?);
    }
    let target = prompter.get_int(Some("Target: "))?.ok_or_else(ended)?;

    let mut out = std::io::stdout().lock();
    for relation in PairRelation::ALL {
        let found = pair::try_has_pair(relation, Some(&values), target)?;
        writeln!(out, "{relation}: {}", if found { "yes" } else { "no" })?;
    }
    Ok(())
}
