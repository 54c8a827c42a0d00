//! Test execution engine.

use std::io::{self, Write};

use aquant_core::Timer;

use crate::diff;
use crate::error::HarnessError;
use crate::execute::{execute_case, pair_relation};
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};
use crate::verify::VerificationResult;

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign, used in log trace ids.
    pub campaign: String,
}

impl TestRunner {
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all cases in a set and return results in fixture order.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set.cases.iter().map(|case| run_case(case).0).collect()
    }

    /// Like [`run`](Self::run), emitting one `case_result` entry per case
    /// between `campaign_start` and `campaign_end` events.
    pub fn run_logged<W: Write>(
        &self,
        fixture_set: &FixtureSet,
        log: &mut LogEmitter<W>,
    ) -> io::Result<Vec<VerificationResult>> {
        log.emit_entry(
            LogEntry::new("", LogLevel::Info, "campaign_start").with_details(serde_json::json!({
                "campaign": self.campaign,
                "family": fixture_set.family,
                "cases": fixture_set.cases.len(),
            })),
        )?;

        let mut results = Vec::with_capacity(fixture_set.cases.len());
        for case in &fixture_set.cases {
            let (result, latency_ns, errored) = run_case(case);
            let (level, outcome) = classify(&result, errored);
            let mut entry = LogEntry::new("", level, "case_result")
                .with_function(&case.function)
                .with_outcome(outcome)
                .with_latency_ns(latency_ns)
                .with_details(serde_json::json!({
                    "case": result.case_name,
                    "expected": result.expected,
                    "actual": result.actual,
                }));
            if let Some(relation) = pair_relation(&case.function) {
                entry = entry.with_relation(relation.name());
            }
            log.emit_entry(entry)?;
            results.push(result);
        }

        let passed = results.iter().filter(|r| r.passed).count();
        let level = if passed == results.len() {
            LogLevel::Info
        } else {
            LogLevel::Warn
        };
        log.emit_entry(
            LogEntry::new("", level, "campaign_end").with_details(serde_json::json!({
                "campaign": self.campaign,
                "total": results.len(),
                "passed": passed,
            })),
        )?;
        log.flush()?;
        Ok(results)
    }
}

/// Execute one case. Returns the result, elapsed nanoseconds, and whether
/// execution itself failed (as opposed to producing a wrong answer).
fn run_case(case: &FixtureCase) -> (VerificationResult, u64, bool) {
    let timer = Timer::start();
    let execution = execute_case(&case.function, &case.inputs);
    let latency_ns = timer.elapsed_nanos();
    let errored = execution.is_err();
    (evaluate(case, execution), latency_ns, errored)
}

/// Compare an execution against the case's expected output. Errors are
/// rendered as `error:<message>` and never match.
fn evaluate(case: &FixtureCase, execution: Result<String, HarnessError>) -> VerificationResult {
    let actual = execution.unwrap_or_else(|err| format!("error:{err}"));
    let passed = actual == case.expected_output;
    VerificationResult {
        case_name: case.name.clone(),
        function: case.function.clone(),
        passed,
        diff: (!passed).then(|| diff::render_diff(&case.expected_output, &actual)),
        expected: case.expected_output.clone(),
        actual,
    }
}

/// Log level and outcome for a finished case.
fn classify(result: &VerificationResult, errored: bool) -> (LogLevel, Outcome) {
    match (result.passed, errored) {
        (true, _) => (LogLevel::Debug, Outcome::Pass),
        (false, false) => (LogLevel::Warn, Outcome::Fail),
        (false, true) => (LogLevel::Error, Outcome::Error),
    }
}
