//! Structured JSONL logging for harness runs.
//!
//! Provides:
//! - [`LogEntry`]: one JSONL record with required and optional fields.
//! - [`LogEmitter`]: writes records to any `Write` sink, assigning
//!   `<run>::<campaign>::<seq>` trace ids and dropping entries below its
//!   threshold.
//! - [`validate_log_line`] / [`validate_log_file`]: schema checks for
//!   previously written logs.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Log entry
// ---------------------------------------------------------------------------

/// Severity level, ordered from most to least verbose.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    const NAMES: [&'static str; 5] = ["trace", "debug", "info", "warn", "error"];

    /// Parse from string (case-insensitive). Accepts common aliases.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" | "err" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Verification outcome attached to per-case events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
    Skip,
    Error,
}

/// Canonical structured log entry.
///
/// Required fields: `timestamp`, `trace_id`, `level`, `event`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    // Required
    pub timestamp: String,
    pub trace_id: String,
    pub level: LogLevel,
    pub event: String,

    // Optional
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    /// Pair relation name (`sum`, `product`, `difference`) when relevant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ns: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl LogEntry {
    /// Create a new log entry with required fields only.
    #[must_use]
    pub fn new(trace_id: impl Into<String>, level: LogLevel, event: impl Into<String>) -> Self {
        Self {
            timestamp: now_utc(),
            trace_id: trace_id.into(),
            level,
            event: event.into(),
            function: None,
            relation: None,
            outcome: None,
            latency_ns: None,
            details: None,
        }
    }

    #[must_use]
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    #[must_use]
    pub fn with_relation(mut self, relation: impl Into<String>) -> Self {
        self.relation = Some(relation.into());
        self
    }

    #[must_use]
    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    #[must_use]
    pub fn with_latency_ns(mut self, ns: u64) -> Self {
        self.latency_ns = Some(ns);
        self
    }

    /// Set free-form details.
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Serialize to a single JSONL line (no trailing newline).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// ---------------------------------------------------------------------------
// Log emitter
// ---------------------------------------------------------------------------

/// Writes structured JSONL log entries to a sink.
pub struct LogEmitter<W: Write = Box<dyn Write>> {
    writer: W,
    seq: u64,
    run_id: String,
    campaign: String,
    threshold: LogLevel,
}

impl LogEmitter {
    /// Create an emitter that writes to a file, truncating it.
    pub fn to_file(path: &Path, run_id: &str, campaign: &str) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(
            Box::new(BufWriter::new(file)),
            run_id,
            campaign,
        ))
    }

    /// Create an emitter that writes to stderr.
    #[must_use]
    pub fn to_stderr(run_id: &str, campaign: &str) -> Self {
        Self::new(Box::new(io::stderr()), run_id, campaign)
    }
}

impl LogEmitter<Vec<u8>> {
    /// Create an emitter that collects lines in memory.
    #[must_use]
    pub fn to_buffer(run_id: &str, campaign: &str) -> Self {
        Self::new(Vec::new(), run_id, campaign)
    }
}

impl<W: Write> LogEmitter<W> {
    #[must_use]
    pub fn new(writer: W, run_id: &str, campaign: &str) -> Self {
        Self {
            writer,
            seq: 0,
            run_id: run_id.to_string(),
            campaign: campaign.to_string(),
            threshold: LogLevel::default(),
        }
    }

    /// Drop entries less severe than `threshold`.
    #[must_use]
    pub fn with_threshold(mut self, threshold: LogLevel) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn threshold(&self) -> LogLevel {
        self.threshold
    }

    /// Returns true if an entry at `level` would be written.
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.threshold
    }

    fn next_trace_id(&mut self) -> String {
        self.seq += 1;
        format!("{}::{}::{:03}", self.run_id, self.campaign, self.seq)
    }

    /// Emit a bare event. Returns the entry if it passed the threshold.
    pub fn emit(&mut self, level: LogLevel, event: &str) -> io::Result<Option<LogEntry>> {
        if !self.enabled(level) {
            return Ok(None);
        }
        let entry = LogEntry::new(self.next_trace_id(), level, event);
        self.write_line(&entry)?;
        Ok(Some(entry))
    }

    /// Emit a populated entry, filling in the trace id if empty.
    ///
    /// Returns false if the entry was below the threshold.
    pub fn emit_entry(&mut self, mut entry: LogEntry) -> io::Result<bool> {
        if !self.enabled(entry.level) {
            return Ok(false);
        }
        if entry.trace_id.is_empty() {
            entry.trace_id = self.next_trace_id();
        }
        self.write_line(&entry)?;
        Ok(true)
    }

    fn write_line(&mut self, entry: &LogEntry) -> io::Result<()> {
        let line = entry.to_jsonl().map_err(io::Error::other)?;
        writeln!(self.writer, "{line}")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Give back the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validation error for a log line.
#[derive(Debug, Error)]
#[error("line {line_number}: field '{field}': {message}")]
pub struct LogValidationError {
    pub line_number: usize,
    pub field: String,
    pub message: String,
}

impl LogValidationError {
    fn new(line_number: usize, field: &str, message: impl Into<String>) -> Self {
        Self {
            line_number,
            field: field.to_string(),
            message: message.into(),
        }
    }
}

const OUTCOMES: [&str; 4] = ["pass", "fail", "skip", "error"];
const RELATIONS: [&str; 3] = ["sum", "product", "difference"];

/// Validate a single JSONL line against the schema.
pub fn validate_log_line(
    line: &str,
    line_number: usize,
) -> Result<LogEntry, Vec<LogValidationError>> {
    let value: serde_json::Value = serde_json::from_str(line).map_err(|e| {
        vec![LogValidationError::new(
            line_number,
            "<json>",
            format!("invalid JSON: {e}"),
        )]
    })?;

    let Some(obj) = value.as_object() else {
        return Err(vec![LogValidationError::new(
            line_number,
            "<root>",
            "expected JSON object",
        )]);
    };

    let mut errors = Vec::new();

    for field in ["timestamp", "trace_id", "level", "event"] {
        if !obj.contains_key(field) {
            errors.push(LogValidationError::new(
                line_number,
                field,
                "required field missing",
            ));
        }
    }

    if let Some(level) = obj.get("level").and_then(|v| v.as_str())
        && !LogLevel::NAMES.contains(&level)
    {
        errors.push(LogValidationError::new(
            line_number,
            "level",
            format!("invalid level: '{level}'"),
        ));
    }

    if let Some(outcome) = obj.get("outcome").and_then(|v| v.as_str())
        && !OUTCOMES.contains(&outcome)
    {
        errors.push(LogValidationError::new(
            line_number,
            "outcome",
            format!("invalid outcome: '{outcome}'"),
        ));
    }

    if let Some(relation) = obj.get("relation").and_then(|v| v.as_str())
        && !RELATIONS.contains(&relation)
    {
        errors.push(LogValidationError::new(
            line_number,
            "relation",
            format!("invalid relation: '{relation}'"),
        ));
    }

    if let Some(latency) = obj.get("latency_ns")
        && !latency.is_u64()
    {
        errors.push(LogValidationError::new(
            line_number,
            "latency_ns",
            "latency_ns must be a non-negative integer",
        ));
    }

    if let Some(trace_id) = obj.get("trace_id").and_then(|v| v.as_str())
        && trace_id.split("::").count() != 3
    {
        errors.push(LogValidationError::new(
            line_number,
            "trace_id",
            format!("trace_id should follow <run>::<campaign>::<seq> format, got: '{trace_id}'"),
        ));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    serde_json::from_value::<LogEntry>(value).map_err(|e| {
        vec![LogValidationError::new(
            line_number,
            "<deserialization>",
            format!("failed to deserialize: {e}"),
        )]
    })
}

/// Validate an entire JSONL file.
///
/// Returns the non-blank line count and every validation error found.
pub fn validate_log_file(path: &Path) -> io::Result<(usize, Vec<LogValidationError>)> {
    let content = std::fs::read_to_string(path)?;
    let mut all_errors = Vec::new();
    let mut line_count = 0;

    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        line_count += 1;
        if let Err(errs) = validate_log_line(line, i + 1) {
            all_errors.extend(errs);
        }
    }

    Ok((line_count, all_errors))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Current time as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
#[must_use]
pub fn now_utc() -> String {
    let duration = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    format_utc(duration.as_secs(), duration.subsec_millis())
}

/// Format seconds since the Unix epoch as an RFC 3339 UTC timestamp.
fn format_utc(secs: u64, millis: u32) -> String {
    let days = secs / 86_400;
    let rem = secs % 86_400;
    let (year, month, day) = civil_from_days(days);
    format!(
        "{year:04}-{month:02}-{day:02}T{:02}:{:02}:{:02}.{millis:03}Z",
        rem / 3600,
        (rem % 3600) / 60,
        rem % 60,
    )
}

/// Proleptic Gregorian date for a day count since 1970-01-01.
fn civil_from_days(days: u64) -> (u64, u64, u64) {
    // Shift the epoch to 0000-03-01 so leap days fall at the end of a year.
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z % 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + u64::from(month <= 2);
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_entry_serializes_required_fields() {
        let entry = LogEntry::new("run-1::verify::001", LogLevel::Info, "case_start");
        let parsed: serde_json::Value = serde_json::from_str(&entry.to_jsonl().unwrap()).unwrap();
        assert!(parsed["timestamp"].is_string());
        assert_eq!(parsed["trace_id"], "run-1::verify::001");
        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["event"], "case_start");
        assert!(parsed.get("function").is_none());
        assert!(parsed.get("outcome").is_none());
    }

    #[test]
    fn log_entry_with_optional_fields() {
        let entry = LogEntry::new("run-1::verify::002", LogLevel::Error, "case_result")
            .with_function("has_pair_sum")
            .with_relation("sum")
            .with_outcome(Outcome::Fail)
            .with_latency_ns(150)
            .with_details(serde_json::json!({"expected": "true"}));
        let parsed: serde_json::Value = serde_json::from_str(&entry.to_jsonl().unwrap()).unwrap();
        assert_eq!(parsed["function"], "has_pair_sum");
        assert_eq!(parsed["relation"], "sum");
        assert_eq!(parsed["outcome"], "fail");
        assert_eq!(parsed["latency_ns"], 150);
        assert_eq!(parsed["details"]["expected"], "true");
    }

    #[test]
    fn level_ordering_and_parsing() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert_eq!(LogLevel::from_str_loose(" WARNING "), Some(LogLevel::Warn));
        assert_eq!(LogLevel::from_str_loose("loud"), None);
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn emitter_numbers_trace_ids_and_filters() {
        let mut emitter = LogEmitter::to_buffer("run-7", "unit").with_threshold(LogLevel::Info);
        assert!(emitter.emit(LogLevel::Debug, "hidden").unwrap().is_none());
        let first = emitter.emit(LogLevel::Info, "shown").unwrap().unwrap();
        let second = emitter.emit(LogLevel::Error, "also_shown").unwrap().unwrap();
        assert_eq!(first.trace_id, "run-7::unit::001");
        assert_eq!(second.trace_id, "run-7::unit::002");

        let text = String::from_utf8(emitter.into_inner()).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(!text.contains("hidden"));
    }

    #[test]
    fn emit_entry_fills_missing_trace_id() {
        let mut emitter = LogEmitter::to_buffer("r", "c");
        assert!(emitter.emit_entry(LogEntry::new("", LogLevel::Warn, "x")).unwrap());
        assert!(!emitter.emit_entry(LogEntry::new("", LogLevel::Trace, "y")).unwrap());
        let text = String::from_utf8(emitter.into_inner()).unwrap();
        let entry = validate_log_line(text.trim(), 1).unwrap();
        assert_eq!(entry.trace_id, "r::c::001");
    }

    #[test]
    fn validation_reports_each_bad_field() {
        let line = r#"{"timestamp":"t","trace_id":"nope","level":"loud","event":"e","outcome":"maybe","relation":"ratio","latency_ns":-1}"#;
        let errors = validate_log_line(line, 4).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            ["level", "outcome", "relation", "latency_ns", "trace_id"]
        );
        assert!(errors[0].to_string().starts_with("line 4: field 'level'"));
    }

    #[test]
    fn validation_rejects_non_objects_and_missing_fields() {
        assert_eq!(validate_log_line("[1]", 1).unwrap_err()[0].field, "<root>");
        assert_eq!(validate_log_line("{", 1).unwrap_err()[0].field, "<json>");
        let errors = validate_log_line(r#"{"level":"info"}"#, 2).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn utc_formatting_is_calendar_exact() {
        assert_eq!(format_utc(0, 0), "1970-01-01T00:00:00.000Z");
        // 2000-02-29 is a leap day.
        assert_eq!(format_utc(951_782_400, 5), "2000-02-29T00:00:00.005Z");
        assert_eq!(format_utc(1_700_000_000, 123), "2023-11-14T22:13:20.123Z");
        assert_eq!(now_utc().len(), "1970-01-01T00:00:00.000Z".len());
    }
}
