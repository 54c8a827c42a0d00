//! Runtime configuration for harness runs.
//!
//! Settings come from the environment and are parsed loosely:
//! - `AQUANT_LOG_LEVEL`: `trace|debug|info|warn|error` (default `info`).
//!   Unrecognized values fall back to the default.
//! - `AQUANT_LOG_PATH`: file that receives the JSONL log. Unset or blank means
//!   no file; the CLI then logs to stderr.
//!
//! [`runtime_config`] reads the environment once and caches the result.
//! Command-line flags are layered on top with [`HarnessConfig::with_overrides`].

use std::path::PathBuf;
use std::sync::OnceLock;

use crate::structured_log::LogLevel;

pub const LOG_LEVEL_ENV: &str = "AQUANT_LOG_LEVEL";
pub const LOG_PATH_ENV: &str = "AQUANT_LOG_PATH";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarnessConfig {
    pub log_level: LogLevel,
    pub log_path: Option<PathBuf>,
}

impl HarnessConfig {
    /// Read the current process environment (uncached).
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_level = lookup(LOG_LEVEL_ENV)
            .and_then(|raw| LogLevel::from_str_loose(&raw))
            .unwrap_or_default();
        let log_path = lookup(LOG_PATH_ENV)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);
        Self {
            log_level,
            log_path,
        }
    }

    /// Replace fields with any values given explicitly.
    #[must_use]
    pub fn with_overrides(mut self, log_level: Option<LogLevel>, log_path: Option<PathBuf>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if let Some(path) = log_path {
            self.log_path = Some(path);
        }
        self
    }
}

static RUNTIME_CONFIG: OnceLock<HarnessConfig> = OnceLock::new();

/// Process-wide configuration, read from the environment on first call.
pub fn runtime_config() -> &'static HarnessConfig {
    RUNTIME_CONFIG.get_or_init(HarnessConfig::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn defaults_when_unset() {
        let config = HarnessConfig::from_lookup(lookup(&[]));
        assert_eq!(config, HarnessConfig::default());
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn parses_loosely() {
        let config = HarnessConfig::from_lookup(lookup(&[
            (LOG_LEVEL_ENV, " DEBUG"),
            (LOG_PATH_ENV, " /tmp/run.jsonl "),
        ]));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/run.jsonl")));
    }

    #[test]
    fn unknown_level_and_blank_path_fall_back() {
        let config =
            HarnessConfig::from_lookup(lookup(&[(LOG_LEVEL_ENV, "verbose"), (LOG_PATH_ENV, "  ")]));
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn overrides_win_over_environment() {
        let config = HarnessConfig::from_lookup(lookup(&[(LOG_LEVEL_ENV, "error")]))
            .with_overrides(Some(LogLevel::Trace), Some(PathBuf::from("out.jsonl")))
            .with_overrides(None, None);
        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.log_path, Some(PathBuf::from("out.jsonl")));
    }

    #[test]
    fn runtime_config_is_cached() {
        assert!(std::ptr::eq(runtime_config(), runtime_config()));
    }
}
