//! Per-invocation settings read from the environment
//!
//! - `GITLET_COMMIT_DATE`: timestamp for new commits, RFC 2822 or
//!   `%Y-%m-%d %H:%M:%S %z`; the current local time when unset
//! - `GITLET_LOG`: `tracing` filter directive for the binary
//! - `NO_PAGER`: print `log` output directly instead of through the pager

use anyhow::Context;
use chrono::{DateTime, FixedOffset};

pub const COMMIT_DATE_ENV: &str = "GITLET_COMMIT_DATE";
pub const LOG_ENV: &str = "GITLET_LOG";
pub const NO_PAGER_ENV: &str = "NO_PAGER";

const DEFAULT_LOG_DIRECTIVE: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    commit_date: Option<DateTime<FixedOffset>>,
    log_directive: String,
    pager: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            commit_date: None,
            log_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
            pager: true,
        }
    }
}

impl Config {
    pub fn load_from_env() -> anyhow::Result<Self> {
        let commit_date = std::env::var(COMMIT_DATE_ENV)
            .ok()
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| {
                Self::parse_date(&raw).with_context(|| format!("invalid {COMMIT_DATE_ENV}: {raw}"))
            })
            .transpose()?;
        let log_directive =
            std::env::var(LOG_ENV).unwrap_or_else(|_| DEFAULT_LOG_DIRECTIVE.to_string());
        let pager = std::env::var_os(NO_PAGER_ENV).is_none();

        Ok(Config {
            commit_date,
            log_directive,
            pager,
        })
    }

    fn parse_date(raw: &str) -> anyhow::Result<DateTime<FixedOffset>> {
        let raw = raw.trim();

        Ok(DateTime::parse_from_rfc2822(raw)
            .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S %z"))?)
    }

    pub fn with_commit_date(mut self, commit_date: DateTime<FixedOffset>) -> Self {
        self.commit_date = Some(commit_date);
        self
    }

    /// Timestamp for a commit created now
    pub fn now(&self) -> DateTime<FixedOffset> {
        self.commit_date
            .unwrap_or_else(|| chrono::Local::now().fixed_offset())
    }

    pub fn log_directive(&self) -> &str {
        &self.log_directive
    }

    pub fn pager(&self) -> bool {
        self.pager
    }
}
