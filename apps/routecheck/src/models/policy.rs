//! Read policy applied to per-file read failures.
//!
//! - `best-effort`: unreadable route files are skipped silently and
//!   unreadable page files surface as a single synthetic issue.
//! - `fail-fast`: any per-file read failure aborts the run.

use std::fmt;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ReadPolicy {
    #[default]
    BestEffort,
    FailFast,
}

impl ReadPolicy {
    /// Parse a CLI/config token. Accepts `best-effort|skip` and `fail-fast|fail`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "best-effort" | "skip" => Some(ReadPolicy::BestEffort),
            "fail-fast" | "fail" => Some(ReadPolicy::FailFast),
            _ => None,
        }
    }
}

impl fmt::Display for ReadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadPolicy::BestEffort => f.write_str("best-effort"),
            ReadPolicy::FailFast => f.write_str("fail-fast"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!(ReadPolicy::parse("skip"), Some(ReadPolicy::BestEffort));
        assert_eq!(ReadPolicy::parse(" Fail-Fast "), Some(ReadPolicy::FailFast));
        assert_eq!(ReadPolicy::parse("retry"), None);
        assert_eq!(ReadPolicy::default().to_string(), "best-effort");
    }
}
