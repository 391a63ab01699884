//! Error type shared by the enumerator, cross-referencer, inspector and driver.
//!
//! Messages name the operation only; the underlying cause is reachable
//! through `source()`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("{kind} directory not found: {}", path.display())]
    MissingRoot { kind: &'static str, path: PathBuf },

    #[error("cannot read {kind} directory {}", path.display())]
    UnreadableRoot {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write report {}", path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize report")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid glob pattern")]
    Pattern(#[from] glob::PatternError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CheckError {
    /// Convert a glob walk error into a read error on the offending path.
    pub(crate) fn from_glob(err: glob::GlobError) -> Self {
        let path = err.path().to_path_buf();
        CheckError::Read {
            path,
            source: err.into(),
        }
    }
}
