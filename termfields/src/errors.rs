use std::path::PathBuf;

use thiserror::Error;

/// Failure reported by the term store before decoration got a chance to run.
///
/// The decorator never constructs these. Every entry point detects an
/// already-failed retrieval first and hands it back untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The queried taxonomy does not exist in the term store.
    #[error("invalid taxonomy: {name}")]
    InvalidTaxonomy { name: String },

    /// No term matched the requested id.
    #[error("term {term_id} not found")]
    TermNotFound { term_id: u64 },

    /// The term store failed for a reason of its own.
    #[error("{message}")]
    Backend { message: String },
}

/// Outcome of a term retrieval, as handed to the decoration entry points.
pub type LookupResult<T> = Result<T, LookupError>;

/// Error raised while loading decorator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse decorator config")]
    Parse(#[from] toml::de::Error),
}
