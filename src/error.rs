//! Error types for the core API.
//!
//! The engine distinguishes "no data" sentinels (which the caller checks)
//! from hard failures (missing columns, undecodable input, overlapping
//! loads), which surface as these enums.

use thiserror::Error;

/// Failures from the statistics engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    /// A column the metric needs is absent from the header. Reading an
    /// unresolved column is an explicit error here, never a silent
    /// out-of-range access.
    #[error("column '{0}' not found in header")]
    ColumnNotFound(String),

    /// The threshold distributions divide by the row count and require a
    /// non-empty input.
    #[error("cannot compute a distribution over an empty row set")]
    EmptyInput,
}

/// Failures from session transitions and dataset retrieval.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A second load was requested while one is still in flight. Loads are
    /// rejected rather than queued.
    #[error("a dataset load is already in progress")]
    Busy,

    /// The fetched bytes are not decodable as UTF-8 text. The prior
    /// session state is left untouched.
    #[error("dataset is not valid UTF-8 text")]
    Undecodable(#[from] std::string::FromUtf8Error),
}
