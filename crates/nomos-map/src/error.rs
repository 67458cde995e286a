//! Error types for snapshot production and output.

use std::path::PathBuf;

use nomos_cases::DateKey;

/// Errors from joining, serializing, and writing map snapshots.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// Returned when a requested date has no ingested case table.
    #[error("no case table for date {date}")]
    UnknownDate {
        /// The requested date.
        date: DateKey,
    },

    /// Returned when the output prefix contains characters outside `[a-zA-Z0-9_-]`.
    #[error("invalid output prefix \"{prefix}\": must match [a-zA-Z0-9_-]+")]
    InvalidPrefix {
        /// The rejected prefix.
        prefix: String,
    },

    /// Returned when the output directory cannot be created.
    #[error("cannot create output directory {path}")]
    OutputDirCreate {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when an output file cannot be written.
    #[error("cannot write file {path}")]
    WriteFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
