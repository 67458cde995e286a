//! Error types for case-table ingestion.

use std::path::PathBuf;

use crate::date::DateKey;

/// Errors from reading, translating, and assembling daily case tables.
#[derive(Debug, thiserror::Error)]
pub enum CaseError {
    /// Returned when a reported region name has no canonical mapping.
    #[error("unknown region name \"{name}\": no canonical boundary name is mapped to it")]
    UnknownRegionName {
        /// The reported name, exactly as it appeared in the source table.
        name: String,
    },

    /// Returned when a daily table file cannot be ingested.
    #[error("malformed case table {path}")]
    MalformedCaseTable {
        /// Path to the offending table file.
        path: PathBuf,
        /// The specific defect.
        source: TableFault,
    },

    /// Returned when a date label is not a calendar date in `YYYY_MM_DD` form.
    #[error("invalid date label \"{label}\": expected YYYY_MM_DD")]
    InvalidDateLabel {
        /// The rejected label.
        label: String,
    },

    /// Returned when two table files resolve to the same date.
    #[error("duplicate case table for date {date}")]
    DuplicateDate {
        /// The date that appeared twice.
        date: DateKey,
    },

    /// Returned when a case table set is assembled with zero dates.
    #[error("no dated case tables to assemble")]
    EmptyCaseSet,

    /// Returned when the table directory cannot be listed.
    #[error("cannot scan case table directory {dir}")]
    ScanDir {
        /// Directory that was attempted.
        dir: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when a directory scan finds no table files.
    #[error("no case tables found under {dir}")]
    NoCaseTables {
        /// Directory that was scanned.
        dir: PathBuf,
    },
}

/// The specific defect behind a [`CaseError::MalformedCaseTable`].
#[derive(Debug, thiserror::Error)]
pub enum TableFault {
    /// Returned when the file does not exist or is unreadable.
    #[error("cannot read file")]
    Read(#[source] std::io::Error),

    /// Returned when the CSV parser rejects a record outright.
    #[error("CSV parse error at byte offset {offset}")]
    Csv {
        /// Byte offset where the parser gave up.
        offset: u64,
        /// Underlying CSV error.
        source: csv::Error,
    },

    /// Returned when the header lacks a required source column.
    #[error("missing required column \"{column}\" in header")]
    MissingColumn {
        /// Source header that was expected.
        column: String,
    },

    /// Returned when a data row has a different number of columns than the header.
    #[error("row {row} has {got} columns, expected {expected}")]
    RowLength {
        /// Zero-based data row index (excluding header).
        row: usize,
        /// Expected column count (from header).
        expected: usize,
        /// Actual column count in this row.
        got: usize,
    },

    /// Returned when a numeric cell is present but cannot be read as a figure.
    #[error("unreadable figure in row {row}, column \"{column}\": raw value \"{raw}\"")]
    BadFigure {
        /// Zero-based data row index (excluding header).
        row: usize,
        /// Source header of the offending column.
        column: String,
        /// The raw cell content that failed to parse.
        raw: String,
    },

    /// Returned when the same region appears on two rows of one table.
    #[error("duplicate region \"{name}\": first at row {first_row}, again at row {second_row}")]
    DuplicateRegion {
        /// The canonical name that repeated.
        name: String,
        /// Zero-based row index of the first occurrence.
        first_row: usize,
        /// Zero-based row index of the second occurrence.
        second_row: usize,
    },

    /// Returned when the table has a header but zero data rows.
    #[error("no data rows")]
    Empty,
}
