use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Error type shared across the extract pipeline.
///
/// `Io` covers missing, unreadable or unwritable files. `Csv`,
/// `MissingHeader`, `ColumnCount` and `EmptyRow` cover malformed table
/// layout. The `Invalid*` variants cover field coercion failures. Any of
/// these aborts the run; output files written by earlier stages are left on
/// disk.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("io error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: io::Error,
    },

    #[error("csv error in {}: {}", .path.display(), .source)]
    Csv {
        path: PathBuf,
        source: csv::Error,
    },

    #[error("{} is missing a header row", .path.display())]
    MissingHeader { path: PathBuf },

    #[error("{}: expected {} columns, found {}", .path.display(), .expected, .found)]
    ColumnCount {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("{}: row with no columns", .path.display())]
    EmptyRow { path: PathBuf },

    #[error("failed to parse amount '{}': {}", .value, .source)]
    InvalidAmount {
        value: String,
        source: rust_decimal::Error,
    },

    #[error("failed to parse quantity '{}': {}", .value, .source)]
    InvalidQuantity {
        value: String,
        source: ParseIntError,
    },

    #[error("failed to parse date '{}', expected DD-Mon-YYYY: {}", .value, .source)]
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },
}
