//! Error types for slotfinder operations.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    /// A start/end value that is not a 24-hour `HH:MM` time.
    #[error("Invalid time '{0}': expected 24-hour HH:MM")]
    InvalidTime(String),

    #[error("Invalid weekday '{0}': expected a weekday name such as Monday")]
    InvalidWeekday(String),

    /// An interval whose start is not strictly before its end.
    #[error("Invalid interval {start}-{end}: start must be before end")]
    InvalidInterval { start: String, end: String },

    #[error("Invalid meeting duration {0}: must be a positive number of minutes")]
    InvalidDuration(i64),

    #[error("Empty member name")]
    EmptyPerson,

    /// The availability table could not be opened or read at all.
    #[error("Cannot load input {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The table is not well-formed CSV or lacks a required column.
    #[error("Malformed availability table")]
    Csv(#[from] csv::Error),

    /// A single row carried a bad value. `line` is 1-based and counts the header.
    #[error("Line {line}")]
    Record {
        line: u64,
        #[source]
        source: Box<SlotError>,
    },
}

pub type Result<T> = std::result::Result<T, SlotError>;
