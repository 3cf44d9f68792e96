//! Error types for the kiosk engine.

use crate::cents::Cents;
use thiserror::Error;

/// Result type alias for kiosk operations
pub type Result<T> = std::result::Result<T, KioskError>;

/// Errors that can occur during kiosk operation.
#[derive(Error, Debug)]
pub enum KioskError {
    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Inserted value does not match any accepted denomination.
    ///
    /// Non-fatal: the session total is left untouched and the caller
    /// re-prompts.
    #[error("Unrecognized denomination: {value}")]
    UnrecognizedDenomination { value: Cents },

    /// Denomination configuration rejected at construction time
    #[error("Invalid kiosk configuration: {message}")]
    InvalidConfig { message: String },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: parking-kiosk <events.csv>")]
    MissingArgument,
}
