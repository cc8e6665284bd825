//! Master data errors.

use thiserror::Error;

/// Errors that can occur when accessing master data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MasterDataError {
    /// Phone number contains a character other than an ASCII digit
    #[error("Invalid phone number format: {0:?} must contain digits only")]
    InvalidFormat(String),

    /// Phone number does not have exactly eight digits
    #[error("Invalid phone number length: expected {expected} digits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Main code does not match any area code rule
    #[error("Unknown area code prefix: {0}")]
    UnknownPrefix(String),

    /// Date text could not be parsed
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// No holiday data for the requested year
    #[error("Data for year {0} not available")]
    DataUnavailable(i32),

    /// Holiday table could not be parsed
    #[error("Corrupt holiday data: {0}")]
    CorruptData(String),

    /// Unrecognised currency or area code label
    #[error("Unknown label: {0}")]
    UnknownLabel(String),
}
