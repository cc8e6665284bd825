//! Feed errors.

use thiserror::Error;

/// Errors that can occur when reading rates or converting amounts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeedError {
    /// No usable exchange rate
    #[error("Unable to fetch market rate: {0}")]
    RateUnavailable(String),

    /// Amount is not a finite number
    #[error("Invalid number: {0}")]
    InvalidAmount(String),
}
