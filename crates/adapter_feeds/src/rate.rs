//! Exchange rate sources and input normalisation.

use tracing::debug;

use crate::error::FeedError;

/// Anything that can supply the current LBP-per-USD rate.
pub trait RateSource {
    /// Current rate; always strictly positive on success.
    fn current_rate(&self) -> Result<f64, FeedError>;
}

impl<S: RateSource + ?Sized> RateSource for &S {
    fn current_rate(&self) -> Result<f64, FeedError> {
        (**self).current_rate()
    }
}

/// A rate fixed at construction, e.g. from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRate {
    rate: f64,
}

impl FixedRate {
    /// Create a fixed rate in LBP per 1 USD.
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }
}

impl RateSource for FixedRate {
    fn current_rate(&self) -> Result<f64, FeedError> {
        if !self.rate.is_finite() || self.rate <= 0.0 {
            return Err(FeedError::RateUnavailable(format!(
                "configured rate {} is not positive",
                self.rate
            )));
        }
        Ok(self.rate)
    }
}

/// Normalise published rate text such as `"89,500 LBP"` into a number.
///
/// Every character other than an ASCII digit is dropped, so thousands
/// separators and currency suffixes are ignored. Text with no digits, or
/// that reduces to zero, has no usable rate.
pub fn parse_rate_text(text: &str) -> Result<f64, FeedError> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(FeedError::RateUnavailable(format!("no digits in {:?}", text)));
    }

    let rate: f64 = digits
        .parse()
        .map_err(|_| FeedError::RateUnavailable(format!("unreadable rate {:?}", text)))?;
    if rate <= 0.0 {
        return Err(FeedError::RateUnavailable(format!("zero rate in {:?}", text)));
    }

    debug!(text, rate, "normalised rate text");
    Ok(rate)
}

/// Parse a user-supplied amount.
pub fn parse_amount(text: &str) -> Result<f64, FeedError> {
    match text.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(FeedError::InvalidAmount(text.to_string())),
    }
}
