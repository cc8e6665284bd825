//! USD/LBP market quotes.

use crate::error::FeedError;
use crate::rate::RateSource;

/// Normalised USD/LBP quote, in LBP per 1 USD.
#[derive(Debug, Clone)]
pub struct RateQuote {
    /// Rate board or exchange the quote came from
    pub source: String,
    /// Buy price
    pub buy: Option<f64>,
    /// Sell price
    pub sell: Option<f64>,
    /// Last published rate
    pub last: Option<f64>,
}

impl RateQuote {
    /// Create a new quote with buy and sell prices.
    pub fn new(source: impl Into<String>, buy: f64, sell: f64) -> Self {
        Self {
            source: source.into(),
            buy: Some(buy),
            sell: Some(sell),
            last: None,
        }
    }

    /// Create a new quote with only a last published rate.
    pub fn with_last(source: impl Into<String>, last: f64) -> Self {
        Self {
            source: source.into(),
            buy: None,
            sell: None,
            last: Some(last),
        }
    }

    /// Calculate the mid price if both buy and sell are available.
    pub fn mid(&self) -> Option<f64> {
        match (self.buy, self.sell) {
            (Some(b), Some(s)) => Some((b + s) / 2.0),
            _ => None,
        }
    }
}

impl RateSource for RateQuote {
    /// Mid price, falling back to the last published rate.
    fn current_rate(&self) -> Result<f64, FeedError> {
        let rate = self
            .mid()
            .or(self.last)
            .ok_or_else(|| FeedError::RateUnavailable(format!("{} quote has no price", self.source)))?;

        if !rate.is_finite() || rate <= 0.0 {
            return Err(FeedError::RateUnavailable(format!(
                "{} quoted a non-positive rate {}",
                self.source, rate
            )));
        }
        Ok(rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_quote_mid() {
        let quote = RateQuote::new("board", 89_000.0, 90_000.0);
        assert_eq!(quote.mid(), Some(89_500.0));
        assert_eq!(RateQuote::with_last("board", 89_700.0).mid(), None);
    }

    #[test]
    fn test_current_rate_prefers_mid() {
        let mut quote = RateQuote::new("board", 89_000.0, 90_000.0);
        quote.last = Some(88_000.0);
        assert_eq!(quote.current_rate(), Ok(89_500.0));
    }

    #[test]
    fn test_current_rate_falls_back_to_last() {
        let quote = RateQuote::with_last("board", 89_700.0);
        assert_eq!(quote.current_rate(), Ok(89_700.0));
    }

    #[test]
    fn test_current_rate_unavailable() {
        let mut quote = RateQuote::with_last("board", 0.0);
        assert!(matches!(quote.current_rate(), Err(FeedError::RateUnavailable(_))));

        quote.last = None;
        assert!(matches!(quote.current_rate(), Err(FeedError::RateUnavailable(_))));
    }
}
