//! USD/LBP currency conversion.

use infra_master::Currency;
use tracing::debug;

use crate::error::FeedError;
use crate::rate::RateSource;

/// Converts amounts between US Dollars and Lebanese Pounds.
///
/// The rate is read from the source on every conversion, so a converter
/// built on a live source always uses the latest quote.
#[derive(Debug, Clone)]
pub struct CurrencyConverter<S> {
    source: S,
}

impl<S: RateSource> CurrencyConverter<S> {
    /// Create a converter over a rate source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Current LBP-per-USD rate.
    pub fn rate(&self) -> Result<f64, FeedError> {
        self.source.current_rate()
    }

    /// Convert an LBP amount to USD (`amount / rate`).
    pub fn to_usd(&self, amount: f64) -> Result<f64, FeedError> {
        self.convert(amount, Currency::Lbp, Currency::Usd)
    }

    /// Convert a USD amount to LBP (`amount * rate`).
    pub fn to_lbp(&self, amount: f64) -> Result<f64, FeedError> {
        self.convert(amount, Currency::Usd, Currency::Lbp)
    }

    /// Convert between any two supported currencies.
    pub fn convert(&self, amount: f64, from: Currency, to: Currency) -> Result<f64, FeedError> {
        if !amount.is_finite() {
            return Err(FeedError::InvalidAmount(amount.to_string()));
        }

        let converted = match (from, to) {
            (Currency::Usd, Currency::Usd) | (Currency::Lbp, Currency::Lbp) => amount,
            (Currency::Lbp, Currency::Usd) => amount / self.rate()?,
            (Currency::Usd, Currency::Lbp) => amount * self.rate()?,
        };

        debug!(amount, %from, %to, converted, "converted amount");
        Ok(converted)
    }

    /// Borrow the underlying rate source.
    pub fn source(&self) -> &S {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedRate, RateQuote};

    struct Unavailable;

    impl RateSource for Unavailable {
        fn current_rate(&self) -> Result<f64, FeedError> {
            Err(FeedError::RateUnavailable("offline".to_string()))
        }
    }

    #[test]
    fn test_to_usd_divides_by_rate() {
        let converter = CurrencyConverter::new(FixedRate::new(89_500.0));
        assert_eq!(converter.to_usd(179_000.0), Ok(2.0));
    }

    #[test]
    fn test_to_lbp_multiplies_by_rate() {
        let converter = CurrencyConverter::new(FixedRate::new(89_500.0));
        assert_eq!(converter.to_lbp(3.0), Ok(268_500.0));
    }

    #[test]
    fn test_same_currency_is_identity() {
        let converter = CurrencyConverter::new(Unavailable);
        assert_eq!(converter.convert(42.0, Currency::Usd, Currency::Usd), Ok(42.0));
    }

    #[test]
    fn test_rejects_non_finite_amount() {
        let converter = CurrencyConverter::new(FixedRate::new(89_500.0));
        assert!(matches!(converter.to_usd(f64::NAN), Err(FeedError::InvalidAmount(_))));
        assert!(matches!(
            converter.to_lbp(f64::INFINITY),
            Err(FeedError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_rate_errors_propagate() {
        let converter = CurrencyConverter::new(Unavailable);
        assert_eq!(
            converter.to_lbp(1.0),
            Err(FeedError::RateUnavailable("offline".to_string()))
        );
    }

    #[test]
    fn test_converter_over_quote() {
        let quote = RateQuote::new("board", 89_000.0, 90_000.0);
        let converter = CurrencyConverter::new(&quote);
        assert_eq!(converter.to_lbp(2.0), Ok(179_000.0));
        assert_eq!(converter.source().source, "board");
    }
}
