//! # adapter_feeds
//!
//! USD/LBP market rate quotes and currency conversion for Lebkit.
//!
//! This crate normalises raw market rates (quoted buy/sell prices, or the
//! rate text published by a rate board) into a single LBP-per-USD figure and
//! converts amounts between the two currencies.
//!
//! ## Architecture Position
//!
//! Part of the **A**dapter layer in the A-I-R architecture.
//! Depends only on `infra_master` (for currency definitions).
//!
//! ## Example
//!
//! ```rust
//! use adapter_feeds::{CurrencyConverter, FixedRate};
//!
//! let converter = CurrencyConverter::new(FixedRate::new(89_500.0));
//! assert_eq!(converter.to_lbp(10.0).unwrap(), 895_000.0);
//! ```

mod converter;
mod error;
mod quote;
mod rate;

pub use converter::CurrencyConverter;
pub use error::FeedError;
pub use quote::RateQuote;
pub use rate::{parse_amount, parse_rate_text, FixedRate, RateSource};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{CurrencyConverter, FeedError, FixedRate, RateQuote, RateSource};
}
