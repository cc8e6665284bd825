//! Currency definitions (ISO 4217) for the USD/LBP market.

use std::fmt;
use std::str::FromStr;

use crate::error::MasterDataError;

/// Currencies handled by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Currency {
    /// US Dollar
    Usd,
    /// Lebanese Pound
    Lbp,
}

impl Currency {
    /// ISO 4217 alphabetic code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Lbp => "LBP",
        }
    }

    /// Number of minor-unit digits.
    pub fn decimals(&self) -> u32 {
        2
    }

    /// Round an amount to this currency's minor unit.
    pub fn round(&self, amount: f64) -> f64 {
        let scale = 10f64.powi(self.decimals() as i32);
        (amount * scale).round() / scale
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = MasterDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "LBP" => Ok(Currency::Lbp),
            _ => Err(MasterDataError::UnknownLabel(s.to_string())),
        }
    }
}
