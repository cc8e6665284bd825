//! # infra_config
//!
//! System configuration and environment management for Lebkit.
//!
//! This crate loads runtime settings (TOML files and environment variables):
//! log level, the fallback USD/LBP exchange rate and the location of an
//! external holiday table.
//!
//! ## Architecture Position
//!
//! Part of the **I**nfra layer in the A-I-R architecture.
//! Must not depend on **A**dapter or **R**untime crates.
//!
//! ## Example
//!
//! ```rust,ignore
//! use infra_config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Log level: {}", settings.general.log_level);
//! ```

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{GeneralConfig, HolidaysConfig, RatesConfig, Settings, ENV_PREFIX};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ConfigError, GeneralConfig, HolidaysConfig, RatesConfig, Settings};
}
