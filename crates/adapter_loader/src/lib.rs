//! # adapter_loader
//!
//! Flat file loaders (CSV) for Lebkit.
//!
//! This crate loads holiday tables from CSV files so a deployment can replace
//! or extend the built-in calendar without rebuilding.
//!
//! ## Architecture Position
//!
//! Part of the **A**dapter layer in the A-I-R architecture.
//! Depends only on `infra_master` (for holiday types).
//!
//! ## Example
//!
//! ```rust,ignore
//! use adapter_loader::HolidayFileLoader;
//!
//! let calendar = HolidayFileLoader::load("holidays.csv")?;
//! ```

mod csv_loader;
mod error;

pub use csv_loader::HolidayFileLoader;
pub use error::LoaderError;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{HolidayFileLoader, LoaderError};
}
