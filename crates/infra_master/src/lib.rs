//! # infra_master
//!
//! Static master data (area codes, holidays, currencies) for Lebkit.
//!
//! This crate is the "Source of Truth" for Lebanon-specific reference data:
//! - Phone number area codes and mobile carrier bands
//! - Public holiday calendar
//! - Currency definitions (ISO 4217) for the USD/LBP market
//!
//! ## Architecture Position
//!
//! Part of the **I**nfra layer in the A-I-R architecture.
//! Must not depend on **A**dapter or **R**untime crates.
//!
//! ## Example
//!
//! ```rust
//! use infra_master::{classify, AreaCode, HolidayCalendar, HolidaySource};
//!
//! assert_eq!(classify("03123456").unwrap(), AreaCode::Alfa);
//!
//! let calendar = HolidayCalendar::lebanon().unwrap();
//! assert!(calendar.is_holiday(chrono::NaiveDate::from_ymd_opt(2024, 11, 22).unwrap()).unwrap());
//! ```

mod area_code;
mod calendar;
mod currency;
mod error;

pub use area_code::{
    classify, is_alfa, is_touch, main_code_rule, AreaCode, MainCodeRule, PhoneNumber,
    SecondaryTable, MAIN_CODES, PHONE_NUMBER_LEN,
};
pub use calendar::{
    parse_date, parse_table_date, table_column, Holiday, HolidayCalendar, HolidaySource,
    DATE_FORMAT, TABLE_DATE_FORMAT,
};
pub use currency::Currency;
pub use error::MasterDataError;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        classify, is_alfa, is_touch, AreaCode, Currency, Holiday, HolidayCalendar, HolidaySource,
        MasterDataError, PhoneNumber,
    };
}
