//! Lebanese public holiday calendar.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;
use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use crate::error::MasterDataError;

/// Date format used for user-facing holiday dates.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Date format used in holiday tables.
pub const TABLE_DATE_FORMAT: &str = "%Y-%m-%d";

const LEBANON_TABLE: &str = include_str!("../data/lebanon_holidays.csv");

/// A single public holiday.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Holiday {
    /// Holiday name
    pub name: String,
    /// Calendar date
    pub date: NaiveDate,
}

impl Holiday {
    /// Create a holiday.
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date,
        }
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date.format(DATE_FORMAT), self.name)
    }
}

/// Parse a `dd-MM-yyyy` date.
pub fn parse_date(text: &str) -> Result<NaiveDate, MasterDataError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| MasterDataError::InvalidDate(text.to_string()))
}

/// Parse a holiday table date, ISO (`yyyy-MM-dd`) or `dd-MM-yyyy`.
pub fn parse_table_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, TABLE_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(text, DATE_FORMAT))
        .ok()
}

/// Index of a holiday table column, matched case-insensitively.
pub fn table_column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name))
}

/// Anything that can list public holidays per year.
pub trait HolidaySource {
    /// All holidays for a year, in date order.
    fn holidays(&self, year: i32) -> Result<Vec<Holiday>, MasterDataError>;

    /// Check if a date is a public holiday.
    fn is_holiday(&self, date: NaiveDate) -> Result<bool, MasterDataError> {
        Ok(self.holidays(date.year())?.iter().any(|h| h.date == date))
    }

    /// Number of holidays listed for a year.
    fn holiday_count(&self, year: i32) -> Result<usize, MasterDataError> {
        Ok(self.holidays(year)?.len())
    }
}

/// Holiday calendar backed by a static per-year table.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    by_year: BTreeMap<i32, Vec<Holiday>>,
}

impl HolidayCalendar {
    /// Built-in Lebanese calendar, parsed once on first use.
    pub fn lebanon() -> Result<&'static HolidayCalendar, MasterDataError> {
        static CALENDAR: OnceLock<Result<HolidayCalendar, MasterDataError>> = OnceLock::new();

        CALENDAR
            .get_or_init(|| {
                let calendar = Self::from_csv_reader(LEBANON_TABLE.as_bytes())?;
                debug!(years = ?calendar.years().collect::<Vec<_>>(), "loaded built-in holiday table");
                Ok(calendar)
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Build a calendar from a list of holidays.
    pub fn from_holidays(holidays: impl IntoIterator<Item = Holiday>) -> Self {
        let mut by_year: BTreeMap<i32, Vec<Holiday>> = BTreeMap::new();
        for holiday in holidays {
            by_year.entry(holiday.date.year()).or_default().push(holiday);
        }
        for list in by_year.values_mut() {
            list.sort_by_key(|h| h.date);
        }
        Self { by_year }
    }

    /// Parse a holiday CSV table.
    ///
    /// The header must name `name` and `date` columns, in any order and any
    /// case. Dates may be ISO (`yyyy-MM-dd`) or `dd-MM-yyyy`.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, MasterDataError> {
        let mut reader = csv::Reader::from_reader(reader);
        let headers = reader
            .headers()
            .map_err(|e| MasterDataError::CorruptData(e.to_string()))?
            .clone();
        let columns = (table_column(&headers, "name"), table_column(&headers, "date"));
        let (name_idx, date_idx) = match columns {
            (Some(name), Some(date)) => (name, date),
            _ => {
                return Err(MasterDataError::CorruptData(
                    "header must contain name and date columns".to_string(),
                ))
            }
        };
        let mut holidays = Vec::new();

        for (idx, result) in reader.records().enumerate() {
            let record = result.map_err(|e| MasterDataError::CorruptData(e.to_string()))?;
            let name = record.get(name_idx).map(str::trim).unwrap_or_default();
            if name.is_empty() {
                return Err(MasterDataError::CorruptData(format!(
                    "row {} has an empty holiday name",
                    idx + 1
                )));
            }
            let raw_date = record.get(date_idx).map(str::trim).unwrap_or_default();
            let date = parse_table_date(raw_date).ok_or_else(|| {
                MasterDataError::CorruptData(format!("row {}: bad date {:?}", idx + 1, raw_date))
            })?;
            holidays.push(Holiday::new(name, date));
        }

        Ok(Self::from_holidays(holidays))
    }

    /// Years covered by this calendar, ascending.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.by_year.keys().copied()
    }

    /// Borrow the holidays of a year.
    pub fn holidays_in(&self, year: i32) -> Result<&[Holiday], MasterDataError> {
        self.by_year.get(&year).map(Vec::as_slice).ok_or_else(|| {
            debug!(year, "no holiday data for year");
            MasterDataError::DataUnavailable(year)
        })
    }

    /// Holidays falling on a date; several can share a day.
    pub fn holidays_on(&self, date: NaiveDate) -> Result<Vec<&Holiday>, MasterDataError> {
        Ok(self
            .holidays_in(date.year())?
            .iter()
            .filter(|h| h.date == date)
            .collect())
    }

    /// Check a `dd-MM-yyyy` date string.
    pub fn is_holiday_str(&self, text: &str) -> Result<bool, MasterDataError> {
        self.is_holiday(parse_date(text)?)
    }

    /// Check if a date is a business day (not a weekend, not a holiday).
    pub fn is_business_day(&self, date: NaiveDate) -> Result<bool, MasterDataError> {
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            return Ok(false);
        }
        Ok(!self.is_holiday(date)?)
    }

    /// Get the next business day on or after the given date.
    pub fn next_business_day(&self, mut date: NaiveDate) -> Result<NaiveDate, MasterDataError> {
        while !self.is_business_day(date)? {
            date = step(date, 1)?;
        }
        Ok(date)
    }

    /// Add business days to a date. Negative counts move backwards.
    pub fn add_business_days(
        &self,
        mut date: NaiveDate,
        days: i32,
    ) -> Result<NaiveDate, MasterDataError> {
        let direction = if days >= 0 { 1 } else { -1 };
        let mut remaining = days.unsigned_abs();

        while remaining > 0 {
            date = step(date, direction)?;
            if self.is_business_day(date)? {
                remaining -= 1;
            }
        }

        Ok(date)
    }
}

impl HolidaySource for HolidayCalendar {
    fn holidays(&self, year: i32) -> Result<Vec<Holiday>, MasterDataError> {
        self.holidays_in(year).map(<[Holiday]>::to_vec)
    }

    fn is_holiday(&self, date: NaiveDate) -> Result<bool, MasterDataError> {
        Ok(self.holidays_in(date.year())?.iter().any(|h| h.date == date))
    }

    fn holiday_count(&self, year: i32) -> Result<usize, MasterDataError> {
        Ok(self.holidays_in(year)?.len())
    }
}

fn step(date: NaiveDate, direction: i32) -> Result<NaiveDate, MasterDataError> {
    let next = if direction > 0 {
        date.succ_opt()
    } else {
        date.pred_opt()
    };
    next.ok_or_else(|| MasterDataError::InvalidDate(date.to_string()))
}
