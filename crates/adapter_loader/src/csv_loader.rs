//! CSV holiday table loader.

use std::io::Read;
use std::path::Path;

use infra_master::{parse_table_date, table_column, Holiday, HolidayCalendar};
use tracing::{debug, warn};

use crate::error::LoaderError;

/// Loader for `name,date` holiday tables.
///
/// The header row is required and column order is free. Dates may be ISO
/// (`yyyy-MM-dd`) or `dd-MM-yyyy`.
pub struct HolidayFileLoader;

impl HolidayFileLoader {
    /// Load a holiday calendar from a CSV file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the CSV file
    ///
    /// # Returns
    ///
    /// The calendar built from every row, or an error if loading fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<HolidayCalendar, LoaderError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LoaderError::FileNotFound(path.display().to_string()));
        }

        let file = std::fs::File::open(path)?;
        let calendar = Self::load_reader(file)?;
        debug!(path = %path.display(), years = calendar.years().count(), "loaded holiday file");
        Ok(calendar)
    }

    /// Load a holiday calendar from any CSV reader.
    pub fn load_reader<R: Read>(reader: R) -> Result<HolidayCalendar, LoaderError> {
        let mut reader = csv::Reader::from_reader(reader);
        let headers = reader.headers()?.clone();
        let name_idx = column(&headers, "name")?;
        let date_idx = column(&headers, "date")?;

        let mut holidays = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            let row = idx + 1;

            let name = record.get(name_idx).map(str::trim).unwrap_or_default();
            if name.is_empty() {
                return Err(LoaderError::InvalidFormat {
                    row,
                    message: "empty holiday name".to_string(),
                });
            }

            let raw_date = record.get(date_idx).map(str::trim).unwrap_or_default();
            let date = parse_table_date(raw_date).ok_or_else(|| LoaderError::InvalidFormat {
                row,
                message: format!("unrecognised date {:?}", raw_date),
            })?;

            holidays.push(Holiday::new(name, date));
        }

        if holidays.is_empty() {
            warn!("holiday table contains no rows");
        }

        Ok(HolidayCalendar::from_holidays(holidays))
    }
}

fn column(headers: &csv::StringRecord, name: &str) -> Result<usize, LoaderError> {
    table_column(headers, name).ok_or_else(|| LoaderError::MissingColumn(name.to_string()))
}
