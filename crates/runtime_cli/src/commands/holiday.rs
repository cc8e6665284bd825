//! Holiday commands implementation

use std::io::Write;

use infra_master::{parse_date, HolidayCalendar, DATE_FORMAT};
use tracing::info;

use crate::Result;

/// Report whether a `dd-MM-yyyy` date is a public holiday.
pub fn run_date(calendar: &HolidayCalendar, date: &str, out: &mut impl Write) -> Result<bool> {
    let date = parse_date(date)?;
    let matches = calendar.holidays_on(date)?;
    let shown = date.format(DATE_FORMAT);

    if matches.is_empty() {
        writeln!(out, "{} is not a public holiday", shown)?;
    }
    for holiday in matches {
        writeln!(out, "{} is a public holiday: {}", shown, holiday.name)?;
    }

    Ok(true)
}

/// List the holidays of a year.
pub fn run_year(calendar: &HolidayCalendar, year: i32, out: &mut impl Write) -> Result<bool> {
    info!(year, "listing holidays");
    let holidays = calendar.holidays_in(year)?;

    for holiday in holidays {
        writeln!(out, "{}", holiday)?;
    }
    writeln!(out, "{} public holidays in {}", holidays.len(), year)?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use infra_master::MasterDataError;

    fn calendar() -> &'static HolidayCalendar {
        HolidayCalendar::lebanon().unwrap()
    }

    #[test]
    fn test_run_date_holiday() {
        let mut out = Vec::new();
        run_date(calendar(), "09-02-2025", &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "09-02-2025 is a public holiday: St. Maron's Day\n"
        );
    }

    #[test]
    fn test_run_date_working_day() {
        let mut out = Vec::new();
        run_date(calendar(), "10-02-2025", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "10-02-2025 is not a public holiday\n");
    }

    #[test]
    fn test_run_date_invalid() {
        let mut out = Vec::new();
        let result = run_date(calendar(), "2025-02-10", &mut out);
        assert!(matches!(
            result,
            Err(CliError::MasterData(MasterDataError::InvalidDate(_)))
        ));
    }

    #[test]
    fn test_run_year() {
        let mut out = Vec::new();
        run_year(calendar(), 2024, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("01-01-2024 New Year's Day\n"));
        assert!(output.ends_with("16 public holidays in 2024\n"));
    }

    #[test]
    fn test_run_year_without_data() {
        let mut out = Vec::new();
        let result = run_year(calendar(), 2050, &mut out);
        assert!(matches!(
            result,
            Err(CliError::MasterData(MasterDataError::DataUnavailable(2050)))
        ));
    }
}
