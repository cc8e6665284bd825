//! Check command implementation
//!
//! Reports configuration and data coverage.

use std::io::Write;
use std::path::Path;

use adapter_feeds::{FixedRate, RateSource};
use infra_config::Settings;
use infra_master::HolidayCalendar;
use tracing::info;

use crate::Result;

/// Run the check command
///
/// `holiday_file` is the table `calendar` was loaded from, if not built-in.
pub fn run(
    settings: &Settings,
    holiday_file: Option<&Path>,
    calendar: &HolidayCalendar,
    out: &mut impl Write,
) -> Result<bool> {
    info!("Checking system configuration...");

    writeln!(out, "Lebkit System Check")?;
    writeln!(out, "===================\n")?;

    writeln!(out, "Version: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "Log level: {}", settings.general.log_level)?;
    writeln!(out)?;

    writeln!(out, "Holiday calendar:")?;
    match holiday_file {
        Some(path) => writeln!(out, "  Source: {}", path.display())?,
        None => writeln!(out, "  Source: built-in")?,
    }
    let years: Vec<String> = calendar.years().map(|y| y.to_string()).collect();
    if years.is_empty() {
        writeln!(out, "  Years: none")?;
    } else {
        writeln!(out, "  Years: {}", years.join(", "))?;
    }
    writeln!(out)?;

    writeln!(out, "Exchange rate:")?;
    let rate_ok = match settings.rates.fixed_rate {
        Some(rate) => match FixedRate::new(rate).current_rate() {
            Ok(rate) => {
                writeln!(out, "  ✓ {} LBP/USD ({})", rate, settings.rates.source)?;
                true
            }
            Err(e) => {
                writeln!(out, "  ✗ {}", e)?;
                false
            }
        },
        None => {
            writeln!(out, "  ✗ Not configured (pass --rate to convert)")?;
            false
        }
    };
    writeln!(out)?;

    if rate_ok && !years.is_empty() {
        writeln!(out, "All checks passed!")?;
    } else {
        writeln!(out, "Some checks need attention.")?;
    }

    // Missing optional data is reported, not fatal.
    Ok(true)
}
