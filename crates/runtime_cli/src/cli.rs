//! Command-line arguments.

use std::borrow::Cow;
use std::io::Write;
use std::path::PathBuf;

use adapter_loader::HolidayFileLoader;
use clap::{Args, Parser, Subcommand};
use infra_config::Settings;
use infra_master::{Currency, HolidayCalendar};
use tracing::info;

use crate::commands;
use crate::Result;

/// Lebanese phone, holiday and exchange-rate utilities
#[derive(Parser, Debug)]
#[command(name = "lebkit", version, about)]
pub struct Cli {
    /// Configuration file (TOML); defaults to config/default.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Holiday table (CSV) replacing the built-in calendar
    #[arg(long, global = true)]
    pub holiday_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify phone numbers by carrier or region
    Classify(ClassifyArgs),

    /// Check whether a date is a public holiday
    Holiday(HolidayArgs),

    /// List the public holidays of a year
    Holidays(HolidaysArgs),

    /// Convert an amount between USD and LBP
    Convert(ConvertArgs),

    /// Show configuration and data coverage
    Check,
}

/// Arguments for `classify`.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Eight-digit numbers, without country code
    #[arg(required = true)]
    pub numbers: Vec<String>,
}

/// Arguments for `holiday`.
#[derive(Args, Debug)]
pub struct HolidayArgs {
    /// Date as dd-MM-yyyy
    pub date: String,
}

/// Arguments for `holidays`.
#[derive(Args, Debug)]
pub struct HolidaysArgs {
    /// Calendar year
    pub year: i32,
}

/// Arguments for `convert`.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Amount to convert
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Target currency (USD or LBP)
    #[arg(long)]
    pub to: Currency,

    /// Market rate in LBP per USD, e.g. "89,500"; defaults to rates.fixed_rate
    #[arg(long)]
    pub rate: Option<String>,

    /// Quoted buy price in LBP per USD; converts at the buy/sell mid
    #[arg(long, requires = "sell", conflicts_with = "rate")]
    pub buy: Option<String>,

    /// Quoted sell price in LBP per USD
    #[arg(long, requires = "buy", conflicts_with = "rate")]
    pub sell: Option<String>,
}

impl Cli {
    /// Load settings for this invocation.
    pub fn settings(&self) -> Result<Settings> {
        let settings = match &self.config {
            Some(path) => Settings::load_from(path)?,
            None => Settings::load()?,
        };
        Ok(settings)
    }

    /// Run the selected command, writing results to `out`.
    ///
    /// Returns `false` when the command completed but reported failures.
    pub fn run(&self, settings: &Settings, out: &mut impl Write) -> Result<bool> {
        match &self.command {
            Commands::Classify(args) => commands::classify::run(args, out),
            Commands::Holiday(args) => {
                let calendar = self.calendar(settings)?;
                commands::holiday::run_date(&calendar, &args.date, out)
            }
            Commands::Holidays(args) => {
                let calendar = self.calendar(settings)?;
                commands::holiday::run_year(&calendar, args.year, out)
            }
            Commands::Convert(args) => commands::convert::run(args, settings, out),
            Commands::Check => {
                let holiday_file = self.holiday_path(settings);
                let calendar = self.calendar(settings)?;
                commands::check::run(settings, holiday_file.as_deref(), &calendar, out)
            }
        }
    }

    /// Holiday table path: `--holiday-file`, then `holidays.data_file`.
    fn holiday_path(&self, settings: &Settings) -> Option<PathBuf> {
        self.holiday_file
            .clone()
            .or_else(|| settings.holidays.data_file.as_ref().map(PathBuf::from))
    }

    /// Holiday calendar from [`Cli::holiday_path`], else the built-in table.
    fn calendar(&self, settings: &Settings) -> Result<Cow<'static, HolidayCalendar>> {
        match self.holiday_path(settings) {
            Some(path) => {
                info!(path = %path.display(), "loading holiday table");
                Ok(Cow::Owned(HolidayFileLoader::load(&path)?))
            }
            None => Ok(Cow::Borrowed(HolidayCalendar::lebanon()?)),
        }
    }
}
