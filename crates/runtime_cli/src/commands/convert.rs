//! Convert command implementation

use std::io::Write;

use adapter_feeds::{
    parse_amount, parse_rate_text, CurrencyConverter, FeedError, FixedRate, RateQuote, RateSource,
};
use infra_config::Settings;
use infra_master::Currency;
use tracing::info;

use crate::cli::ConvertArgs;
use crate::Result;

const QUOTE_SOURCE: &str = "command line quote";

/// Run the convert command.
///
/// The rate comes from the `--buy`/`--sell` mid, then `--rate`, then
/// `rates.fixed_rate`.
pub fn run(args: &ConvertArgs, settings: &Settings, out: &mut impl Write) -> Result<bool> {
    let amount = parse_amount(&args.amount)?;
    let (rate, source) = resolve_rate(args, settings)?;
    info!(rate, source, "using market rate");

    let converter = CurrencyConverter::new(FixedRate::new(rate));
    let from = match args.to {
        Currency::Usd => Currency::Lbp,
        Currency::Lbp => Currency::Usd,
    };
    let converted = args.to.round(converter.convert(amount, from, args.to)?);

    writeln!(
        out,
        "{} {} = {} {} (rate {} LBP/USD, {})",
        amount, from, converted, args.to, rate, source
    )?;
    Ok(true)
}

fn resolve_rate<'a>(args: &ConvertArgs, settings: &'a Settings) -> Result<(f64, &'a str)> {
    if let (Some(buy), Some(sell)) = (args.buy.as_deref(), args.sell.as_deref()) {
        let quote = RateQuote::new(QUOTE_SOURCE, parse_rate_text(buy)?, parse_rate_text(sell)?);
        return Ok((quote.current_rate()?, QUOTE_SOURCE));
    }

    if let Some(text) = args.rate.as_deref() {
        return Ok((parse_rate_text(text)?, "command line"));
    }

    match settings.rates.fixed_rate {
        Some(rate) => Ok((rate, settings.rates.source.as_str())),
        None => Err(FeedError::RateUnavailable(
            "pass --rate or --buy/--sell, or set rates.fixed_rate".to_string(),
        )
        .into()),
    }
}
