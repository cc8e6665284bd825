//! Classify command implementation

use std::io::Write;

use infra_master::classify;
use tracing::warn;

use crate::cli::ClassifyArgs;
use crate::Result;

/// Run the classify command.
///
/// Every number is reported; failures are printed alongside successes.
pub fn run(args: &ClassifyArgs, out: &mut impl Write) -> Result<bool> {
    let mut all_ok = true;

    for number in &args.numbers {
        match classify(number) {
            Ok(area) => writeln!(out, "{}: {}", number, area)?,
            Err(e) => {
                warn!(%number, error = %e, "classification failed");
                writeln!(out, "{}: error: {}", number, e)?;
                all_ok = false;
            }
        }
    }

    Ok(all_ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_output(numbers: &[&str]) -> (bool, String) {
        let args = ClassifyArgs {
            numbers: numbers.iter().map(|n| n.to_string()).collect(),
        };
        let mut out = Vec::new();
        let ok = run(&args, &mut out).unwrap();
        (ok, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_prints_labels() {
        let (ok, output) = classify_output(&["01234567", "71034567", "78034567"]);
        assert!(ok);
        assert_eq!(output, "01234567: Beirut\n71034567: Alfa\n78034567: n/a\n");
    }

    #[test]
    fn test_reports_failures_and_continues() {
        let (ok, output) = classify_output(&["99123456", "03123456"]);
        assert!(!ok);
        assert!(output.starts_with("99123456: error: Unknown area code prefix: 99\n"));
        assert!(output.ends_with("03123456: Alfa\n"));
    }
}
