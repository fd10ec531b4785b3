pub mod readings;
pub mod report;
pub mod stack;

use std::io::Write;

use crate::cli::{OutputFormat, ReportArgs};
use crate::config::AppConfig;
use crate::error::Result;
use report::Report;

/// Compute the waits for `readings` and print the report to stdout.
pub fn run(config: &AppConfig, readings: &[i64], args: ReportArgs) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_report(&mut stdout, config, readings, &args)
}

/// Output format and detail for one report.
///
/// `--format` and `--detail` / `--no-detail` on the command line win over
/// the `[output]` section of the config.
pub fn resolve(config: &AppConfig, args: &ReportArgs) -> (OutputFormat, bool) {
    let format = args.format.unwrap_or(config.output.format);
    let detail = args.detail().unwrap_or(config.output.detail);
    (format, detail)
}

fn write_report(
    out: &mut impl Write,
    config: &AppConfig,
    readings: &[i64],
    args: &ReportArgs,
) -> Result<()> {
    let (format, detail) = resolve(config, args);

    tracing::debug!("computing waits for {} readings", readings.len());
    let waits = stack::waiting_days(readings);

    let unresolved = waits.iter().filter(|&&w| w == 0).count();
    tracing::info!(
        "{} days, {} without a warmer day ahead",
        readings.len(),
        unresolved
    );

    let report = Report {
        readings,
        waits: &waits,
    };
    writeln!(out, "{}", report.render(format, detail)?)?;

    Ok(())
}
