//! `scan` command: reports which lines would be censored, changes nothing.

use anyhow::{bail, Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use adcensor_core::{CensorFilter, ScanReport};

use super::{info_msg, read_input, warn_msg};
use crate::ui::output_format;
use crate::ui::theme::ThemeMap;

pub struct ScanOptions {
    pub input_path: Option<PathBuf>,
    pub json_file: Option<PathBuf>,
    pub json_stdout: bool,
    pub fail_over_threshold: Option<usize>,
    pub quiet: bool,
}

/// Builds the report for `input`. Lines are judged on their raw bytes, the
/// same way `censor` judges them.
pub fn scan_input(filter: &CensorFilter, input: &[u8]) -> ScanReport {
    ScanReport::from_lines(filter, input)
}

/// Runs the `scan` command.
pub fn run_scan(filter: &CensorFilter, opts: ScanOptions, theme: &ThemeMap) -> Result<()> {
    info!("Starting scan operation.");
    let input = read_input(opts.input_path.as_deref())?;
    let report = scan_input(filter, &input);
    debug!(
        "Scan finished: {} lines, {} redacted, {} whitelisted, {} clean.",
        report.total, report.redacted, report.whitelisted, report.clean
    );

    if report.total == 0 && !opts.quiet {
        warn_msg("No input lines to scan.", theme);
    }

    if opts.json_stdout {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        writeln!(writer, "{}", report.to_json_pretty()?)?;
    } else {
        if let Some(path) = &opts.json_file {
            fs::write(path, report.to_json_pretty()?)
                .with_context(|| format!("Failed to write JSON report: {}", path.display()))?;
            if !opts.quiet {
                info_msg(format!("Scan report written to {}", path.display()), theme);
            }
        }
        let stdout = io::stdout();
        let supports_color = stdout.is_terminal();
        output_format::print_scan_summary(&report, &mut stdout.lock(), theme, supports_color)?;
    }

    if let Some(threshold) = opts.fail_over_threshold {
        if report.redacted > threshold {
            bail!(
                "{} censored lines exceed the threshold of {}.",
                report.redacted,
                threshold
            );
        }
    }

    info!("Scan operation completed.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::censor::censor_lines;

    #[test_log::test]
    fn invalid_utf8_is_still_scanned() {
        let filter = CensorFilter::with_default_lists().unwrap();
        let report = scan_input(&filter, b"gg\xff\njoin 8.8.8.8\n");
        assert_eq!(report.total, 2);
        assert_eq!(report.redacted, 1);
    }

    #[test_log::test]
    fn scan_agrees_with_censor_on_invalid_utf8() {
        let filter = CensorFilter::with_default_lists().unwrap();
        let input = b"\xff\xff\xff\xff.a.b.c\ngg wp\r\n\xfe\xfe\xfe\xfe 1.2.3.4\n";

        let report = scan_input(&filter, input);
        let (_, stats) = censor_lines(&filter, input);

        assert_eq!(report.total, stats.lines);
        assert_eq!(report.redacted, stats.censored);
        assert_eq!(report.redacted, 2);
        assert_eq!(report.records[0].length, 10);
    }

    #[test_log::test]
    fn empty_input_yields_empty_report() {
        let filter = CensorFilter::with_default_lists().unwrap();
        let report = scan_input(&filter, b"");
        assert_eq!(report.total, 0);
        assert!(report.records.is_empty());
    }
}
