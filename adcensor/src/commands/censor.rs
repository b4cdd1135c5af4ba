//! `censor` command: masks advertising lines and copies everything else.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use adcensor_core::{chat_lines, CensorFilter};

use super::{info_msg, read_input, success_msg};
use crate::ui::theme::ThemeMap;

/// Options for the `censor` runner.
pub struct CensorOptions {
    pub input_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub no_summary: bool,
    pub quiet: bool,
}

/// Counts gathered while censoring.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CensorStats {
    pub lines: usize,
    pub censored: usize,
}

/// Censors `input` line by line.
///
/// Lines come from [`chat_lines`]; a trailing `\r` is kept out of the
/// message and written back unchanged. Output always ends each line with `\n`.
pub fn censor_lines(filter: &CensorFilter, input: &[u8]) -> (Vec<u8>, CensorStats) {
    let mut output = Vec::with_capacity(input.len() + 1);
    let mut stats = CensorStats::default();

    for line in chat_lines(input) {
        let start = output.len();
        output.extend_from_slice(line.message);
        if filter.censor_in_place(&mut output[start..]).is_redacted() {
            stats.censored += 1;
        }
        if line.crlf {
            output.push(b'\r');
        }
        output.push(b'\n');
        stats.lines += 1;
    }
    (output, stats)
}

/// Runs the `censor` command.
pub fn run_censor(filter: &CensorFilter, opts: CensorOptions, theme: &ThemeMap) -> Result<()> {
    info!("Starting censor operation.");
    let input = read_input(opts.input_path.as_deref())?;
    let (output, stats) = censor_lines(filter, &input);
    debug!("Censored {} of {} lines.", stats.censored, stats.lines);

    match &opts.output_path {
        Some(path) => {
            if !opts.quiet {
                info_msg(format!("Writing censored content to file: {}", path.display()), theme);
            }
            fs::write(path, &output)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writer.write_all(&output).context("Failed to write to stdout")?;
            writer.flush()?;
        }
    }

    if !opts.no_summary && !opts.quiet {
        success_msg(format!("Censored {} of {} lines.", stats.censored, stats.lines), theme);
    }

    info!("Censor operation completed.");
    Ok(())
}
