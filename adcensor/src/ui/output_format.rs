//! Formatting helpers for console output.
//!
//! Every printer takes the writer, the theme and whether the target supports
//! color, so callers decide between stdout, stderr and files.

use std::io::Write;

use anyhow::Result;
use owo_colors::OwoColorize;

use adcensor_core::{CensorConfig, PluginInfo, ScanReport, Verdict};

use super::theme::{ThemeEntry, ThemeMap};

/// Applies the theme color for `entry` when `supports_color` is set.
pub fn paint(text: &str, entry: ThemeEntry, theme: &ThemeMap, supports_color: bool) -> String {
    if !supports_color {
        return text.to_string();
    }
    match theme.get(&entry).and_then(|style| style.fg.as_ref()) {
        Some(color) => text.color(color.to_ansi_color()).to_string(),
        None => text.to_string(),
    }
}

fn print_prefixed<W: Write>(
    writer: &mut W,
    prefix: &str,
    msg: &str,
    entry: ThemeEntry,
    theme: &ThemeMap,
    supports_color: bool,
) -> Result<()> {
    writeln!(writer, "{} {}", paint(prefix, entry, theme, supports_color), msg)?;
    Ok(())
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> Result<()> {
    print_prefixed(writer, "[info]", msg, ThemeEntry::Info, theme, supports_color)
}

pub fn print_success_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> Result<()> {
    print_prefixed(writer, "[ok]", msg, ThemeEntry::Success, theme, supports_color)
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> Result<()> {
    print_prefixed(writer, "[warn]", msg, ThemeEntry::Warn, theme, supports_color)
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> Result<()> {
    print_prefixed(writer, "[error]", msg, ThemeEntry::Error, theme, supports_color)
}

fn verdict_entry(verdict: &Verdict) -> ThemeEntry {
    match verdict {
        Verdict::Redacted(_) => ThemeEntry::Redacted,
        Verdict::Whitelisted => ThemeEntry::Whitelisted,
        Verdict::Clean => ThemeEntry::Clean,
    }
}

/// Prints the censored lines of a scan followed by the totals.
pub fn print_scan_summary<W: Write>(
    report: &ScanReport,
    writer: &mut W,
    theme: &ThemeMap,
    supports_color: bool,
) -> Result<()> {
    writeln!(writer, "{}", paint("Scan Summary", ThemeEntry::Header, theme, supports_color))?;

    for record in report.redacted_records() {
        let detail = match &record.verdict {
            Verdict::Redacted(d) => format!("{} ({})", d.detector, d.detail),
            _ => String::new(),
        };
        writeln!(
            writer,
            "  line {}: {} by {} [{} bytes, {}]",
            record.line,
            paint(record.verdict.label(), verdict_entry(&record.verdict), theme, supports_color),
            detail,
            record.length,
            &record.fingerprint[..record.fingerprint.len().min(12)],
        )?;
    }

    for (label, count, entry) in [
        ("Total lines", report.total, ThemeEntry::SummaryLabel),
        ("Redacted", report.redacted, ThemeEntry::Redacted),
        ("Whitelisted", report.whitelisted, ThemeEntry::Whitelisted),
        ("Clean", report.clean, ThemeEntry::Clean),
    ] {
        writeln!(
            writer,
            "  {}: {}",
            paint(label, entry, theme, supports_color),
            paint(&count.to_string(), ThemeEntry::SummaryCount, theme, supports_color),
        )?;
    }
    Ok(())
}

/// Prints the metadata block filled by the plugin.
pub fn print_plugin_info<W: Write>(
    info: &PluginInfo,
    detectors: &[&str],
    writer: &mut W,
    theme: &ThemeMap,
    supports_color: bool,
) -> Result<()> {
    let label = |s: &str| paint(s, ThemeEntry::SummaryLabel, theme, supports_color);

    writeln!(writer, "{}", paint(&info.full_name_str(), ThemeEntry::Header, theme, supports_color))?;
    writeln!(
        writer,
        "{} {}.{}",
        label("Plugin version:"),
        info.plugin_version.major,
        info.plugin_version.minor
    )?;
    writeln!(
        writer,
        "{} {}.{}",
        label("Handler API:"),
        info.handler_version.major,
        info.handler_version.minor
    )?;
    writeln!(writer, "{} {}", label("Detectors:"), detectors.join(", "))?;
    writeln!(writer)?;
    writeln!(writer, "{}", info.short_description_str())?;
    writeln!(writer)?;
    writeln!(writer, "{}", info.long_description_str())?;
    Ok(())
}

/// Prints the whitelist and TLD lists in use.
pub fn print_lists<W: Write>(
    config: &CensorConfig,
    writer: &mut W,
    theme: &ThemeMap,
    supports_color: bool,
) -> Result<()> {
    let label = |s: &str| paint(s, ThemeEntry::SummaryLabel, theme, supports_color);

    writeln!(writer)?;
    writeln!(writer, "{}", paint("Lists", ThemeEntry::Header, theme, supports_color))?;
    writeln!(writer, "  {} {}", label("Whitelist:"), config.whitelist.join(", "))?;
    writeln!(writer, "  {} {}", label("TLDs:"), config.tlds.join(", "))?;
    writeln!(writer, "  {} {}", label("Trailing-only TLDs:"), config.trailing_tlds.join(", "))?;
    writeln!(writer, "  {} {}", label("Mask:"), config.mask)?;
    Ok(())
}
