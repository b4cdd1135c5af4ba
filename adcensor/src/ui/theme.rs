//! Module for managing the application's command-line interface (CLI) theme.
//!
//! Users can recolor the console output with a small YAML file mapping
//! entries to 16-color ANSI names. Missing entries fall back to the defaults.

use anyhow::{Context, Result};
use owo_colors::AnsiColors;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The different logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    /// Section titles.
    Header,
    Success,
    Info,
    Warn,
    Error,
    /// Verdict label for censored lines.
    Redacted,
    /// Verdict label for whitelisted lines.
    Whitelisted,
    /// Verdict label for clean lines.
    Clean,
    /// Left-hand labels in summaries and the info listing.
    SummaryLabel,
    /// Counts in summaries.
    SummaryCount,
}

impl ThemeEntry {
    pub const ALL: [ThemeEntry; 10] = [
        ThemeEntry::Header,
        ThemeEntry::Success,
        ThemeEntry::Info,
        ThemeEntry::Warn,
        ThemeEntry::Error,
        ThemeEntry::Redacted,
        ThemeEntry::Whitelisted,
        ThemeEntry::Clean,
        ThemeEntry::SummaryLabel,
        ThemeEntry::SummaryCount,
    ];
}

/// Represents an ANSI color that can be used in the theme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ThemeColor {
    /// A named ANSI color (e.g., "red", "brightgreen").
    Named(String),
}

/// Error type for parsing an invalid `ThemeColor` string.
#[derive(Debug, Clone, thiserror::Error)]
#[error(
    "Invalid theme color; expected one of: black, red, green, yellow, blue, \
    magenta, cyan, white, brightblack, brightred, brightgreen, brightyellow, \
    brightblue, brightmagenta, brightcyan, brightwhite."
)]
pub struct ParseThemeColorError;

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "black" | "red" | "green" | "yellow" | "blue" | "magenta" | "cyan" | "white" |
            "brightblack" | "brightred" | "brightgreen" | "brightyellow" | "brightblue" |
            "brightmagenta" | "brightcyan" | "brightwhite" => Ok(ThemeColor::Named(lower)),
            _ => Err(ParseThemeColorError),
        }
    }
}

impl ThemeColor {
    /// Converts the `ThemeColor` into its `owo_colors::AnsiColors` value.
    /// Unknown names render as white.
    pub fn to_ansi_color(&self) -> AnsiColors {
        match self {
            ThemeColor::Named(name) => match name.to_lowercase().as_str() {
                "black" => AnsiColors::Black,
                "red" => AnsiColors::Red,
                "green" => AnsiColors::Green,
                "yellow" => AnsiColors::Yellow,
                "blue" => AnsiColors::Blue,
                "magenta" => AnsiColors::Magenta,
                "cyan" => AnsiColors::Cyan,
                "brightblack" => AnsiColors::BrightBlack,
                "brightred" => AnsiColors::BrightRed,
                "brightgreen" => AnsiColors::BrightGreen,
                "brightyellow" => AnsiColors::BrightYellow,
                "brightblue" => AnsiColors::BrightBlue,
                "brightmagenta" => AnsiColors::BrightMagenta,
                "brightcyan" => AnsiColors::BrightCyan,
                "brightwhite" => AnsiColors::BrightWhite,
                _ => AnsiColors::White,
            },
        }
    }
}

/// Represents the style configuration for a specific `ThemeEntry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeStyle {
    /// An optional `ThemeColor` to apply as the foreground color.
    pub fg: Option<ThemeColor>,
}

impl ThemeStyle {
    fn named(color: &str) -> Self {
        ThemeStyle { fg: Some(ThemeColor::Named(color.to_string())) }
    }

    /// Loads a theme from a YAML file and fills missing entries from the defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let mut custom: ThemeMap = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        for (entry, style) in Self::default_theme_map() {
            custom.entry(entry).or_insert(style);
        }
        Ok(custom)
    }

    /// Returns the default theme map.
    pub fn default_theme_map() -> ThemeMap {
        let mut theme = HashMap::new();
        theme.insert(ThemeEntry::Header, Self::named("cyan"));
        theme.insert(ThemeEntry::Success, Self::named("green"));
        theme.insert(ThemeEntry::Info, Self::named("brightblack"));
        theme.insert(ThemeEntry::Warn, Self::named("yellow"));
        theme.insert(ThemeEntry::Error, Self::named("brightred"));
        theme.insert(ThemeEntry::Redacted, Self::named("red"));
        theme.insert(ThemeEntry::Whitelisted, Self::named("blue"));
        theme.insert(ThemeEntry::Clean, Self::named("green"));

        for entry in ThemeEntry::ALL {
            theme.entry(entry).or_insert_with(|| Self::named("white"));
        }
        theme
    }
}

/// Loads a theme configuration from a YAML file or returns the default theme.
pub fn build_theme_map(theme_path: Option<&Path>) -> Result<ThemeMap> {
    match theme_path {
        Some(path) => ThemeStyle::load_from_file(path),
        None => Ok(ThemeStyle::default_theme_map()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_named_colors() {
        assert!("red".parse::<ThemeColor>().is_ok());
        assert!("BrightGreen".parse::<ThemeColor>().is_ok());
        assert!("unknown".parse::<ThemeColor>().is_err());
    }

    #[test]
    fn to_ansi_color_roundtrip() {
        let tc: ThemeColor = "blue".parse().unwrap();
        assert_eq!(tc.to_ansi_color(), AnsiColors::Blue);
        let tc: ThemeColor = "brightmagenta".parse().unwrap();
        assert_eq!(tc.to_ansi_color(), AnsiColors::BrightMagenta);
    }

    #[test]
    fn default_theme_covers_every_entry() {
        let theme = ThemeStyle::default_theme_map();
        for entry in ThemeEntry::ALL {
            assert!(theme.contains_key(&entry), "missing {:?}", entry);
        }
    }

    #[test]
    fn custom_theme_merges_with_defaults() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "redacted:\n  fg: magenta")?;
        let theme = build_theme_map(Some(file.path()))?;

        assert_eq!(theme[&ThemeEntry::Redacted], ThemeStyle::named("magenta"));
        assert_eq!(theme[&ThemeEntry::Clean], ThemeStyle::named("green"));
        Ok(())
    }
}
