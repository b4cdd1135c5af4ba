//! Configuration management for `adcensor-core`.
//!
//! The whitelist, the TLD lists and the mask byte are fixed at build time:
//! they live in `config/default_lists.yaml`, which is embedded into the
//! binary and parsed on first use. No other file is loaded at runtime.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::debug;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use adcensor_heuristics::normalize::{classify, CharClass};

use crate::errors::CensorError;

/// The byte written over every position of a redacted message.
pub const DEFAULT_MASK: char = '*';

static EMBEDDED_LISTS: &str = include_str!("../config/default_lists.yaml");

static DEFAULT_CONFIG: OnceCell<CensorConfig> = OnceCell::new();

/// The lists driving the censor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CensorConfig {
    /// Substrings that let a message through untouched.
    pub whitelist: Vec<String>,
    /// Top-level domains checked for every part after a separator.
    pub tlds: Vec<String>,
    /// Top-level domains checked only for the last part of a message.
    pub trailing_tlds: Vec<String>,
    /// Mask character for redaction.
    pub mask: char,
}

impl Default for CensorConfig {
    fn default() -> Self {
        Self {
            whitelist: Vec::new(),
            tlds: Vec::new(),
            trailing_tlds: Vec::new(),
            mask: DEFAULT_MASK,
        }
    }
}

impl CensorConfig {
    /// Parses and validates the embedded lists.
    pub fn load_default() -> Result<Self> {
        debug!("Loading censor lists from embedded string...");
        let config: CensorConfig = serde_yml::from_str(EMBEDDED_LISTS)
            .context("Failed to parse embedded censor lists")?;
        config.validate()?;

        debug!(
            "Loaded {} whitelist entries, {} TLDs, {} trailing TLDs.",
            config.whitelist.len(),
            config.tlds.len(),
            config.trailing_tlds.len()
        );
        Ok(config)
    }

    /// The embedded lists, parsed once per process.
    pub fn shared_default() -> Result<&'static CensorConfig> {
        DEFAULT_CONFIG.get_or_try_init(Self::load_default)
    }

    /// The mask as a byte. Only valid after [`CensorConfig::validate`].
    pub fn mask_byte(&self) -> u8 {
        self.mask as u8
    }

    /// Checks list integrity and the mask.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        check_list("whitelist", &self.whitelist, |entry| entry.is_ascii(), &mut errors);
        check_list(
            "tlds",
            &self.tlds,
            |entry| entry.bytes().all(|b| b.is_ascii_alphanumeric()),
            &mut errors,
        );
        check_list(
            "trailing_tlds",
            &self.trailing_tlds,
            |entry| entry.bytes().all(|b| b.is_ascii_alphanumeric()),
            &mut errors,
        );

        // Masked output must scan clean.
        if !self.mask.is_ascii() || classify(self.mask as u8) != CharClass::Other {
            errors.push(format!(
                "mask {:?} must be an ASCII character that is neither alphanumeric, whitespace nor a separator.",
                self.mask
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CensorError::InvalidConfig(errors.join("; ")).into())
        }
    }
}

fn check_list(
    name: &str,
    entries: &[String],
    charset_ok: impl Fn(&str) -> bool,
    errors: &mut Vec<String>,
) {
    let mut seen = HashSet::new();
    for entry in entries {
        if entry.is_empty() {
            errors.push(format!("`{}` contains an empty entry.", name));
            continue;
        }
        if entry.bytes().any(|b| b.is_ascii_uppercase()) {
            errors.push(format!("`{}` entry '{}' must be lowercase.", name, entry));
        }
        if !charset_ok(entry) {
            errors.push(format!("`{}` entry '{}' contains unsupported characters.", name, entry));
        }
        if !seen.insert(entry.as_str()) {
            errors.push(format!("Duplicate `{}` entry found: '{}'.", name, entry));
        }
    }
}
