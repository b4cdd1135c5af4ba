// adcensor-core/src/verdict.rs
//! Provides the outcome types of a censor decision and the utility functions
//! for logging them without leaking message content.

use serde::{Serialize, Deserialize};
use log::debug;

use lazy_static::lazy_static;
use sha2::{Sha256, Digest};
use hex;

lazy_static! {
    /// A static boolean that is initialized once to determine if message text is allowed in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("ADCENSOR_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// What a detector found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    /// Name of the detector that fired (`ip_address`, `domain_name`).
    pub detector: String,
    /// Detector-specific detail: the IP pass or the matched TLD.
    pub detail: String,
}

/// The decision taken for one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// Contains a whitelisted domain; passed through without scanning.
    Whitelisted,
    /// Nothing found; passed through.
    Clean,
    /// Every byte replaced by the mask.
    Redacted(Detection),
}

impl Verdict {
    pub fn is_redacted(&self) -> bool {
        matches!(self, Verdict::Redacted(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Whitelisted => "whitelisted",
            Verdict::Clean => "clean",
            Verdict::Redacted(_) => "redacted",
        }
    }
}

pub fn redact_sensitive(s: &[u8]) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

fn get_loggable_content(message: &[u8]) -> String {
    if *PII_DEBUG_ALLOWED {
        String::from_utf8_lossy(message).into_owned()
    } else {
        redact_sensitive(message)
    }
}

pub fn log_verdict_debug(module_path: &str, message: &[u8], verdict: &Verdict) {
    match verdict {
        Verdict::Redacted(detection) => debug!(
            "{} Censored message: Detector='{}', Detail='{}', Original='{}'",
            module_path,
            detection.detector,
            detection.detail,
            get_loggable_content(message)
        ),
        other => debug!(
            "{} Message passed as {}: '{}'",
            module_path,
            other.label(),
            get_loggable_content(message)
        ),
    }
}

/// Stable fingerprint of a message for reports that must not carry the text.
/// ASCII case and runs of ASCII whitespace do not change the fingerprint.
/// Other bytes are hashed as they are, so invalid UTF-8 stays distinct.
pub fn message_fingerprint(message: &[u8]) -> String {
    let lowered = message.to_ascii_lowercase();
    let mut hasher = Sha256::new();
    let words = lowered
        .split(|b| b.is_ascii_whitespace())
        .filter(|w| !w.is_empty());
    for (idx, word) in words.enumerate() {
        if idx > 0 {
            hasher.update(b" ");
        }
        hasher.update(word);
    }
    hex::encode(hasher.finalize())
}
