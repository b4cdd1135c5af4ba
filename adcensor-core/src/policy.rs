// adcensor-core/src/policy.rs
//! The censor policy: whitelist first, then every detector, then a
//! whole-message mask.
//!
//! Redaction is never partial. A message is either returned exactly as it
//! came in or every byte of it is replaced by the mask, so the length the
//! host sees never changes.
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;

use anyhow::{Context, Result};
use log::debug;

use adcensor_heuristics::WhitelistMatcher;

use crate::config::CensorConfig;
use crate::detector::Detector;
use crate::detectors::domain_detector::DomainDetector;
use crate::detectors::ip_detector::IpDetector;
use crate::errors::CensorError;
use crate::verdict::{log_verdict_debug, Verdict};

/// Decides and applies censorship for chat messages.
///
/// Immutable after construction; one instance can serve many threads.
pub struct CensorFilter {
    whitelist: WhitelistMatcher,
    detectors: Vec<Box<dyn Detector>>,
    mask: u8,
}

impl std::fmt::Debug for CensorFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CensorFilter")
            .field("whitelist", &self.whitelist)
            .field("detectors", &self.detector_names())
            .field("mask", &(self.mask as char))
            .finish()
    }
}

impl CensorFilter {
    /// Builds a filter with the IP and domain detectors, in that order.
    pub fn new(config: &CensorConfig) -> Result<Self> {
        let detectors: Vec<Box<dyn Detector>> = vec![
            Box::new(IpDetector),
            Box::new(DomainDetector::new(config)),
        ];
        Self::with_detectors(config, detectors)
    }

    /// Builds a filter from the embedded lists.
    pub fn with_default_lists() -> Result<Self> {
        let config = CensorConfig::shared_default()?;
        Self::new(config)
    }

    /// Builds a filter with a custom detector chain. Detectors run in the
    /// given order and the first hit wins.
    pub fn with_detectors(config: &CensorConfig, detectors: Vec<Box<dyn Detector>>) -> Result<Self> {
        config.validate()?;

        let whitelist = WhitelistMatcher::new(&config.whitelist)
            .map_err(|e| CensorError::Whitelist(e.to_string()))
            .context("Failed to build whitelist for CensorFilter")?;

        debug!(
            "CensorFilter ready with detectors {:?} and {} whitelist entries.",
            detectors.iter().map(|d| d.name()).collect::<Vec<_>>(),
            config.whitelist.len()
        );

        Ok(Self {
            whitelist,
            detectors,
            mask: config.mask_byte(),
        })
    }

    pub fn detector_names(&self) -> Vec<&'static str> {
        self.detectors.iter().map(|d| d.name()).collect()
    }

    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Decides what to do with a message without touching it.
    pub fn evaluate(&self, message: &[u8]) -> Verdict {
        let verdict = if self.whitelist.is_whitelisted(message) {
            Verdict::Whitelisted
        } else {
            self.detectors
                .iter()
                .find_map(|d| d.detect(message))
                .map_or(Verdict::Clean, Verdict::Redacted)
        };
        log_verdict_debug(module_path!(), message, &verdict);
        verdict
    }

    /// Evaluates and, on redaction, overwrites every byte with the mask.
    /// The slice is never resized.
    pub fn censor_in_place(&self, message: &mut [u8]) -> Verdict {
        let verdict = self.evaluate(message);
        if verdict.is_redacted() {
            message.fill(self.mask);
        }
        verdict
    }

    /// Censors a string. Borrows the input when it passes through; on
    /// redaction returns a mask string of the same byte length.
    pub fn censor<'a>(&self, message: &'a str) -> Cow<'a, str> {
        self.censor_with_verdict(message).0
    }

    pub fn censor_with_verdict<'a>(&self, message: &'a str) -> (Cow<'a, str>, Verdict) {
        let verdict = self.evaluate(message.as_bytes());
        let output = if verdict.is_redacted() {
            Cow::Owned(char::from(self.mask).to_string().repeat(message.len()))
        } else {
            Cow::Borrowed(message)
        };
        (output, verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::Detection;

    struct AlwaysFires;

    impl Detector for AlwaysFires {
        fn name(&self) -> &'static str {
            "always"
        }

        fn detect(&self, _message: &[u8]) -> Option<Detection> {
            Some(Detection { detector: "always".to_string(), detail: String::new() })
        }
    }

    fn filter() -> CensorFilter {
        CensorFilter::with_default_lists().unwrap()
    }

    #[test]
    fn test_detector_order() {
        assert_eq!(filter().detector_names(), vec!["ip_address", "domain_name"]);
    }

    #[test]
    fn test_ip_wins_over_domain() {
        // Both detectors would fire; the IP detector runs first.
        match filter().evaluate(b"connect 1.2.3.4 or example.com") {
            Verdict::Redacted(d) => assert_eq!(d.detector, "ip_address"),
            other => panic!("unexpected verdict {:?}", other),
        }
    }

    #[test]
    fn test_whitelist_short_circuits_custom_detectors() {
        let config = CensorConfig::load_default().unwrap();
        let detectors: Vec<Box<dyn Detector>> = vec![Box::new(AlwaysFires)];
        let f = CensorFilter::with_detectors(&config, detectors).unwrap();
        assert_eq!(f.evaluate(b"IMPLAZA.lk rocks"), Verdict::Whitelisted);
        assert!(f.evaluate(b"hello").is_redacted());
    }

    #[test]
    fn test_censor_in_place_keeps_length() {
        let mut buf = *b"my server 10.0.0.1";
        let verdict = filter().censor_in_place(&mut buf);
        assert!(verdict.is_redacted());
        assert_eq!(buf.len(), "my server 10.0.0.1".len());
        assert!(buf.iter().all(|&b| b == b'*'));
    }

    #[test]
    fn test_censor_borrows_on_pass_through() {
        let f = filter();
        assert!(matches!(f.censor("gg wp"), Cow::Borrowed("gg wp")));
        assert!(matches!(f.censor("implaza.lk 1.2.3.4"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_censor_masks_by_byte_length() {
        let out = filter().censor("café example.com now");
        assert_eq!(out.len(), "café example.com now".len());
        assert!(out.bytes().all(|b| b == b'*'));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = CensorConfig { mask: 'a', ..CensorConfig::default() };
        assert!(CensorFilter::new(&config).is_err());
    }
}
