//! A `Detector` that flags messages containing a known top-level domain
//! after a separator.
//! License: MIT OR APACHE 2.0

use adcensor_heuristics::domain::{DomainScanner, HitPosition};

use crate::config::CensorConfig;
use crate::detector::Detector;
use crate::verdict::Detection;

pub const DOMAIN_DETECTOR_NAME: &str = "domain_name";

#[derive(Debug, Clone)]
pub struct DomainDetector {
    tlds: Vec<String>,
    trailing_tlds: Vec<String>,
}

impl DomainDetector {
    pub fn new(config: &CensorConfig) -> Self {
        Self {
            tlds: config.tlds.clone(),
            trailing_tlds: config.trailing_tlds.clone(),
        }
    }
}

impl Detector for DomainDetector {
    fn name(&self) -> &'static str {
        DOMAIN_DETECTOR_NAME
    }

    fn detect(&self, message: &[u8]) -> Option<Detection> {
        let hit = DomainScanner::new(&self.tlds, &self.trailing_tlds).scan(message)?;
        let position = match hit.position {
            HitPosition::MidText => "mid-text",
            HitPosition::Trailing => "trailing",
        };
        Some(Detection {
            detector: DOMAIN_DETECTOR_NAME.to_string(),
            detail: format!("{} .{}", position, hit.tld),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_reports_tld_and_position() -> Result<()> {
        let detector = DomainDetector::new(&CensorConfig::load_default()?);

        let d = detector.detect(b"visit example.com now").unwrap();
        assert_eq!(d.detector, "domain_name");
        assert_eq!(d.detail, "mid-text .com");

        let d = detector.detect(b"come to best.lk").unwrap();
        assert_eq!(d.detail, "trailing .lk");
        Ok(())
    }

    #[test]
    fn test_clean() -> Result<()> {
        let detector = DomainDetector::new(&CensorConfig::load_default()?);
        assert!(detector.detect(b"nothing here").is_none());
        assert!(detector.detect(b"a.b").is_none());
        Ok(())
    }
}
