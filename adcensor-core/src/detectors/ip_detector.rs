//! A `Detector` that flags dotted-quad shaped text, including letter
//! lookalikes and repeated-character camouflage.
//! License: MIT OR APACHE 2.0

use adcensor_heuristics::ip::detect_ip;

use crate::detector::Detector;
use crate::verdict::Detection;

pub const IP_DETECTOR_NAME: &str = "ip_address";

#[derive(Debug, Default, Clone, Copy)]
pub struct IpDetector;

impl Detector for IpDetector {
    fn name(&self) -> &'static str {
        IP_DETECTOR_NAME
    }

    fn detect(&self, message: &[u8]) -> Option<Detection> {
        detect_ip(message).map(|pass| Detection {
            detector: IP_DETECTOR_NAME.to_string(),
            detail: pass.as_str().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_pass() {
        let d = IpDetector.detect(b"192.168.1.1").unwrap();
        assert_eq!(d.detector, "ip_address");
        assert_eq!(d.detail, "structural");

        let d = IpDetector.detect(b"aaaa.bb.cc.dd").unwrap();
        assert_eq!(d.detail, "repetition");
    }

    #[test]
    fn test_clean() {
        assert!(IpDetector.detect(b"19216811").is_none());
        assert!(IpDetector.detect(b"a.b").is_none());
    }
}
