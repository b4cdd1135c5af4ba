// adcensor-core/src/report.rs
//! Aggregated scan results for reporting.
//!
//! Records never carry message text, only a fingerprint and the byte length,
//! so reports can be shared without re-publishing the advertisement.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::lines::chat_lines;
use crate::policy::CensorFilter;
use crate::verdict::{message_fingerprint, Verdict};

/// The verdict for one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRecord {
    /// 1-based line number.
    pub line: u64,
    pub length: usize,
    pub fingerprint: String,
    #[serde(flatten)]
    pub verdict: Verdict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub generated_at: String,
    pub total: usize,
    pub redacted: usize,
    pub whitelisted: usize,
    pub clean: usize,
    pub records: Vec<ScanRecord>,
}

impl ScanReport {
    /// Evaluates every line of `input` as a separate message. Lines are
    /// split by [`chat_lines`] and evaluated on their raw bytes.
    pub fn from_lines(filter: &CensorFilter, input: &[u8]) -> Self {
        let records: Vec<ScanRecord> = chat_lines(input)
            .enumerate()
            .map(|(idx, line)| ScanRecord {
                line: idx as u64 + 1,
                length: line.message.len(),
                fingerprint: message_fingerprint(line.message),
                verdict: filter.evaluate(line.message),
            })
            .collect();

        let count = |label: &str| records.iter().filter(|r| r.verdict.label() == label).count();

        Self {
            generated_at: Utc::now().to_rfc3339(),
            total: records.len(),
            redacted: count("redacted"),
            whitelisted: count("whitelisted"),
            clean: count("clean"),
            records,
        }
    }

    /// Only the records that would be censored.
    pub fn redacted_records(&self) -> impl Iterator<Item = &ScanRecord> {
        self.records.iter().filter(|r| r.verdict.is_redacted())
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize scan report")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_line_numbers() -> Result<()> {
        let filter = CensorFilter::with_default_lists()?;
        let input = b"gg wp\njoin 192.168.0.10\nimplaza.lk is home\nvisit example.com now\n";
        let report = ScanReport::from_lines(&filter, input);

        assert_eq!(report.total, 4);
        assert_eq!(report.redacted, 2);
        assert_eq!(report.whitelisted, 1);
        assert_eq!(report.clean, 1);

        let lines: Vec<u64> = report.redacted_records().map(|r| r.line).collect();
        assert_eq!(lines, vec![2, 4]);
        Ok(())
    }

    #[test]
    fn test_json_has_no_message_text() -> Result<()> {
        let filter = CensorFilter::with_default_lists()?;
        let report = ScanReport::from_lines(&filter, b"join 192.168.0.10");
        let json = report.to_json_pretty()?;

        assert!(!json.contains("192.168"));
        let value: serde_json::Value = serde_json::from_str(&json)?;
        assert_eq!(value["records"][0]["verdict"], "redacted");
        assert_eq!(value["records"][0]["detector"], "ip_address");
        assert_eq!(value["records"][0]["length"], 17);
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_is_judged_on_raw_bytes() -> Result<()> {
        let filter = CensorFilter::with_default_lists()?;
        let line = b"\xff\xff\xff\xff.a.b.c";
        let report = ScanReport::from_lines(&filter, line);

        assert_eq!(report.redacted, 1);
        assert_eq!(report.records[0].length, line.len());
        assert_eq!(report.records[0].verdict, filter.evaluate(line));
        Ok(())
    }

    #[test]
    fn test_crlf_is_not_counted_in_length() -> Result<()> {
        let filter = CensorFilter::with_default_lists()?;
        let report = ScanReport::from_lines(&filter, b"gg wp\r\n");
        assert_eq!(report.records[0].length, 5);
        assert_eq!(report.clean, 1);
        Ok(())
    }
}
