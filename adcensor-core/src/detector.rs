// adcensor-core/src/detector.rs
//! Defines the `Detector` trait.
//!
//! A detector answers a single question about a message ("does this look
//! like an IP address?", "does this contain a domain?"). The censor policy
//! runs its detectors in order and redacts on the first hit, so new kinds of
//! advertisement can be added without touching the policy.
//!
//! License: MIT OR APACHE 2.0

use crate::verdict::Detection;

/// A heuristic check over the raw bytes of one message.
pub trait Detector: Send + Sync {
    /// Stable name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Returns what was found, or `None` when the message is clean as far as
    /// this detector is concerned.
    ///
    /// Implementations must not keep state between calls.
    fn detect(&self, message: &[u8]) -> Option<Detection>;
}
