// adcensor-core/src/lib.rs
//! # adcensor Core Library
//!
//! `adcensor-core` decides whether a chat message advertises another server
//! (an IP address or a domain name, including obfuscated spellings) and, if
//! so, masks the whole message. Messages containing a whitelisted domain
//! always pass through untouched.
//!
//! The heavy lifting happens in the `no_std` scanners of
//! `adcensor-heuristics`; this crate combines them into a policy, supplies
//! the built-in lists and adapts the result to a plugin host.
//!
//! ## Modules
//!
//! * `config`: The embedded whitelist, TLD lists and mask, with validation.
//! * `detector`: The `Detector` trait, one heuristic check per implementation.
//! * `detectors`: The IP address and domain name detectors.
//! * `policy`: `CensorFilter`, which orders whitelist and detectors and applies the mask.
//! * `verdict`: Decision types and PII-safe debug logging.
//! * `lines`: Splitting raw input into chat messages.
//! * `report`: Per-line scan reports for the CLI.
//! * `host`: Plugin host glue (init, per-message hook, metadata, bounded copy).
//! * `errors`: The library error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use adcensor_core::CensorFilter;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let filter = CensorFilter::with_default_lists()?;
//!
//!     assert_eq!(filter.censor("gg wp"), "gg wp");
//!     assert_eq!(filter.censor("join 10.0.0.1"), "*************");
//!     assert_eq!(filter.censor("visit implaza.lk"), "visit implaza.lk");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Constructors return `anyhow::Result` with context. Host-facing helpers
//! return [`CensorError`]; [`CensorError::disables_plugin`] tells the host
//! whether it must stop calling the plugin.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod detector;
pub mod detectors;
pub mod errors;
pub mod host;
pub mod lines;
pub mod policy;
pub mod report;
pub mod verdict;

/// Re-exports the embedded configuration type.
pub use config::{CensorConfig, DEFAULT_MASK};

/// Re-exports the custom error type for clear error reporting.
pub use errors::CensorError;

/// Re-exports the detector seam and its implementations.
pub use detector::Detector;
pub use detectors::domain_detector::DomainDetector;
pub use detectors::ip_detector::IpDetector;

/// Re-exports the policy entry point.
pub use policy::CensorFilter;

/// Re-exports decision and reporting types.
pub use verdict::{Detection, Verdict};
pub use report::{ScanRecord, ScanReport};
pub use lines::{chat_lines, ChatLine};

/// Re-exports the host glue.
pub use host::{bounded_copy, CensorPlugin, MessageContext, PluginInfo};
