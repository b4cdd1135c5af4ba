//! errors.rs - Custom error types for the adcensor-core library.
//!
//! This module defines a structured error enum for the library, so the host
//! glue can tell a fatal contract violation (which must disable the plugin)
//! from an ordinary configuration problem.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `adcensor-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CensorError {
    #[error("bounded_copy: NULL dest")]
    NullDestination,

    #[error("bounded_copy: NULL src")]
    NullSource,

    #[error("bounded_copy: destination capacity {0} < 1")]
    InvalidCapacity(usize),

    #[error("Invalid censor list configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to build whitelist matcher: {0}")]
    Whitelist(String),
}

impl CensorError {
    /// True for argument errors that the host must answer by disabling the
    /// plugin instead of continuing with a possibly corrupt buffer.
    pub fn disables_plugin(&self) -> bool {
        matches!(
            self,
            CensorError::NullDestination | CensorError::NullSource | CensorError::InvalidCapacity(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_errors_are_fatal() {
        assert!(CensorError::NullDestination.disables_plugin());
        assert!(CensorError::NullSource.disables_plugin());
        assert!(CensorError::InvalidCapacity(0).disables_plugin());
        assert!(!CensorError::InvalidConfig("x".to_string()).disables_plugin());
    }

    #[test]
    fn test_messages() {
        assert_eq!(CensorError::NullDestination.to_string(), "bounded_copy: NULL dest");
        assert_eq!(
            CensorError::InvalidCapacity(0).to_string(),
            "bounded_copy: destination capacity 0 < 1"
        );
    }
}
