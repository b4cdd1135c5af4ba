// adcensor-heuristics/src/lib.rs
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod normalize;
pub mod whitelist;
pub mod ip;
pub mod domain;

pub use normalize::CharClass;
pub use whitelist::{WhitelistError, WhitelistMatcher};
pub use ip::{detect_ip, looks_like_ip, IpPass};
pub use domain::{DomainHit, DomainScanner, HitPosition};
