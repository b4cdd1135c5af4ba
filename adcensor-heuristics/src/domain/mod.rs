//! Domain name detection by TLD lookup.
//!
//! The text is split into "parts" on a generous set of separators (including
//! brackets and `@`, which are folded to `.`), and a part that exactly matches
//! a known top-level domain after at least one separator is a hit.

use crate::normalize::{classify_for_domain, CharClass};

/// Shortest message that can hold a domain (`a.io`).
pub const MIN_DOMAIN_LEN: usize = 4;

/// Capacity of the part buffer. Bytes beyond this are dropped.
pub const PART_CAPACITY: usize = 255;

/// Where in the message the TLD matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPosition {
    /// A part closed by a separator.
    MidText,
    /// The last part of the message.
    Trailing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainHit<'t> {
    pub tld: &'t str,
    pub position: HitPosition,
}

/// Fixed-capacity buffer for the part currently being collected.
/// Pushing into a full buffer silently drops the byte.
struct PartBuffer {
    bytes: [u8; PART_CAPACITY],
    len: usize,
}

impl PartBuffer {
    fn new() -> Self {
        Self { bytes: [0; PART_CAPACITY], len: 0 }
    }

    /// Returns false when the byte was dropped.
    fn push(&mut self, b: u8) -> bool {
        if self.len < PART_CAPACITY {
            self.bytes[self.len] = b;
            self.len += 1;
            true
        } else {
            false
        }
    }

    fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn clear(&mut self) {
        self.len = 0;
    }
}

fn find_tld<'t, S: AsRef<str>>(part: &[u8], set: &'t [S]) -> Option<&'t str> {
    set.iter()
        .map(AsRef::as_ref)
        .find(|tld| tld.as_bytes().eq_ignore_ascii_case(part))
}

/// Scans messages against a TLD list.
///
/// `trailing_only` entries are consulted only for the final part of the
/// message (used for `lk`).
#[derive(Debug, Clone, Copy)]
pub struct DomainScanner<'t, S: AsRef<str>> {
    tlds: &'t [S],
    trailing_only: &'t [S],
}

impl<'t, S: AsRef<str>> DomainScanner<'t, S> {
    pub fn new(tlds: &'t [S], trailing_only: &'t [S]) -> Self {
        Self { tlds, trailing_only }
    }

    pub fn contains_domain(&self, text: &[u8]) -> bool {
        self.scan(text).is_some()
    }

    pub fn scan(&self, text: &[u8]) -> Option<DomainHit<'t>> {
        if text.len() < MIN_DOMAIN_LEN {
            return None;
        }

        let mut part = PartBuffer::new();
        // Separators seen since the last reset.
        let mut dots = 0usize;
        // Whether a separator or a part byte was ever seen; never reset.
        let mut seen_dot = false;
        let mut seen_valid_char = false;

        for &raw in text {
            let (b, class) = classify_for_domain(raw);
            match class {
                CharClass::Separator => {
                    if part.is_empty() {
                        continue;
                    }
                    if dots > 0 {
                        if let Some(tld) = find_tld(part.as_bytes(), self.tlds) {
                            return Some(DomainHit { tld, position: HitPosition::MidText });
                        }
                    }
                    dots += 1;
                    part.clear();
                    seen_dot = true;
                }
                CharClass::DigitLike | CharClass::Alphanumeric => {
                    if part.push(b) {
                        seen_valid_char = true;
                    }
                }
                CharClass::Whitespace => {}
                CharClass::Other => {
                    part.clear();
                    dots = 0;
                }
            }
        }

        if part.is_empty() || !(seen_dot && seen_valid_char) {
            return None;
        }

        find_tld(part.as_bytes(), self.trailing_only)
            .or_else(|| find_tld(part.as_bytes(), self.tlds))
            .map(|tld| DomainHit { tld, position: HitPosition::Trailing })
    }
}
