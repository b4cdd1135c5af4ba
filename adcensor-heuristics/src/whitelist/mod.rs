// adcensor-heuristics/src/whitelist/mod.rs
use daachorse::DoubleArrayAhoCorasick;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

/// Failure to build the whitelist automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhitelistError {
    Automaton(String),
}

impl fmt::Display for WhitelistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WhitelistError::Automaton(msg) => write!(f, "whitelist automaton: {}", msg),
        }
    }
}

/// Case-insensitive containment test for allow-listed domains.
///
/// Any occurrence of an entry anywhere in the message counts, including
/// inside unrelated text. Entries are not validated as domains.
pub struct WhitelistMatcher {
    automaton: Option<DoubleArrayAhoCorasick<usize>>,
}

impl fmt::Debug for WhitelistMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WhitelistMatcher")
         .field("automaton", &self.automaton.as_ref().map(|_| "<DoubleArrayAhoCorasick>"))
         .finish()
    }
}

impl WhitelistMatcher {
    /// Builds a matcher over the given entries. Entries are lowercased;
    /// empty and repeated entries are skipped. With no usable entries the
    /// matcher never matches.
    pub fn new<I, S>(entries: I) -> Result<Self, WhitelistError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns: Vec<String> = Vec::new();
        for entry in entries {
            let lowered = entry.as_ref().to_ascii_lowercase();
            if !lowered.is_empty() && !patterns.contains(&lowered) {
                patterns.push(lowered);
            }
        }

        if patterns.is_empty() {
            return Ok(Self { automaton: None });
        }

        let automaton = DoubleArrayAhoCorasick::new(&patterns)
            .map_err(|e| WhitelistError::Automaton(e.to_string()))?;

        Ok(Self { automaton: Some(automaton) })
    }

    /// Returns true if any entry occurs in `text`, ignoring ASCII case.
    ///
    /// The lowercase copy lives only for this call. If it cannot be
    /// allocated the message is treated as not whitelisted.
    pub fn is_whitelisted(&self, text: &[u8]) -> bool {
        let Some(automaton) = &self.automaton else {
            return false;
        };

        let mut lowered: Vec<u8> = Vec::new();
        if lowered.try_reserve_exact(text.len()).is_err() {
            return false;
        }
        lowered.extend(text.iter().map(u8::to_ascii_lowercase));

        automaton.find_iter(&lowered).next().is_some()
    }
}
