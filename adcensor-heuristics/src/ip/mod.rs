//! Tolerant detection of dotted-quad shaped text.
//!
//! Octets are never parsed. The scanner only asks whether the text looks
//! enough like an IP address to be a server advertisement, so `l92.l68.o.l`
//! counts and `999.999.999.999` counts too.

use crate::normalize::{classify, is_lookalike_pair, CharClass};

/// Which pass flagged the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpPass {
    /// Three groups of one to three digit-like bytes followed by the start
    /// of a fourth.
    Structural,
    /// Separators interleaved with repeated camouflage characters.
    Repetition,
}

impl IpPass {
    pub fn as_str(&self) -> &'static str {
        match self {
            IpPass::Structural => "structural",
            IpPass::Repetition => "repetition",
        }
    }
}

/// Longest run of digit-like bytes that still counts as a group.
const MAX_GROUP_LEN: usize = 3;
/// Completed groups needed before a fourth group can trigger.
const GROUPS_BEFORE_LAST: u8 = 3;
/// Separators the repetition pass waits for.
const REPETITION_SEPARATORS: usize = 3;
/// Repeats that must have accumulated by the third separator.
const MIN_REPEATS: usize = 3;

/// State of the structural pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuadState {
    Idle,
    /// Inside a run of digit-like bytes.
    Digits { groups: u8, run: usize },
    /// At least one group closed; no digit-like byte since the separator.
    AfterSeparator { groups: u8 },
}

impl QuadState {
    /// Three groups closed and the pending run is still short enough. While
    /// this holds, unrelated bytes do not reset the state.
    fn fourth_group_open(&self) -> bool {
        match *self {
            QuadState::Digits { groups, run } => groups == GROUPS_BEFORE_LAST && run <= MAX_GROUP_LEN,
            QuadState::AfterSeparator { groups } => groups == GROUPS_BEFORE_LAST,
            QuadState::Idle => false,
        }
    }

    fn on_digit(self) -> Self {
        match self {
            QuadState::Idle => QuadState::Digits { groups: 0, run: 1 },
            QuadState::Digits { groups, run } => QuadState::Digits { groups, run: run + 1 },
            QuadState::AfterSeparator { groups } => QuadState::Digits { groups, run: 1 },
        }
    }

    fn on_separator(self) -> Self {
        match self {
            QuadState::Digits { groups, run } if run <= MAX_GROUP_LEN => {
                QuadState::AfterSeparator { groups: groups + 1 }
            }
            // Doubled separators and over-long runs leave the state alone.
            other => other,
        }
    }

    fn on_other(self) -> Self {
        if self.fourth_group_open() {
            self
        } else {
            QuadState::Idle
        }
    }
}

/// First pass: counts groups of digit-like bytes between separators.
pub fn structural_pass(text: &[u8]) -> bool {
    let mut state = QuadState::Idle;

    for &b in text {
        state = match classify(b) {
            CharClass::DigitLike => {
                let next = state.on_digit();
                if next.fourth_group_open() {
                    return true;
                }
                next
            }
            CharClass::Separator => state.on_separator(),
            _ => state.on_other(),
        };
    }

    false
}

/// Second pass: repeated characters (or i/l/o case pairs) around separators,
/// as in `lll.ooo.lll.ooo`.
pub fn repetition_pass(text: &[u8]) -> bool {
    let mut prev: Option<u8> = None;
    let mut repeats = 0usize;
    let mut separators = 0usize;

    for &b in text {
        if classify(b) == CharClass::Separator {
            separators += 1;
            if separators == REPETITION_SEPARATORS && repeats >= MIN_REPEATS {
                return true;
            }
        } else if let Some(p) = prev {
            if p == b || is_lookalike_pair(p, b) {
                repeats += 1;
            }
        }
        prev = Some(b);
    }

    false
}

/// Runs both passes in order and reports the first that fires.
pub fn detect_ip(text: &[u8]) -> Option<IpPass> {
    if structural_pass(text) {
        Some(IpPass::Structural)
    } else if repetition_pass(text) {
        Some(IpPass::Repetition)
    } else {
        None
    }
}

pub fn looks_like_ip(text: &[u8]) -> bool {
    detect_ip(text).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_dotted_quad() {
        assert_eq!(detect_ip(b"192.168.1.1"), Some(IpPass::Structural));
        assert_eq!(detect_ip(b"join 10.0.0.7:28960 now"), Some(IpPass::Structural));
    }

    #[test]
    fn test_numeric_validity_is_not_checked() {
        assert!(structural_pass(b"999.999.999.999"));
    }

    #[test]
    fn test_lookalike_digits_and_mixed_separators() {
        assert!(structural_pass(b"l92,l68/o\\l"));
        assert!(structural_pass(b"lIl.lIl.lIl.lIl"));
        assert!(looks_like_ip(b"lIl.lIl.lIl.lIl"));
    }

    #[test]
    fn test_mixed_case_lookalike_quad_is_structural() {
        // `l` and `I` are different letters, so no repeats are counted.
        assert!(!repetition_pass(b"lIl.lIl.lIl.lIl"));
        assert_eq!(detect_ip(b"lIl.lIl.lIl.lIl"), Some(IpPass::Structural));
    }

    #[test]
    fn test_no_separators_never_triggers_structural() {
        assert!(!structural_pass(b"19216811"));
        assert!(!looks_like_ip(b"19216811"));
    }

    #[test]
    fn test_too_few_groups() {
        assert!(!looks_like_ip(b"a.b"));
        assert!(!looks_like_ip(b"1.2.3"));
        assert!(!looks_like_ip(b""));
    }

    #[test]
    fn test_doubled_separators_are_tolerated() {
        assert!(structural_pass(b"1..2..3..4"));
    }

    #[test]
    fn test_long_run_does_not_close_group() {
        // "1234" is too long to be a group and the run keeps growing.
        assert!(!structural_pass(b"1234.5.6.7"));
    }

    #[test]
    fn test_letter_resets_partial_match() {
        assert!(!structural_pass(b"1.2.x3.4"));
    }

    #[test]
    fn test_guard_keeps_state_after_three_groups() {
        // After "1.2.3." unrelated bytes do not reset, so any later
        // digit-like byte completes the match.
        assert!(structural_pass(b"1.2.3.abc4"));
        assert!(structural_pass(b"1.2.3. hello"));
    }

    #[test]
    fn test_repetition_pass_alone() {
        assert!(!structural_pass(b"aaaa.bb.cc.dd"));
        assert!(repetition_pass(b"aaaa.bb.cc.dd"));
        assert_eq!(detect_ip(b"aaaa.bb.cc.dd"), Some(IpPass::Repetition));
    }

    #[test]
    fn test_repetition_counts_case_pairs() {
        // iI, Ll and oO each count as a repeat.
        assert!(repetition_pass(b"iI.Ll.oO.x"));
        assert!(!repetition_pass(b"iI.Ll.x.y"));
    }

    #[test]
    fn test_repetition_needs_repeats_by_third_separator() {
        // Repeats arriving after the third separator are too late.
        assert!(!repetition_pass(b"a.b.c.dddd"));
    }

    #[test]
    fn test_plain_sentence_is_clean() {
        assert!(!looks_like_ip(b"nothing here"));
        assert!(!looks_like_ip(b"good game everyone"));
    }
}
