//! Byte classification shared by every scanner.
//!
//! The IP and domain scanners both walk the message one byte at a time and
//! decide what to do based on the class of that byte. Both go through
//! [`classify`] so that "separator" and "digit-like" have exactly one
//! definition.

/// The coarse class of a single input byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// An ASCII digit or a letter commonly used to impersonate one
    /// (`o`/`O` for 0, `i`/`I`/`l`/`L` for 1).
    DigitLike,
    /// A group boundary: `.` `,` space `-` `/` `\`.
    Separator,
    /// Any other ASCII letter or digit.
    Alphanumeric,
    /// Whitespace other than the plain space, which is a separator.
    Whitespace,
    /// Everything else, including non-ASCII bytes.
    Other,
}

/// Characters that the domain view folds to `.` before classification.
pub const DOT_ALIASES: [u8; 4] = [b'(', b'[', b'{', b'@'];

#[inline]
pub fn lowercase(b: u8) -> u8 {
    b.to_ascii_lowercase()
}

/// Maps bracket-style characters and `@` onto the dot separator.
#[inline]
pub fn fold_dot_alias(b: u8) -> u8 {
    if DOT_ALIASES.contains(&b) {
        b'.'
    } else {
        b
    }
}

#[inline]
pub fn is_digit_like(b: u8) -> bool {
    b.is_ascii_digit() || matches!(b, b'o' | b'O' | b'i' | b'I' | b'l' | b'L')
}

#[inline]
pub fn is_separator(b: u8) -> bool {
    matches!(b, b'.' | b',' | b' ' | b'-' | b'/' | b'\\')
}

/// The C `isspace` set. Unlike `u8::is_ascii_whitespace` this includes the
/// vertical tab.
#[inline]
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// True when `cur` is the same i/l/o letter as `prev` in the other case.
#[inline]
pub fn is_lookalike_pair(prev: u8, cur: u8) -> bool {
    prev != cur
        && prev.eq_ignore_ascii_case(&cur)
        && matches!(cur.to_ascii_lowercase(), b'i' | b'l' | b'o')
}

/// Classifies a byte. Earlier classes take precedence, so `o` is
/// `DigitLike` and `-` is a `Separator`.
pub fn classify(b: u8) -> CharClass {
    if is_digit_like(b) {
        CharClass::DigitLike
    } else if is_separator(b) {
        CharClass::Separator
    } else if b.is_ascii_alphanumeric() {
        CharClass::Alphanumeric
    } else if is_space(b) {
        CharClass::Whitespace
    } else {
        CharClass::Other
    }
}

/// Classification as seen by the domain scanner: lowercased, with dot
/// aliases folded to `.` first.
pub fn classify_for_domain(b: u8) -> (u8, CharClass) {
    let folded = fold_dot_alias(lowercase(b));
    (folded, classify(folded))
}
