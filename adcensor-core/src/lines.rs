// adcensor-core/src/lines.rs
//! Splitting a byte stream into chat messages.
//!
//! Every consumer of line-oriented input (censoring and scanning) goes
//! through [`chat_lines`], so both see exactly the same message bytes.

/// One message taken from a line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatLine<'a> {
    /// The raw message bytes, without `\n` and without a trailing `\r`.
    pub message: &'a [u8],
    /// Whether the line ended in `\r\n`.
    pub crlf: bool,
}

/// Splits `input` on `\n`. A final `\n` does not start an extra empty line,
/// and empty input yields no lines. Bytes are never decoded.
pub fn chat_lines(input: &[u8]) -> impl Iterator<Item = ChatLine<'_>> {
    let body = input.strip_suffix(b"\n").unwrap_or(input);
    let lines = (!input.is_empty()).then(|| body.split(|&b| b == b'\n'));

    lines.into_iter().flatten().map(|line| match line.strip_suffix(b"\r") {
        Some(message) => ChatLine { message, crlf: true },
        None => ChatLine { message: line, crlf: false },
    })
}
