//! Parsing the base quantity from user text.
//!
//! Reads a leading integer the way a number field does: surrounding
//! whitespace is skipped, an optional sign is honoured, and parsing stops
//! at the first non-digit. Anything unparseable or negative becomes 0.

/// Default upper bound for a parsed base quantity.
pub const DEFAULT_MAX_BASE: i64 = 10_000;

/// Parse a base quantity, clamping into `0..=max_base`.
///
/// ```
/// use ccg_counters::core::parse_base;
///
/// assert_eq!(parse_base("3", 100), 3);
/// assert_eq!(parse_base(" 12 tokens", 100), 12);
/// assert_eq!(parse_base("abc", 100), 0);
/// assert_eq!(parse_base("-4", 100), 0);
/// assert_eq!(parse_base("5000", 100), 100);
/// ```
#[must_use]
pub fn parse_base(text: &str, max_base: i64) -> i64 {
    leading_integer(text).unwrap_or(0).clamp(0, max_base.max(0))
}

fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first().copied()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        value = value.saturating_mul(10).saturating_add(i64::from(byte - b'0'));
    }

    seen.then_some(if negative { -value } else { value })
}
