//! Purpose: Validate and convert JSON number literals.
//! Exports: `scan`, `convert`, `Conversion`, `Range`, `Malformed`.
//! Role: Number half of the parser; grammar check first, conversion second.
//! Invariants: `scan` is pure lookahead over the input and never backtracks.
//! Invariants: `convert` reports overflow explicitly; there is no global error state.

/// Grammar violation found while scanning; `at` is relative to the scan start.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Malformed {
    pub(crate) at: usize,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Range {
    InRange,
    Overflow,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Conversion {
    pub(crate) value: f64,
    pub(crate) range: Range,
}

/// Returns the length of the number literal at the start of `bytes`.
///
/// Grammar: `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`.
/// A leading `0` directly followed by another digit is rejected.
pub(crate) fn scan(bytes: &[u8]) -> Result<usize, Malformed> {
    let at = |p: usize| bytes.get(p).copied();
    let mut p = 0;

    if at(p) == Some(b'-') {
        p += 1;
    }

    match at(p) {
        Some(b'0') => {
            p += 1;
            if at(p).is_some_and(|ch| ch.is_ascii_digit()) {
                return Err(Malformed { at: p });
            }
        }
        Some(b'1'..=b'9') => p = skip_digits(bytes, p + 1),
        _ => return Err(Malformed { at: p }),
    }

    if at(p) == Some(b'.') {
        p += 1;
        p = require_digits(bytes, p)?;
    }

    if let Some(b'e' | b'E') = at(p) {
        p += 1;
        if let Some(b'+' | b'-') = at(p) {
            p += 1;
        }
        p = require_digits(bytes, p)?;
    }

    Ok(p)
}

fn skip_digits(bytes: &[u8], mut p: usize) -> usize {
    while bytes.get(p).is_some_and(|ch| ch.is_ascii_digit()) {
        p += 1;
    }
    p
}

fn require_digits(bytes: &[u8], p: usize) -> Result<usize, Malformed> {
    let end = skip_digits(bytes, p);
    if end == p {
        return Err(Malformed { at: p });
    }
    Ok(end)
}

/// Converts a literal already accepted by [`scan`] using round-to-nearest.
///
/// Returns `None` only if `literal` is not a float the standard parser accepts,
/// which cannot happen for scanned input.
pub(crate) fn convert(literal: &str) -> Option<Conversion> {
    let value: f64 = literal.parse().ok()?;
    let range = if value.is_infinite() {
        Range::Overflow
    } else {
        Range::InRange
    };
    Some(Conversion { value, range })
}
