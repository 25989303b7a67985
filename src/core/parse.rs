//! Purpose: Recursive-descent parser for one JSON literal or number.
//! Exports: `parse`, `parse_detailed`, `parse_bytes`, `parse_value`, `Parsed`.
//! Role: The only producer of `Value`s from text.
//! Invariants: Exactly one value must occupy the input, modulo surrounding whitespace.
//! Invariants: Every non-Ok outcome returns a Null value; no partial values escape.
//! Invariants: Malformed input never panics; failures come back as a `ParseStatus`.

use std::str::FromStr;

use tracing::{debug, trace};

use crate::core::cursor::Cursor;
use crate::core::error::Error;
use crate::core::number::{self, Range};
use crate::core::status::ParseStatus;
use crate::core::value::{Kind, Value};

/// Outcome of a parse call including where a failure was detected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parsed {
    pub value: Value,
    pub status: ParseStatus,
    /// Byte offset of the offending input; `None` when `status` is Ok.
    pub offset: Option<usize>,
}

impl Parsed {
    pub fn into_result(self) -> Result<Value, Error> {
        if self.status.is_ok() {
            Ok(self.value)
        } else {
            Err(Error::from_status(self.status, self.offset))
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Fault {
    status: ParseStatus,
    at: usize,
}

impl Fault {
    fn new(status: ParseStatus, at: usize) -> Self {
        Self { status, at }
    }
}

pub fn parse(text: &str) -> (Value, ParseStatus) {
    let parsed = parse_detailed(text);
    (parsed.value, parsed.status)
}

pub fn parse_detailed(text: &str) -> Parsed {
    parse_bytes(text.as_bytes())
}

/// Parses raw bytes; anything outside the ASCII grammar is ordinary content.
pub fn parse_bytes(input: &[u8]) -> Parsed {
    trace!(len = input.len(), "parse");
    let mut value = Value::default();
    let mut cursor = Cursor::new(input);

    match parse_root(&mut cursor, &mut value) {
        Ok(()) => Parsed {
            value,
            status: ParseStatus::Ok,
            offset: None,
        },
        Err(fault) => {
            value.reset();
            debug!(status = fault.status.label(), offset = fault.at, "parse failed");
            Parsed {
                value,
                status: fault.status,
                offset: Some(fault.at),
            }
        }
    }
}

pub fn parse_value(text: &str) -> Result<Value, Error> {
    parse_detailed(text).into_result()
}

impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_value(s)
    }
}

fn parse_root(cursor: &mut Cursor<'_>, value: &mut Value) -> Result<(), Fault> {
    cursor.skip_whitespace();
    read_value(cursor, value)?;
    cursor.skip_whitespace();
    if !cursor.at_end() {
        return Err(Fault::new(ParseStatus::RootNotSingular, cursor.pos()));
    }
    Ok(())
}

fn read_value(cursor: &mut Cursor<'_>, value: &mut Value) -> Result<(), Fault> {
    match cursor.peek() {
        Some(b't') => read_literal(cursor, value, b"true", Kind::True),
        Some(b'f') => read_literal(cursor, value, b"false", Kind::False),
        Some(b'n') => read_literal(cursor, value, b"null", Kind::Null),
        None => Err(Fault::new(ParseStatus::ExpectValue, cursor.pos())),
        Some(_) => read_number(cursor, value),
    }
}

// Caller has matched `literal[0]` at the cursor.
fn read_literal(
    cursor: &mut Cursor<'_>,
    value: &mut Value,
    literal: &'static [u8],
    kind: Kind,
) -> Result<(), Fault> {
    debug_assert_eq!(cursor.peek(), literal.first().copied());

    for (i, expected) in literal.iter().enumerate().skip(1) {
        if cursor.peek_at(i) != Some(*expected) {
            return Err(Fault::new(ParseStatus::InvalidValue, cursor.pos() + i));
        }
    }

    // `truee`, `nullx`: the token runs on past the keyword.
    let end = literal.len();
    if cursor.peek_at(end).is_some_and(|ch| ch.is_ascii_alphanumeric()) {
        return Err(Fault::new(ParseStatus::InvalidValue, cursor.pos() + end));
    }

    cursor.advance(end);
    value.set_kind(kind);
    Ok(())
}

fn read_number(cursor: &mut Cursor<'_>, value: &mut Value) -> Result<(), Fault> {
    let start = cursor.pos();
    let rest = cursor.rest();
    let len = number::scan(rest)
        .map_err(|malformed| Fault::new(ParseStatus::InvalidValue, start + malformed.at))?;

    let conversion = std::str::from_utf8(&rest[..len])
        .ok()
        .and_then(number::convert)
        .ok_or(Fault::new(ParseStatus::InvalidValue, start))?;

    value.set_number(conversion.value);
    if conversion.range == Range::Overflow {
        return Err(Fault::new(ParseStatus::NumberTooBig, start));
    }

    cursor.advance(len);
    Ok(())
}
