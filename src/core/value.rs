//! Purpose: Typed result of a parse call.
//! Exports: `Kind`, `Value`.
//! Role: Plain, freely copyable datum handed back to callers.
//! Invariants: The numeric payload is read only when `kind == Kind::Number`.
//! Invariants: `Value::default()` is Null; failed parses always yield Null.

use std::fmt;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Kind {
    #[default]
    Null,
    True,
    False,
    Number,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::True => "true",
            Kind::False => "false",
            Kind::Number => "number",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Value {
    kind: Kind,
    n: f64,
}

impl Value {
    pub fn null() -> Self {
        Self::default()
    }

    pub fn boolean(value: bool) -> Self {
        let kind = if value { Kind::True } else { Kind::False };
        Self { kind, n: 0.0 }
    }

    pub fn number(n: f64) -> Self {
        Self {
            kind: Kind::Number,
            n,
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Numeric payload of a number value.
    ///
    /// # Panics
    ///
    /// Panics when the value is not a number. Use [`Value::as_number`] when the
    /// kind is not already known.
    pub fn get_number(&self) -> f64 {
        assert_eq!(
            self.kind,
            Kind::Number,
            "get_number called on a {} value",
            self.kind
        );
        self.n
    }

    pub fn as_number(&self) -> Option<f64> {
        match self.kind {
            Kind::Number => Some(self.n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.kind {
            Kind::True => Some(true),
            Kind::False => Some(false),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        self.kind == Kind::Null
    }

    pub(crate) fn set_kind(&mut self, kind: Kind) {
        self.kind = kind;
    }

    pub(crate) fn set_number(&mut self, n: f64) {
        self.kind = Kind::Number;
        self.n = n;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

// Payloads of non-number values are ignored.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self.kind, other.kind) {
            (Kind::Number, Kind::Number) => self.n == other.n,
            (left, right) => left == right,
        }
    }
}
