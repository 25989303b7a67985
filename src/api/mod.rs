//! Purpose: Define the stable public Rust API boundary for plainjson.
//! Exports: Parse entry points, accessors, and the types they traffic in.
//! Role: Public, additive-only surface; hides cursor and number internals.
//! Invariants: Status codes and labels exposed here are stable once published.

pub use crate::core::error::{Error, ErrorKind, to_exit_code};
pub use crate::core::parse::{Parsed, parse, parse_bytes, parse_detailed, parse_value};
pub use crate::core::status::ParseStatus;
pub use crate::core::value::{Kind, Value};

pub fn get_type(value: &Value) -> Kind {
    value.kind()
}

/// Numeric payload of `value`.
///
/// # Panics
///
/// Panics if `value` is not a number.
pub fn get_number(value: &Value) -> f64 {
    value.get_number()
}

#[cfg(test)]
mod tests {
    use super::{Kind, ParseStatus, get_number, get_type, parse};

    #[test]
    fn accessors_read_parsed_values() {
        let (value, status) = parse("-1.5E-3");
        assert_eq!(status, ParseStatus::Ok);
        assert_eq!(get_type(&value), Kind::Number);
        assert_eq!(get_number(&value), -0.0015);
    }

    #[test]
    #[should_panic]
    fn get_number_rejects_null() {
        let (value, _) = parse("null");
        get_number(&value);
    }
}
