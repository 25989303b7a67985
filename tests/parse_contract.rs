//! Purpose: Lock the public parse contract: statuses, kinds, payloads.
//! Exports: Integration tests only (no runtime exports).
//! Role: Exercise the crate strictly through `plainjson::api`.
//! Invariants: Every non-Ok status comes back with a Null value.

use plainjson::api::{Kind, ParseStatus, Value, get_number, get_type, parse, parse_detailed};

fn assert_status(text: &str, expected: ParseStatus) {
    let (value, status) = parse(text);
    assert_eq!(status, expected, "input {text:?}");
    if !status.is_ok() {
        assert_eq!(get_type(&value), Kind::Null, "input {text:?}");
    }
}

fn number_of(text: &str) -> f64 {
    let (value, status) = parse(text);
    assert_eq!(status, ParseStatus::Ok, "input {text:?}");
    assert_eq!(get_type(&value), Kind::Number, "input {text:?}");
    get_number(&value)
}

#[test]
fn literals() {
    for (text, kind) in [("true", Kind::True), ("false", Kind::False), ("null", Kind::Null)] {
        let (value, status) = parse(text);
        assert_eq!(status, ParseStatus::Ok);
        assert_eq!(get_type(&value), kind);
    }
}

#[test]
fn expect_value() {
    assert_status("", ParseStatus::ExpectValue);
    assert_status(" ", ParseStatus::ExpectValue);
    assert_status("\t\r\n ", ParseStatus::ExpectValue);
}

#[test]
fn invalid_literals() {
    for text in ["tru", "truee", "fals", "nul", "?", "nil", "TRUE"] {
        assert_status(text, ParseStatus::InvalidValue);
    }
}

#[test]
fn root_not_singular() {
    for text in ["true false", "null x", "false\tnull", "0 0", "1.5 2", "0x0", "0x123"] {
        assert_status(text, ParseStatus::RootNotSingular);
    }
}

#[test]
#[allow(clippy::approx_constant)]
fn valid_numbers() {
    let cases = [
        ("0", 0.0),
        ("-0", 0.0),
        ("-0.0", 0.0),
        ("1", 1.0),
        ("-1", -1.0),
        ("1.5", 1.5),
        ("-1.5", -1.5),
        ("3.14", 3.14),
        ("3.1416", 3.1416),
        ("1E10", 1e10),
        ("1e10", 1e10),
        ("1E+10", 1e10),
        ("1E-10", 1e-10),
        ("-1E10", -1e10),
        ("-1e10", -1e10),
        ("-1E+10", -1e10),
        ("-1E-10", -1e-10),
        ("1.234E+10", 1.234e10),
        ("1.234E-10", 1.234e-10),
        ("-1.5E-3", -0.0015),
        ("1e-10000", 0.0),
    ];

    for (text, expected) in cases {
        assert_eq!(number_of(text), expected, "input {text:?}");
    }
}

#[test]
fn negative_zero_keeps_sign() {
    assert!(number_of("-0").is_sign_negative());
    assert!(number_of("0").is_sign_positive());
}

#[test]
fn boundary_doubles() {
    assert_eq!(number_of("1.0000000000000002"), 1.0000000000000002);
    assert_eq!(number_of("4.9406564584124654e-324"), f64::from_bits(1));
    assert_eq!(number_of("-4.9406564584124654e-324"), -f64::from_bits(1));
    assert_eq!(number_of("2.2250738585072009e-308"), f64::from_bits(0x000f_ffff_ffff_ffff));
    assert_eq!(number_of("2.2250738585072014e-308"), f64::MIN_POSITIVE);
    assert_eq!(number_of("1.7976931348623157e+308"), f64::MAX);
    assert_eq!(number_of("-1.7976931348623157e+308"), f64::MIN);
}

#[test]
fn invalid_numbers() {
    for text in [
        "01", "+1", "+0", ".5", ".123", "1.", "1e", "1E+", "-", "-a", "INF", "inf", "NAN", "nan",
        "--1", "-01", "1.e1", "1e.5",
    ] {
        assert_status(text, ParseStatus::InvalidValue);
    }
}

#[test]
fn number_too_big() {
    for text in ["1e400", "1e309", "-1e309", "-1e400"] {
        assert_status(text, ParseStatus::NumberTooBig);
    }
}

#[test]
fn parsing_is_idempotent() {
    for text in ["true", "null", "0", "-0", "3.25e-7", "123456789012345678901234567890"] {
        let (first, first_status) = parse(text);
        let (second, second_status) = parse(text);
        assert_eq!(first_status, second_status);
        assert_eq!(get_type(&first), get_type(&second));
        if let (Some(a), Some(b)) = (first.as_number(), second.as_number()) {
            assert_eq!(a.to_bits(), b.to_bits(), "input {text:?}");
        }
    }
}

#[test]
fn surrounding_whitespace_is_ignored() {
    for text in ["true", "null", "-1.5E-3", "0"] {
        let bare = parse(text);
        for wrapped in [
            format!(" {text}"),
            format!("{text} "),
            format!("\t\n{text}\r\n"),
            format!(" \r \t{text}\n \n"),
        ] {
            let padded = parse(&wrapped);
            assert_eq!(padded.1, bare.1, "input {wrapped:?}");
            assert_eq!(padded.0, bare.0, "input {wrapped:?}");
        }
    }
}

#[test]
fn values_are_send_sync_copy() {
    fn assert_traits<T: Copy + Send + Sync + 'static>() {}
    assert_traits::<Value>();
    assert_traits::<Kind>();
    assert_traits::<ParseStatus>();
}

#[test]
fn parallel_parses_do_not_interfere() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let text = format!("{i}.5e1");
                (0..200)
                    .map(|_| parse(&text).0.as_number())
                    .all(|n| n == Some((i as f64 + 0.5) * 10.0))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().expect("join"));
    }
}

#[test]
fn detailed_parse_reports_offsets() {
    let parsed = parse_detailed("  01");
    assert_eq!(parsed.status, ParseStatus::InvalidValue);
    assert_eq!(parsed.offset, Some(3));

    let parsed = parse_detailed("null x");
    assert_eq!(parsed.status, ParseStatus::RootNotSingular);
    assert_eq!(parsed.offset, Some(5));

    let parsed = parse_detailed("1e");
    assert_eq!(parsed.offset, Some(2));
}
