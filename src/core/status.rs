// Parse result codes: one closed set, stable numeric codes and labels.
use std::fmt;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ParseStatus {
    #[default]
    Ok = 0,
    ExpectValue = 1,
    InvalidValue = 2,
    RootNotSingular = 3,
    NumberTooBig = 4,
}

impl ParseStatus {
    pub const ALL: [ParseStatus; 5] = [
        ParseStatus::Ok,
        ParseStatus::ExpectValue,
        ParseStatus::InvalidValue,
        ParseStatus::RootNotSingular,
        ParseStatus::NumberTooBig,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    pub fn is_ok(self) -> bool {
        self == ParseStatus::Ok
    }

    /// Kebab-case label used in CLI output and error envelopes.
    pub fn label(self) -> &'static str {
        match self {
            ParseStatus::Ok => "ok",
            ParseStatus::ExpectValue => "expect-value",
            ParseStatus::InvalidValue => "invalid-value",
            ParseStatus::RootNotSingular => "root-not-singular",
            ParseStatus::NumberTooBig => "number-too-big",
        }
    }

    pub(crate) fn message(self) -> &'static str {
        match self {
            ParseStatus::Ok => "parsed successfully",
            ParseStatus::ExpectValue => "expected a value but found end of input",
            ParseStatus::InvalidValue => "invalid value",
            ParseStatus::RootNotSingular => "unexpected content after the root value",
            ParseStatus::NumberTooBig => "number is too big to represent as a double",
        }
    }

    pub(crate) fn hint(self) -> Option<&'static str> {
        match self {
            ParseStatus::Ok => None,
            ParseStatus::ExpectValue => {
                Some("Provide one of `true`, `false`, `null`, or a number.")
            }
            ParseStatus::InvalidValue => Some(
                "Literals are lowercase `true`/`false`/`null`; numbers have no leading `+`, no leading zeros, and digits on both sides of `.`.",
            ),
            ParseStatus::RootNotSingular => {
                Some("Input must hold exactly one value; remove the trailing content.")
            }
            ParseStatus::NumberTooBig => {
                Some("Magnitudes beyond ~1.8e308 cannot be represented; reduce the exponent.")
            }
        }
    }
}

impl fmt::Display for ParseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
