//! Purpose: Render parsed values for CLI output, optionally with ANSI color.
//! Exports: `Report`, `render_human`.
//! Role: Small, pure formatters used by the `parse` command.
//! Invariants: JSON reports carry `number` only for number values.
//! Invariants: ANSI escapes appear only when explicitly enabled.
use plainjson::api::{Kind, Value};
use serde::Serialize;

// Same palette as stderr labels; avoid bright variants.
const COLOR_KIND: &str = "36";
const COLOR_NUMBER: &str = "33";
const COLOR_BOOL: &str = "35";
const COLOR_NULL: &str = "39";

#[derive(Debug, PartialEq, Serialize)]
pub struct Report {
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<f64>,
}

impl From<&Value> for Report {
    fn from(value: &Value) -> Self {
        Self {
            kind: value.kind().as_str(),
            number: value.as_number(),
        }
    }
}

/// One line: the kind, then the payload for numbers (`number 3.14`).
pub fn render_human(value: &Value, use_color: bool) -> String {
    let mut out = String::new();
    match value.kind() {
        Kind::Null => push_colored("null", COLOR_NULL, use_color, &mut out),
        Kind::True | Kind::False => {
            push_colored(value.kind().as_str(), COLOR_BOOL, use_color, &mut out)
        }
        Kind::Number => {
            push_colored(Kind::Number.as_str(), COLOR_KIND, use_color, &mut out);
            out.push(' ');
            let text = value.as_number().map(|n| n.to_string()).unwrap_or_default();
            push_colored(&text, COLOR_NUMBER, use_color, &mut out);
        }
    }
    out
}

fn push_colored(text: &str, color: &str, use_color: bool, out: &mut String) {
    if !use_color {
        out.push_str(text);
        return;
    }
    out.push_str("\u{1b}[");
    out.push_str(color);
    out.push('m');
    out.push_str(text);
    out.push_str("\u{1b}[0m");
}
