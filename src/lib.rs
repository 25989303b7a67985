//! Purpose: Library crate for strict parsing of JSON literals and numbers.
//! Exports: `api` (parse entry points, value model, status codes, errors).
//! Role: Backs the `plainjson` CLI and is usable directly as a library.
//! Invariants: `api` is the only public path; `core` stays private.
//! Invariants: Parsing holds no global state; every call owns its cursor.
pub mod api;
mod core;

pub use api::{Kind, ParseStatus, Value, get_number, get_type, parse};
