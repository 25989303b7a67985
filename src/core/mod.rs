// Core modules implementing the value model, parser, and error modeling.
pub(crate) mod cursor;
pub mod error;
pub(crate) mod number;
pub mod parse;
pub mod status;
pub mod value;
