#![deny(unsafe_code)]

//! CSV adapters for channel reconciliation inputs.
//!
//! The matching core is format-agnostic; this crate turns the two kinds of
//! delimited input into its in-memory types: a two-column shorthand
//! dictionary, and header rows buried at source-specific positions inside
//! data exports.

mod dictionary;
mod error;
mod headers;

pub use dictionary::load_dictionary;
pub use error::{IngestError, Result};
pub use headers::{HeaderRowSpec, load_header_set, read_header_row};
