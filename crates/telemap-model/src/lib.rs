#![deny(unsafe_code)]

//! Data model for telemetry/sensor channel reconciliation.
//!
//! This crate defines the shared vocabulary of the workspace: header sets as
//! read from the two data sources, match candidates produced by the matching
//! passes, and coverage statistics computed over a finished run. It carries
//! no I/O and no matching logic.

mod candidate;
mod header;

pub use candidate::{Candidate, MatchKind, MatchPass, ParseKindError};
pub use header::{HeaderSet, Source};
