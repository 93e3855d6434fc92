#![deny(unsafe_code)]

//! Matching engine for telemetry/sensor channel reconciliation.
//!
//! Two independently produced header sets rarely agree on spelling: a data
//! logger exports `FL Rotor Temp`, the simulation exports `T_Rtr_L1`. This
//! crate infers which pairs denote the same physical quantity using three
//! escalating passes:
//!
//! 1. **Exact** — case-insensitive raw-name equality.
//! 2. **Dictionary** — both names are resolved to descriptive longhand text
//!    through a shorthand dictionary and compared by token overlap.
//! 3. **Semantic** — the raw telemetry name is compared directly against
//!    each sensor channel's resolved description.
//!
//! Earlier passes claim the names they match; claimed names are excluded
//! from later passes. The output is a ranked list of [`Candidate`]s with
//! confidence scores in `[0, 1]`.
//!
//! [`Candidate`]: telemap_model::Candidate

pub mod aggregate;
pub mod dictionary;
pub mod engine;
pub mod similarity;
pub mod text;
pub mod token;

pub use aggregate::{Coverage, MatchResult, SideCoverage};
pub use dictionary::{DictionaryEntry, ShorthandDictionary};
pub use engine::MatchEngine;
pub use similarity::similarity;
