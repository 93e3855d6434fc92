//! Match candidates and their provenance.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which matching pass produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MatchPass {
    /// Pass 1: case-insensitive raw-name equality.
    Exact,
    /// Pass 2: dictionary-resolved description similarity.
    Dictionary,
    /// Pass 3: raw-name vs. description token overlap.
    Semantic,
}

/// Classification of a proposed correspondence.
///
/// The three `Dictionary*` kinds are similarity bands over the same Pass-2
/// score; they exist so reports can distinguish near-certain dictionary hits
/// from borderline ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MatchKind {
    /// Raw names equal under case-insensitive comparison.
    Exact,
    /// Dictionary description similarity in (0.5, 0.7].
    #[serde(rename = "Dictionary-Medium")]
    DictionaryMedium,
    /// Dictionary description similarity in (0.7, 0.8].
    #[serde(rename = "Dictionary-High")]
    DictionaryHigh,
    /// Dictionary description similarity above 0.8.
    #[serde(rename = "Dictionary-Exact")]
    DictionaryExact,
    /// Token overlap between the raw telemetry name and a sensor description.
    Semantic,
}

impl MatchKind {
    /// Report label for this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "Exact",
            Self::DictionaryMedium => "Dictionary-Medium",
            Self::DictionaryHigh => "Dictionary-High",
            Self::DictionaryExact => "Dictionary-Exact",
            Self::Semantic => "Semantic",
        }
    }

    /// The pass that emits candidates of this kind.
    #[must_use]
    pub fn pass(&self) -> MatchPass {
        match self {
            Self::Exact => MatchPass::Exact,
            Self::DictionaryMedium | Self::DictionaryHigh | Self::DictionaryExact => {
                MatchPass::Dictionary
            }
            Self::Semantic => MatchPass::Semantic,
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a match-kind label cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown match kind: {0}")]
pub struct ParseKindError(pub String);

impl FromStr for MatchKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Exact" => Ok(Self::Exact),
            "Dictionary-Medium" => Ok(Self::DictionaryMedium),
            "Dictionary-High" => Ok(Self::DictionaryHigh),
            "Dictionary-Exact" => Ok(Self::DictionaryExact),
            "Semantic" => Ok(Self::Semantic),
            other => Err(ParseKindError(other.to_string())),
        }
    }
}

/// One proposed telemetry/sensor correspondence.
///
/// Produced by exactly one pass and never mutated afterwards; downstream
/// stages only filter, sort and write candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Raw telemetry channel name, verbatim from the header row.
    pub telemetry_name: String,
    /// Raw sensor channel name, verbatim from the header row.
    pub sensor_name: String,
    /// Classification of the correspondence.
    pub kind: MatchKind,
    /// Score in `[0, 1]` estimating correctness.
    pub confidence: f64,
    /// Text the match was scored against (resolved descriptions, or a note
    /// for exact matches).
    pub evidence: String,
}

impl Candidate {
    /// The pass that produced this candidate.
    #[must_use]
    pub fn pass(&self) -> MatchPass {
        self.kind.pass()
    }
}
