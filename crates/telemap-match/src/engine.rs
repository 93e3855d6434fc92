//! Three-pass matching engine.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use telemap_model::{Candidate, HeaderSet, MatchKind};

use crate::aggregate::MatchResult;
use crate::dictionary::ShorthandDictionary;
use crate::similarity::similarity;

/// Minimum dictionary-description similarity for a Pass-2 candidate.
const PASS2_MIN_SCORE: f64 = 0.5;
/// Above this Pass-2 score, a candidate is `Dictionary-High`.
const DICT_HIGH_MIN: f64 = 0.7;
/// Above this Pass-2 score, a candidate is `Dictionary-Exact`.
const DICT_EXACT_MIN: f64 = 0.8;
/// Minimum token-overlap score for a Pass-3 candidate.
const PASS3_MIN_SCORE: f64 = 0.4;
/// Pass 3 keeps every candidate within this distance of the best score.
const PASS3_CLUSTER_WINDOW: f64 = 0.1;

/// Names already claimed by an earlier pass, per side.
///
/// Initialized fresh for every run and threaded through the passes by
/// reference; nothing is shared between runs. A claimed name is excluded
/// from all later passes, which gives Pass 2 its one-to-one guarantee.
#[derive(Debug, Default)]
struct ClaimedSets {
    telemetry: BTreeSet<String>,
    sensor: BTreeSet<String>,
}

impl ClaimedSets {
    fn claim(&mut self, telemetry_name: &str, sensor_name: &str) {
        self.telemetry.insert(telemetry_name.to_string());
        self.sensor.insert(sensor_name.to_string());
    }
}

/// Orchestrates the exact, dictionary and semantic passes over two header
/// sets, producing a ranked candidate list.
///
/// The dictionary is injected by reference and read-only; the engine holds
/// no mutable state between runs.
///
/// # Example
///
/// ```
/// use telemap_match::{MatchEngine, ShorthandDictionary};
/// use telemap_model::{HeaderSet, Source};
///
/// let dictionary = ShorthandDictionary::from_rows(Vec::new());
/// let engine = MatchEngine::new(&dictionary);
/// let telemetry = HeaderSet::new(Source::Telemetry, vec!["Time".to_string()]);
/// let sensor = HeaderSet::new(Source::Sensor, vec!["time".to_string()]);
/// let result = engine.run(&telemetry, &sensor);
/// assert_eq!(result.candidates().len(), 1);
/// ```
pub struct MatchEngine<'a> {
    dictionary: &'a ShorthandDictionary,
}

impl<'a> MatchEngine<'a> {
    /// Creates an engine over the given dictionary.
    pub fn new(dictionary: &'a ShorthandDictionary) -> Self {
        Self { dictionary }
    }

    /// Runs all three passes and returns the full ordered result.
    ///
    /// Candidates appear in pass order (exact, dictionary, semantic) and in
    /// emission order within each pass; this order is the tie-break for the
    /// stable confidence sorts downstream.
    pub fn run(&self, telemetry: &HeaderSet, sensor: &HeaderSet) -> MatchResult {
        let mut claimed = ClaimedSets::default();
        let mut candidates = Vec::new();

        self.pass_exact(telemetry, sensor, &mut claimed, &mut candidates);
        let after_exact = candidates.len();
        debug!(candidates = after_exact, "exact pass complete");

        self.pass_dictionary(telemetry, sensor, &mut claimed, &mut candidates);
        let after_dictionary = candidates.len();
        debug!(
            candidates = after_dictionary - after_exact,
            "dictionary pass complete"
        );

        self.pass_semantic(telemetry, sensor, &claimed, &mut candidates);
        debug!(
            candidates = candidates.len() - after_dictionary,
            "semantic pass complete"
        );

        MatchResult::new(candidates, telemetry.len(), sensor.len())
    }

    /// Pass 1: case-insensitive raw-name equality, confidence 1.0.
    ///
    /// Every pair that compares equal is emitted — a telemetry name equal to
    /// two sensor names yields two candidates, and all participating names
    /// are claimed. The pass itself performs no one-to-one dedup; that
    /// looseness is part of the contract.
    fn pass_exact(
        &self,
        telemetry: &HeaderSet,
        sensor: &HeaderSet,
        claimed: &mut ClaimedSets,
        candidates: &mut Vec<Candidate>,
    ) {
        for telemetry_name in telemetry.iter() {
            for sensor_name in sensor.iter() {
                if telemetry_name.eq_ignore_ascii_case(sensor_name) {
                    candidates.push(Candidate {
                        telemetry_name: telemetry_name.to_string(),
                        sensor_name: sensor_name.to_string(),
                        kind: MatchKind::Exact,
                        confidence: 1.0,
                        evidence: "identical channel names".to_string(),
                    });
                    claimed.claim(telemetry_name, sensor_name);
                }
            }
        }
    }

    /// Pass 2: greedy dictionary-description matching, strictly one-to-one.
    ///
    /// Telemetry outer, sensor inner, both in header order; the first
    /// qualifying pairing wins and claims both names immediately. Greedy
    /// first-match-wins is the contract — no globally optimal assignment.
    fn pass_dictionary(
        &self,
        telemetry: &HeaderSet,
        sensor: &HeaderSet,
        claimed: &mut ClaimedSets,
        candidates: &mut Vec<Candidate>,
    ) {
        let sensor_longhands = self.resolve_longhands(sensor, claimed);
        for telemetry_name in telemetry.iter() {
            if claimed.telemetry.contains(telemetry_name) {
                continue;
            }
            let telemetry_longhand = self.dictionary.lookup_longhand(telemetry_name);
            for sensor_name in sensor.iter() {
                if claimed.sensor.contains(sensor_name) {
                    continue;
                }
                let Some(sensor_longhand) = sensor_longhands.get(sensor_name) else {
                    continue;
                };
                let score = similarity(&telemetry_longhand, sensor_longhand);
                if score > PASS2_MIN_SCORE {
                    candidates.push(Candidate {
                        telemetry_name: telemetry_name.to_string(),
                        sensor_name: sensor_name.to_string(),
                        kind: dictionary_kind(score),
                        confidence: score,
                        evidence: format!("{telemetry_longhand} ~ {sensor_longhand}"),
                    });
                    claimed.claim(telemetry_name, sensor_name);
                    break;
                }
            }
        }
    }

    /// Pass 3: raw telemetry name against dictionary-resolved sensor
    /// descriptions.
    ///
    /// Only the sensor side is dictionary-resolved; the telemetry side is
    /// compared raw. For each telemetry name the pass keeps the top cluster:
    /// every sensor scoring above 0.4 and within 0.1 of that name's best
    /// score. Nothing is claimed, so one telemetry name may emit several
    /// semantic candidates.
    fn pass_semantic(
        &self,
        telemetry: &HeaderSet,
        sensor: &HeaderSet,
        claimed: &ClaimedSets,
        candidates: &mut Vec<Candidate>,
    ) {
        let sensor_longhands = self.resolve_longhands(sensor, claimed);
        for telemetry_name in telemetry.iter() {
            if claimed.telemetry.contains(telemetry_name) {
                continue;
            }
            let mut scored: Vec<(&str, &str, f64)> = Vec::new();
            for sensor_name in sensor.iter() {
                if claimed.sensor.contains(sensor_name) {
                    continue;
                }
                let Some(sensor_longhand) = sensor_longhands.get(sensor_name) else {
                    continue;
                };
                let score = similarity(telemetry_name, sensor_longhand);
                if score > PASS3_MIN_SCORE {
                    scored.push((sensor_name, sensor_longhand, score));
                }
            }
            let Some(best) = scored.iter().map(|(_, _, score)| *score).reduce(f64::max) else {
                continue;
            };
            for (sensor_name, sensor_longhand, score) in scored {
                if score >= best - PASS3_CLUSTER_WINDOW {
                    candidates.push(Candidate {
                        telemetry_name: telemetry_name.to_string(),
                        sensor_name: sensor_name.to_string(),
                        kind: MatchKind::Semantic,
                        confidence: score,
                        evidence: sensor_longhand.to_string(),
                    });
                }
            }
        }
    }

    /// Resolves longhands for every unclaimed sensor name once per pass.
    /// Lookup is pure, so caching cannot change results.
    fn resolve_longhands(
        &self,
        sensor: &HeaderSet,
        claimed: &ClaimedSets,
    ) -> BTreeMap<String, String> {
        let mut longhands = BTreeMap::new();
        for sensor_name in sensor.iter() {
            if claimed.sensor.contains(sensor_name) {
                continue;
            }
            longhands
                .entry(sensor_name.to_string())
                .or_insert_with(|| self.dictionary.lookup_longhand(sensor_name));
        }
        longhands
    }
}

/// Bands a Pass-2 score into its dictionary kind; the highest applicable
/// label wins.
fn dictionary_kind(score: f64) -> MatchKind {
    if score > DICT_EXACT_MIN {
        MatchKind::DictionaryExact
    } else if score > DICT_HIGH_MIN {
        MatchKind::DictionaryHigh
    } else {
        MatchKind::DictionaryMedium
    }
}
