//! Result aggregation: merged candidate views, filtering and coverage.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use telemap_model::{Candidate, MatchKind};

/// Confidence floor for the high-confidence result view.
pub const HIGH_CONFIDENCE_MIN: f64 = 0.7;

/// The merged output of a full matching run.
///
/// Candidates are stored in pass-emission order; that order is the
/// deterministic tie-break whenever views are sorted by confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    candidates: Vec<Candidate>,
    telemetry_total: usize,
    sensor_total: usize,
}

/// Matched/total counts for one side of a result view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideCoverage {
    /// Distinct channel names appearing in at least one candidate.
    pub matched: usize,
    /// Total channel names in the header set.
    pub total: usize,
}

impl SideCoverage {
    /// Coverage as a percentage; 0.0 for an empty header set rather than a
    /// division error.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            100.0 * self.matched as f64 / self.total as f64
        }
    }
}

/// Coverage statistics for one view of the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coverage {
    /// Telemetry-side coverage.
    pub telemetry: SideCoverage,
    /// Sensor-side coverage.
    pub sensor: SideCoverage,
}

impl MatchResult {
    /// Wraps the candidates of a run together with the header-set totals.
    pub fn new(candidates: Vec<Candidate>, telemetry_total: usize, sensor_total: usize) -> Self {
        Self {
            candidates,
            telemetry_total,
            sensor_total,
        }
    }

    /// All candidates in pass-emission order.
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Telemetry header count the run was given.
    #[must_use]
    pub fn telemetry_total(&self) -> usize {
        self.telemetry_total
    }

    /// Sensor header count the run was given.
    #[must_use]
    pub fn sensor_total(&self) -> usize {
        self.sensor_total
    }

    /// All candidates sorted by descending confidence.
    ///
    /// The sort is stable, so equal confidences keep pass-emission order
    /// and output stays deterministic run to run.
    #[must_use]
    pub fn sorted_by_confidence(&self) -> Vec<Candidate> {
        let mut sorted = self.candidates.clone();
        sort_descending(&mut sorted);
        sorted
    }

    /// Candidates at or above [`HIGH_CONFIDENCE_MIN`], sorted descending.
    #[must_use]
    pub fn high_confidence(&self) -> Vec<Candidate> {
        let mut filtered: Vec<Candidate> = self
            .candidates
            .iter()
            .filter(|c| c.confidence >= HIGH_CONFIDENCE_MIN)
            .cloned()
            .collect();
        sort_descending(&mut filtered);
        filtered
    }

    /// Coverage over the full candidate list.
    #[must_use]
    pub fn coverage(&self) -> Coverage {
        coverage_of(&self.candidates, self.telemetry_total, self.sensor_total)
    }

    /// Coverage over the high-confidence subset.
    #[must_use]
    pub fn high_confidence_coverage(&self) -> Coverage {
        let high: Vec<Candidate> = self
            .candidates
            .iter()
            .filter(|c| c.confidence >= HIGH_CONFIDENCE_MIN)
            .cloned()
            .collect();
        coverage_of(&high, self.telemetry_total, self.sensor_total)
    }

    /// Candidate counts per match kind, for reporting.
    #[must_use]
    pub fn counts_by_kind(&self) -> BTreeMap<MatchKind, usize> {
        let mut counts = BTreeMap::new();
        for candidate in &self.candidates {
            *counts.entry(candidate.kind).or_insert(0) += 1;
        }
        counts
    }
}

fn sort_descending(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });
}

fn coverage_of(candidates: &[Candidate], telemetry_total: usize, sensor_total: usize) -> Coverage {
    let telemetry_matched: BTreeSet<&str> = candidates
        .iter()
        .map(|c| c.telemetry_name.as_str())
        .collect();
    let sensor_matched: BTreeSet<&str> =
        candidates.iter().map(|c| c.sensor_name.as_str()).collect();
    Coverage {
        telemetry: SideCoverage {
            matched: telemetry_matched.len(),
            total: telemetry_total,
        },
        sensor: SideCoverage {
            matched: sensor_matched.len(),
            total: sensor_total,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(telemetry: &str, sensor: &str, kind: MatchKind, confidence: f64) -> Candidate {
        Candidate {
            telemetry_name: telemetry.to_string(),
            sensor_name: sensor.to_string(),
            kind,
            confidence,
            evidence: String::new(),
        }
    }

    #[test]
    fn sort_is_stable_on_equal_confidence() {
        let result = MatchResult::new(
            vec![
                candidate("A", "a", MatchKind::Semantic, 0.5),
                candidate("B", "b", MatchKind::Semantic, 0.9),
                candidate("C", "c", MatchKind::Semantic, 0.5),
            ],
            3,
            3,
        );
        let sorted = result.sorted_by_confidence();
        let order: Vec<&str> = sorted.iter().map(|c| c.telemetry_name.as_str()).collect();
        assert_eq!(order, vec!["B", "A", "C"]);
    }

    #[test]
    fn high_confidence_filters_at_threshold_inclusive() {
        let result = MatchResult::new(
            vec![
                candidate("A", "a", MatchKind::DictionaryHigh, 0.7),
                candidate("B", "b", MatchKind::Semantic, 0.69),
                candidate("C", "c", MatchKind::Exact, 1.0),
            ],
            3,
            3,
        );
        let high = result.high_confidence();
        let names: Vec<&str> = high.iter().map(|c| c.telemetry_name.as_str()).collect();
        assert_eq!(names, vec!["C", "A"]);
    }

    #[test]
    fn coverage_counts_distinct_names() {
        // One telemetry name matched twice still counts once.
        let result = MatchResult::new(
            vec![
                candidate("Speed", "Vx", MatchKind::Semantic, 0.6),
                candidate("Speed", "Vx_SM", MatchKind::Semantic, 0.55),
            ],
            4,
            8,
        );
        let coverage = result.coverage();
        assert_eq!(coverage.telemetry.matched, 1);
        assert_eq!(coverage.sensor.matched, 2);
        assert_eq!(coverage.telemetry.percent(), 25.0);
        assert_eq!(coverage.sensor.percent(), 25.0);
    }

    #[test]
    fn empty_header_sets_report_zero_percent() {
        let result = MatchResult::new(Vec::new(), 0, 0);
        let coverage = result.coverage();
        assert_eq!(coverage.telemetry.percent(), 0.0);
        assert_eq!(coverage.sensor.percent(), 0.0);
        let high = result.high_confidence_coverage();
        assert_eq!(high.telemetry.percent(), 0.0);
    }

    #[test]
    fn counts_by_kind_tally() {
        let result = MatchResult::new(
            vec![
                candidate("A", "a", MatchKind::Exact, 1.0),
                candidate("B", "b", MatchKind::Exact, 1.0),
                candidate("C", "c", MatchKind::Semantic, 0.5),
            ],
            3,
            3,
        );
        let counts = result.counts_by_kind();
        assert_eq!(counts.get(&MatchKind::Exact), Some(&2));
        assert_eq!(counts.get(&MatchKind::Semantic), Some(&1));
        assert_eq!(counts.get(&MatchKind::DictionaryExact), None);
    }
}
