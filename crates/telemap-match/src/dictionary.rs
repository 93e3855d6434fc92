//! Shorthand-to-longhand channel dictionary.

use std::collections::BTreeMap;

use tracing::debug;

use crate::similarity::similarity;
use crate::text::strip_whitespace;

/// Minimum similarity for the reverse (description-scan) lookup fallback.
const REVERSE_LOOKUP_MIN: f64 = 0.5;

/// One usable dictionary row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// Whitespace-stripped shorthand key, case preserved.
    pub shorthand: String,
    /// Descriptive longhand text, verbatim.
    pub longhand: String,
}

/// An immutable mapping from compact channel codes to descriptive text.
///
/// Built once at startup and injected into the [`MatchEngine`] by
/// reference; there is no ambient/global dictionary state.
///
/// [`MatchEngine`]: crate::engine::MatchEngine
#[derive(Debug, Clone, Default)]
pub struct ShorthandDictionary {
    /// Entries in load order; the reverse lookup scans these.
    entries: Vec<DictionaryEntry>,
    /// Stripped shorthand -> index into `entries`. First occurrence wins.
    by_key: BTreeMap<String, usize>,
    /// Rows discarded during the build because a side was not usable text.
    dropped: usize,
}

impl ShorthandDictionary {
    /// Builds a dictionary from raw `(shorthand, longhand)` rows.
    ///
    /// Rows where either side is blank after trimming are dropped; the drop
    /// count is retained for reporting. Duplicate shorthand keys keep the
    /// first-loaded longhand.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut dictionary = Self::default();
        for (shorthand, longhand) in rows {
            if shorthand.trim().is_empty() || longhand.trim().is_empty() {
                dictionary.dropped += 1;
                continue;
            }
            let key = strip_whitespace(&shorthand);
            let index = dictionary.entries.len();
            dictionary.entries.push(DictionaryEntry {
                shorthand: key.clone(),
                longhand,
            });
            dictionary.by_key.entry(key).or_insert(index);
        }
        debug!(
            entries = dictionary.entries.len(),
            dropped = dictionary.dropped,
            "dictionary built"
        );
        dictionary
    }

    /// Number of usable entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no usable entries were loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows discarded during the build.
    #[must_use]
    pub fn dropped_rows(&self) -> usize {
        self.dropped
    }

    /// Entries in load order.
    pub fn entries(&self) -> impl Iterator<Item = &DictionaryEntry> {
        self.entries.iter()
    }

    /// Resolves a channel name to its descriptive longhand.
    ///
    /// Lookup order:
    /// 1. exact match on the whitespace-stripped key (case-sensitive);
    /// 2. reverse scan: the raw key is scored against every longhand, and
    ///    the best-scoring description is returned if it beats 0.5 — channel
    ///    names are often not literal shorthands yet still closer to some
    ///    description than to nothing (ties keep the first-loaded entry);
    /// 3. the key itself, unchanged.
    #[must_use]
    pub fn lookup_longhand(&self, key: &str) -> String {
        let stripped = strip_whitespace(key);
        if let Some(&index) = self.by_key.get(&stripped) {
            return self.entries[index].longhand.clone();
        }
        let mut best: Option<(f64, usize)> = None;
        for (index, entry) in self.entries.iter().enumerate() {
            let score = similarity(key, &entry.longhand);
            if best.is_none_or(|(best_score, _)| score > best_score) {
                best = Some((score, index));
            }
        }
        match best {
            Some((score, index)) if score > REVERSE_LOOKUP_MIN => {
                self.entries[index].longhand.clone()
            }
            _ => key.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(s, l)| ((*s).to_string(), (*l).to_string()))
            .collect()
    }

    #[test]
    fn exact_key_lookup_is_whitespace_insensitive() {
        let dict = ShorthandDictionary::from_rows(rows(&[("AV x", "Angular Velocity X")]));
        assert_eq!(dict.lookup_longhand("AVx"), "Angular Velocity X");
        assert_eq!(dict.lookup_longhand("AV x"), "Angular Velocity X");
    }

    #[test]
    fn exact_key_lookup_is_case_sensitive() {
        let dict = ShorthandDictionary::from_rows(rows(&[("AVx", "Angular Velocity X")]));
        // "avx" misses the exact key and scores 0 against the longhand.
        assert_eq!(dict.lookup_longhand("avx"), "avx");
    }

    #[test]
    fn reverse_lookup_falls_back_to_best_description() {
        let dict = ShorthandDictionary::from_rows(rows(&[
            ("Qfuel", "Fuel flow rate"),
            ("GPS_Alt", "GPS Altitude above sea level"),
        ]));
        // Not a shorthand, but overlaps the second description well enough.
        assert_eq!(
            dict.lookup_longhand("GPS Altitude Sea Level"),
            "GPS Altitude above sea level"
        );
    }

    #[test]
    fn reverse_lookup_below_threshold_returns_key() {
        let dict = ShorthandDictionary::from_rows(rows(&[("Qfuel", "Fuel flow rate")]));
        assert_eq!(dict.lookup_longhand("Steering Angle"), "Steering Angle");
    }

    #[test]
    fn unknown_key_in_empty_dictionary_returns_key() {
        let dict = ShorthandDictionary::from_rows(Vec::new());
        assert!(dict.is_empty());
        assert_eq!(dict.lookup_longhand("GPSAltitude"), "GPSAltitude");
    }

    #[test]
    fn malformed_rows_are_dropped_not_fatal() {
        let mut all = Vec::new();
        for i in 0..818 {
            all.push((format!("Ch{i}"), format!("Channel number {i}")));
        }
        all.push((String::new(), "orphan description".to_string()));
        all.push(("OrphanKey".to_string(), String::new()));
        all.push(("  ".to_string(), "\t".to_string()));
        let dict = ShorthandDictionary::from_rows(all);
        assert_eq!(dict.len(), 818);
        assert_eq!(dict.dropped_rows(), 3);
    }

    #[test]
    fn duplicate_keys_keep_first_loaded_longhand() {
        let dict = ShorthandDictionary::from_rows(rows(&[
            ("Vx", "Longitudinal speed"),
            ("Vx", "Something else entirely"),
        ]));
        assert_eq!(dict.lookup_longhand("Vx"), "Longitudinal speed");
    }
}
