//! Channel header sets as read from the two data sources.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side of the reconciliation a header set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Source {
    /// Data-logger export (e.g. a Motec log).
    Telemetry,
    /// Simulation/sensor export (e.g. a CarSim run).
    Sensor,
}

impl Source {
    /// Returns the display name used in reports and logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Telemetry => "telemetry",
            Self::Sensor => "sensor",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered sequence of raw channel names from one source.
///
/// Names are kept verbatim (original casing and spacing) and are immutable
/// once loaded. Order does not affect matching results for Pass 1 and
/// Pass 3, but Pass 2 is greedy in header order, so the sequence is part of
/// the contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderSet {
    /// Which source these headers came from.
    pub source: Source,
    /// Raw channel names in file order.
    pub names: Vec<String>,
}

impl HeaderSet {
    /// Creates a header set from raw channel names.
    pub fn new(source: Source, names: Vec<String>) -> Self {
        Self { source, names }
    }

    /// Number of channel names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if the set holds no names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over raw channel names in file order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_set_preserves_order_and_casing() {
        let set = HeaderSet::new(
            Source::Telemetry,
            vec!["Time".to_string(), "GPS Altitude".to_string()],
        );
        assert_eq!(set.len(), 2);
        let names: Vec<&str> = set.iter().collect();
        assert_eq!(names, vec!["Time", "GPS Altitude"]);
    }

    #[test]
    fn source_display() {
        assert_eq!(Source::Telemetry.to_string(), "telemetry");
        assert_eq!(Source::Sensor.to_string(), "sensor");
    }
}
