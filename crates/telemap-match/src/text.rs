//! Text normalization primitives.
//!
//! Two distinct normalizations are used by the matcher and must not be
//! conflated: [`normalize`] is the deep form used for token comparison,
//! [`strip_whitespace`] is the shallow, case-preserving form that matches
//! the dictionary file's own key convention.

/// Lowercases and strips every character that is not an ASCII letter or
/// digit. Pure and total; empty input yields an empty string.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// Removes whitespace only, preserving case and punctuation.
///
/// Dictionary shorthand keys are whitespace-insensitive but case-sensitive;
/// this is the key-construction side of that convention.
#[must_use]
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|ch| !ch.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keeps_alphanumerics_lowercased() {
        assert_eq!(normalize("GPS_Altitude (m)"), "gpsaltitudem");
        assert_eq!(normalize("C185 G Force Lat"), "c185gforcelat");
    }

    #[test]
    fn normalize_empty_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("---"), "");
    }

    #[test]
    fn strip_whitespace_preserves_case_and_punctuation() {
        assert_eq!(strip_whitespace(" GPS Altitude "), "GPSAltitude");
        assert_eq!(strip_whitespace("T_Rtr_L1"), "T_Rtr_L1");
        assert_eq!(strip_whitespace("a\tb\nc"), "abc");
    }
}
