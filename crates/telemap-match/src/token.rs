//! Word-token extraction from channel names and descriptions.

use std::collections::BTreeSet;

/// Tokens carrying no discriminating power in channel descriptions.
const STOPWORDS: [&str; 10] = ["the", "of", "for", "at", "in", "on", "to", "a", "an", "and"];

/// Extracts lowercase word tokens from free text.
///
/// The pipeline is: strip parenthesized unit annotations such as
/// `(deg/s)`, split on every non-alphanumeric character and on camel-case
/// boundaries (`GPSAltitude` splits into `gps` and `altitude`), lowercase,
/// and drop stopwords. Returns an empty vector for degenerate input; never
/// fails.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let stripped = strip_parenthesized(text);
    split_words(&stripped)
        .into_iter()
        .filter(|token| !is_stopword(token))
        .collect()
}

/// Tokenizes and collapses into a set; duplicates within one description do
/// not inflate overlap beyond presence/absence.
#[must_use]
pub fn token_set(text: &str) -> BTreeSet<String> {
    tokenize(text).into_iter().collect()
}

/// Removes parenthesized substrings non-greedily. An unmatched `(` is kept
/// as-is rather than swallowing the rest of the string.
fn strip_parenthesized(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('(') {
        match rest[open..].find(')') {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

/// Splits into maximal word runs, lowercased.
///
/// Word boundaries are non-alphanumeric characters plus camel-case
/// transitions: a lowercase-to-uppercase step (`WheelSpeed`) and the
/// acronym boundary where an uppercase run is followed by a lowercase
/// letter (`GPSAltitude` -> `GPS` + `Altitude`). Digits never introduce a
/// boundary, so `C185` stays one token.
fn split_words(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();
    for (i, &ch) in chars.iter().enumerate() {
        if !ch.is_ascii_alphanumeric() {
            flush(&mut words, &mut current);
            continue;
        }
        if ch.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_ascii_lowercase());
            if prev.is_ascii_lowercase() || (prev.is_ascii_uppercase() && next_is_lower) {
                flush(&mut words, &mut current);
            }
        }
        current.push(ch.to_ascii_lowercase());
    }
    flush(&mut words, &mut current);
    words
}

fn flush(words: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_unit_annotations() {
        assert_eq!(
            tokenize("Gyro Yaw Velocity (deg/s)"),
            ["gyro", "yaw", "velocity"]
        );
        assert_eq!(tokenize("(a) middle (b) end"), ["middle", "end"]);
    }

    #[test]
    fn unmatched_paren_is_literal() {
        assert_eq!(tokenize("Brake (front pressure"), ["brake", "front", "pressure"]);
    }

    #[test]
    fn splits_on_separators_and_camel_case() {
        assert_eq!(tokenize("GPS_Altitude"), ["gps", "altitude"]);
        assert_eq!(tokenize("GPSAltitude"), ["gps", "altitude"]);
        assert_eq!(tokenize("WheelSpeed FL"), ["wheel", "speed", "fl"]);
    }

    #[test]
    fn digits_do_not_split() {
        assert_eq!(tokenize("C185 G Force Lat"), ["c185", "g", "force", "lat"]);
    }

    #[test]
    fn drops_stopwords() {
        assert_eq!(
            tokenize("Temperature of the Front Rotor"),
            ["temperature", "front", "rotor"]
        );
    }

    #[test]
    fn degenerate_input_yields_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("of the and").is_empty());
        assert!(tokenize("(deg/s)").is_empty());
    }

    #[test]
    fn token_set_collapses_duplicates() {
        let set = token_set("speed speed SPEED");
        assert_eq!(set.len(), 1);
        assert!(set.contains("speed"));
    }
}
