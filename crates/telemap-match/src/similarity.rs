//! Token-overlap similarity between free-text strings.

use crate::token::token_set;

/// Jaccard index over the token sets of two strings, in `[0, 1]`.
///
/// Returns 0.0 when either side tokenizes to nothing — an empty description
/// never counts as a perfect match. Symmetric in its arguments, and equal to
/// 1.0 for any string whose token set is non-empty compared with itself.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let tokens_a = token_set(a);
    let tokens_b = token_set(b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }
    let intersection = tokens_a.intersection(&tokens_b).count();
    let union = tokens_a.union(&tokens_b).count();
    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_descriptions_score_one() {
        assert_eq!(similarity("GPS Altitude", "GPS Altitude"), 1.0);
    }

    #[test]
    fn spelling_variants_of_same_tokens_score_one() {
        assert_eq!(similarity("GPSAltitude", "GPS_Altitude"), 1.0);
    }

    #[test]
    fn partial_overlap_is_a_ratio() {
        // {wheel, speed, fl} vs {wheel, speed, rear}: 2 shared of 4 total.
        assert_eq!(similarity("Wheel Speed FL", "wheel speed rear"), 0.5);
    }

    #[test]
    fn empty_side_scores_zero() {
        assert_eq!(similarity("", "GPS Altitude"), 0.0);
        assert_eq!(similarity("GPS Altitude", ""), 0.0);
        assert_eq!(similarity("", ""), 0.0);
        assert_eq!(similarity("of the", "of the"), 0.0);
    }

    #[test]
    fn duplicates_do_not_inflate_overlap() {
        assert_eq!(similarity("speed speed", "speed"), 1.0);
    }

    #[test]
    fn disjoint_tokens_score_zero() {
        assert_eq!(similarity("Brake Pressure", "Fuel Flow"), 0.0);
    }
}
