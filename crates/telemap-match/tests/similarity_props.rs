use proptest::prelude::*;

use telemap_match::similarity;
use telemap_match::token::tokenize;

proptest! {
    #[test]
    fn similarity_is_symmetric(a in ".{0,40}", b in ".{0,40}") {
        prop_assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }

    #[test]
    fn similarity_is_bounded(a in ".{0,40}", b in ".{0,40}") {
        let score = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn similarity_identity_on_tokenizable_input(a in ".{0,40}") {
        if tokenize(&a).is_empty() {
            prop_assert_eq!(similarity(&a, &a), 0.0);
        } else {
            prop_assert_eq!(similarity(&a, &a), 1.0);
        }
    }

    #[test]
    fn empty_side_never_matches(b in ".{0,40}") {
        prop_assert_eq!(similarity("", &b), 0.0);
        prop_assert_eq!(similarity(&b, ""), 0.0);
    }

    #[test]
    fn tokenize_never_panics_and_never_emits_empty_tokens(a in ".{0,80}") {
        for token in tokenize(&a) {
            prop_assert!(!token.is_empty());
            prop_assert!(token.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }
}
