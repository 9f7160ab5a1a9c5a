//! Deleting terms by range and by pattern.

use regex::Regex;
use semtext::{AnnotatedText, CoreError, DeletionSet, HasSpan, Locale, Sentence, Term};

fn term(start: usize, end: usize) -> Term {
    Term::new(start, end).unwrap()
}

/// "ab" with one term per char.
fn ab() -> AnnotatedText {
    AnnotatedText::of_terms(Locale::new("it"), "ab", vec![term(0, 1), term(1, 2)]).unwrap()
}

fn spans(text: &AnnotatedText) -> Vec<(usize, usize)> {
    text.terms().map(|t| (t.start(), t.end())).collect()
}

// =============================================================================
// Ranges
// =============================================================================

mod ranges {
    use super::*;

    #[test]
    fn half_open_range_deletes_first_term() {
        let deleted = ab().delete_terms([0..1]).unwrap();
        assert_eq!(spans(&deleted), [(1, 2)]);
    }

    #[test]
    fn closed_point_range_deletes_term_at_point() {
        assert_eq!(spans(&ab().delete_terms([0..=0]).unwrap()), [(1, 2)]);
    }

    #[test]
    fn empty_range_deletes_nothing() {
        assert_eq!(ab().delete_terms([0..0]).unwrap(), ab());
    }

    #[test]
    fn covering_ranges_delete_everything() {
        assert_eq!(ab().delete_terms([0..2]).unwrap().term_count(), 0);
        assert_eq!(ab().delete_terms([0..=1]).unwrap().term_count(), 0);
        assert_eq!(ab().delete_terms([..]).unwrap().term_count(), 0);
    }

    #[test]
    fn open_end_does_not_reach_next_term() {
        assert_eq!(spans(&ab().delete_terms([0..1]).unwrap()), [(1, 2)]);
        assert_eq!(spans(&ab().delete_terms([1..]).unwrap()), [(0, 1)]);
    }

    #[test]
    fn several_ranges_are_united() {
        let text = AnnotatedText::of_terms(
            Locale::root(),
            "abcdef",
            vec![term(0, 1), term(2, 3), term(4, 6)],
        )
        .unwrap();
        let deleted = text.delete_terms([4..5, 0..1]).unwrap();
        assert_eq!(spans(&deleted), [(2, 3)]);
    }

    #[test]
    fn reversed_range_is_rejected() {
        #[allow(clippy::reversed_empty_ranges)]
        let err = ab().delete_terms([2..=0]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidRange(_)));
    }

    #[test]
    fn sentences_keep_their_bounds() {
        let text = AnnotatedText::of_sentences(
            Locale::root(),
            "ab cd",
            vec![
                Sentence::new(0, 2, vec![term(0, 2)]).unwrap(),
                Sentence::new(3, 5, vec![term(3, 5)]).unwrap(),
            ],
            Default::default(),
        )
        .unwrap();
        let deleted = text.delete_terms([0..5]).unwrap();
        assert_eq!(deleted.sentences().len(), 2);
        assert_eq!(deleted.sentences()[1].span().range(), 3..5);
        assert_eq!(deleted.term_count(), 0);
    }

    #[test]
    fn zero_width_terms_survive() {
        let text = AnnotatedText::of_terms(Locale::root(), "ab", vec![term(1, 1)]).unwrap();
        assert_eq!(text.delete_terms([0..=2]).unwrap().term_count(), 1);
    }

    #[test]
    fn deletion_set_coalesces() {
        let set = DeletionSet::new([0..2, 2..4]).unwrap();
        assert!(set.intersects(&term(3, 5)));
        assert!(!set.intersects(&term(4, 5)));
        assert!(DeletionSet::new([3..3]).unwrap().is_empty());

        let reused = ab().delete_in(&set).unwrap();
        assert_eq!(reused.term_count(), 0);
    }
}

// =============================================================================
// Patterns
// =============================================================================

mod patterns {
    use super::*;

    #[test]
    fn pattern_matches_like_the_equivalent_range() {
        assert_eq!(
            ab().delete_terms_matching("a").unwrap(),
            ab().delete_terms([0..1]).unwrap()
        );
        assert_eq!(
            ab().delete_terms_matching("ab").unwrap(),
            ab().delete_terms([0..2]).unwrap()
        );
    }

    #[test]
    fn empty_pattern_is_rejected() {
        assert!(matches!(
            ab().delete_terms_matching(""),
            Err(CoreError::InvalidPattern(_))
        ));
    }

    #[test]
    fn malformed_pattern_is_rejected() {
        assert!(matches!(
            ab().delete_terms_matching("(a"),
            Err(CoreError::InvalidPattern(_))
        ));
    }

    #[test]
    fn no_match_keeps_everything() {
        assert_eq!(ab().delete_terms_matching("z").unwrap(), ab());
    }

    #[test]
    fn matches_use_char_offsets() {
        // 'è' takes two bytes; the match of "x" must map to chars [3, 4)
        let text = AnnotatedText::of_terms(
            Locale::new("it"),
            "èè x",
            vec![term(0, 2), term(3, 4)],
        )
        .unwrap();
        let deleted = text.delete_terms_matching_regex(&Regex::new("x").unwrap()).unwrap();
        assert_eq!(spans(&deleted), [(0, 2)]);
        assert_eq!(deleted.text_of(deleted.term(0).unwrap()), "èè");
    }
}
