//! Merge scenarios.
//!
//! Diagrams show new terms (N) above existing terms (E) over char offsets.

use semtext::{
    AnnotatedText, HasSpan, Locale, Meaning, MeaningKind, MeaningStatus, Metadata, Sentence, Term,
};

fn meaning(id: &str, kind: MeaningKind, p: f64) -> Meaning {
    Meaning::new(id, kind, p).unwrap()
}

fn selected(start: usize, end: usize, m: Meaning) -> Term {
    Term::of(start, end, MeaningStatus::Selected, Some(m), vec![]).unwrap()
}

fn undecided(start: usize, end: usize) -> Term {
    Term::of(start, end, MeaningStatus::ToDisambiguate, None, vec![]).unwrap()
}

fn italian(text: &str, terms: Vec<Term>) -> AnnotatedText {
    AnnotatedText::of_terms(Locale::new("it"), text, terms).unwrap()
}

// =============================================================================
// Exact overlap
// =============================================================================

mod exact_overlap {
    use super::*;

    /// ```text
    /// N
    /// E
    /// 0
    /// ```
    #[test]
    fn same_span_merges_meanings() {
        let ma = meaning("a", MeaningKind::Entity, 0.3);
        let old = Term::of(0, 1, MeaningStatus::Selected, Some(ma.clone()), vec![ma]).unwrap();

        let mb = meaning("b", MeaningKind::Entity, 0.3);
        let new = Term::of(
            0,
            1,
            MeaningStatus::Selected,
            Some(mb.clone()),
            vec![meaning("c", MeaningKind::Entity, 0.3)],
        )
        .unwrap();

        let updated = italian("t", vec![old]).merge(vec![new]).unwrap();
        assert_eq!(updated.term_count(), 1);
        let term = updated.term(0).unwrap();
        assert_eq!(term.selected_meaning(), Some(&mb));
        assert_eq!(term.meanings().len(), 2);
        let total: f64 = term.meanings().iter().map(Meaning::probability).sum();
        assert!((total - 1.0).abs() <= semtext::TOLERANCE);
    }

    #[test]
    fn shared_candidate_is_deduplicated() {
        let a = meaning("a", MeaningKind::Entity, 0.5);
        let old = Term::of(0, 1, MeaningStatus::ToDisambiguate, None, vec![a.clone()]).unwrap();
        let new = Term::of(0, 1, MeaningStatus::ToDisambiguate, None, vec![a]).unwrap();

        let updated = italian("t", vec![old]).merge(vec![new]).unwrap();
        assert_eq!(updated.term(0).unwrap().meanings().len(), 1);
    }

    #[test]
    fn merging_twice_is_stable() {
        let text = italian("abcd", vec![undecided(0, 2), undecided(2, 4)]);
        let new = selected(1, 3, meaning("x", MeaningKind::Concept, 1.0));
        let once = text.merge(vec![new.clone()]).unwrap();
        let twice = once.merge(vec![new]).unwrap();
        assert_eq!(once, twice);
    }
}

// =============================================================================
// Partial overlap
// =============================================================================

mod partial_overlap {
    use super::*;

    /// ```text
    ///   N1N1
    /// E1E1E2E2
    /// 0 1 2 3
    /// ```
    #[test]
    fn new_term_replaces_both_neighbours() {
        let text = italian("abcd", vec![undecided(0, 2), undecided(2, 4)]);
        let new = undecided(1, 3);

        let updated = text.merge(vec![new.clone()]).unwrap();
        assert_eq!(updated.term_count(), 1);
        assert_eq!(updated.term(0), Some(&new));
    }

    /// ```text
    /// N1
    /// E1E1E2E2
    /// 0 1 2 3
    /// ```
    #[test]
    fn new_term_replaces_first() {
        let orig = vec![
            selected(0, 2, meaning("a", MeaningKind::Concept, 0.4)),
            selected(2, 4, meaning("b", MeaningKind::Entity, 0.4)),
        ];
        let new = selected(0, 1, meaning("c", MeaningKind::Concept, 0.4));

        let updated = italian("abcd", orig.clone()).merge(vec![new.clone()]).unwrap();
        let terms: Vec<&Term> = updated.terms().collect();
        assert_eq!(terms, [&new, &orig[1]]);
    }

    /// ```text
    ///     N1
    /// E1E1E2E2
    /// 0 1 2 3
    /// ```
    #[test]
    fn new_term_replaces_second() {
        let text = italian(
            "abcd",
            vec![
                selected(0, 2, meaning("a", MeaningKind::Concept, 0.4)),
                selected(2, 4, meaning("b", MeaningKind::Entity, 0.4)),
            ],
        );
        let new = selected(2, 3, meaning("c", MeaningKind::Concept, 0.4));

        let updated = text.merge(vec![new]).unwrap();
        let ids: Vec<&str> = updated
            .terms()
            .map(|t| t.selected_meaning().unwrap().id())
            .collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn disjoint_terms_are_kept_in_order() {
        let text = italian("abcdefgh", vec![undecided(0, 2), undecided(6, 8)]);
        let updated = text.merge(vec![undecided(3, 5)]).unwrap();
        let spans: Vec<(usize, usize)> = updated.terms().map(|t| (t.start(), t.end())).collect();
        assert_eq!(spans, [(0, 2), (3, 5), (6, 8)]);
    }
}

// =============================================================================
// Sentences
// =============================================================================

mod sentences {
    use super::*;
    use semtext::HasMetadata;

    /// ```text
    /// S1  S2
    /// N1N1N2
    /// 0 1 2 3
    /// ```
    #[test]
    fn term_crossing_sentences_is_dropped() {
        let new1 = selected(0, 2, meaning("a", MeaningKind::Concept, 0.4));
        let new2 = selected(2, 3, meaning("a", MeaningKind::Concept, 0.4));

        let s1 = Sentence::empty(0, 1).unwrap();
        let s2 = Sentence::empty(2, 3).unwrap();
        let text = AnnotatedText::of_sentences(
            Locale::new("it"),
            "abcd",
            vec![s1.clone(), s2],
            Metadata::new(),
        )
        .unwrap();

        let outcome = text.merge_with_report(vec![new1.clone(), new2.clone()]).unwrap();
        let updated = outcome.text;
        assert_eq!(updated.term_count(), 1);
        assert_eq!(updated.sentences()[0], s1);
        assert_eq!(updated.sentences()[1].terms(), [new2]);
        assert_eq!(outcome.dropped, [new1]);
    }

    #[test]
    fn terms_go_to_their_own_sentence() {
        let s1 = Sentence::new(0, 4, vec![undecided(0, 2)]).unwrap();
        let s2 = Sentence::new(4, 8, vec![undecided(4, 6)]).unwrap();
        let text =
            AnnotatedText::of_sentences(Locale::root(), "abcdefgh", vec![s1, s2], Metadata::new())
                .unwrap();

        let updated = text.merge(vec![undecided(1, 3), undecided(6, 8)]).unwrap();
        let first: Vec<_> = updated.sentences()[0].terms().iter().map(HasSpan::span).collect();
        let second: Vec<_> = updated.sentences()[1].terms().iter().map(HasSpan::span).collect();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].range(), 1..3);
        assert_eq!(second.len(), 2);
        assert_eq!(updated.sentences()[1].span().range(), 4..8);
    }

    #[test]
    fn text_and_metadata_are_kept() {
        let text = italian("abcd", vec![]).with_metadata("k", 1);
        let updated = text.merge(vec![undecided(0, 1)]).unwrap();
        assert_eq!(updated.text(), "abcd");
        assert_eq!(updated.locale(), &Locale::new("it"));
        assert_eq!(updated.metadata(), text.metadata());
    }
}
