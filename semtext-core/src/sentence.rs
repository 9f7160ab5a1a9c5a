//! Sentences: spans grouping ordered terms.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::metadata::{replace_metadata, HasMetadata, Metadata};
use crate::span::{validate_spans, HasSpan, Span};
use crate::term::Term;

/// A span of text holding ordered, non-overlapping terms that all lie within
/// the sentence bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    #[serde(flatten)]
    span: Span,
    terms: Vec<Term>,
    metadata: Metadata,
}

impl Sentence {
    /// Create a sentence over `[start, end)` holding `terms`.
    pub fn new(start: usize, end: usize, terms: impl IntoIterator<Item = Term>) -> Result<Self> {
        Self::of(start, end, terms, Metadata::new())
    }

    /// Sentence without terms.
    pub fn empty(start: usize, end: usize) -> Result<Self> {
        Self::new(start, end, Vec::new())
    }

    /// Create a sentence with metadata.
    pub fn of(
        start: usize,
        end: usize,
        terms: impl IntoIterator<Item = Term>,
        metadata: Metadata,
    ) -> Result<Self> {
        let span = Span::new(start, end)?;
        let terms: Vec<Term> = terms.into_iter().collect();
        validate_spans(&terms, start, end, "Invalid terms for sentence")?;
        Ok(Self {
            span,
            terms,
            metadata,
        })
    }

    /// Terms in text order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Copy with the terms replaced. The sentence bounds are kept.
    pub fn with_terms(&self, terms: impl IntoIterator<Item = Term>) -> Result<Self> {
        Self::of(
            self.span.start(),
            self.span.end(),
            terms,
            self.metadata.clone(),
        )
    }

    /// Copy with `value` stored under `namespace`.
    #[must_use]
    pub fn with_metadata(&self, namespace: &str, value: impl Into<Value>) -> Self {
        Self {
            metadata: replace_metadata(&self.metadata, namespace, value.into()),
            ..self.clone()
        }
    }

    /// Copy with the whole metadata map replaced.
    #[must_use]
    pub fn with_metadata_map(&self, metadata: Metadata) -> Self {
        Self {
            metadata,
            ..self.clone()
        }
    }
}

impl HasSpan for Sentence {
    fn span(&self) -> Span {
        self.span
    }
}

impl HasMetadata for Sentence {
    const HOLDER: &'static str = "Sentence";

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn term(start: usize, end: usize) -> Term {
        Term::new(start, end).unwrap()
    }

    #[test]
    fn terms_must_fit_inside() {
        assert!(Sentence::new(0, 5, vec![term(0, 2), term(2, 5)]).is_ok());
        assert!(matches!(
            Sentence::new(1, 5, vec![term(0, 2)]),
            Err(Error::OutOfBoundsSpan { .. })
        ));
        assert!(matches!(
            Sentence::new(0, 5, vec![term(0, 6)]),
            Err(Error::OutOfBoundsSpan { .. })
        ));
    }

    #[test]
    fn terms_must_not_cross() {
        assert!(matches!(
            Sentence::new(0, 5, vec![term(0, 3), term(2, 5)]),
            Err(Error::OverlappingSpan { .. })
        ));
        assert!(matches!(
            Sentence::new(0, 5, vec![term(3, 5), term(0, 2)]),
            Err(Error::OutOfOrderSpan { .. })
        ));
    }

    #[test]
    fn with_terms_keeps_bounds_and_metadata() {
        let sentence = Sentence::empty(2, 8).unwrap().with_metadata("x", true);
        let updated = sentence.with_terms(vec![term(3, 4)]).unwrap();
        assert_eq!(updated.span(), sentence.span());
        assert!(updated.has_metadata("x"));
        assert_eq!(updated.terms().len(), 1);
        assert!(sentence.with_terms(vec![term(0, 1)]).is_err());
    }

    #[test]
    fn rejects_reversed_bounds() {
        assert!(matches!(Sentence::empty(3, 2), Err(Error::InvalidSpan { .. })));
    }
}
