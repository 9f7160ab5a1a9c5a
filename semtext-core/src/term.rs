//! Annotated ranges of text.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::meaning::{normalize_meanings, Meaning};
use crate::metadata::{replace_metadata, HasMetadata, Metadata};
use crate::span::{HasSpan, Span};
use crate::status::{check_meaning_status, MeaningStatus};

/// A span of text carrying a disambiguation status, an optional selected
/// meaning and a ranked list of candidate meanings.
///
/// The candidate list is always deduplicated, normalized to sum to one and
/// sorted from most to least probable (see
/// [`normalize_meanings`](crate::normalize_meanings)). The selected meaning
/// is stored as given.
///
/// # Example
///
/// ```rust
/// use semtext_core::{Meaning, MeaningKind, MeaningStatus, Term};
///
/// let lake = Meaning::new("garda-lake", MeaningKind::Entity, 2.0).unwrap();
/// let term = Term::builder(0, 4)
///     .status(MeaningStatus::Selected)
///     .selected(lake.clone())
///     .meanings(vec![lake])
///     .build()
///     .unwrap();
///
/// assert_eq!(term.meanings()[0].probability(), 1.0);
/// assert_eq!(term.selected_meaning().unwrap().id(), "garda-lake");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    #[serde(flatten)]
    span: Span,
    meaning_status: MeaningStatus,
    selected_meaning: Option<Meaning>,
    meanings: Vec<Meaning>,
    metadata: Metadata,
}

impl Term {
    /// A term with no candidates waiting to be disambiguated.
    pub fn new(start: usize, end: usize) -> Result<Self> {
        Self::builder(start, end).build()
    }

    /// Create a term, validating bounds and the status/selection pairing.
    pub fn of(
        start: usize,
        end: usize,
        status: MeaningStatus,
        selected: Option<Meaning>,
        meanings: impl IntoIterator<Item = Meaning>,
    ) -> Result<Self> {
        Self::builder(start, end)
            .status(status)
            .selected_opt(selected)
            .meanings(meanings)
            .build()
    }

    /// Start building a term over `[start, end)`.
    #[must_use]
    pub fn builder(start: usize, end: usize) -> TermBuilder {
        TermBuilder::new(start, end)
    }

    /// Disambiguation status.
    #[must_use]
    pub fn meaning_status(&self) -> MeaningStatus {
        self.meaning_status
    }

    /// The chosen meaning, present iff the status requires one.
    #[must_use]
    pub fn selected_meaning(&self) -> Option<&Meaning> {
        self.selected_meaning.as_ref()
    }

    /// Candidate meanings, most probable first.
    #[must_use]
    pub fn meanings(&self) -> &[Meaning] {
        &self.meanings
    }

    /// Copy with the candidate list replaced and re-normalized.
    ///
    /// Status and selected meaning are kept.
    #[must_use]
    pub fn with_meanings(&self, meanings: impl IntoIterator<Item = Meaning>) -> Self {
        Self {
            meanings: normalize_meanings(meanings),
            ..self.clone()
        }
    }

    /// Copy with a new status and selected meaning. The candidate list is kept.
    pub fn with_status(&self, status: MeaningStatus, selected: Option<Meaning>) -> Result<Self> {
        check_meaning_status(status, selected.as_ref(), "Invalid meaning status for term")?;
        Ok(Self {
            meaning_status: status,
            selected_meaning: selected,
            ..self.clone()
        })
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

impl HasSpan for Term {
    fn span(&self) -> Span {
        self.span
    }
}

impl HasMetadata for Term {
    const HOLDER: &'static str = "Term";

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

/// Builder for [`Term`].
///
/// Defaults: [`MeaningStatus::ToDisambiguate`], no selected meaning, no
/// candidates, empty metadata.
#[derive(Debug, Clone)]
pub struct TermBuilder {
    start: usize,
    end: usize,
    status: MeaningStatus,
    selected: Option<Meaning>,
    meanings: Vec<Meaning>,
    metadata: Metadata,
}

impl TermBuilder {
    /// Create a new builder over `[start, end)`.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            status: MeaningStatus::default(),
            selected: None,
            meanings: Vec::new(),
            metadata: Metadata::new(),
        }
    }

    /// Set the disambiguation status.
    #[must_use]
    pub fn status(mut self, status: MeaningStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the selected meaning.
    #[must_use]
    pub fn selected(mut self, meaning: Meaning) -> Self {
        self.selected = Some(meaning);
        self
    }

    /// Set or clear the selected meaning.
    #[must_use]
    pub fn selected_opt(mut self, meaning: Option<Meaning>) -> Self {
        self.selected = meaning;
        self
    }

    /// Set the candidate meanings. They are normalized on [`build`](Self::build).
    #[must_use]
    pub fn meanings(mut self, meanings: impl IntoIterator<Item = Meaning>) -> Self {
        self.meanings = meanings.into_iter().collect();
        self
    }

    /// Store `value` under `namespace`.
    #[must_use]
    pub fn metadata(mut self, namespace: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(namespace.into(), value.into());
        self
    }

    /// Replace the whole metadata map.
    #[must_use]
    pub fn metadata_map(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Validate and build the term.
    pub fn build(self) -> Result<Term> {
        let span = Span::new(self.start, self.end)?;
        check_meaning_status(self.status, self.selected.as_ref(), "Invalid meaning status for term")?;
        Ok(Term {
            span,
            meaning_status: self.status,
            selected_meaning: self.selected,
            meanings: normalize_meanings(self.meanings),
            metadata: self.metadata,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::meaning::MeaningKind;
    use crate::score::TOLERANCE;

    fn m(id: &str, p: f64) -> Meaning {
        Meaning::new(id, MeaningKind::Entity, p).unwrap()
    }

    #[test]
    fn default_term_waits_for_disambiguation() {
        let term = Term::new(0, 3).unwrap();
        assert_eq!(term.meaning_status(), MeaningStatus::ToDisambiguate);
        assert!(term.selected_meaning().is_none());
        assert!(term.meanings().is_empty());
        assert_eq!(term.span(), Span::new(0, 3).unwrap());
    }

    #[test]
    fn rejects_reversed_bounds() {
        assert!(matches!(Term::new(4, 2), Err(Error::InvalidSpan { .. })));
    }

    #[test]
    fn status_pairing_checked_on_build() {
        assert!(matches!(
            Term::of(0, 1, MeaningStatus::Selected, None, vec![]),
            Err(Error::InvalidMeaningStatus { .. })
        ));
        assert!(matches!(
            Term::of(0, 1, MeaningStatus::NotSure, Some(m("a", 1.0)), vec![]),
            Err(Error::InvalidMeaningStatus { .. })
        ));
    }

    #[test]
    fn candidates_are_normalized() {
        let term = Term::of(
            0,
            1,
            MeaningStatus::ToDisambiguate,
            None,
            vec![m("a", 1.0), m("b", 3.0), m("a", 5.0)],
        )
        .unwrap();
        let ids: Vec<&str> = term.meanings().iter().map(Meaning::id).collect();
        assert_eq!(ids, ["b", "a"]);
        assert!((term.meanings()[0].probability() - 0.75).abs() <= TOLERANCE);
    }

    #[test]
    fn selected_meaning_is_not_renormalized() {
        let term = Term::of(0, 1, MeaningStatus::Reviewed, Some(m("a", 0.3)), vec![m("a", 0.3)])
            .unwrap();
        assert_eq!(term.selected_meaning().unwrap().probability(), 0.3);
        assert_eq!(term.meanings()[0].probability(), 1.0);
    }

    #[test]
    fn with_status_keeps_candidates() {
        let term = Term::of(0, 1, MeaningStatus::ToDisambiguate, None, vec![m("a", 1.0)]).unwrap();
        let selected = term
            .with_status(MeaningStatus::Selected, Some(m("a", 1.0)))
            .unwrap();
        assert_eq!(selected.meanings(), term.meanings());
        assert!(term.with_status(MeaningStatus::Reviewed, None).is_err());
        assert_eq!(term.meaning_status(), MeaningStatus::ToDisambiguate);
    }

    #[test]
    fn with_meanings_keeps_selection() {
        let term = Term::of(0, 1, MeaningStatus::Selected, Some(m("x", 1.0)), vec![]).unwrap();
        let updated = term.with_meanings(vec![m("y", 0.5), m("z", 0.5)]);
        assert_eq!(updated.selected_meaning().unwrap().id(), "x");
        assert_eq!(updated.meanings().len(), 2);
    }

    #[test]
    fn metadata_namespaces_are_independent() {
        let term = Term::builder(0, 1).metadata("a", "b").build().unwrap();
        let term = term.with_metadata("c", 1);
        assert!(term.has_metadata("a"));
        assert_eq!(term.metadata_value("c").unwrap(), &Value::from(1));
        assert!(matches!(
            term.metadata_value("zz"),
            Err(Error::MetadataNotFound { holder: "Term", .. })
        ));
    }

    #[test]
    fn serializes_flat_span() {
        let json = serde_json::to_value(Term::new(2, 5).unwrap()).unwrap();
        assert_eq!(json["start"], 2);
        assert_eq!(json["end"], 5);
        assert_eq!(json["meaningStatus"], "TO_DISAMBIGUATE");
        assert!(json["selectedMeaning"].is_null());
    }
}
