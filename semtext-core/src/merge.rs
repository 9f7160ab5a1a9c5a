//! Overlaying new terms onto an annotated text.
//!
//! Merging works sentence by sentence. Each new term goes to the sentence
//! enclosing it, then a sweep over the sentence's existing terms decides the
//! fate of each old term:
//!
//! ```text
//! old:   [a  )[b     )   [c )
//! new:   [a' )   [n )
//!
//! a  == a'  -> merged: a' with meanings a' ++ a
//! b  ~  n   -> dropped, n wins
//! c         -> kept
//! ```
//!
//! New terms crossing a sentence boundary are not clipped; they are dropped
//! and reported.

use crate::error::Result;
use crate::meaning::merge_meanings;
use crate::span::{validate_spans, HasSpan};
use crate::term::Term;
use crate::text::AnnotatedText;

/// Result of [`AnnotatedText::merge_with_report`].
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    /// The merged text.
    pub text: AnnotatedText,
    /// New terms that were not merged: those not enclosed by a single
    /// sentence, and zero-width ones.
    pub dropped: Vec<Term>,
}

impl AnnotatedText {
    /// Merge `terms` into this text. See [`merge_with_report`](Self::merge_with_report).
    pub fn merge(&self, terms: impl IntoIterator<Item = Term>) -> Result<Self> {
        Ok(self.merge_with_report(terms)?.text)
    }

    /// Merge `terms` into this text, reporting the terms that were dropped.
    ///
    /// - an old term with exactly the span of a new term is replaced by the
    ///   new term, whose candidates become the union of both lists
    /// - an old term partially overlapping a new term is removed
    /// - other old terms are kept
    ///
    /// The new terms, sorted by position, must not overlap each other and must
    /// lie within the text; otherwise the validator's error is returned. New
    /// terms not enclosed by one sentence are dropped with a warning.
    ///
    /// # Example
    ///
    /// ```rust
    /// use semtext_core::{AnnotatedText, HasSpan, Locale, Term};
    ///
    /// let text = AnnotatedText::of_terms(
    ///     Locale::root(),
    ///     "abcd",
    ///     vec![Term::new(0, 2).unwrap(), Term::new(2, 4).unwrap()],
    /// )
    /// .unwrap();
    ///
    /// let merged = text.merge(vec![Term::new(1, 3).unwrap()]).unwrap();
    /// assert_eq!(merged.term_count(), 1);
    /// assert_eq!(merged.term(0).unwrap().start(), 1);
    /// ```
    pub fn merge_with_report(&self, terms: impl IntoIterator<Item = Term>) -> Result<MergeOutcome> {
        let mut batch: Vec<Term> = terms.into_iter().collect();
        batch.sort_by_key(|t| (t.start(), t.end()));
        validate_spans(&batch, 0, self.char_len(), "Invalid terms to merge")?;

        let sentences = self.sentences();
        let mut per_sentence: Vec<Vec<Term>> = vec![Vec::new(); sentences.len()];
        let mut dropped = Vec::new();

        for term in batch {
            if term.span().is_empty() {
                log::warn!("Skipping zero-width term {} in merge", term.span());
                dropped.push(term);
                continue;
            }
            match self.enclosing_sentence(&term) {
                Some(idx) => per_sentence[idx].push(term),
                None => {
                    log::warn!(
                        "Dropping term {} not enclosed by a single sentence, merging across sentences is not supported",
                        term.span()
                    );
                    dropped.push(term);
                }
            }
        }

        let merged = sentences
            .iter()
            .zip(per_sentence)
            .map(|(sentence, incoming)| {
                if incoming.is_empty() {
                    Ok(sentence.clone())
                } else {
                    sentence.with_terms(overlay(sentence.terms(), incoming))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(MergeOutcome {
            text: self.replace_sentences(merged),
            dropped,
        })
    }

    /// Index of the sentence fully enclosing `term`.
    fn enclosing_sentence(&self, term: &Term) -> Option<usize> {
        let sentences = self.sentences();
        let idx = sentences
            .partition_point(|s| s.start() <= term.start())
            .checked_sub(1)?;
        sentences[idx].span().encloses(term).then_some(idx)
    }
}

/// Sweep sorted `existing` terms against sorted, non-overlapping, non-empty
/// `incoming` terms of the same sentence.
fn overlay(existing: &[Term], mut incoming: Vec<Term>) -> Vec<Term> {
    let mut result = Vec::with_capacity(existing.len() + incoming.len());
    let mut first = 0;

    for old in existing {
        // incoming terms ending before `old` can't touch it nor any later term
        while first < incoming.len() && incoming[first].end() <= old.start() {
            first += 1;
        }

        let mut fate = Fate::Keep;
        for (idx, new) in incoming.iter().enumerate().skip(first) {
            if new.start() > old.end() {
                break;
            }
            if new.span() == old.span() {
                fate = Fate::Merge(idx);
                break;
            }
            if new.span().overlaps(old) {
                fate = Fate::Drop;
                break;
            }
        }

        match fate {
            Fate::Keep => result.push(old.clone()),
            Fate::Merge(idx) => {
                let new = &incoming[idx];
                let updated = new.with_meanings(merge_meanings(
                    old.meanings().iter().cloned(),
                    new.meanings().iter().cloned(),
                ));
                incoming[idx] = updated;
            }
            Fate::Drop => {
                log::debug!("Dropping term {} overlapped by a merged term", old.span());
            }
        }
    }

    result.extend(incoming);
    result.sort_by_key(|t| (t.start(), t.end()));
    result
}

enum Fate {
    Keep,
    Merge(usize),
    Drop,
}
