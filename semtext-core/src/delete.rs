//! Removing terms by range or by text pattern.
//!
//! Ranges are any [`RangeBounds<usize>`], so both `a..b` and `a..=b` work.
//! A term `[s, e)` is deleted when it shares at least one point with some
//! range, treating bounds the way the range syntax says:
//!
//! ```text
//! term [0, 1)
//! 0..=0  -> [0, 0] touches 0     -> deleted
//! 0..0   -> empty                -> kept
//! 0..=1  vs term [1, 2)          -> deleted
//! 0..1   vs term [1, 2)          -> kept
//! ```
//!
//! Zero-width terms contain no point and are never deleted.

use regex::Regex;
use std::ops::{Bound, RangeBounds};

use crate::error::{Error, Result};
use crate::offset::SpanConverter;
use crate::span::HasSpan;
use crate::text::AnnotatedText;

/// Union of deletion ranges.
///
/// Bounds are mapped to doubled coordinates: the integer point `v` becomes
/// `2v` and the open gap right after it `2v + 1`. Every range is then a closed
/// interval of such atoms, so closed/open bounds compare exactly. Atoms are
/// `i128` so every `usize` bound doubles without overflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionSet {
    // sorted, disjoint, non-adjacent closed atom intervals
    atoms: Vec<(i128, i128)>,
}

impl DeletionSet {
    /// Build the union of `ranges`. Empty ranges are ignored; a range whose
    /// start lies after its end fails with [`Error::InvalidRange`].
    pub fn new<R: RangeBounds<usize>>(ranges: impl IntoIterator<Item = R>) -> Result<Self> {
        let mut atoms = Vec::new();
        for range in ranges {
            if let Some(interval) = to_atoms(&range)? {
                atoms.push(interval);
            }
        }
        atoms.sort_unstable();

        let mut coalesced: Vec<(i128, i128)> = Vec::with_capacity(atoms.len());
        for (lo, hi) in atoms {
            match coalesced.last_mut() {
                Some(last) if lo <= last.1.saturating_add(1) => last.1 = last.1.max(hi),
                _ => coalesced.push((lo, hi)),
            }
        }
        Ok(Self { atoms: coalesced })
    }

    /// True when no range was kept.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// True when the set shares at least one point with `span`.
    #[must_use]
    pub fn intersects(&self, span: &impl HasSpan) -> bool {
        if span.start() >= span.end() {
            return false;
        }
        let lo = 2 * span.start() as i128;
        let hi = 2 * span.end() as i128 - 1;
        let idx = self.atoms.partition_point(|&(_, end)| end < lo);
        self.atoms.get(idx).is_some_and(|&(start, _)| start <= hi)
    }
}

fn to_atoms(range: &impl RangeBounds<usize>) -> Result<Option<(i128, i128)>> {
    let lo = match range.start_bound() {
        Bound::Included(&v) => Some((v, false)),
        Bound::Excluded(&v) => Some((v, true)),
        Bound::Unbounded => None,
    };
    let hi = match range.end_bound() {
        Bound::Included(&v) => Some((v, false)),
        Bound::Excluded(&v) => Some((v, true)),
        Bound::Unbounded => None,
    };

    if let (Some((start, _)), Some((end, _))) = (lo, hi) {
        if start > end {
            return Err(Error::invalid_range(format!(
                "start {} is after end {}",
                start, end
            )));
        }
    }

    let lo = lo.map_or(i128::MIN, |(v, open)| 2 * v as i128 + i128::from(open));
    let hi = hi.map_or(i128::MAX, |(v, open)| 2 * v as i128 - i128::from(open));
    Ok((lo <= hi).then_some((lo, hi)))
}

impl AnnotatedText {
    /// Copy without the terms intersecting any of `ranges`.
    ///
    /// Sentences keep their bounds even when all their terms go away.
    ///
    /// # Example
    ///
    /// ```rust
    /// use semtext_core::{AnnotatedText, Locale, Term};
    ///
    /// let text = AnnotatedText::of_terms(Locale::root(), "ab", vec![Term::new(0, 1).unwrap()])
    ///     .unwrap();
    ///
    /// assert_eq!(text.delete_terms([0..=0]).unwrap().term_count(), 0);
    /// assert_eq!(text.delete_terms([0..0]).unwrap().term_count(), 1);
    /// ```
    pub fn delete_terms<R: RangeBounds<usize>>(
        &self,
        ranges: impl IntoIterator<Item = R>,
    ) -> Result<Self> {
        self.delete_in(&DeletionSet::new(ranges)?)
    }

    /// Copy without the terms intersecting a match of `pattern` in the text.
    pub fn delete_terms_matching(&self, pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(Error::invalid_pattern("pattern must not be empty"));
        }
        let regex = Regex::new(pattern).map_err(|e| Error::invalid_pattern(e.to_string()))?;
        self.delete_terms_matching_regex(&regex)
    }

    /// Copy without the terms intersecting a match of `regex` in the text.
    pub fn delete_terms_matching_regex(&self, regex: &Regex) -> Result<Self> {
        let conv = SpanConverter::new(self.text());
        let ranges: Vec<_> = regex
            .find_iter(self.text())
            .map(|m| conv.span_from_bytes(m.range()).range())
            .collect();
        log::debug!("Pattern {} matched {} times", regex.as_str(), ranges.len());
        self.delete_terms(ranges)
    }

    /// Copy without the terms intersecting `deletions`.
    pub fn delete_in(&self, deletions: &DeletionSet) -> Result<Self> {
        if deletions.is_empty() {
            return Ok(self.clone());
        }
        let sentences = self
            .sentences()
            .iter()
            .map(|sentence| {
                let kept: Vec<_> = sentence
                    .terms()
                    .iter()
                    .filter(|t| !deletions.intersects(*t))
                    .cloned()
                    .collect();
                if kept.len() == sentence.terms().len() {
                    Ok(sentence.clone())
                } else {
                    sentence.with_terms(kept)
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self.replace_sentences(sentences))
    }
}
