//! Threshold heuristic turning a ranked candidate list into a decision.

use crate::meaning::Meaning;

/// How many times the uniform share `1/n` the top candidate must exceed.
pub const DISAMBIGUATION_FACTOR: f64 = 1.5;

/// Picks the top candidate when it clearly dominates the others.
///
/// With `n` candidates the first one is chosen if its probability exceeds
/// `factor / n` and its id is known. Candidates are expected to be ranked,
/// as in [`Term::meanings`](crate::Term::meanings).
///
/// # Example
///
/// ```rust
/// use semtext_core::{Disambiguator, Meaning, MeaningKind};
///
/// let ranked = [
///     Meaning::new("a", MeaningKind::Entity, 0.6).unwrap(),
///     Meaning::new("b", MeaningKind::Entity, 0.4).unwrap(),
/// ];
/// assert!(Disambiguator::new().disambiguate(&ranked).is_none());
/// assert_eq!(
///     Disambiguator::new().with_factor(1.1).disambiguate(&ranked).unwrap().id(),
///     "a"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disambiguator {
    factor: f64,
}

impl Default for Disambiguator {
    fn default() -> Self {
        Self {
            factor: DISAMBIGUATION_FACTOR,
        }
    }
}

impl Disambiguator {
    /// Disambiguator using [`DISAMBIGUATION_FACTOR`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dominance factor.
    #[must_use]
    pub fn with_factor(mut self, factor: f64) -> Self {
        self.factor = factor;
        self
    }

    /// The dominance factor in use.
    #[must_use]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// The meaning to select among `ranked`, if one is clear enough.
    #[must_use]
    pub fn disambiguate<'a>(&self, ranked: &'a [Meaning]) -> Option<&'a Meaning> {
        match ranked {
            [] => None,
            [only] => Some(only),
            [top, ..] => {
                let threshold = self.factor / ranked.len() as f64;
                (top.probability() > threshold && !top.id().is_empty()).then_some(top)
            }
        }
    }
}

/// [`Disambiguator::disambiguate`] with the default factor.
#[must_use]
pub fn disambiguate(ranked: &[Meaning]) -> Option<&Meaning> {
    Disambiguator::new().disambiguate(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meaning::{normalize_meanings, MeaningKind};

    fn m(id: &str, p: f64) -> Meaning {
        Meaning::new(id, MeaningKind::Entity, p).unwrap()
    }

    #[test]
    fn empty_and_singleton() {
        assert!(disambiguate(&[]).is_none());
        assert_eq!(disambiguate(&[m("a", 0.1)]).unwrap().id(), "a");
    }

    #[test]
    fn clear_winner() {
        let ranked = normalize_meanings(vec![m("a", 0.2), m("b", 0.8)]);
        assert_eq!(disambiguate(&ranked).unwrap().id(), "b");
    }

    #[test]
    fn tie_is_undecided() {
        let ranked = normalize_meanings(vec![m("a", 0.5), m("b", 0.5)]);
        assert!(disambiguate(&ranked).is_none());
    }

    #[test]
    fn unknown_top_is_undecided() {
        let ranked = normalize_meanings(vec![m("", 0.9), m("b", 0.1)]);
        assert!(disambiguate(&ranked).is_none());
    }

    #[test]
    fn threshold_scales_with_count() {
        // 1.5 / 3 = 0.5
        let ranked = normalize_meanings(vec![m("a", 0.5), m("b", 0.25), m("c", 0.25)]);
        assert!(disambiguate(&ranked).is_none());
        let ranked = normalize_meanings(vec![m("a", 0.52), m("b", 0.24), m("c", 0.24)]);
        assert_eq!(disambiguate(&ranked).unwrap().id(), "a");
        assert_eq!(Disambiguator::new().factor(), DISAMBIGUATION_FACTOR);
    }
}
