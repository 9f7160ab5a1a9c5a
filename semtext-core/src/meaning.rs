//! Candidate referents and their normalization.
//!
//! # Identity vs. confidence
//!
//! A [`Meaning`] is *what a term refers to* (`id` + `kind`) together with
//! *how sure we are* (`probability`) and display data. Equality and hashing
//! only look at identity, so the same referent proposed twice with different
//! probabilities is one candidate:
//!
//! ```rust
//! use semtext_core::{Meaning, MeaningKind};
//!
//! let low = Meaning::new("a", MeaningKind::Entity, 0.1).unwrap();
//! let high = Meaning::new("a", MeaningKind::Entity, 0.9).unwrap();
//! assert_eq!(low, high);
//! assert_ne!(low, Meaning::new("a", MeaningKind::Concept, 0.1).unwrap());
//! ```
//!
//! # Normalization
//!
//! Candidate lists stored in a term are always run through
//! [`normalize_meanings`]:
//!
//! ```text
//! [a:0.2, b:0.6, a:0.9, c:0.2]
//!   │ dedup by (id, kind), first wins
//!   ▼
//! [a:0.2, b:0.6, c:0.2]          total = 1.0
//!   │ divide by total (1/n each if total <= 0)
//!   ▼
//! [b:0.6, a:0.2, c:0.2]          sorted by probability desc, then id, then kind
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::dict::Dict;
use crate::error::Result;
use crate::metadata::{replace_metadata, HasMetadata, Metadata};
use crate::score::check_positive_score;

/// Whether a meaning denotes an entity or a concept.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeaningKind {
    /// Something important enough to be referred to by a name,
    /// e.g. "New York City", "Albert Einstein".
    Entity,
    /// A group of objects referred to with a common name,
    /// e.g. "city", "person".
    Concept,
    /// Not known whether it is an entity or a concept.
    #[default]
    Unknown,
}

impl MeaningKind {
    /// Wire name of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            MeaningKind::Entity => "ENTITY",
            MeaningKind::Concept => "CONCEPT",
            MeaningKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for MeaningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate referent with its probability.
///
/// `id` is the identifier of the entity or concept (a JSON-LD node id, for
/// instance); the empty string means unknown.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    id: String,
    kind: MeaningKind,
    probability: f64,
    name: Dict,
    description: Dict,
    metadata: Metadata,
}

impl Meaning {
    /// Create a meaning. `probability` must be finite and `>= -TOLERANCE`.
    pub fn new(id: impl Into<String>, kind: MeaningKind, probability: f64) -> Result<Self> {
        check_positive_score(probability, "Invalid probability for meaning")?;
        Ok(Self {
            id: id.into(),
            kind,
            probability,
            name: Dict::new(),
            description: Dict::new(),
            metadata: Metadata::new(),
        })
    }

    /// The meaning with empty id, unknown kind and zero probability.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            id: String::new(),
            kind: MeaningKind::Unknown,
            probability: 0.0,
            name: Dict::new(),
            description: Dict::new(),
            metadata: Metadata::new(),
        }
    }

    /// Identifier of the referent, empty if unknown.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Entity, concept or unknown.
    #[must_use]
    pub fn kind(&self) -> MeaningKind {
        self.kind
    }

    /// Probability of this candidate.
    #[must_use]
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Localized display name.
    #[must_use]
    pub fn name(&self) -> &Dict {
        &self.name
    }

    /// Localized description.
    #[must_use]
    pub fn description(&self) -> &Dict {
        &self.description
    }

    /// Copy with a new probability.
    pub fn with_probability(&self, probability: f64) -> Result<Self> {
        check_positive_score(probability, "Invalid probability for meaning")?;
        let mut ret = self.clone();
        ret.probability = probability;
        Ok(ret)
    }

    /// Copy with a new display name.
    #[must_use]
    pub fn with_name(&self, name: Dict) -> Self {
        let mut ret = self.clone();
        ret.name = name;
        ret
    }

    /// Copy with a new description.
    #[must_use]
    pub fn with_description(&self, description: Dict) -> Self {
        let mut ret = self.clone();
        ret.description = description;
        ret
    }

    /// Copy with `value` stored under `namespace`.
    #[must_use]
    pub fn with_metadata(&self, namespace: &str, value: impl Into<Value>) -> Self {
        let mut ret = self.clone();
        ret.metadata = replace_metadata(&self.metadata, namespace, value.into());
        ret
    }

    /// Copy with the whole metadata map replaced.
    #[must_use]
    pub fn with_metadata_map(&self, metadata: Metadata) -> Self {
        let mut ret = self.clone();
        ret.metadata = metadata;
        ret
    }

    /// Ranking order: higher probability first, ties broken by id then kind.
    #[must_use]
    pub fn cmp_rank(&self, other: &Self) -> Ordering {
        other
            .probability
            .total_cmp(&self.probability)
            .then_with(|| self.id.cmp(&other.id))
            .then_with(|| self.kind.cmp(&other.kind))
    }
}

impl Default for Meaning {
    fn default() -> Self {
        Self::unknown()
    }
}

impl PartialEq for Meaning {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.kind == other.kind
    }
}

impl Eq for Meaning {}

impl Hash for Meaning {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.kind.hash(state);
    }
}

impl fmt::Display for Meaning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = if self.id.is_empty() { "?" } else { &self.id };
        write!(f, "{}:{}({:.3})", self.kind, id, self.probability)
    }
}

impl HasMetadata for Meaning {
    const HOLDER: &'static str = "Meaning";

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

/// Deduplicate, normalize and rank candidate meanings.
///
/// - duplicates by `(id, kind)` are dropped, the first occurrence wins
/// - probabilities in `[-TOLERANCE, 0)` count as zero
/// - probabilities are divided by their total (after scaling by the largest
///   one when it exceeds 1, so huge values cannot overflow the sum); if the total is not positive
///   every candidate gets `1/n`
/// - the result is sorted with [`Meaning::cmp_rank`]
#[must_use]
pub fn normalize_meanings(candidates: impl IntoIterator<Item = Meaning>) -> Vec<Meaning> {
    let mut seen = HashSet::new();
    let mut meanings: Vec<Meaning> = candidates
        .into_iter()
        .filter(|m| seen.insert((m.id.clone(), m.kind)))
        .collect();

    for m in &mut meanings {
        m.probability = m.probability.max(0.0);
    }

    // scale large values down first so the total stays finite
    let max = meanings.iter().map(|m| m.probability).fold(0.0, f64::max);
    if max > 1.0 {
        for m in &mut meanings {
            m.probability /= max;
        }
    }

    let total: f64 = meanings.iter().map(|m| m.probability).sum();
    let n = meanings.len() as f64;
    for m in &mut meanings {
        m.probability = if total > 0.0 {
            m.probability / total
        } else {
            1.0 / n
        };
    }

    meanings.sort_by(Meaning::cmp_rank);
    meanings
}

/// Union of two candidate lists where `new` meanings replace equal `old`
/// ones, normalized as in [`normalize_meanings`].
#[must_use]
pub fn merge_meanings(
    old: impl IntoIterator<Item = Meaning>,
    new: impl IntoIterator<Item = Meaning>,
) -> Vec<Meaning> {
    normalize_meanings(new.into_iter().chain(old))
}
