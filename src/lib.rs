//! # semtext
//!
//! Semantic text for Rust: a string overlaid with sentences and terms, where
//! each term carries ranked candidate meanings and a disambiguation status.
//!
//! - **Model**: `AnnotatedText` → `Sentence` → `Term` → `Meaning`, all immutable
//! - **Algebra**: merge new terms in, delete terms by range or pattern
//! - **Wire format**: JSON encoding with a registry of metadata payload types
//!
//! ## Quick Start
//!
//! ```rust
//! use semtext::{AnnotatedText, Locale, Meaning, MeaningKind, MeaningStatus, Term};
//!
//! let text = AnnotatedText::of_terms(
//!     Locale::new("en"),
//!     "I went to Garda lake",
//!     vec![Term::new(10, 15).unwrap()],
//! )
//! .unwrap();
//!
//! let lake = Meaning::new("garda-lake", MeaningKind::Entity, 0.9).unwrap();
//! let term = Term::of(10, 20, MeaningStatus::Selected, Some(lake.clone()), vec![lake]).unwrap();
//!
//! // the new term overlaps "Garda" and replaces it
//! let text = text.merge(vec![term]).unwrap();
//! assert_eq!(text.term_count(), 1);
//! assert_eq!(text.text_of(text.term(0).unwrap()), "Garda lake");
//! ```
//!
//! ## Metadata on the wire
//!
//! Any value can carry JSON metadata under a namespace. Decoding requires
//! each namespace to be registered first:
//!
//! ```rust
//! use semtext::{wire, AnnotatedText, HolderKind, MetadataRegistry};
//!
//! let text = AnnotatedText::new("ciao").with_metadata("source", "chat");
//! let json = wire::to_json(&text).unwrap();
//!
//! let mut registry = MetadataRegistry::new();
//! assert!(wire::from_json(&registry, &json).is_err());
//!
//! registry.register::<String>(HolderKind::AnnotatedText, "source").unwrap();
//! assert_eq!(wire::from_json(&registry, &json).unwrap(), text);
//! ```
//!
//! ## Crates
//!
//! - `semtext-core`: value types and algorithms, re-exported here
//! - `semtext`: the wire format and metadata registry

pub mod error;
pub mod registry;
pub mod wire;

pub mod prelude {
    //! Commonly used items, re-exported for convenience.
    //!
    //! ```rust
    //! use semtext::prelude::*;
    //!
    //! let text = AnnotatedText::of_terms(Locale::root(), "ab", vec![Term::new(0, 1).unwrap()])
    //!     .unwrap();
    //! assert_eq!(text.terms().map(|t| t.start()).collect::<Vec<_>>(), [0]);
    //! ```
    pub use crate::error::{Error, Result};
    pub use crate::registry::{HolderKind, MetadataRegistry};
    pub use semtext_core::{
        AnnotatedText, HasMetadata, HasSpan, Locale, Meaning, MeaningKind, MeaningStatus,
        Sentence, Span, Term,
    };
}

// Re-exports
pub use error::{Error, Result};
pub use registry::{HolderKind, MetadataRegistry};
pub use semtext_core::{
    check_meaning_status, check_positive_score, check_score, check_span, dict_to_texts,
    disambiguate, merge_meanings, normalize_meanings, replace_metadata, texts_to_dict,
    to_payload, validate_spans, AnnotatedText, DeletionSet, Dict, Disambiguator, HasMetadata,
    HasSpan, Locale, Meaning, MeaningKind, MeaningStatus, MergeOutcome, Metadata, Sentence, Span,
    SpanConverter, Term, TermBuilder, DISAMBIGUATION_FACTOR, TOLERANCE,
};

/// Errors raised by the core value types.
pub use semtext_core::Error as CoreError;
