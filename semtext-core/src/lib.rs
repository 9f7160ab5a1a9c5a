//! # semtext-core
//!
//! Core types for semantic text: text overlaid with sentences and terms,
//! where each term carries ranked candidate meanings.
//!
//! This crate provides:
//! - **Value types**: `Span`, `Meaning`, `MeaningStatus`, `Term`, `Sentence`, `AnnotatedText`
//! - **Validation**: the span-set validator and score checks
//! - **Algorithms**: meaning normalization, merging and deleting terms, disambiguation
//!
//! All values are immutable; every update returns a new value and fails
//! before anything invalid can be observed.
//!
//! ```rust
//! use semtext_core::{AnnotatedText, Locale, Meaning, MeaningKind, MeaningStatus, Term};
//!
//! let lake = Meaning::new("garda-lake", MeaningKind::Entity, 1.0).unwrap();
//! let text = AnnotatedText::of_terms(Locale::new("en"), "Garda lake", vec![]).unwrap();
//!
//! let term = Term::of(0, 10, MeaningStatus::Selected, Some(lake.clone()), vec![lake]).unwrap();
//! let text = text.merge(vec![term]).unwrap();
//!
//! assert_eq!(text.term_count(), 1);
//! let text = text.delete_terms_matching("lake").unwrap();
//! assert_eq!(text.term_count(), 0);
//! ```

pub mod delete;
pub mod dict;
pub mod disambiguate;
pub mod error;
pub mod lang;
pub mod meaning;
pub mod merge;
pub mod metadata;
pub mod offset;
pub mod score;
pub mod sentence;
pub mod span;
pub mod status;
pub mod term;
pub mod text;

pub use delete::DeletionSet;
pub use dict::Dict;
pub use disambiguate::{disambiguate, Disambiguator, DISAMBIGUATION_FACTOR};
pub use error::{Error, Result};
pub use lang::Locale;
pub use meaning::{merge_meanings, normalize_meanings, Meaning, MeaningKind};
pub use merge::MergeOutcome;
pub use metadata::{replace_metadata, to_payload, HasMetadata, Metadata};
pub use offset::SpanConverter;
pub use score::{check_positive_score, check_score, TOLERANCE};
pub use sentence::Sentence;
pub use span::{check_span, validate_spans, HasSpan, Span};
pub use status::{check_meaning_status, MeaningStatus};
pub use term::{Term, TermBuilder};
pub use text::{dict_to_texts, texts_to_dict, AnnotatedText};
