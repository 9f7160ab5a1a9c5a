//! The annotated text root.
//!
//! ```text
//! "Garda lake is big. I like it."
//!  [ sentence 0       )[ sentence 1 )
//!  [term    )               [ )
//! ```
//!
//! An [`AnnotatedText`] owns its sentences, which own their terms. All
//! updates return a new value; sharing an `AnnotatedText` across threads is
//! safe since nothing is ever mutated in place.

use serde::Serialize;
use serde_json::Value;

use crate::dict::Dict;
use crate::error::Result;
use crate::lang::Locale;
use crate::meaning::Meaning;
use crate::metadata::{replace_metadata, HasMetadata, Metadata};
use crate::offset::{char_len, slice_chars};
use crate::sentence::Sentence;
use crate::span::{validate_spans, HasSpan};
use crate::status::MeaningStatus;
use crate::term::Term;

/// A text with a language, sentences, terms and metadata.
///
/// Sentences are ordered, don't overlap and lie within `[0, char_len]`.
///
/// # Example
///
/// ```rust
/// use semtext_core::{AnnotatedText, Locale, Term};
///
/// let text = AnnotatedText::of_terms(
///     Locale::new("en"),
///     "Garda lake",
///     vec![Term::new(0, 5).unwrap(), Term::new(6, 10).unwrap()],
/// )
/// .unwrap();
///
/// assert_eq!(text.sentences().len(), 1);
/// assert_eq!(text.term_count(), 2);
/// assert_eq!(text.text_of(text.term(1).unwrap()), "lake");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedText {
    locale: Locale,
    text: String,
    sentences: Vec<Sentence>,
    metadata: Metadata,
    #[serde(skip)]
    char_len: usize,
}

impl AnnotatedText {
    /// Plain text with root locale and no sentences.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self::of(Locale::root(), text)
    }

    /// Plain text with no sentences.
    #[must_use]
    pub fn of(locale: Locale, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            locale,
            char_len: char_len(&text),
            text,
            sentences: Vec::new(),
            metadata: Metadata::new(),
        }
    }

    /// Text made of the given sentences.
    pub fn of_sentences(
        locale: Locale,
        text: impl Into<String>,
        sentences: impl IntoIterator<Item = Sentence>,
        metadata: Metadata,
    ) -> Result<Self> {
        let ret = Self {
            metadata,
            ..Self::of(locale, text)
        };
        ret.with_sentences(sentences)
    }

    /// Text with one sentence spanning all of it, holding `terms`.
    pub fn of_terms(
        locale: Locale,
        text: impl Into<String>,
        terms: impl IntoIterator<Item = Term>,
    ) -> Result<Self> {
        Self::of(locale, text).with_terms(terms)
    }

    /// Text with one sentence and one term both spanning all of it.
    pub fn of_status(
        locale: Locale,
        text: impl Into<String>,
        status: MeaningStatus,
        selected: Option<Meaning>,
        meanings: impl IntoIterator<Item = Meaning>,
    ) -> Result<Self> {
        let ret = Self::of(locale, text);
        let term = Term::of(0, ret.char_len, status, selected, meanings)?;
        ret.with_terms(vec![term])
    }

    /// Plain text from the best string of `dict` for `locales`; empty if the
    /// dictionary is empty.
    #[must_use]
    pub fn from_dict<'a>(dict: &Dict, locales: impl IntoIterator<Item = &'a Locale>) -> Self {
        Self::new(dict.any_string(locales).unwrap_or_default())
    }

    /// The raw text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Language of the text; root if unknown.
    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Sentences in text order.
    #[must_use]
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Length of the text in chars, the right bound for every span.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// The part of the text covered by `span`.
    #[must_use]
    pub fn text_of(&self, span: &impl HasSpan) -> &str {
        slice_chars(&self.text, span)
    }

    /// All terms of all sentences, in text order.
    pub fn terms(&self) -> impl Iterator<Item = &Term> + '_ {
        self.sentences.iter().flat_map(|s| s.terms().iter())
    }

    /// Total number of terms.
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.sentences.iter().map(|s| s.terms().len()).sum()
    }

    /// The `index`-th term across sentences.
    #[must_use]
    pub fn term(&self, index: usize) -> Option<&Term> {
        let mut remaining = index;
        for sentence in &self.sentences {
            match sentence.terms().get(remaining) {
                Some(term) => return Some(term),
                None => remaining -= sentence.terms().len(),
            }
        }
        None
    }

    /// True if some term equals `term`.
    #[must_use]
    pub fn contains_term(&self, term: &Term) -> bool {
        self.terms().any(|t| t == term)
    }

    /// The text as a one-entry dictionary under its locale.
    #[must_use]
    pub fn as_dict(&self) -> Dict {
        Dict::of(self.locale.clone(), self.text.clone())
    }

    /// Copy with a different language.
    #[must_use]
    pub fn with_locale(&self, locale: Locale) -> Self {
        Self {
            locale,
            ..self.clone()
        }
    }

    /// Copy with a different text. Fails if the sentences don't fit in it.
    pub fn with_text(&self, text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        let len = char_len(&text);
        validate_spans(&self.sentences, 0, len, "Sentences exceed the new text")?;
        Ok(Self {
            locale: self.locale.clone(),
            text,
            sentences: self.sentences.clone(),
            metadata: self.metadata.clone(),
            char_len: len,
        })
    }

    /// Copy with the sentences replaced.
    pub fn with_sentences(&self, sentences: impl IntoIterator<Item = Sentence>) -> Result<Self> {
        let sentences: Vec<Sentence> = sentences.into_iter().collect();
        validate_spans(&sentences, 0, self.char_len, "Invalid sentences for annotated text")?;
        Ok(self.replace_sentences(sentences))
    }

    /// Copy with one sentence spanning the whole text, holding `terms`.
    /// Existing sentences are discarded.
    pub fn with_terms(&self, terms: impl IntoIterator<Item = Term>) -> Result<Self> {
        let sentence = Sentence::new(0, self.char_len, terms)?;
        Ok(self.replace_sentences(vec![sentence]))
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

    /// Copy holding already validated sentences.
    pub(crate) fn replace_sentences(&self, sentences: Vec<Sentence>) -> Self {
        Self {
            locale: self.locale.clone(),
            text: self.text.clone(),
            sentences,
            metadata: self.metadata.clone(),
            char_len: self.char_len,
        }
    }
}

impl Default for AnnotatedText {
    fn default() -> Self {
        Self::new("")
    }
}

impl HasMetadata for AnnotatedText {
    const HOLDER: &'static str = "AnnotatedText";

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

/// One dictionary entry per text, keyed by the text's locale.
#[must_use]
pub fn texts_to_dict<'a>(texts: impl IntoIterator<Item = &'a AnnotatedText>) -> Dict {
    texts
        .into_iter()
        .fold(Dict::new(), |dict, t| dict.put(t.locale.clone(), t.text.clone()))
}

/// One plain text per dictionary string.
#[must_use]
pub fn dict_to_texts(dict: &Dict) -> Vec<AnnotatedText> {
    dict.entries()
        .map(|(locale, s)| AnnotatedText::of(locale.clone(), s))
        .collect()
}
