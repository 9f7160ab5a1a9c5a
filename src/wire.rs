//! JSON wire format.
//!
//! ```text
//! Meaning       = { id, kind, probability, name, description, metadata }
//! Term          = { start, end, meaningStatus, selectedMeaning, meanings, metadata }
//! Sentence      = { start, end, terms, metadata }
//! AnnotatedText = { locale, text, sentences, metadata }
//! ```
//!
//! Encoding is plain `serde` serialization of the core types. Decoding goes
//! through mirror structs, then rebuilds every value through its validating
//! constructor, so a decoded value satisfies the same invariants as a built
//! one. Missing or `null` fields take their empty defaults; metadata is
//! checked against a [`MetadataRegistry`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use semtext_core::{
    AnnotatedText, Dict, Locale, Meaning, MeaningKind, MeaningStatus, Metadata, Sentence, Term,
};

use crate::error::Result;
use crate::registry::{HolderKind, MetadataRegistry};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireMeaning {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    kind: Option<MeaningKind>,
    #[serde(default)]
    probability: f64,
    #[serde(default)]
    name: Option<Dict>,
    #[serde(default)]
    description: Option<Dict>,
    #[serde(default)]
    metadata: Option<Metadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireTerm {
    start: i64,
    end: i64,
    #[serde(default)]
    meaning_status: Option<MeaningStatus>,
    #[serde(default)]
    selected_meaning: Option<WireMeaning>,
    #[serde(default)]
    meanings: Option<Vec<WireMeaning>>,
    #[serde(default)]
    metadata: Option<Metadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSentence {
    start: i64,
    end: i64,
    #[serde(default)]
    terms: Option<Vec<WireTerm>>,
    #[serde(default)]
    metadata: Option<Metadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireText {
    #[serde(default)]
    locale: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    sentences: Option<Vec<WireSentence>>,
    #[serde(default)]
    metadata: Option<Metadata>,
}

fn offsets(start: i64, end: i64, context: &str) -> Result<(usize, usize)> {
    match (usize::try_from(start), usize::try_from(end)) {
        (Ok(s), Ok(e)) if s <= e => Ok((s, e)),
        _ => Err(semtext_core::Error::invalid_span(start, end, context).into()),
    }
}

fn metadata(
    registry: &MetadataRegistry,
    holder: HolderKind,
    metadata: Option<Metadata>,
) -> Result<Metadata> {
    let metadata = metadata.unwrap_or_default();
    registry.check_all(holder, &metadata)?;
    Ok(metadata)
}

impl WireMeaning {
    fn decode(self, registry: &MetadataRegistry) -> Result<Meaning> {
        let meaning = Meaning::new(
            self.id.unwrap_or_default(),
            self.kind.unwrap_or_default(),
            self.probability,
        )?;
        Ok(meaning
            .with_name(self.name.unwrap_or_default())
            .with_description(self.description.unwrap_or_default())
            .with_metadata_map(metadata(registry, HolderKind::Meaning, self.metadata)?))
    }
}

impl WireTerm {
    fn decode(self, registry: &MetadataRegistry) -> Result<Term> {
        let (start, end) = offsets(self.start, self.end, "Invalid term bounds")?;
        let selected = self
            .selected_meaning
            .map(|m| m.decode(registry))
            .transpose()?;
        let meanings = self
            .meanings
            .unwrap_or_default()
            .into_iter()
            .map(|m| m.decode(registry))
            .collect::<Result<Vec<_>>>()?;
        Ok(Term::builder(start, end)
            .status(self.meaning_status.unwrap_or_default())
            .selected_opt(selected)
            .meanings(meanings)
            .metadata_map(metadata(registry, HolderKind::Term, self.metadata)?)
            .build()?)
    }
}

impl WireSentence {
    fn decode(self, registry: &MetadataRegistry) -> Result<Sentence> {
        let (start, end) = offsets(self.start, self.end, "Invalid sentence bounds")?;
        let terms = self
            .terms
            .unwrap_or_default()
            .into_iter()
            .map(|t| t.decode(registry))
            .collect::<Result<Vec<_>>>()?;
        let metadata = metadata(registry, HolderKind::Sentence, self.metadata)?;
        Ok(Sentence::of(start, end, terms, metadata)?)
    }
}

impl WireText {
    fn decode(self, registry: &MetadataRegistry) -> Result<AnnotatedText> {
        let sentences = self
            .sentences
            .unwrap_or_default()
            .into_iter()
            .map(|s| s.decode(registry))
            .collect::<Result<Vec<_>>>()?;
        let metadata = metadata(registry, HolderKind::AnnotatedText, self.metadata)?;
        Ok(AnnotatedText::of_sentences(
            Locale::from(self.locale),
            self.text.unwrap_or_default(),
            sentences,
            metadata,
        )?)
    }
}

/// Encode any semtext value as a JSON string.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Encode any semtext value as an indented JSON string.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Encode any semtext value as a JSON value.
pub fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Decode an annotated text.
///
/// # Example
///
/// ```rust
/// use semtext::{wire, AnnotatedText, HasSpan, Locale, MetadataRegistry, Term};
///
/// let text = AnnotatedText::of_terms(Locale::new("en"), "Garda lake", vec![Term::new(6, 10).unwrap()])
///     .unwrap();
/// let json = wire::to_json(&text).unwrap();
///
/// let decoded = wire::from_json(&MetadataRegistry::new(), &json).unwrap();
/// assert_eq!(decoded, text);
/// assert_eq!(decoded.term(0).unwrap().start(), 6);
/// ```
pub fn from_json(registry: &MetadataRegistry, json: &str) -> Result<AnnotatedText> {
    serde_json::from_str::<WireText>(json)?.decode(registry)
}

/// Decode an annotated text from a JSON value.
pub fn from_value(registry: &MetadataRegistry, value: Value) -> Result<AnnotatedText> {
    serde_json::from_value::<WireText>(value)?.decode(registry)
}

/// Decode a single sentence.
pub fn sentence_from_json(registry: &MetadataRegistry, json: &str) -> Result<Sentence> {
    serde_json::from_str::<WireSentence>(json)?.decode(registry)
}

/// Decode a single term.
pub fn term_from_json(registry: &MetadataRegistry, json: &str) -> Result<Term> {
    serde_json::from_str::<WireTerm>(json)?.decode(registry)
}

/// Decode a single meaning.
pub fn meaning_from_json(registry: &MetadataRegistry, json: &str) -> Result<Meaning> {
    serde_json::from_str::<WireMeaning>(json)?.decode(registry)
}
