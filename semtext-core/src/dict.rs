//! Localized string dictionaries.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::lang::Locale;

/// Strings keyed by locale, several per locale allowed.
///
/// Used for a meaning's display name and description.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dict(BTreeMap<Locale, Vec<String>>);

impl Dict {
    /// Empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dictionary holding a single string.
    #[must_use]
    pub fn of(locale: impl Into<Locale>, value: impl Into<String>) -> Self {
        Self::new().put(locale, value)
    }

    /// Copy of this dictionary with `value` appended under `locale`.
    #[must_use]
    pub fn put(mut self, locale: impl Into<Locale>, value: impl Into<String>) -> Self {
        self.0.entry(locale.into()).or_default().push(value.into());
        self
    }

    /// Strings stored under `locale`, in insertion order.
    #[must_use]
    pub fn strings(&self, locale: &Locale) -> &[String] {
        self.0.get(locale).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First string for the first of `locales` that has one, falling back to
    /// any string at all.
    #[must_use]
    pub fn any_string<'a>(&self, locales: impl IntoIterator<Item = &'a Locale>) -> Option<&str> {
        locales
            .into_iter()
            .find_map(|locale| self.strings(locale).first())
            .or_else(|| self.0.values().flatten().next())
            .map(String::as_str)
    }

    /// Locales having at least one string.
    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.0.iter().filter(|(_, v)| !v.is_empty()).map(|(k, _)| k)
    }

    /// `(locale, string)` pairs in locale order.
    pub fn entries(&self) -> impl Iterator<Item = (&Locale, &str)> {
        self.0
            .iter()
            .flat_map(|(locale, values)| values.iter().map(move |v| (locale, v.as_str())))
    }

    /// True when no string is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }
}
