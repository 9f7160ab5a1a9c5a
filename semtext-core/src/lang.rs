//! Language tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A language tag such as `"en"` or `"it-IT"`.
///
/// The empty tag is the root locale: the language is unknown or irrelevant.
/// A missing tag (`None`) converts to root as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// The root locale.
    #[must_use]
    pub const fn root() -> Self {
        Self(String::new())
    }

    /// Create a locale from a language tag. `_` separators are normalized to `-`.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        let tag: String = tag.into();
        Self(tag.trim().replace('_', "-"))
    }

    /// The language tag, empty for root.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the root locale.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Primary language subtag (`"it"` for `"it-IT"`).
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or("")
    }
}

impl From<Option<String>> for Locale {
    fn from(tag: Option<String>) -> Self {
        tag.map(Locale::new).unwrap_or_default()
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Locale::new(tag)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Locale::new(tag)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("root")
        } else {
            f.write_str(&self.0)
        }
    }
}
