//! Which payload type lives under which metadata namespace.
//!
//! Metadata is opaque JSON inside the core types. Before decoding anything
//! from the wire, the embedding application registers the type expected
//! under each `(holder, namespace)` pair; decoding then rejects namespaces
//! nobody registered and payloads that don't parse as their registered type.
//!
//! ```rust
//! use semtext::{HolderKind, MetadataRegistry};
//!
//! #[derive(serde::Deserialize)]
//! struct Pos {
//!     tag: String,
//! }
//!
//! let mut registry = MetadataRegistry::new();
//! registry.register::<Pos>(HolderKind::Term, "pos").unwrap();
//!
//! assert!(registry.is_registered(HolderKind::Term, "pos"));
//! assert!(!registry.is_registered(HolderKind::Sentence, "pos"));
//! ```

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use semtext_core::Metadata;

use crate::error::{Error, Result};

/// Kinds of values that can hold metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HolderKind {
    /// [`Meaning`](semtext_core::Meaning)
    Meaning,
    /// [`Term`](semtext_core::Term)
    Term,
    /// [`Sentence`](semtext_core::Sentence)
    Sentence,
    /// [`AnnotatedText`](semtext_core::AnnotatedText)
    AnnotatedText,
}

impl HolderKind {
    /// All holder kinds.
    pub const ALL: [HolderKind; 4] = [
        HolderKind::Meaning,
        HolderKind::Term,
        HolderKind::Sentence,
        HolderKind::AnnotatedText,
    ];

    /// Name of the holder kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            HolderKind::Meaning => "Meaning",
            HolderKind::Term => "Term",
            HolderKind::Sentence => "Sentence",
            HolderKind::AnnotatedText => "AnnotatedText",
        }
    }
}

impl fmt::Display for HolderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type Validator = fn(&Value) -> std::result::Result<(), serde_json::Error>;

fn validate_as<T: DeserializeOwned>(value: &Value) -> std::result::Result<(), serde_json::Error> {
    T::deserialize(value).map(drop)
}

#[derive(Clone, Copy)]
struct Registration {
    type_name: &'static str,
    validate: Validator,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Registry of metadata payload types, passed to the decoding functions.
#[derive(Debug, Clone, Default)]
pub struct MetadataRegistry {
    entries: BTreeMap<(HolderKind, String), Registration>,
}

impl MetadataRegistry {
    /// Empty registry: any wire metadata will be rejected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Expect payloads of type `T` under `namespace` in `holder`.
    ///
    /// Registering a namespace again replaces the previous type.
    pub fn register<T: DeserializeOwned>(
        &mut self,
        holder: HolderKind,
        namespace: impl Into<String>,
    ) -> Result<&mut Self> {
        let namespace = namespace.into();
        if namespace.trim().is_empty() {
            return Err(Error::invalid_namespace("namespace must not be empty"));
        }
        let type_name = std::any::type_name::<T>();
        log::debug!("Registering {} metadata under {}/{}", type_name, holder, namespace);
        self.entries.insert(
            (holder, namespace),
            Registration {
                type_name,
                validate: validate_as::<T>,
            },
        );
        Ok(self)
    }

    /// Expect payloads of type `T` under `namespace` in every holder kind.
    pub fn register_everywhere<T: DeserializeOwned>(
        &mut self,
        namespace: impl Into<String>,
    ) -> Result<&mut Self> {
        let namespace = namespace.into();
        for holder in HolderKind::ALL {
            self.register::<T>(holder, namespace.clone())?;
        }
        Ok(self)
    }

    /// Forget every registration.
    pub fn clear(&mut self) {
        log::debug!("Clearing {} metadata registrations", self.entries.len());
        self.entries.clear();
    }

    /// True if `namespace` is registered for `holder`.
    #[must_use]
    pub fn is_registered(&self, holder: HolderKind, namespace: &str) -> bool {
        self.registration(holder, namespace).is_some()
    }

    /// Name of the type registered under `namespace` for `holder`.
    #[must_use]
    pub fn type_name(&self, holder: HolderKind, namespace: &str) -> Option<&'static str> {
        self.registration(holder, namespace).map(|r| r.type_name)
    }

    /// Namespaces registered for `holder`, sorted.
    pub fn namespaces(&self, holder: HolderKind) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .keys()
            .filter(move |(h, _)| *h == holder)
            .map(|(_, ns)| ns.as_str())
    }

    /// Number of registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check one wire payload against its registration.
    pub fn check(&self, holder: HolderKind, namespace: &str, value: &Value) -> Result<()> {
        let registration = self
            .registration(holder, namespace)
            .ok_or_else(|| Error::unregistered(namespace, holder))?;
        if value.is_null() {
            return Err(Error::null_metadata(namespace, holder));
        }
        (registration.validate)(value).map_err(|source| Error::MetadataPayload {
            namespace: namespace.to_string(),
            holder,
            type_name: registration.type_name,
            source,
        })
    }

    /// Check every payload of a metadata map.
    pub fn check_all(&self, holder: HolderKind, metadata: &Metadata) -> Result<()> {
        metadata
            .iter()
            .try_for_each(|(namespace, value)| self.check(holder, namespace, value))
    }

    fn registration(&self, holder: HolderKind, namespace: &str) -> Option<&Registration> {
        self.entries.get(&(holder, namespace.to_string()))
    }
}
