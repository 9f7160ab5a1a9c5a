//! Namespaced metadata attached to annotated values.
//!
//! Payloads are opaque JSON values. Which Rust type lives under which
//! namespace is the embedding application's business; the `semtext` crate's
//! registry enforces it when decoding from the wire.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Namespace -> payload map.
pub type Metadata = BTreeMap<String, Value>;

/// Values that can hold [`Metadata`].
pub trait HasMetadata {
    /// Name of the holder kind, used in error messages.
    const HOLDER: &'static str;

    /// All metadata of this value.
    fn metadata(&self) -> &Metadata;

    /// True when something is stored under `namespace`. Never fails.
    fn has_metadata(&self, namespace: &str) -> bool {
        self.metadata().contains_key(namespace)
    }

    /// Payload stored under `namespace`.
    fn metadata_value(&self, namespace: &str) -> Result<&Value> {
        self.metadata()
            .get(namespace)
            .ok_or_else(|| Error::metadata_not_found(namespace, Self::HOLDER))
    }

    /// Payload stored under `namespace`, converted to `T`.
    fn metadata_as<T: DeserializeOwned>(&self, namespace: &str) -> Result<T> {
        let value = self.metadata_value(namespace)?;
        T::deserialize(value).map_err(|source| Error::Metadata {
            namespace: namespace.to_string(),
            source,
        })
    }
}

/// Copy of `metadata` with `value` stored under `namespace`; other namespaces
/// are left untouched.
#[must_use]
pub fn replace_metadata(metadata: &Metadata, namespace: &str, value: Value) -> Metadata {
    let mut ret = metadata.clone();
    ret.insert(namespace.to_string(), value);
    ret
}

/// Encode a typed payload for storage under `namespace`.
pub fn to_payload<T: Serialize>(namespace: &str, payload: &T) -> Result<Value> {
    serde_json::to_value(payload).map_err(|source| Error::Metadata {
        namespace: namespace.to_string(),
        source,
    })
}
