//! Error types for semtext.

use thiserror::Error;

use crate::registry::HolderKind;

/// Result type for semtext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for semtext operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A value violated a structural invariant while being built.
    #[error(transparent)]
    Core(#[from] semtext_core::Error),

    /// Malformed JSON, or JSON not shaped like the wire format.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Wire metadata under a namespace nobody registered.
    #[error("no metadata type registered for namespace \"{namespace}\" in {holder}")]
    UnregisteredMetadataNamespace {
        /// Namespace found on the wire.
        namespace: String,
        /// Kind of object holding the metadata.
        holder: HolderKind,
    },

    /// Wire metadata that doesn't parse as its registered type.
    #[error("metadata under namespace \"{namespace}\" in {holder} is not a valid {type_name}: {source}")]
    MetadataPayload {
        /// Namespace found on the wire.
        namespace: String,
        /// Kind of object holding the metadata.
        holder: HolderKind,
        /// Registered payload type.
        type_name: &'static str,
        /// Why parsing failed.
        #[source]
        source: serde_json::Error,
    },

    /// Wire metadata whose payload is `null`.
    #[error("null metadata under namespace \"{namespace}\" in {holder}")]
    NullMetadata {
        /// Namespace found on the wire.
        namespace: String,
        /// Kind of object holding the metadata.
        holder: HolderKind,
    },

    /// Namespace that can't be registered.
    #[error("Invalid namespace: {0}")]
    InvalidNamespace(String),
}

impl Error {
    /// Create an unregistered namespace error.
    #[must_use]
    pub fn unregistered(namespace: impl Into<String>, holder: HolderKind) -> Self {
        Error::UnregisteredMetadataNamespace {
            namespace: namespace.into(),
            holder,
        }
    }

    /// Create a null metadata error.
    #[must_use]
    pub fn null_metadata(namespace: impl Into<String>, holder: HolderKind) -> Self {
        Error::NullMetadata {
            namespace: namespace.into(),
            holder,
        }
    }

    /// Create an invalid namespace error.
    #[must_use]
    pub fn invalid_namespace(msg: impl Into<String>) -> Self {
        Error::InvalidNamespace(msg.into())
    }
}
