//! Error types for semtext-core.

use thiserror::Error;

use crate::span::Span;
use crate::status::MeaningStatus;

/// Result type for semtext-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for semtext-core operations.
///
/// Every constructor validates eagerly, so these are raised before any
/// invariant-violating value could be observed.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Negative start, or start greater than end.
    #[error("{context} -- invalid bounds [{start}, {end})")]
    InvalidSpan {
        /// Start offset as provided.
        start: i64,
        /// End offset as provided.
        end: i64,
        /// Caller-supplied context.
        context: String,
    },

    /// Two spans of an ordered list appear in reverse order.
    #[error("{context} -- span {prior} comes before span {current} but starts after it ends")]
    OutOfOrderSpan {
        /// The span visited first.
        prior: Span,
        /// The span visited second.
        current: Span,
        /// Caller-supplied context.
        context: String,
    },

    /// Two spans of an ordered list cross each other.
    #[error("{context} -- span {prior} overlaps with span {current}")]
    OverlappingSpan {
        /// The span visited first.
        prior: Span,
        /// The span visited second.
        current: Span,
        /// Caller-supplied context.
        context: String,
    },

    /// A span list leaks out of its container.
    #[error("{context} -- spans [{start}, {end}] exceed container bounds [{left}, {right}]")]
    OutOfBoundsSpan {
        /// Start of the first span.
        start: usize,
        /// End of the last span.
        end: usize,
        /// Container left bound.
        left: usize,
        /// Container right bound.
        right: usize,
        /// Caller-supplied context.
        context: String,
    },

    /// Status and selected meaning don't agree.
    #[error("{context} -- meaning status {status}: {reason}")]
    InvalidMeaningStatus {
        /// The offending status.
        status: MeaningStatus,
        /// What is wrong with the selected meaning.
        reason: String,
        /// Caller-supplied context.
        context: String,
    },

    /// Probability or score outside its allowed range.
    #[error("{context} -- invalid probability {value}: {reason}")]
    InvalidProbability {
        /// The offending value.
        value: f64,
        /// Which bound was violated.
        reason: String,
        /// Caller-supplied context.
        context: String,
    },

    /// No metadata stored under the requested namespace.
    #[error("there is no metadata under the namespace \"{namespace}\" in {holder}")]
    MetadataNotFound {
        /// Requested namespace.
        namespace: String,
        /// Kind of object that was queried.
        holder: &'static str,
    },

    /// Metadata payload could not be converted to or from the requested type.
    #[error("metadata under namespace \"{namespace}\": {source}")]
    Metadata {
        /// Namespace of the payload.
        namespace: String,
        /// Underlying conversion error.
        #[source]
        source: serde_json::Error,
    },

    /// Deletion range whose lower bound lies after its upper bound.
    #[error("invalid deletion range: {0}")]
    InvalidRange(String),

    /// Empty or uncompilable text pattern.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
}

impl Error {
    /// Create an invalid span error.
    #[must_use]
    pub fn invalid_span(start: i64, end: i64, context: impl Into<String>) -> Self {
        Self::InvalidSpan {
            start,
            end,
            context: context.into(),
        }
    }

    /// Create an invalid meaning status error.
    #[must_use]
    pub fn invalid_meaning_status(
        status: MeaningStatus,
        reason: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self::InvalidMeaningStatus {
            status,
            reason: reason.into(),
            context: context.into(),
        }
    }

    /// Create an invalid probability error.
    #[must_use]
    pub fn invalid_probability(
        value: f64,
        reason: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self::InvalidProbability {
            value,
            reason: reason.into(),
            context: context.into(),
        }
    }

    /// Create a metadata-not-found error.
    #[must_use]
    pub fn metadata_not_found(namespace: impl Into<String>, holder: &'static str) -> Self {
        Self::MetadataNotFound {
            namespace: namespace.into(),
            holder,
        }
    }

    /// Create an invalid range error.
    #[must_use]
    pub fn invalid_range(msg: impl Into<String>) -> Self {
        Self::InvalidRange(msg.into())
    }

    /// Create an invalid pattern error.
    #[must_use]
    pub fn invalid_pattern(msg: impl Into<String>) -> Self {
        Self::InvalidPattern(msg.into())
    }
}
