//! Disambiguation status of a term.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::meaning::Meaning;

/// Whether a term may, or must, carry a selected meaning.
///
/// ```text
///                 selected meaning
/// SELECTED        required, non-empty id   (system proposal, not reviewed)
/// REVIEWED        required, non-empty id   (user confirmed or chose)
/// TO_DISAMBIGUATE must be absent           (nothing chosen yet)
/// NOT_SURE        must be absent           (user declined to choose)
/// ```
///
/// Any status may move to any other; the pairing is re-checked on every
/// [`Term::with_status`](crate::Term::with_status).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeaningStatus {
    /// The system selected a meaning; a user should still review it.
    Selected,
    /// No meaning chosen; the user should disambiguate.
    #[default]
    ToDisambiguate,
    /// The user accepted the system's choice or picked another one.
    Reviewed,
    /// The user found the candidates too similar to choose.
    NotSure,
}

impl MeaningStatus {
    /// True when this status requires a selected meaning.
    #[must_use]
    pub const fn requires_selection(&self) -> bool {
        matches!(self, MeaningStatus::Selected | MeaningStatus::Reviewed)
    }

    /// Wire name of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            MeaningStatus::Selected => "SELECTED",
            MeaningStatus::ToDisambiguate => "TO_DISAMBIGUATE",
            MeaningStatus::Reviewed => "REVIEWED",
            MeaningStatus::NotSure => "NOT_SURE",
        }
    }
}

impl fmt::Display for MeaningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check that `status` and `selected` form a valid pair.
pub fn check_meaning_status(
    status: MeaningStatus,
    selected: Option<&Meaning>,
    context: &str,
) -> Result<()> {
    match (status.requires_selection(), selected) {
        (true, None) => Err(Error::invalid_meaning_status(
            status,
            "selected meaning can't be absent",
            context,
        )),
        (true, Some(meaning)) if meaning.id().is_empty() => Err(Error::invalid_meaning_status(
            status,
            "selected meaning must have a non-empty id",
            context,
        )),
        (false, Some(meaning)) => Err(Error::invalid_meaning_status(
            status,
            format!("selected meaning must be absent, found {}", meaning),
            context,
        )),
        _ => Ok(()),
    }
}
