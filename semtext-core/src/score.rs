//! Probability checks.
//!
//! Two tolerances are in play: raw candidate probabilities only need to be
//! "positive-ish", while already-normalized scores must sit in `[0, 1]`.
//! Both allow [`TOLERANCE`] of slack for float noise.

use crate::error::{Error, Result};

/// Slack allowed around probability bounds.
pub const TOLERANCE: f64 = 0.001;

/// Return `score` if it is finite and not below `-TOLERANCE`.
pub fn check_positive_score(score: f64, context: &str) -> Result<f64> {
    if !score.is_finite() || score < -TOLERANCE {
        return Err(Error::invalid_probability(
            score,
            format!("must be greater or equal than -{}", TOLERANCE),
            context,
        ));
    }
    Ok(score)
}

/// Check that `score` lies within `[-TOLERANCE, 1 + TOLERANCE]`.
///
/// For callers holding already-normalized probabilities, e.g. from
/// [`normalize_meanings`](crate::normalize_meanings). Construction and
/// decoding accept raw probabilities and never call it.
pub fn check_score(score: f64, context: &str) -> Result<()> {
    if score.is_nan() || score < -TOLERANCE || score > 1.0 + TOLERANCE {
        return Err(Error::invalid_probability(
            score,
            format!("exceeds bounds [{}, {}]", -TOLERANCE, 1.0 + TOLERANCE),
            context,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_score_tolerates_noise() {
        assert_eq!(check_positive_score(-0.0005, "p").unwrap(), -0.0005);
        assert_eq!(check_positive_score(7.0, "p").unwrap(), 7.0);
        assert!(check_positive_score(-0.01, "p").is_err());
        assert!(check_positive_score(f64::NAN, "p").is_err());
        assert!(check_positive_score(f64::INFINITY, "p").is_err());
    }

    #[test]
    fn score_must_be_unit_interval() {
        assert!(check_score(0.0, "s").is_ok());
        assert!(check_score(1.0005, "s").is_ok());
        assert!(check_score(1.7, "s").is_err());
        assert!(check_score(-0.5, "s").is_err());
    }

    #[test]
    fn normalized_candidates_pass_score_check() {
        use crate::meaning::{normalize_meanings, Meaning, MeaningKind};

        let raw = [
            Meaning::new("a", MeaningKind::Entity, 7.0).unwrap(),
            Meaning::new("b", MeaningKind::Concept, f64::MAX).unwrap(),
        ];
        assert!(check_score(raw[0].probability(), "raw").is_err());
        for m in normalize_meanings(raw) {
            assert!(check_score(m.probability(), "normalized").is_ok());
        }
    }

    #[test]
    fn message_names_value_and_context() {
        let msg = check_score(1.7, "Invalid score!").unwrap_err().to_string();
        assert!(msg.contains("Invalid score!"));
        assert!(msg.contains("1.7"));
    }
}
