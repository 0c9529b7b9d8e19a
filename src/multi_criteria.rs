//! Multi-criteria scoring under bounded random uncertainty.
//!
//! Each criterion score is perturbed by a fractional adjustment drawn
//! uniformly from `[-uncertainty_factor, uncertainty_factor]`, then weighted
//! and summed per alternative. The random source is always passed in; seed
//! it (see [`crate::DecisionConfig::rng`]) for reproducible results.

use std::cmp::Ordering;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ensure_same_len, DecisionError, DecisionResult};

/// A named option with one score per criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    /// Display name, carried through to the scores.
    pub name: String,
    /// One score per criterion, parallel to the criteria weights.
    pub scores: Vec<f64>,
}

impl Alternative {
    /// Creates an alternative from a name and its criterion scores.
    #[must_use]
    pub fn new(name: impl Into<String>, scores: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            scores,
        }
    }
}

/// Aggregated score of one alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeScore {
    /// Name of the scored alternative.
    pub name: String,
    /// Weighted, perturbed sum over all criteria.
    pub score: f64,
}

/// Scores each alternative, preserving input order.
///
/// # Errors
///
/// - `DecisionError::EmptyInput` if `alternatives` is empty.
/// - `DecisionError::LengthMismatch` if any alternative's score row length
///   differs from `weights.len()`.
///
/// # Examples
///
/// ```
/// use qdecide::{multi_criteria_decision, Alternative};
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let alternatives = vec![Alternative::new("a", vec![1.0, 2.0])];
/// let scores = multi_criteria_decision(&alternatives, &[0.5, 0.5], 0.0, &mut rng).unwrap();
/// assert!((scores[0].score - 1.5).abs() < 1e-12);
/// ```
pub fn multi_criteria_decision<R>(
    alternatives: &[Alternative],
    weights: &[f64],
    uncertainty_factor: f64,
    rng: &mut R,
) -> DecisionResult<Vec<AlternativeScore>>
where
    R: Rng + ?Sized,
{
    if alternatives.is_empty() {
        return Err(DecisionError::empty_input("alternatives"));
    }
    for alternative in alternatives {
        ensure_same_len("criteria scores", weights.len(), alternative.scores.len())?;
    }

    let scored: Vec<AlternativeScore> = alternatives
        .iter()
        .map(|alternative| {
            let score = alternative
                .scores
                .iter()
                .zip(weights)
                .map(|(&score, &weight)| {
                    let adjustment = rng.gen_range(-1.0_f64..=1.0) * uncertainty_factor;
                    score * (1.0 + adjustment) * weight
                })
                .sum();
            AlternativeScore {
                name: alternative.name.clone(),
                score,
            }
        })
        .collect();

    debug!(
        alternatives = scored.len(),
        criteria = weights.len(),
        uncertainty_factor,
        "multi-criteria scores computed"
    );
    Ok(scored)
}

/// Sorts scores from best to worst. Ties keep their input order.
///
/// NaN scores (for example an infinite score under a zero weight) rank
/// last, behind every number including negative infinity.
#[must_use]
pub fn rank_scores(mut scores: Vec<AlternativeScore>) -> Vec<AlternativeScore> {
    scores.sort_by(|a, b| match (a.score.is_nan(), b.score.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.score.total_cmp(&a.score),
    });
    scores
}
