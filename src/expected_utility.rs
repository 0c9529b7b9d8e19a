//! Expected-utility evaluation over weighted outcomes.

use tracing::{debug, warn};

use crate::error::{ensure_same_len, DecisionResult};
use crate::utility::UtilityKind;

/// Expected utility of `outcomes` weighted by `probabilities` under `kind`.
///
/// Weights need not be normalized: when their sum is positive the weighted
/// utility sum is divided by it. When the sum is zero or negative the raw
/// weighted sum is returned.
///
/// # Errors
///
/// Returns `DecisionError::LengthMismatch` if the two slices differ in length.
///
/// # Examples
///
/// ```
/// use qdecide::{expected_utility_decision, UtilityKind};
///
/// let eu = expected_utility_decision(&[100.0, 50.0], &[0.6, 0.4], UtilityKind::Linear).unwrap();
/// assert!((eu - 80.0).abs() < 1e-9);
/// ```
pub fn expected_utility_decision(
    outcomes: &[f64],
    probabilities: &[f64],
    kind: UtilityKind,
) -> DecisionResult<f64> {
    let eu = expected_utility_with(outcomes, probabilities, |x| kind.apply(x))?;
    debug!(
        utility = kind.name(),
        outcomes = outcomes.len(),
        expected_utility = eu,
        "expected utility evaluated"
    );
    Ok(eu)
}

/// Expected utility with an arbitrary utility function.
///
/// # Errors
///
/// Returns `DecisionError::LengthMismatch` if the two slices differ in length.
pub fn expected_utility_with<F>(
    outcomes: &[f64],
    probabilities: &[f64],
    utility: F,
) -> DecisionResult<f64>
where
    F: Fn(f64) -> f64,
{
    ensure_same_len("expected utility probabilities", outcomes.len(), probabilities.len())?;

    let mut weighted = 0.0;
    let mut mass = 0.0;
    for (&outcome, &p) in outcomes.iter().zip(probabilities) {
        weighted += p * utility(outcome);
        mass += p;
    }

    if mass > 0.0 {
        Ok(weighted / mass)
    } else {
        warn!(mass, "non-positive probability mass; returning unnormalized utility sum");
        Ok(weighted)
    }
}
