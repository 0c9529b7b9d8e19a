//! Probabilistic logic gates over correlated events.
//!
//! Correlation `rho` is expected in [-1.0, 1.0] and probabilities in
//! [0.0, 1.0]. Neither is checked; results outside [0.0, 1.0] are possible
//! with invalid inputs and are the caller's responsibility.

/// Joint probability of two correlated events.
///
/// `p1 * p2 + rho * sqrt(p1(1 - p1) p2(1 - p2))`. With `rho == 0.0` this is
/// the independent AND.
#[must_use]
pub fn probabilistic_and(p1: f64, p2: f64, rho: f64) -> f64 {
    let covariance = (p1 * (1.0 - p1) * p2 * (1.0 - p2)).sqrt();
    p1 * p2 + rho * covariance
}

/// Probability that at least one of two correlated events occurs.
#[must_use]
pub fn probabilistic_or(p1: f64, p2: f64, rho: f64) -> f64 {
    p1 + p2 - probabilistic_and(p1, p2, rho)
}

/// Complement of an event probability.
#[must_use]
pub fn probabilistic_not(p: f64) -> f64 {
    1.0 - p
}
