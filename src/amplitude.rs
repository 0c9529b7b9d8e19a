//! Interference of two neural-population amplitude vectors.
//!
//! Each population is summarized by the Euclidean norm of its amplitude
//! vector. The combined intensity is `|c1*nx + c2*ny*e^(i*theta)|^2`
//! expanded for real coefficients:
//! `c1^2 nx^2 + c2^2 ny^2 + 2 c1 c2 nx ny cos(theta)`.

use tracing::debug;

use crate::error::{ensure_same_len, DecisionResult};

/// Euclidean (L2) norm of a vector.
#[must_use]
pub fn euclidean_norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Interference intensity of amplitudes `px` and `py` with coefficients
/// `c1`, `c2` and relative phase `theta`.
///
/// # Errors
///
/// Returns `DecisionError::LengthMismatch` if `px` and `py` differ in length.
pub fn neural_population_interference(
    px: &[f64],
    py: &[f64],
    c1: f64,
    c2: f64,
    theta: f64,
) -> DecisionResult<f64> {
    ensure_same_len("amplitude vectors", px.len(), py.len())?;

    let nx = euclidean_norm(px);
    let ny = euclidean_norm(py);
    let intensity =
        c1 * c1 * nx * nx + c2 * c2 * ny * ny + 2.0 * c1 * c2 * nx * ny * theta.cos();

    debug!(dim = px.len(), nx, ny, theta, intensity, "amplitude interference computed");
    Ok(intensity)
}
