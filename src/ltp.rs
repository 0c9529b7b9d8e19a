//! Law of total probability, classical and interference-augmented.
//!
//! Two mutually exclusive branches `b1`, `b2` with probabilities `pb1`, `pb2`
//! and conditionals `P(a | b1)`, `P(a | b2)`. The quantum-like variant adds
//! `sqrt(pb1 * pb2 * pa_b1 * pa_b2) * cos(theta)`: `theta = pi/2` removes the
//! interference, `theta = 0` maximizes it and `theta = pi` minimizes it.
//!
//! No range validation is performed; results are interpretable as
//! probabilities only for inputs in [0.0, 1.0].

use serde::{Deserialize, Serialize};

/// Classical marginalization over two branches.
#[must_use]
pub fn classical_ltp(pb1: f64, pb2: f64, pa_given_b1: f64, pa_given_b2: f64) -> f64 {
    pb1 * pa_given_b1 + pb2 * pa_given_b2
}

/// Interference term added by [`quantum_ltp`].
#[must_use]
pub fn interference_term(
    pb1: f64,
    pb2: f64,
    pa_given_b1: f64,
    pa_given_b2: f64,
    theta: f64,
) -> f64 {
    (pb1 * pb2 * pa_given_b1 * pa_given_b2).sqrt() * theta.cos()
}

/// Classical marginalization plus an interference term with phase `theta`.
#[must_use]
pub fn quantum_ltp(pb1: f64, pb2: f64, pa_given_b1: f64, pa_given_b2: f64, theta: f64) -> f64 {
    classical_ltp(pb1, pb2, pa_given_b1, pa_given_b2)
        + interference_term(pb1, pb2, pa_given_b1, pa_given_b2, theta)
}

/// Branch and conditional probabilities for a two-branch decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BranchProbabilities {
    /// Probability of branch `b1`.
    pub pb1: f64,
    /// Probability of branch `b2`.
    pub pb2: f64,
    /// `P(a | b1)`.
    pub pa_given_b1: f64,
    /// `P(a | b2)`.
    pub pa_given_b2: f64,
}

impl BranchProbabilities {
    /// Bundles branch and conditional probabilities.
    #[must_use]
    pub const fn new(pb1: f64, pb2: f64, pa_given_b1: f64, pa_given_b2: f64) -> Self {
        Self {
            pb1,
            pb2,
            pa_given_b1,
            pa_given_b2,
        }
    }

    /// See [`classical_ltp`].
    #[must_use]
    pub fn classical(&self) -> f64 {
        classical_ltp(self.pb1, self.pb2, self.pa_given_b1, self.pa_given_b2)
    }

    /// See [`quantum_ltp`].
    #[must_use]
    pub fn quantum(&self, theta: f64) -> f64 {
        quantum_ltp(self.pb1, self.pb2, self.pa_given_b1, self.pa_given_b2, theta)
    }

    /// Quantum minus classical at phase `theta`.
    #[must_use]
    pub fn interference(&self, theta: f64) -> f64 {
        interference_term(self.pb1, self.pb2, self.pa_given_b1, self.pa_given_b2, theta)
    }
}
