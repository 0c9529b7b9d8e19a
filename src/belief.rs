//! Bayesian belief model over a fixed, ordered set of hypotheses.
//!
//! The model holds a prior belief vector and an evidence weight. An update
//! multiplies each prior entry by its evidence entry and the weight, then
//! renormalizes so the posterior sums to one.
//!
//! [`BayesianBeliefModel::update_beliefs`] never mutates the model; the
//! caller decides whether the posterior becomes the next prior, either via
//! [`BayesianBeliefModel::set_prior`] or by calling
//! [`BayesianBeliefModel::absorb`].

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{DecisionConfig, DEFAULT_EVIDENCE_WEIGHT};
use crate::error::{ensure_same_len, DecisionResult};

/// Prior beliefs plus an evidence sensitivity multiplier.
///
/// # Examples
///
/// ```
/// use qdecide::BayesianBeliefModel;
///
/// let model = BayesianBeliefModel::new(vec![0.3, 0.4, 0.3], Some(1.2));
/// let posterior = model.update_beliefs(&[0.8, 0.2, 0.5]).unwrap();
/// let total: f64 = posterior.iter().sum();
/// assert!((total - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BayesianBeliefModel {
    prior: Vec<f64>,

    #[serde(default = "default_evidence_weight")]
    evidence_weight: f64,
}

fn default_evidence_weight() -> f64 {
    DEFAULT_EVIDENCE_WEIGHT
}

impl BayesianBeliefModel {
    /// Creates a model; `evidence_weight` defaults to 1.0.
    #[must_use]
    pub fn new(prior: Vec<f64>, evidence_weight: Option<f64>) -> Self {
        Self {
            prior,
            evidence_weight: evidence_weight.unwrap_or(DEFAULT_EVIDENCE_WEIGHT),
        }
    }

    /// Creates a model with an explicit evidence weight.
    #[must_use]
    pub fn with_weight(prior: Vec<f64>, evidence_weight: f64) -> Self {
        Self::new(prior, Some(evidence_weight))
    }

    /// Creates a model using the configured evidence weight.
    #[must_use]
    pub fn from_config(prior: Vec<f64>, config: &DecisionConfig) -> Self {
        Self::with_weight(prior, config.evidence_weight)
    }

    /// Current prior beliefs.
    #[must_use]
    pub fn prior(&self) -> &[f64] {
        &self.prior
    }

    /// Multiplier applied to every evidence entry.
    #[must_use]
    pub const fn evidence_weight(&self) -> f64 {
        self.evidence_weight
    }

    /// Number of hypotheses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prior.len()
    }

    /// Returns true if the model tracks no hypotheses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prior.is_empty()
    }

    /// Replaces the prior, typically with a posterior from a previous update.
    ///
    /// # Errors
    ///
    /// Returns `DecisionError::LengthMismatch` if the hypothesis count changes.
    pub fn set_prior(&mut self, prior: Vec<f64>) -> DecisionResult<()> {
        ensure_same_len("belief prior", self.prior.len(), prior.len())?;
        self.prior = prior;
        Ok(())
    }

    /// Computes the posterior for `evidence` without changing the model.
    ///
    /// If the normalization constant is zero (for example all-zero evidence)
    /// the unnormalized vector is returned as-is, which is all zeros rather
    /// than a uniform distribution.
    ///
    /// # Errors
    ///
    /// Returns `DecisionError::LengthMismatch` if `evidence` and the prior
    /// differ in length.
    pub fn update_beliefs(&self, evidence: &[f64]) -> DecisionResult<Vec<f64>> {
        ensure_same_len("belief evidence", self.prior.len(), evidence.len())?;

        let mut posterior: Vec<f64> = self
            .prior
            .iter()
            .zip(evidence)
            .map(|(&prior, &e)| prior * e * self.evidence_weight)
            .collect();

        let normalization: f64 = posterior.iter().sum();
        if normalization > 0.0 {
            for p in &mut posterior {
                *p /= normalization;
            }
        } else {
            warn!(
                hypotheses = posterior.len(),
                normalization, "zero normalization constant; posterior left unnormalized"
            );
        }

        debug!(hypotheses = posterior.len(), normalization, "beliefs updated");
        Ok(posterior)
    }

    /// Updates with `evidence` and adopts the posterior as the new prior.
    ///
    /// # Errors
    ///
    /// Returns `DecisionError::LengthMismatch` if `evidence` and the prior
    /// differ in length.
    pub fn absorb(&mut self, evidence: &[f64]) -> DecisionResult<&[f64]> {
        self.prior = self.update_beliefs(evidence)?;
        Ok(&self.prior)
    }

    /// Index of the most probable hypothesis, first on ties.
    #[must_use]
    pub fn most_likely(&self) -> Option<usize> {
        self.prior
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, &p)| match best {
                Some((_, bp)) if bp >= p => best,
                _ => Some((i, p)),
            })
            .map(|(i, _)| i)
    }
}
