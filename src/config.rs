//! Evaluator configuration.
//!
//! All fields have defaults, so a partial JSON document (or `{}`) is a valid
//! configuration. Randomness for the multi-criteria evaluator is created here
//! and nowhere else.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::utility::{UtilityKind, DEFAULT_DECISION_GAMMA};

/// Default uncertainty factor for multi-criteria scoring.
pub const DEFAULT_UNCERTAINTY_FACTOR: f64 = 0.1;

/// Default evidence weight for Bayesian updates.
pub const DEFAULT_EVIDENCE_WEIGHT: f64 = 1.0;

/// Tunable parameters shared by the evaluators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionConfig {
    /// Exponent for the power utility in expected-utility evaluation.
    pub power_gamma: f64,

    /// Scale of the uniform perturbation applied to criterion scores.
    pub uncertainty_factor: f64,

    /// Multiplier applied to evidence in Bayesian updates.
    pub evidence_weight: f64,

    /// Seed for reproducible perturbations. `None` draws from OS entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            power_gamma: DEFAULT_DECISION_GAMMA,
            uncertainty_factor: DEFAULT_UNCERTAINTY_FACTOR,
            evidence_weight: DEFAULT_EVIDENCE_WEIGHT,
            seed: None,
        }
    }
}

impl DecisionConfig {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MalformedConfig` for invalid JSON and the
    /// field-specific variants for out-of-range values.
    pub fn from_json_str(json: &str) -> Result<Self, ValidationError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ValidationError::MalformedConfig {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Sets a fixed seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates numeric fields.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` naming the first offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.power_gamma.is_finite() {
            return Err(ValidationError::InvalidGamma {
                value: self.power_gamma,
            });
        }
        if !self.uncertainty_factor.is_finite() || self.uncertainty_factor < 0.0 {
            return Err(ValidationError::InvalidUncertaintyFactor {
                value: self.uncertainty_factor,
            });
        }
        if !self.evidence_weight.is_finite() || self.evidence_weight < 0.0 {
            return Err(ValidationError::InvalidEvidenceWeight {
                value: self.evidence_weight,
            });
        }
        Ok(())
    }

    /// Power utility kind using the configured exponent.
    #[must_use]
    pub const fn power_utility_kind(&self) -> UtilityKind {
        UtilityKind::Power {
            gamma: self.power_gamma,
        }
    }

    /// Random source for perturbations: seeded when `seed` is set.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
