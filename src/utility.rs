//! Utility transforms from outcome values to utility values.
//!
//! Every transform is total: an outcome the transform cannot handle
//! (a non-positive value under a logarithm or a fractional power) maps to
//! [`INVALID_OUTCOME_UTILITY`] instead of failing, so aggregations over many
//! outcomes always produce a number.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Utility assigned to outcomes outside a transform's domain.
pub const INVALID_OUTCOME_UTILITY: f64 = -1000.0;

/// Exponent used by [`power_utility`] callers that have no preference.
pub const DEFAULT_POWER_GAMMA: f64 = 0.5;

/// Exponent used by expected-utility evaluation for the power case.
pub const DEFAULT_DECISION_GAMMA: f64 = 0.7;

/// Identity utility (risk-neutral).
#[must_use]
pub const fn linear_utility(x: f64) -> f64 {
    x
}

/// Natural-log utility, or [`INVALID_OUTCOME_UTILITY`] when `x <= 0`.
#[must_use]
pub fn log_utility(x: f64) -> f64 {
    if x > 0.0 {
        x.ln()
    } else {
        INVALID_OUTCOME_UTILITY
    }
}

/// Power utility `x^gamma`, or [`INVALID_OUTCOME_UTILITY`] when `x <= 0`.
///
/// `gamma < 1` is risk-averse, `gamma == 1` is linear and `gamma > 1` is
/// risk-seeking.
#[must_use]
pub fn power_utility(x: f64, gamma: f64) -> f64 {
    if x > 0.0 {
        x.powf(gamma)
    } else {
        INVALID_OUTCOME_UTILITY
    }
}

/// Which utility transform to apply to outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UtilityKind {
    /// Outcome used as-is (risk-neutral).
    Linear,

    /// Natural logarithm of the outcome.
    Logarithmic,

    /// Outcome raised to `gamma`.
    Power {
        /// Exponent; below 1.0 is risk-averse, above 1.0 risk-seeking.
        gamma: f64,
    },
}

impl UtilityKind {
    /// Power utility with the decision default exponent.
    #[must_use]
    pub const fn power() -> Self {
        Self::Power {
            gamma: DEFAULT_DECISION_GAMMA,
        }
    }

    /// Applies the selected transform to an outcome.
    #[must_use]
    pub fn apply(&self, outcome: f64) -> f64 {
        match *self {
            Self::Linear => linear_utility(outcome),
            Self::Logarithmic => log_utility(outcome),
            Self::Power { gamma } => power_utility(outcome, gamma),
        }
    }

    /// Short stable identifier suitable for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Logarithmic => "logarithmic",
            Self::Power { .. } => "power",
        }
    }

    /// Returns true for transforms that are concave over positive outcomes.
    #[must_use]
    pub fn is_risk_averse(&self) -> bool {
        match *self {
            Self::Linear => false,
            Self::Logarithmic => true,
            Self::Power { gamma } => gamma < 1.0,
        }
    }
}

impl Default for UtilityKind {
    fn default() -> Self {
        Self::Linear
    }
}

impl fmt::Display for UtilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Logarithmic => write!(f, "logarithmic"),
            Self::Power { gamma } => write!(f, "power({gamma})"),
        }
    }
}
