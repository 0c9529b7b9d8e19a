//! # qdecide - Probabilistic and quantum-like decision modeling
//!
//! Small, pure building blocks for reasoning about choices under uncertainty.
//!
//! ## Core Concepts
//!
//! - **Utility**: transforms from outcome values to utilities (linear, log, power)
//! - **Logic gates**: AND/OR over correlated event probabilities
//! - **Total probability**: classical and interference-augmented (quantum-like)
//! - **Expected utility**: weighted average utility over outcomes
//! - **Belief model**: Bayesian update of a belief vector by weighted evidence
//! - **Multi-criteria**: weighted criterion scores under random perturbation
//! - **Amplitudes**: interference of two neural-population amplitude vectors
//!
//! ## Usage
//!
//! ```rust
//! use qdecide::{classical_ltp, quantum_ltp, BayesianBeliefModel};
//!
//! let classical = classical_ltp(0.5, 0.5, 0.2, 0.8);
//! let quantum = quantum_ltp(0.5, 0.5, 0.2, 0.8, std::f64::consts::FRAC_PI_3);
//! assert!(quantum > classical);
//!
//! let model = BayesianBeliefModel::new(vec![0.3, 0.4, 0.3], Some(1.2));
//! let posterior = model.update_beliefs(&[0.8, 0.2, 0.5])?;
//! assert_eq!(posterior.len(), 3);
//! # Ok::<(), qdecide::DecisionError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::many_single_char_names)]

pub mod amplitude;
pub mod belief;
pub mod config;
pub mod error;
pub mod expected_utility;
pub mod logic;
pub mod ltp;
pub mod multi_criteria;
pub mod utility;

// Re-export primary types at crate root for convenience
pub use amplitude::{euclidean_norm, neural_population_interference};
pub use belief::BayesianBeliefModel;
pub use config::{DecisionConfig, DEFAULT_EVIDENCE_WEIGHT, DEFAULT_UNCERTAINTY_FACTOR};
pub use error::{DecisionError, DecisionResult, ValidationError};
pub use expected_utility::{expected_utility_decision, expected_utility_with};
pub use logic::{probabilistic_and, probabilistic_not, probabilistic_or};
pub use ltp::{classical_ltp, interference_term, quantum_ltp, BranchProbabilities};
pub use multi_criteria::{multi_criteria_decision, rank_scores, Alternative, AlternativeScore};
pub use utility::{
	linear_utility, log_utility, power_utility, UtilityKind, DEFAULT_DECISION_GAMMA,
	DEFAULT_POWER_GAMMA, INVALID_OUTCOME_UTILITY,
};
