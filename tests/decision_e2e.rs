use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

use qdecide::{
    classical_ltp, expected_utility_decision, log_utility, multi_criteria_decision,
    neural_population_interference, probabilistic_and, probabilistic_or, quantum_ltp,
    rank_scores, Alternative, BayesianBeliefModel, DecisionConfig, UtilityKind,
    INVALID_OUTCOME_UTILITY,
};

const EPS: f64 = 1e-9;

#[test]
fn ltp_reference_scenario() {
    assert!((classical_ltp(0.5, 0.5, 0.2, 0.8) - 0.5).abs() < EPS);

    let expected = 0.5 + (0.5_f64 * 0.5 * 0.2 * 0.8).sqrt() * FRAC_PI_3.cos();
    let q = quantum_ltp(0.5, 0.5, 0.2, 0.8, FRAC_PI_3);
    assert!((q - expected).abs() < EPS);
    assert!((q - 0.6).abs() < EPS);

    // Interference vanishes at pi/2 and is extremal at 0 and pi.
    assert!((quantum_ltp(0.5, 0.5, 0.2, 0.8, FRAC_PI_2) - 0.5).abs() < EPS);
    assert!(quantum_ltp(0.5, 0.5, 0.2, 0.8, 0.0) > q);
    assert!(quantum_ltp(0.5, 0.5, 0.2, 0.8, PI) < 0.5);
}

#[test]
fn logic_gates_reduce_to_independent_case() {
    let p = 0.35;
    assert!((probabilistic_and(p, p, 0.0) - p * p).abs() < EPS);
    assert!((probabilistic_or(0.2, 0.7, 0.0) - (0.2 + 0.7 - 0.14)).abs() < EPS);
}

#[test]
fn utility_sentinels() {
    assert_eq!(log_utility(0.0), INVALID_OUTCOME_UTILITY);
    assert_eq!(log_utility(-5.0), INVALID_OUTCOME_UTILITY);
    assert_eq!(log_utility(1.0), 0.0);
}

#[test]
fn expected_utility_across_kinds() {
    let outcomes = [100.0, 50.0, -10.0];
    let probabilities = [0.5, 0.3, 0.2];

    let linear = expected_utility_decision(&outcomes, &probabilities, UtilityKind::Linear).unwrap();
    assert!((linear - 63.0).abs() < EPS);

    let log =
        expected_utility_decision(&outcomes, &probabilities, UtilityKind::Logarithmic).unwrap();
    let expected_log = 0.5 * 100.0_f64.ln() + 0.3 * 50.0_f64.ln() + 0.2 * INVALID_OUTCOME_UTILITY;
    assert!((log - expected_log).abs() < EPS);

    let config = DecisionConfig::default();
    let power =
        expected_utility_decision(&outcomes, &probabilities, config.power_utility_kind()).unwrap();
    let expected_power =
        0.5 * 100.0_f64.powf(0.7) + 0.3 * 50.0_f64.powf(0.7) + 0.2 * INVALID_OUTCOME_UTILITY;
    assert!((power - expected_power).abs() < EPS);

    let err = expected_utility_decision(&outcomes, &probabilities[..2], UtilityKind::Linear)
        .unwrap_err();
    assert!(err.is_length_mismatch());
}

#[test]
fn belief_model_sequential_updates() {
    let config = DecisionConfig::from_json_str(r#"{"evidence_weight": 1.2}"#).unwrap();
    let mut model = BayesianBeliefModel::from_config(vec![0.3, 0.4, 0.3], &config);

    let posterior = model.update_beliefs(&[0.8, 0.2, 0.5]).unwrap();
    assert!((posterior.iter().sum::<f64>() - 1.0).abs() < EPS);
    assert!((posterior[0] - 0.288 / 0.564).abs() < EPS);
    assert_eq!(model.prior(), &[0.3, 0.4, 0.3]);

    model.set_prior(posterior).unwrap();
    let second = model.absorb(&[0.8, 0.2, 0.5]).unwrap().to_vec();
    assert!((second.iter().sum::<f64>() - 1.0).abs() < EPS);
    assert!(second[0] > 0.511);
    assert_eq!(model.most_likely(), Some(0));

    let zero = model.update_beliefs(&[0.0, 0.0, 0.0]).unwrap();
    assert!(zero.iter().all(|&p| p == 0.0));
}

#[test]
fn multi_criteria_with_seeded_config() {
    let alternatives = vec![
        Alternative::new("Option A", vec![8.0, 6.0, 7.0]),
        Alternative::new("Option B", vec![6.0, 9.0, 5.0]),
        Alternative::new("Option C", vec![7.0, 7.0, 8.0]),
    ];
    let weights = [0.4, 0.35, 0.25];

    let exact_config = DecisionConfig {
        uncertainty_factor: 0.0,
        ..DecisionConfig::default().with_seed(11)
    };
    let exact = multi_criteria_decision(
        &alternatives,
        &weights,
        exact_config.uncertainty_factor,
        &mut exact_config.rng(),
    )
    .unwrap();
    for (alt, scored) in alternatives.iter().zip(&exact) {
        let weighted: f64 = alt.scores.iter().zip(&weights).map(|(s, w)| s * w).sum();
        assert_eq!(alt.name, scored.name);
        assert!((scored.score - weighted).abs() < EPS);
    }
    assert_eq!(rank_scores(exact)[0].name, "Option C");

    let noisy_config = DecisionConfig::default().with_seed(11);
    let first = multi_criteria_decision(
        &alternatives,
        &weights,
        noisy_config.uncertainty_factor,
        &mut noisy_config.rng(),
    )
    .unwrap();
    let second = multi_criteria_decision(
        &alternatives,
        &weights,
        noisy_config.uncertainty_factor,
        &mut noisy_config.rng(),
    )
    .unwrap();
    assert_eq!(first, second);

    let err = multi_criteria_decision(&[], &weights, 0.1, &mut noisy_config.rng()).unwrap_err();
    assert!(err.is_empty_input());
}

#[test]
fn amplitude_interference_matches_closed_form() {
    let px = [0.6, 0.8];
    let py = [1.0, 0.0];
    let (c1, c2, theta) = (0.7_f64, 0.3_f64, PI / 4.0);

    let v = neural_population_interference(&px, &py, c1, c2, theta).unwrap();
    let expected = c1 * c1 + c2 * c2 + 2.0 * c1 * c2 * theta.cos();
    assert!((v - expected).abs() < EPS);

    assert!(neural_population_interference(&px, &[1.0], c1, c2, theta)
        .unwrap_err()
        .is_length_mismatch());
}
