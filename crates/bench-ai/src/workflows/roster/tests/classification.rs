use super::common::*;
use crate::workflows::roster::classification::{
    ConfigurationError, ImpactBlend, PolicyConfig, RosterEngine,
};
use crate::workflows::roster::domain::{BenchDecision, FatigueState, Position};

#[test]
fn overextended_defenseman_accrues_weighted_debt() {
    let record = engine().classify(&overextended_defenseman());

    assert_eq!(record.res, -15);
    assert_eq!(record.decision, BenchDecision::ExitNow);
    assert_eq!(record.fatigue_state, FatigueState::Lethal);
    assert!((record.fatigue_weight - 2.0496).abs() < 1e-4);
    assert!((record.reward - (-30.744)).abs() < 1e-3);
    // (-31.04 * 1.0 + -30.744 * 1.0) / 10.0
    assert!((record.impact - (-6.1784)).abs() < 1e-3);
}

#[test]
fn under_cliff_shift_maintains_with_zero_reward() {
    let record = engine().classify(&fresh_forward());

    assert_eq!(record.res, 4);
    assert_eq!(record.decision, BenchDecision::Maintain);
    assert_eq!(record.fatigue_state, FatigueState::Normal);
    assert_eq!(record.fatigue_weight, 1.0);
    assert_eq!(record.reward, 0.0);
}

#[test]
fn cliff_boundary_enters_lethal_state_without_debt() {
    let record = engine().classify(&observation(
        "Driscoll John",
        Position::Defenseman,
        48.0,
        -88.37,
    ));

    // At the cliff exactly: lethal state, but no seconds overspent yet.
    assert_eq!(record.fatigue_state, FatigueState::Lethal);
    assert!(record.fatigue_weight > 1.0);
    assert_eq!(record.reward, 0.0);
    assert_eq!(record.res, 0);
    assert_eq!(record.decision, BenchDecision::Maintain);
}

#[test]
fn res_ignores_position_and_fatigue_weight() {
    let engine = engine();
    let defenseman = engine.classify(&observation("D", Position::Defenseman, 56.0, -40.0));
    let forward = engine.classify(&observation("F", Position::Forward, 56.0, -40.0));
    let goaltender = engine.classify(&observation("G", Position::Goaltender, 56.0, -40.0));

    assert_eq!(defenseman.res, -8);
    assert_eq!(forward.res, -8);
    assert_eq!(goaltender.res, -8);
}

#[test]
fn defensemen_accrue_deeper_debt_than_forwards_past_the_cliff() {
    let engine = engine();
    let defenseman = engine.classify(&observation("D", Position::Defenseman, 56.0, -40.0));
    let forward = engine.classify(&observation("F", Position::Forward, 56.0, -40.0));

    assert!(defenseman.reward < forward.reward);
    assert!((defenseman.reward / forward.reward - 1.22).abs() < 1e-4);
}

#[test]
fn reward_is_never_positive() {
    let engine = engine();
    for shift_seconds in [0.0, 12.0, 44.0, 47.9, 48.0, 48.1, 63.0, 120.0] {
        for position in [Position::Forward, Position::Defenseman, Position::Goaltender] {
            let record = engine.classify(&observation("X", position, shift_seconds, -30.0));
            assert!(record.reward <= 0.0, "reward {} at {shift_seconds}s", record.reward);
            if shift_seconds <= 48.0 {
                assert_eq!(record.reward, 0.0);
            } else {
                assert!(record.reward < 0.0);
            }
        }
    }
}

#[test]
fn custom_blend_weights_shift_the_impact_score() {
    let config = PolicyConfig {
        impact_blend: ImpactBlend {
            stability_weight: 2.0,
            reward_weight: 0.5,
            normalization: 5.0,
        },
        ..PolicyConfig::default()
    };
    let engine = RosterEngine::new(config).expect("config is valid");

    let record = engine.classify(&observation("X", Position::Forward, 50.0, -10.0));

    // reward = -(2 * 1.68) = -3.36; impact = (-10*2 + -3.36*0.5) / 5
    assert!((record.reward - (-3.36)).abs() < 1e-4);
    assert!((record.impact - (-4.336)).abs() < 1e-3);
}

#[test]
fn engine_rejects_a_non_positive_cliff() {
    let config = PolicyConfig {
        cliff_threshold_seconds: 0.0,
        ..PolicyConfig::default()
    };

    let error = RosterEngine::new(config)
        .err()
        .expect("expected non-positive cliff rejection");
    match error {
        ConfigurationError::NonPositiveCliff(value) => assert_eq!(value, 0.0),
        other => panic!("expected non-positive cliff rejection, got {other:?}"),
    }
}

#[test]
fn engine_rejects_a_multiplier_below_one() {
    let config = PolicyConfig {
        defenseman_fatigue_multiplier: 0.9,
        ..PolicyConfig::default()
    };

    assert!(matches!(
        RosterEngine::new(config),
        Err(ConfigurationError::MultiplierBelowOne(_))
    ));
}

#[test]
fn engine_rejects_a_negative_uplift() {
    let config = PolicyConfig {
        turnover_uplift: -0.1,
        ..PolicyConfig::default()
    };

    assert!(matches!(
        RosterEngine::new(config),
        Err(ConfigurationError::NegativeUplift(_))
    ));
}

#[test]
fn engine_rejects_a_degenerate_normalization() {
    let config = PolicyConfig {
        impact_blend: ImpactBlend {
            normalization: 0.0,
            ..ImpactBlend::default()
        },
        ..PolicyConfig::default()
    };

    assert!(matches!(
        RosterEngine::new(config),
        Err(ConfigurationError::NonPositiveNormalization(_))
    ));
}

#[test]
fn snapshot_classification_preserves_input_order() {
    let records = engine().classify_snapshot(&sample_snapshot());

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].player_id.0, "Adamson Mikey");
    assert_eq!(records[1].player_id.0, "Tardif Charles");
    assert_eq!(records[2].player_id.0, "Levyy Vitaly");
}
