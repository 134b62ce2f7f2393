//! End-to-end runs through the public API: config, runner, and optimizer.

// Integration tests use expect/unwrap extensively for clarity -- panicking
// on failure is the correct behavior in test code.
#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::too_many_lines,
    clippy::indexing_slicing
)]

use hedonic_agents::{AgentTraits, Chance, create_agent, is_viable};
use hedonic_core::{
    OptimizerConfig, Optimizer, OptimizerError, Runner, RunnerError, Session, SimulationConfig,
    compress_sequence,
};
use hedonic_types::{ActionId, AgentState};

// =============================================================================
// Runner
// =============================================================================

#[test]
fn sleep_is_integrated_over_its_duration() {
    let runner = Runner::default().with_initial_state(AgentState {
        energy: 40.0,
        sleepiness: 60.0,
        ..AgentState::default()
    });
    let result = runner.run(&[ActionId::Sleep], 3.0, &mut Chance::disabled());

    assert!(result.viable);
    assert_eq!(result.applied, 1);
    let labelled: Vec<_> = result
        .timeline
        .iter()
        .filter(|e| e.action == Some(ActionId::Sleep))
        .collect();
    assert_eq!(labelled.len(), 1);
    assert!(result.timeline.len() >= 29);
}

#[test]
fn basic_sequence_stays_viable() {
    let result = Runner::default().run_named(
        &["rest", "light_stimulation", "rest"],
        5.0,
        &mut Chance::disabled(),
    );
    assert!(result.viable, "{:?}", result.failure);
    assert!(result.total_reward > 0.0);
    assert!(result.hours_simulated >= 5.0 - 1e-9);
    assert!(result.rejected.is_empty());
}

#[test]
fn reward_is_the_integral_of_the_timeline() {
    let result = Runner::default().run(
        &[ActionId::Cuddling, ActionId::Massage, ActionId::Snack],
        4.0,
        &mut Chance::disabled(),
    );
    let integral: f64 = result.timeline.iter().map(|e| e.reward * 0.1).sum();
    assert!((integral - result.total_reward).abs() < 1e-6);
    assert!(
        result
            .timeline
            .windows(2)
            .all(|w| w[1].time > w[0].time)
    );
    let expected_avg = result.total_reward / result.hours_simulated;
    assert!((result.avg_reward - expected_avg).abs() < 1e-9);
}

#[test]
fn time_step_does_not_change_what_is_applied() {
    let sequence = [ActionId::Rest, ActionId::Cuddling, ActionId::Wait];
    let coarse = Runner::new(0.25)
        .unwrap()
        .run(&sequence, 3.0, &mut Chance::disabled());
    let fine = Runner::new(0.05)
        .unwrap()
        .run(&sequence, 3.0, &mut Chance::disabled());
    assert_eq!(coarse.applied, fine.applied);
    assert!(fine.timeline.len() > coarse.timeline.len());
}

#[test]
fn steps_that_cannot_advance_time_are_rejected() {
    for step in [0.0, -0.1, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(
            matches!(Runner::new(step), Err(RunnerError::InvalidTimeStep { .. })),
            "{step}"
        );
    }
    assert!((Runner::new(0.5).unwrap().time_step() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn unbounded_horizons_simulate_nothing() {
    let runner = Runner::default();
    for hours in [f64::NAN, f64::INFINITY] {
        let result = runner.run(&[ActionId::Wait], hours, &mut Chance::disabled());
        assert!(result.viable);
        assert_eq!(result.applied, 0);
        assert!(result.timeline.is_empty());
        assert!(result.hours_simulated.abs() < f64::EPSILON);
    }
}

#[test]
fn runs_never_mutate_the_initial_agent() {
    let runner = Runner::default();
    let before = runner.initial_state().clone();
    let _ = runner.run(&[ActionId::Cocaine; 6], 6.0, &mut Chance::seeded(1));
    assert_eq!(runner.initial_state(), &before);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn configured_traits_reach_the_runner_and_session() {
    let config = SimulationConfig::parse("agent:\n  life_stress: 60\n").unwrap();
    let runner = Runner::from_config(&config);
    assert_eq!(runner.initial_state(), &create_agent(config.agent));

    let session = Session::new(config.agent, Chance::disabled());
    assert_eq!(session.state(), runner.initial_state());
    assert_ne!(config.agent, AgentTraits::default());
}

#[test]
fn invalid_optimizer_config_is_rejected() {
    let config = SimulationConfig::parse("optimizer:\n  population_size: 1\n").unwrap();
    assert!(matches!(
        Optimizer::from_config(&config),
        Err(OptimizerError::InvalidConfig {
            field: "population_size",
            ..
        })
    ));
}

#[test]
fn optimizer_rejects_a_horizon_that_never_ends() {
    for hours in [f64::NAN, f64::INFINITY, -2.0] {
        let result = Optimizer::new(tiny_search(), Runner::default())
            .unwrap()
            .with_max_hours(hours);
        assert!(
            matches!(
                result,
                Err(OptimizerError::InvalidConfig {
                    field: "max_hours",
                    ..
                })
            ),
            "{hours}"
        );
    }
}

// =============================================================================
// Optimizer
// =============================================================================

fn tiny_search() -> OptimizerConfig {
    OptimizerConfig {
        population_size: 10,
        sequence_length: 8,
        generations: 3,
        local_search_steps: 2,
        workers: Some(2),
        log_every: 1,
        ..OptimizerConfig::default()
    }
}

#[test]
fn optimizer_finds_a_viable_rewarding_sequence() {
    let optimizer = Optimizer::new(tiny_search(), Runner::default())
        .unwrap()
        .with_max_hours(2.0)
        .unwrap()
        .with_stochastic(false);
    let result = optimizer.optimize();

    assert!(result.best_fitness > 0.0);
    assert_eq!(result.best_sequence.len(), 8);
    assert!(result.generations_run <= 3);
    assert!(result.fitness_history.windows(2).all(|w| w[1] >= w[0]));

    let replay = Runner::default().run(&result.best_sequence, 2.0, &mut Chance::disabled());
    assert!(replay.viable);
    assert!(is_viable(&replay.final_state));
    assert!(!compress_sequence(&result.best_sequence).is_empty());
}

#[test]
fn worker_count_does_not_change_the_result() {
    let run = |workers| {
        Optimizer::new(
            OptimizerConfig {
                workers: Some(workers),
                ..tiny_search()
            },
            Runner::default(),
        )
        .unwrap()
        .with_max_hours(2.0)
        .unwrap()
        .optimize()
    };
    assert_eq!(run(1), run(3));
}
