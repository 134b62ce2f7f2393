//! Driver binary for the hedonic simulation.
//!
//! Loads configuration, plays a hand-written demonstration sequence,
//! searches for a better one with the optimizer, and replays the winner.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from the path given as the first argument, or
//!    `hedonic-config.yaml` in the working directory
//! 2. Initialize structured logging (tracing)
//! 3. Run the demonstration sequence and log its outcome
//! 4. Run the optimizer
//! 5. Replay the best sequence and log a summary
//! 6. Write the optimizer result as JSON if `HEDONIC_RESULT` names a file

mod error;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use hedonic_agents::{Chance, ViabilityFailure, classify};
use hedonic_core::{Optimizer, RunConfig, RunResult, Runner, SimulationConfig, summarize_sequence};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

/// Config file used when no path is given.
const DEFAULT_CONFIG_PATH: &str = "hedonic-config.yaml";

/// Environment variable naming a file for the JSON result.
const RESULT_PATH_ENV: &str = "HEDONIC_RESULT";

/// Runs of the best sequence shown in the summary line.
const SUMMARY_RUNS: usize = 20;

/// Warm-up, build-up, release and recovery.
const DEMO_SEQUENCE: [&str; 12] = [
    "eat",
    "deep_breathing",
    "cuddling",
    "light_stimulation",
    "light_stimulation",
    "edging",
    "edging",
    "light_pain",
    "edging",
    "orgasm",
    "cuddling",
    "rest",
];

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, logging setup, the optimizer, or
/// writing the result fails.
fn main() -> anyhow::Result<()> {
    let config_path = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let (config, loaded) = load_config(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    init_logging(&config.logging.level)?;
    info!("hedonic-engine starting");
    if loaded {
        info!(path = %config_path.display(), "Configuration loaded");
    } else {
        info!(path = %config_path.display(), "Config file not found, using defaults");
    }
    info!(
        time_step = config.simulation.time_step,
        max_hours = config.simulation.max_hours,
        stochastic = config.simulation.stochastic,
        testosterone = config.agent.testosterone,
        ssri_level = config.agent.ssri_level,
        life_stress = config.agent.life_stress,
        "Simulation parameters"
    );

    // Demonstration run.
    let runner = Runner::from_config(&config).with_verbose(true);
    let max_hours = config.simulation.max_hours;
    let demo = runner.run_named(&DEMO_SEQUENCE, max_hours, &mut chance_for(&config.simulation));
    log_run("demonstration", &demo);

    // Search.
    let optimizer = Optimizer::from_config(&config).map_err(EngineError::from)?;
    let result = optimizer.optimize();
    info!(
        best_fitness = result.best_fitness,
        generations_run = result.generations_run,
        stopped_early = result.stopped_early,
        sequence = %summarize_sequence(&result.best_sequence, SUMMARY_RUNS),
        "Best sequence found"
    );

    // Replay the winner.
    let best = runner.run(
        &result.best_sequence,
        max_hours,
        &mut chance_for(&config.simulation),
    );
    log_run("best sequence", &best);
    info!(
        mood = %classify(&best.final_state),
        dopamine = best.final_state.dopamine,
        energy = best.final_state.energy,
        psychological_health = best.final_state.psychological_health,
        "Final state"
    );

    if let Some(path) = std::env::var_os(RESULT_PATH_ENV) {
        let json = serde_json::to_string_pretty(&result).map_err(EngineError::from)?;
        std::fs::write(&path, json)
            .with_context(|| format!("writing result to {}", Path::new(&path).display()))?;
        info!(path = %Path::new(&path).display(), "Result written");
    }

    info!("hedonic-engine shutdown complete");
    Ok(())
}

/// Load configuration from `path`, falling back to defaults if the file
/// does not exist. The flag reports whether the file was read.
fn load_config(path: &Path) -> Result<(SimulationConfig, bool), EngineError> {
    if path.exists() {
        Ok((SimulationConfig::from_file(path)?, true))
    } else {
        Ok((SimulationConfig::default(), false))
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
fn init_logging(level: &str) -> Result<(), EngineError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| EngineError::LogLevel {
            level: level.to_owned(),
            message: e.to_string(),
        })?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
    Ok(())
}

fn chance_for(run: &RunConfig) -> Chance {
    if run.stochastic {
        Chance::seeded(run.seed)
    } else {
        Chance::disabled()
    }
}

fn log_run(label: &str, result: &RunResult) {
    info!(
        run = label,
        total_reward = result.total_reward,
        avg_reward = result.avg_reward,
        hours = result.hours_simulated,
        viable = result.viable,
        failure = result.failure.map(ViabilityFailure::as_str),
        applied = result.applied,
        skipped = result.skipped.len(),
        "Run finished"
    );
    for err in &result.rejected {
        warn!(run = label, error = %err, "Action rejected");
    }
}
