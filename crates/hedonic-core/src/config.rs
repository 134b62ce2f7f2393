//! Configuration loading and typed config structures for the hedonic simulation.
//!
//! The canonical configuration lives in `hedonic-config.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure, and provides a loader that reads and validates the file.
//! Every section and field has a default, so an empty file is a valid
//! configuration.

use std::path::Path;

use hedonic_agents::AgentTraits;
use serde::Deserialize;

/// Environment variable that overrides `logging.level`.
pub const LOG_LEVEL_ENV: &str = "HEDONIC_LOG";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is out of range.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
///
/// Mirrors the structure of `hedonic-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// Time stepping and stochastic outcomes.
    #[serde(default)]
    pub simulation: RunConfig,

    /// Traits of the simulated agent.
    #[serde(default)]
    pub agent: AgentTraits,

    /// Genetic optimizer parameters.
    #[serde(default)]
    pub optimizer: OptimizerConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `HEDONIC_LOG` overrides `logging.level` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.logging.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Check the ranges serde cannot express.
    ///
    /// Optimizer parameters are validated when the optimizer is built.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sim = &self.simulation;
        if !is_positive_hours(sim.time_step) {
            return Err(ConfigError::Invalid {
                field: "simulation.time_step",
                reason: format!("must be a positive number of hours, got {}", sim.time_step),
            });
        }
        if !is_positive_hours(sim.max_hours) {
            return Err(ConfigError::Invalid {
                field: "simulation.max_hours",
                reason: format!("must be a positive number of hours, got {}", sim.max_hours),
            });
        }
        let traits = [
            ("agent.testosterone", self.agent.testosterone),
            ("agent.ssri_level", self.agent.ssri_level),
            ("agent.life_stress", self.agent.life_stress),
        ];
        for (field, value) in traits {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be within 0..=100, got {value}"),
                });
            }
        }
        Ok(())
    }
}

/// Whether `value` can serve as a step or horizon in hours.
pub(crate) const fn is_positive_hours(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Time stepping for a single run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RunConfig {
    /// Micro-step size in hours.
    #[serde(default = "default_time_step")]
    pub time_step: f64,

    /// Simulated hours per run.
    #[serde(default = "default_max_hours")]
    pub max_hours: f64,

    /// Whether actions with random side effects can fire them.
    #[serde(default = "default_true")]
    pub stochastic: bool,

    /// Seed for stochastic outcomes in demonstration runs.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            time_step: default_time_step(),
            max_hours: default_max_hours(),
            stochastic: true,
            seed: default_seed(),
        }
    }
}

/// Genetic optimizer parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OptimizerConfig {
    /// Sequences per generation.
    #[serde(default = "default_population_size")]
    pub population_size: usize,

    /// Actions per sequence.
    #[serde(default = "default_sequence_length")]
    pub sequence_length: usize,

    /// Maximum generations.
    #[serde(default = "default_generations")]
    pub generations: usize,

    /// Base per-gene mutation probability.
    #[serde(default = "default_mutation_rate")]
    pub mutation_rate: f64,

    /// Share of the population kept as elites.
    #[serde(default = "default_elite_fraction")]
    pub elite_fraction: f64,

    /// Hill-climbing attempts per elite per generation.
    #[serde(default = "default_local_search_steps")]
    pub local_search_steps: usize,

    /// Generations without improvement before stopping.
    #[serde(default = "default_early_stop_generations")]
    pub early_stop_generations: usize,

    /// Worker threads. `None` uses every available CPU.
    #[serde(default)]
    pub workers: Option<usize>,

    /// Log progress every N generations.
    #[serde(default = "default_log_every")]
    pub log_every: usize,

    /// Seed for population, genetic operators and stochastic outcomes.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            population_size: default_population_size(),
            sequence_length: default_sequence_length(),
            generations: default_generations(),
            mutation_rate: default_mutation_rate(),
            elite_fraction: default_elite_fraction(),
            local_search_steps: default_local_search_steps(),
            early_stop_generations: default_early_stop_generations(),
            workers: None,
            log_every: default_log_every(),
            seed: default_seed(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    /// Override the level with `HEDONIC_LOG` when set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(LOG_LEVEL_ENV) {
            self.level = val;
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_time_step() -> f64 {
    0.1
}

const fn default_max_hours() -> f64 {
    10.0
}

const fn default_seed() -> u64 {
    42
}

const fn default_population_size() -> usize {
    500
}

const fn default_sequence_length() -> usize {
    40
}

const fn default_generations() -> usize {
    1000
}

const fn default_mutation_rate() -> f64 {
    0.15
}

const fn default_elite_fraction() -> f64 {
    0.1
}

const fn default_local_search_steps() -> usize {
    5
}

const fn default_early_stop_generations() -> usize {
    200
}

const fn default_log_every() -> usize {
    10
}

fn default_log_level() -> String {
    "info".to_owned()
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.simulation.time_step - 0.1).abs() < f64::EPSILON);
        assert!((config.simulation.max_hours - 10.0).abs() < f64::EPSILON);
        assert!(config.simulation.stochastic);
        assert_eq!(config.optimizer.population_size, 500);
        assert_eq!(config.optimizer.sequence_length, 40);
        assert_eq!(config.optimizer.generations, 1000);
        assert_eq!(config.optimizer.early_stop_generations, 200);
        assert_eq!(config.optimizer.workers, None);
        assert!((config.agent.testosterone - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r"
simulation:
  time_step: 0.05
  max_hours: 6.0
  stochastic: false
  seed: 7

agent:
  testosterone: 70
  ssri_level: 20
  life_stress: 10

optimizer:
  population_size: 64
  sequence_length: 30
  generations: 20
  mutation_rate: 0.2
  elite_fraction: 0.25
  local_search_steps: 3
  early_stop_generations: 5
  workers: 2
  log_every: 1
  seed: 9

logging:
  level: debug
";

        let config = SimulationConfig::parse(yaml);
        assert!(config.is_ok(), "{config:?}");
        let config = config.ok().unwrap_or_default();

        assert!((config.simulation.time_step - 0.05).abs() < f64::EPSILON);
        assert!(!config.simulation.stochastic);
        assert_eq!(config.simulation.seed, 7);
        assert!((config.agent.testosterone - 70.0).abs() < f64::EPSILON);
        assert!((config.agent.ssri_level - 20.0).abs() < f64::EPSILON);
        assert_eq!(config.optimizer.population_size, 64);
        assert_eq!(config.optimizer.workers, Some(2));
        assert_eq!(config.optimizer.seed, 9);
    }

    #[test]
    fn parse_minimal_yaml() {
        let yaml = "agent:\n  life_stress: 40\n";
        let config = SimulationConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();

        assert!((config.agent.life_stress - 40.0).abs() < f64::EPSILON);
        // Unset trait fields fall back to their defaults.
        assert!((config.agent.testosterone - 50.0).abs() < f64::EPSILON);
        assert_eq!(config.optimizer, OptimizerConfig::default());
    }

    #[test]
    fn parse_empty_yaml() {
        let config = SimulationConfig::parse("");
        assert!(config.is_ok());
        assert_eq!(
            config.ok().map(|c| c.simulation),
            Some(RunConfig::default())
        );
    }

    #[test]
    fn rejects_non_positive_time_step() {
        let config = SimulationConfig::parse("simulation:\n  time_step: 0\n");
        assert!(matches!(
            config,
            Err(ConfigError::Invalid {
                field: "simulation.time_step",
                ..
            })
        ));
    }

    #[test]
    fn rejects_out_of_range_trait() {
        let config = SimulationConfig::parse("agent:\n  ssri_level: 140\n");
        assert!(matches!(
            config,
            Err(ConfigError::Invalid {
                field: "agent.ssri_level",
                ..
            })
        ));
    }

    #[test]
    fn rejects_malformed_yaml() {
        let config = SimulationConfig::parse("simulation: [unterminated");
        assert!(matches!(config, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("hedonic-config.yaml");
        if path.exists() {
            let config = SimulationConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
