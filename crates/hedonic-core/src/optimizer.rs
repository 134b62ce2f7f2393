//! Parallel memetic search for high-reward action sequences.
//!
//! The optimizer is a genetic algorithm over fixed-length sequences with
//! hill climbing on the elites of each generation:
//!
//! 1. Evaluate every sequence in parallel. Fitness is the run's total
//!    reward, or zero if the agent stopped being viable.
//! 2. Sort by fitness and track the best sequence ever seen. Stop early
//!    after `early_stop_generations` generations without improvement.
//! 3. Hill-climb each elite in parallel. An improvement there also counts
//!    as progress.
//! 4. Fill the rest of the next generation with children: two tournament
//!    winners from the top half, two-point crossover, then per-gene
//!    mutation at a rate that falls from 2x to 0.3x the base rate.
//!
//! The best sequence gets one last, longer hill climb at the end.
//!
//! Work runs on a dedicated rayon pool. Every task seeds its own RNG from
//! the optimizer seed, the generation and the task index, so the result
//! does not depend on how tasks land on threads.

use std::collections::HashMap;
use std::cell::RefCell;

use hedonic_agents::Chance;
use hedonic_types::ActionId;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::Serialize;
use tracing::info;

use crate::config::{OptimizerConfig, SimulationConfig, is_positive_hours};
use crate::runner::Runner;

/// Hours simulated per fitness evaluation.
pub const FITNESS_HOURS: f64 = 10.0;

/// Shortest sequence two-point crossover can cut twice.
pub const MIN_SEQUENCE_LENGTH: usize = 3;

/// Smallest population with a non-empty top half.
pub const MIN_POPULATION: usize = 2;

/// Fewest elites kept per generation.
pub const MIN_ELITES: usize = 2;

/// Largest tournament.
pub const TOURNAMENT_SIZE: usize = 3;

/// Chance that a hill-climbing step also tries swapping two positions.
pub const SWAP_PROBABILITY: f64 = 0.3;

/// Mutation multiplier at the first generation.
const MUTATION_START: f64 = 2.0;

/// Drop in the mutation multiplier by the last generation.
const MUTATION_DROP: f64 = 1.7;

/// Multiplier on `local_search_steps` for the final hill climb.
const FINAL_SEARCH_FACTOR: usize = 3;

// Seed streams, so tasks with the same generation and index differ by role.
const STREAM_EVALUATE: u64 = 1;
const STREAM_SEARCH: u64 = 2;
const STREAM_FINAL: u64 = 3;

/// Errors that can occur when building an optimizer.
#[derive(Debug, thiserror::Error)]
pub enum OptimizerError {
    /// A configuration value cannot drive the search.
    #[error("invalid optimizer config for {field}: {reason}")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// The worker pool could not be started.
    #[error("failed to build worker pool: {source}")]
    Pool {
        /// The underlying rayon error.
        #[from]
        source: rayon::ThreadPoolBuildError,
    },
}

/// Outcome of [`Optimizer::optimize`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizeResult {
    /// Best sequence found.
    pub best_sequence: Vec<ActionId>,
    /// Its fitness.
    pub best_fitness: f64,
    /// Best fitness seen so far, one entry per generation. Never decreases.
    pub fitness_history: Vec<f64>,
    /// Generations evaluated.
    pub generations_run: usize,
    /// Whether the search stopped for lack of improvement.
    pub stopped_early: bool,
}

/// A sequence and its fitness.
type Scored = (Vec<ActionId>, f64);

/// How fitness runs are carried out.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FitnessRun {
    max_hours: f64,
    stochastic: bool,
}

/// Per-worker fitness evaluation state.
///
/// Each pool thread builds one on its first task and reuses it for every
/// later task. In deterministic mode it memoizes the sequences it has
/// already run.
#[derive(Debug)]
struct Evaluator {
    runner: Runner,
    chance: Chance,
    memo: HashMap<Vec<ActionId>, f64>,
    /// Settings the memo was filled under.
    memo_run: Option<FitnessRun>,
}

thread_local! {
    static EVALUATOR: RefCell<Option<Evaluator>> = const { RefCell::new(None) };
}

impl Evaluator {
    fn new(runner: Runner) -> Self {
        Self {
            runner,
            chance: Chance::disabled(),
            memo: HashMap::new(),
            memo_run: None,
        }
    }

    /// Point stochastic outcomes at a fresh stream for the next task.
    fn reseed(&mut self, run: FitnessRun, seed: u64) {
        self.chance = if run.stochastic {
            Chance::seeded(seed)
        } else {
            Chance::disabled()
        };
    }

    fn fitness(&mut self, run: FitnessRun, sequence: &[ActionId]) -> f64 {
        // A stochastic run is a sample, not a value worth remembering.
        if run.stochastic {
            return self.runner.run(sequence, run.max_hours, &mut self.chance).fitness();
        }
        if self.memo_run != Some(run) {
            self.memo.clear();
            self.memo_run = Some(run);
        }
        if let Some(fitness) = self.memo.get(sequence) {
            return *fitness;
        }
        let fitness = self.runner.run(sequence, run.max_hours, &mut self.chance).fitness();
        self.memo.insert(sequence.to_vec(), fitness);
        fitness
    }
}

/// Memetic optimizer over action sequences.
#[derive(Debug)]
pub struct Optimizer {
    config: OptimizerConfig,
    runner: Runner,
    run: FitnessRun,
    elite_count: usize,
    pool: ThreadPool,
}

impl Optimizer {
    /// Validate `config` and start the worker pool.
    ///
    /// Fitness runs last [`FITNESS_HOURS`] with stochastic outcomes
    /// enabled until changed with [`with_max_hours`](Self::with_max_hours)
    /// or [`with_stochastic`](Self::with_stochastic).
    ///
    /// # Errors
    ///
    /// Returns [`OptimizerError::InvalidConfig`] if a parameter is out of
    /// range, or [`OptimizerError::Pool`] if the threads cannot start.
    pub fn new(config: OptimizerConfig, runner: Runner) -> Result<Self, OptimizerError> {
        validate(&config)?;

        let elite_count = elite_count(config.population_size, config.elite_fraction);
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.workers.unwrap_or(0))
            .thread_name(|index| format!("hedonic-worker-{index}"))
            .build()?;

        Ok(Self {
            config,
            runner,
            run: FitnessRun {
                max_hours: FITNESS_HOURS,
                stochastic: true,
            },
            elite_count,
            pool,
        })
    }

    /// Build from a full configuration: its optimizer section, its agent
    /// traits, and its run length and stochastic setting.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn from_config(config: &SimulationConfig) -> Result<Self, OptimizerError> {
        Ok(Self::new(config.optimizer.clone(), Runner::from_config(config))?
            .with_max_hours(config.simulation.max_hours)?
            .with_stochastic(config.simulation.stochastic))
    }

    /// Simulated hours per fitness run.
    ///
    /// # Errors
    ///
    /// Returns [`OptimizerError::InvalidConfig`] unless `max_hours` is
    /// finite and greater than zero.
    pub fn with_max_hours(mut self, max_hours: f64) -> Result<Self, OptimizerError> {
        if !is_positive_hours(max_hours) {
            return Err(OptimizerError::InvalidConfig {
                field: "max_hours",
                reason: format!("must be a positive number of hours, got {max_hours}"),
            });
        }
        self.run.max_hours = max_hours;
        Ok(self)
    }

    /// Whether fitness runs draw stochastic outcomes.
    #[must_use]
    pub const fn with_stochastic(mut self, stochastic: bool) -> Self {
        self.run.stochastic = stochastic;
        self
    }

    /// Elites kept per generation.
    pub const fn elite_count(&self) -> usize {
        self.elite_count
    }

    /// Worker threads in the pool.
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Mutation rate for `generation`, falling linearly from 2x the base
    /// rate at the first generation to 0.3x at the last.
    pub fn mutation_rate(&self, generation: usize) -> f64 {
        let last = self.config.generations.saturating_sub(1).max(1);
        let progress = generation as f64 / last as f64;
        self.config.mutation_rate * (MUTATION_START - MUTATION_DROP * progress)
    }

    /// Fitness of one sequence, run on the calling thread.
    pub fn fitness(&self, sequence: &[ActionId], chance: &mut Chance) -> f64 {
        self.runner.run(sequence, self.run.max_hours, chance).fitness()
    }

    /// Run the search.
    pub fn optimize(&self) -> OptimizeResult {
        let config = &self.config;
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut population: Vec<Vec<ActionId>> = (0..config.population_size)
            .map(|_| random_sequence(config.sequence_length, &mut rng))
            .collect();

        let mut best: Option<Vec<ActionId>> = None;
        let mut best_fitness = 0.0;
        let mut stagnant = 0;
        let mut history = Vec::with_capacity(config.generations);
        let mut stopped_early = false;

        info!(
            workers = self.workers(),
            population = config.population_size,
            sequence_length = config.sequence_length,
            generations = config.generations,
            elites = self.elite_count,
            stochastic = self.run.stochastic,
            "optimization starting"
        );

        for generation in 0..config.generations {
            let mutation_rate = self.mutation_rate(generation);

            let mut scored = self.evaluate(population, generation);
            scored.sort_by(|a, b| b.1.total_cmp(&a.1));

            // Progress is measured from zero, so a generation of dead
            // sequences is stagnation even when it supplies the first best.
            let generation_best = scored.first().map_or(0.0, |(_, fitness)| *fitness);
            let improved = generation_best > best_fitness;
            if improved || best.is_none() {
                best = scored.first().map(|(sequence, _)| sequence.clone());
            }
            if improved {
                best_fitness = generation_best;
                stagnant = 0;
            } else {
                stagnant += 1;
            }
            history.push(best_fitness);

            if config.log_every > 0 && generation % config.log_every == 0 {
                info!(
                    generation,
                    best = generation_best,
                    all_time = best_fitness,
                    stagnant,
                    mutation_rate,
                    "generation complete"
                );
            }

            if stagnant >= config.early_stop_generations {
                info!(
                    generation,
                    stagnant,
                    threshold = config.early_stop_generations,
                    "stopping early, no improvement"
                );
                stopped_early = true;
                break;
            }

            let elites = self.improve_elites(&scored, generation);
            for (sequence, fitness) in &elites {
                if *fitness > best_fitness {
                    best = Some(sequence.clone());
                    best_fitness = *fitness;
                    stagnant = 0;
                }
            }

            population = self.breed(&scored, elites, mutation_rate, &mut rng);
        }

        let (best_sequence, best_fitness) = best.map_or_else(
            || (Vec::new(), 0.0),
            |sequence| self.final_search(sequence, history.len()),
        );

        info!(
            best_fitness,
            generations_run = history.len(),
            stopped_early,
            "optimization complete"
        );

        OptimizeResult {
            best_sequence,
            best_fitness,
            generations_run: history.len(),
            fitness_history: history,
            stopped_early,
        }
    }

    /// Next generation: the improved elites, then children bred from the
    /// top half of `scored` until the population is full.
    fn breed(
        &self,
        scored: &[Scored],
        elites: Vec<Scored>,
        mutation_rate: f64,
        rng: &mut SmallRng,
    ) -> Vec<Vec<ActionId>> {
        let half = scored.len() / 2;
        let parents = scored.get(..half).unwrap_or_default();
        let tournament = TOURNAMENT_SIZE.min(half);

        let mut next: Vec<Vec<ActionId>> = elites.into_iter().map(|(seq, _)| seq).collect();
        while next.len() < self.config.population_size {
            let (Some(first), Some(second)) = (
                select(parents, tournament, rng),
                select(parents, tournament, rng),
            ) else {
                break;
            };
            let mut child = two_point_crossover(first, second, rng);
            mutate(&mut child, mutation_rate, rng);
            next.push(child);
        }
        next
    }

    /// The longer hill climb given to the overall best sequence.
    fn final_search(&self, sequence: Vec<ActionId>, generations_run: usize) -> Scored {
        let steps = self.config.local_search_steps * FINAL_SEARCH_FACTOR;
        let seed = self.task_seed(generations_run, 0, STREAM_FINAL);
        self.pool.install(|| {
            self.with_evaluator(|evaluator| {
                evaluator.reseed(self.run, seed);
                let mut rng = SmallRng::seed_from_u64(seed);
                local_search(sequence, steps, self.run, evaluator, &mut rng)
            })
        })
    }

    /// Run `f` with the calling thread's evaluator, building it on first
    /// use. Only called on this optimizer's pool threads.
    fn with_evaluator<T>(&self, f: impl FnOnce(&mut Evaluator) -> T) -> T {
        EVALUATOR.with_borrow_mut(|slot| {
            let evaluator = slot.get_or_insert_with(|| Evaluator::new(self.runner.clone()));
            f(evaluator)
        })
    }

    /// Score every sequence in parallel, preserving order.
    fn evaluate(&self, population: Vec<Vec<ActionId>>, generation: usize) -> Vec<Scored> {
        self.pool.install(|| {
            population
                .into_par_iter()
                .enumerate()
                .map(|(index, sequence)| {
                    let seed = self.task_seed(generation, index, STREAM_EVALUATE);
                    let fitness = self.with_evaluator(|evaluator| {
                        evaluator.reseed(self.run, seed);
                        evaluator.fitness(self.run, &sequence)
                    });
                    (sequence, fitness)
                })
                .collect()
        })
    }

    /// Hill-climb the top `elite_count` sequences in parallel.
    fn improve_elites(&self, scored: &[Scored], generation: usize) -> Vec<Scored> {
        let steps = self.config.local_search_steps;
        self.pool.install(|| {
            scored
                .par_iter()
                .take(self.elite_count)
                .enumerate()
                .map(|(index, (sequence, _))| {
                    let seed = self.task_seed(generation, index, STREAM_SEARCH);
                    self.with_evaluator(|evaluator| {
                        evaluator.reseed(self.run, seed);
                        let mut rng = SmallRng::seed_from_u64(seed);
                        local_search(sequence.clone(), steps, self.run, evaluator, &mut rng)
                    })
                })
                .collect()
        })
    }

    fn task_seed(&self, generation: usize, index: usize, stream: u64) -> u64 {
        let mut z = splitmix64(self.config.seed ^ stream);
        z = splitmix64(z ^ generation as u64);
        splitmix64(z ^ index as u64)
    }
}

fn validate(config: &OptimizerConfig) -> Result<(), OptimizerError> {
    let invalid = |field: &'static str, reason: String| Err(OptimizerError::InvalidConfig { field, reason });

    if config.population_size < MIN_POPULATION {
        return invalid(
            "population_size",
            format!("must be at least {MIN_POPULATION}, got {}", config.population_size),
        );
    }
    if config.sequence_length < MIN_SEQUENCE_LENGTH {
        return invalid(
            "sequence_length",
            format!(
                "must be at least {MIN_SEQUENCE_LENGTH} for two-point crossover, got {}",
                config.sequence_length
            ),
        );
    }
    if config.generations == 0 {
        return invalid("generations", "must be at least 1".to_owned());
    }
    if !(0.0..=1.0).contains(&config.mutation_rate) {
        return invalid(
            "mutation_rate",
            format!("must be within 0..=1, got {}", config.mutation_rate),
        );
    }
    if !(0.0..=1.0).contains(&config.elite_fraction) {
        return invalid(
            "elite_fraction",
            format!("must be within 0..=1, got {}", config.elite_fraction),
        );
    }
    if config.workers == Some(0) {
        return invalid("workers", "must be at least 1 when set".to_owned());
    }
    Ok(())
}

/// `max(2, floor(population * fraction))`, never more than the population.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // fraction is validated to 0..=1
fn elite_count(population: usize, fraction: f64) -> usize {
    let scaled = (population as f64 * fraction) as usize;
    scaled.max(MIN_ELITES).min(population)
}

fn random_action(rng: &mut SmallRng) -> ActionId {
    ActionId::ALL.choose(rng).copied().unwrap_or(ActionId::Wait)
}

fn random_sequence(length: usize, rng: &mut SmallRng) -> Vec<ActionId> {
    (0..length).map(|_| random_action(rng)).collect()
}

/// Best of `size` distinct random picks from `candidates`.
fn select<'a>(candidates: &'a [Scored], size: usize, rng: &mut SmallRng) -> Option<&'a [ActionId]> {
    candidates
        .choose_multiple(rng, size)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(sequence, _)| sequence.as_slice())
}

/// Child taking `second[c1..c2]` and the rest from `first`, with
/// `1 <= c1 < c2 < len` drawn at random.
fn two_point_crossover(first: &[ActionId], second: &[ActionId], rng: &mut SmallRng) -> Vec<ActionId> {
    let len = first.len().min(second.len());
    if len < MIN_SEQUENCE_LENGTH {
        return first.to_vec();
    }
    let cuts = rand::seq::index::sample(rng, len - 1, 2);
    let (a, b) = (cuts.index(0) + 1, cuts.index(1) + 1);
    let (c1, c2) = (a.min(b), a.max(b));

    first
        .iter()
        .take(c1)
        .chain(second.iter().skip(c1).take(c2 - c1))
        .chain(first.iter().skip(c2))
        .copied()
        .collect()
}

fn mutate(sequence: &mut [ActionId], rate: f64, rng: &mut SmallRng) {
    for gene in sequence {
        if rng.random::<f64>() < rate {
            *gene = random_action(rng);
        }
    }
}

/// Hill climbing from `start`. Each step tries a random substitution and,
/// with probability [`SWAP_PROBABILITY`], a swap of the substituted
/// position with another. The better candidate replaces the current
/// sequence only if it beats it.
fn local_search(
    start: Vec<ActionId>,
    steps: usize,
    run: FitnessRun,
    evaluator: &mut Evaluator,
    rng: &mut SmallRng,
) -> Scored {
    let mut current = start;
    let mut current_fitness = evaluator.fitness(run, &current);
    let len = current.len();
    if len == 0 {
        return (current, current_fitness);
    }

    for _ in 0..steps {
        let pos = rng.random_range(0..len);
        let mut candidate = current.clone();
        if let Some(gene) = candidate.get_mut(pos) {
            *gene = random_action(rng);
        }
        let mut candidate_fitness = evaluator.fitness(run, &candidate);

        if rng.random::<f64>() < SWAP_PROBABILITY {
            let other = rng.random_range(0..len);
            let mut swapped = current.clone();
            swapped.swap(pos, other);
            let swapped_fitness = evaluator.fitness(run, &swapped);
            if swapped_fitness > candidate_fitness {
                candidate = swapped;
                candidate_fitness = swapped_fitness;
            }
        }

        if candidate_fitness > current_fitness {
            current = candidate;
            current_fitness = candidate_fitness;
        }
    }

    (current, current_fitness)
}

const fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
