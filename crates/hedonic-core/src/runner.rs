//! Running a fixed action sequence against one agent.
//!
//! [`Runner::run`] walks a sequence front to back. Each loop iteration
//! either applies the next action and sub-steps through its duration, or,
//! once the sequence is used up, lets the agent decay for one micro-step.
//! Reward is integrated per micro-step as `liking * dt`.
//!
//! A run ends when simulated time reaches `max_hours` or the agent stops
//! being viable, whichever comes first. Non-viability is a normal outcome,
//! reported through [`RunResult::viable`].

use hedonic_agents::actions::duration;
use hedonic_agents::{
    AgentError, Chance, ViabilityFailure, advance, apply_event, can_apply, check_viability,
    classify, create_agent, liking, resolve_action,
};
use hedonic_types::{ActionId, AgentState};
use tracing::{debug, warn};

use crate::config::{SimulationConfig, is_positive_hours};

/// Default micro-step, in hours.
pub const DEFAULT_TIME_STEP: f64 = 0.1;

/// Floor for the divisor of [`RunResult::avg_reward`].
const MIN_AVERAGING_HOURS: f64 = 0.01;

/// Errors that can occur when building a runner.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum RunnerError {
    /// The micro-step cannot advance simulated time.
    #[error("time step must be a positive number of hours, got {value}")]
    InvalidTimeStep {
        /// The rejected step.
        value: f64,
    },
}

/// One recorded micro-step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineEntry {
    /// Simulated hours at the end of the step.
    pub time: f64,
    /// Liking after the step.
    pub reward: f64,
    /// The action applied, on the first sub-step of that action only.
    pub action: Option<ActionId>,
}

/// Outcome of a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    /// Integrated reward, `sum(liking * dt)`.
    pub total_reward: f64,
    /// `total_reward` per simulated hour.
    pub avg_reward: f64,
    /// Agent state when the run stopped.
    pub final_state: AgentState,
    /// Every completed micro-step in order.
    pub timeline: Vec<TimelineEntry>,
    /// Whether the agent stayed viable to the end.
    pub viable: bool,
    /// The viability clause that ended the run early, if any.
    pub failure: Option<ViabilityFailure>,
    /// Simulated hours completed.
    pub hours_simulated: f64,
    /// Actions that were applied.
    pub applied: usize,
    /// Actions skipped because their precondition failed.
    pub skipped: Vec<ActionId>,
    /// Names that did not resolve to an action. Only [`Runner::run_named`]
    /// fills this.
    pub rejected: Vec<AgentError>,
}

impl RunResult {
    /// Optimizer fitness: total reward if viable, otherwise zero.
    pub fn fitness(&self) -> f64 {
        if self.viable { self.total_reward } else { 0.0 }
    }
}

/// Running totals for one run.
#[derive(Debug, Default)]
struct Trace {
    time: f64,
    total_reward: f64,
    timeline: Vec<TimelineEntry>,
}

/// Executes action sequences on copies of an initial agent.
///
/// The runner itself is immutable during a run, so one instance can be
/// reused for any number of runs.
#[derive(Debug, Clone)]
pub struct Runner {
    time_step: f64,
    initial: AgentState,
    verbose: bool,
}

impl Default for Runner {
    fn default() -> Self {
        Self::stepping(DEFAULT_TIME_STEP)
    }
}

impl Runner {
    /// A runner stepping `time_step` hours, starting from the default agent.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::InvalidTimeStep`] unless `time_step` is finite
    /// and greater than zero.
    pub fn new(time_step: f64) -> Result<Self, RunnerError> {
        if !is_positive_hours(time_step) {
            return Err(RunnerError::InvalidTimeStep { value: time_step });
        }
        Ok(Self::stepping(time_step))
    }

    /// A runner using the configured step size and agent traits.
    ///
    /// Loaded configs are validated already. A hand-built config with an
    /// unusable step falls back to [`DEFAULT_TIME_STEP`].
    pub fn from_config(config: &SimulationConfig) -> Self {
        let step = config.simulation.time_step;
        let time_step = if is_positive_hours(step) {
            step
        } else {
            warn!(time_step = step, fallback = DEFAULT_TIME_STEP, "unusable time step");
            DEFAULT_TIME_STEP
        };
        Self::stepping(time_step).with_initial_state(create_agent(config.agent))
    }

    /// Caller guarantees `time_step` is finite and positive.
    fn stepping(time_step: f64) -> Self {
        Self {
            time_step,
            initial: AgentState::default(),
            verbose: false,
        }
    }

    /// Replace the starting agent.
    #[must_use]
    pub fn with_initial_state(mut self, state: AgentState) -> Self {
        self.initial = state;
        self
    }

    /// Emit a `debug` event for every micro-step.
    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Micro-step size in hours.
    pub const fn time_step(&self) -> f64 {
        self.time_step
    }

    /// The agent every run starts from.
    pub const fn initial_state(&self) -> &AgentState {
        &self.initial
    }

    /// Every action a sequence may contain.
    pub const fn available_actions() -> &'static [ActionId] {
        &ActionId::ALL
    }

    /// Run `sequence` from the runner's initial agent.
    pub fn run(&self, sequence: &[ActionId], max_hours: f64, chance: &mut Chance) -> RunResult {
        self.run_from(&self.initial, sequence, max_hours, chance)
    }

    /// Run a sequence given by action names.
    ///
    /// Names that do not resolve are dropped before the run starts and
    /// reported in [`RunResult::rejected`]. They cost no time.
    pub fn run_named<S: AsRef<str>>(
        &self,
        names: &[S],
        max_hours: f64,
        chance: &mut Chance,
    ) -> RunResult {
        let mut sequence = Vec::with_capacity(names.len());
        let mut rejected = Vec::new();
        for name in names {
            match resolve_action(name.as_ref()) {
                Ok(id) => sequence.push(id),
                Err(err) => {
                    warn!(error = %err, "skipping unresolved action");
                    rejected.push(err);
                }
            }
        }
        let mut result = self.run(&sequence, max_hours, chance);
        result.rejected = rejected;
        result
    }

    /// Run `sequence` from a copy of `initial`.
    ///
    /// # Order of operations
    ///
    /// While time remains and the agent is viable:
    ///
    /// 1. If actions remain, take the next one. If its precondition fails
    ///    it is skipped and no time passes.
    /// 2. Otherwise apply it and run `max(1, floor(duration / dt))`
    ///    micro-steps. The first step is labelled with the action.
    /// 3. With no actions left, run one unlabelled micro-step.
    ///
    /// A micro-step decays the state by `dt`, stops the run if the agent is
    /// no longer viable, and otherwise adds `liking * dt` to the reward.
    ///
    /// A `max_hours` that is not a finite number simulates nothing.
    pub fn run_from(
        &self,
        initial: &AgentState,
        sequence: &[ActionId],
        max_hours: f64,
        chance: &mut Chance,
    ) -> RunResult {
        let mut state = initial.clone();
        let mut trace = Trace::default();
        let mut failure = None;
        let mut applied = 0;
        let mut skipped = Vec::new();
        let mut remaining = sequence.iter().copied();
        let max_hours = if max_hours.is_finite() { max_hours } else { 0.0 };

        while trace.time < max_hours && failure.is_none() {
            let Some(id) = remaining.next() else {
                failure = self.micro_step(&mut state, &mut trace, None);
                continue;
            };

            if !can_apply(id, &state) {
                skipped.push(id);
                continue;
            }

            let _ = apply_event(&mut state, id, chance);
            applied += 1;

            let mut label = Some(id);
            for _ in 0..substeps(duration(id), self.time_step) {
                failure = self.micro_step(&mut state, &mut trace, label.take());
                if failure.is_some() {
                    break;
                }
            }
        }

        if self.verbose {
            debug!(
                total_reward = trace.total_reward,
                hours = trace.time,
                applied,
                skipped = skipped.len(),
                failure = failure.map(ViabilityFailure::as_str),
                "run finished"
            );
        }

        RunResult {
            total_reward: trace.total_reward,
            avg_reward: trace.total_reward / trace.time.max(MIN_AVERAGING_HOURS),
            final_state: state,
            timeline: trace.timeline,
            viable: failure.is_none(),
            failure,
            hours_simulated: trace.time,
            applied,
            skipped,
            rejected: Vec::new(),
        }
    }

    /// Decay one step and record it. Returns the failure if the agent is
    /// no longer viable, in which case nothing is recorded.
    fn micro_step(
        &self,
        state: &mut AgentState,
        trace: &mut Trace,
        action: Option<ActionId>,
    ) -> Option<ViabilityFailure> {
        advance(state, self.time_step);
        if let Some(failure) = check_viability(state) {
            if self.verbose {
                debug!(t = trace.time, %failure, "agent no longer viable");
            }
            return Some(failure);
        }

        let reward = liking(state);
        trace.total_reward += reward * self.time_step;
        trace.time += self.time_step;
        trace.timeline.push(TimelineEntry {
            time: trace.time,
            reward,
            action,
        });

        if self.verbose {
            debug!(
                t = trace.time,
                action = action.map_or("decay", ActionId::name),
                reward,
                mood = %classify(state),
                "step"
            );
        }
        None
    }
}

/// Whole micro-steps an action occupies, at least one.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // durations and steps are positive hour counts
fn substeps(duration: f64, time_step: f64) -> usize {
    ((duration / time_step) as usize).max(1)
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn substeps_truncate_and_floor_at_one() {
        assert_eq!(substeps(0.5, 0.1), 5);
        assert_eq!(substeps(0.25, 0.1), 2);
        assert_eq!(substeps(0.05, 0.1), 1);
        assert_eq!(substeps(3.0, 0.1), 30);
        assert_eq!(substeps(6.0, 0.1), 60);
    }

    #[test]
    fn empty_sequence_only_decays() {
        let result = Runner::default().run(&[], 1.0, &mut Chance::disabled());
        assert!(result.viable);
        assert_eq!(result.applied, 0);
        assert!(result.timeline.iter().all(|e| e.action.is_none()));
        assert!(result.hours_simulated >= 1.0);
        assert!(result.total_reward > 0.0);
    }

    #[test]
    fn action_labels_only_its_first_step() {
        let result = Runner::default().run(&[ActionId::Cuddling], 0.5, &mut Chance::disabled());
        assert_eq!(result.timeline.len(), 5);
        assert_eq!(result.timeline[0].action, Some(ActionId::Cuddling));
        assert!(result.timeline[1..].iter().all(|e| e.action.is_none()));
    }

    #[test]
    fn inapplicable_action_is_skipped_without_time() {
        let result = Runner::default().run(
            &[ActionId::Orgasm, ActionId::Snack],
            0.3,
            &mut Chance::disabled(),
        );
        assert_eq!(result.skipped, vec![ActionId::Orgasm]);
        assert_eq!(result.applied, 1);
        assert_eq!(result.timeline[0].action, Some(ActionId::Snack));
        assert!((result.timeline[0].time - 0.1).abs() < 1e-9);
    }

    #[test]
    fn nonviable_start_ends_immediately() {
        let runner = Runner::default().with_initial_state(AgentState {
            energy: 4.0,
            ..AgentState::default()
        });
        let result = runner.run(&[ActionId::Rest], 10.0, &mut Chance::disabled());
        assert!(!result.viable);
        assert_eq!(result.failure, Some(ViabilityFailure::Exhaustion));
        assert!(result.timeline.is_empty());
        assert!(result.total_reward.abs() < f64::EPSILON);
        assert!(result.avg_reward.abs() < f64::EPSILON);
        assert!(result.fitness().abs() < f64::EPSILON);
    }

    #[test]
    fn deterministic_without_chance() {
        let runner = Runner::default();
        let sequence = [
            ActionId::Cuddling,
            ActionId::LightStimulation,
            ActionId::LightStimulation,
            ActionId::IntenseStimulation,
            ActionId::Rest,
        ];
        let a = runner.run(&sequence, 5.0, &mut Chance::disabled());
        let b = runner.run(&sequence, 5.0, &mut Chance::disabled());
        assert_eq!(a, b);
    }

    #[test]
    fn same_seed_same_run() {
        let runner = Runner::default();
        let sequence = [ActionId::Mushrooms, ActionId::Lsd, ActionId::Rest];
        let a = runner.run(&sequence, 10.0, &mut Chance::seeded(3));
        let b = runner.run(&sequence, 10.0, &mut Chance::seeded(3));
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_names_are_rejected_and_cost_nothing() {
        let runner = Runner::default();
        let named = runner.run_named(&["rest", "levitate", "snack"], 2.0, &mut Chance::disabled());
        let typed = runner.run(&[ActionId::Rest, ActionId::Snack], 2.0, &mut Chance::disabled());

        assert_eq!(
            named.rejected,
            vec![AgentError::UnknownAction {
                name: "levitate".to_owned()
            }]
        );
        assert!((named.total_reward - typed.total_reward).abs() < 1e-12);
        assert_eq!(named.timeline, typed.timeline);
    }

    #[test]
    fn available_actions_cover_the_catalog() {
        assert_eq!(Runner::available_actions().len(), 39);
    }

    #[test]
    fn from_config_replaces_an_unusable_step() {
        let mut config = SimulationConfig::default();
        config.simulation.time_step = 0.0;
        let runner = Runner::from_config(&config);
        assert!((runner.time_step() - DEFAULT_TIME_STEP).abs() < f64::EPSILON);
    }

    #[test]
    fn from_config_uses_traits() {
        let mut config = SimulationConfig::default();
        config.agent.testosterone = 100.0;
        let runner = Runner::from_config(&config);
        assert!((runner.initial_state().arousal - 35.0).abs() < 1e-9);
        assert!((runner.time_step() - 0.1).abs() < f64::EPSILON);
    }
}
