//! Interactive, one-action-at-a-time play.
//!
//! A [`Session`] is what a presentation layer drives. Unlike the runner it
//! does not sub-step: each applied action is followed by a single decay
//! step covering the action's whole duration, and its reward is the liking
//! that remains afterwards times that duration.

use std::collections::{BTreeMap, VecDeque};

use hedonic_agents::actions::{category, description, duration};
use hedonic_agents::{
    AgentError, AgentTraits, AppliedAction, Chance, Mood, ViabilityFailure, advance, apply_event,
    can_apply, check_viability, classify, create_agent, liking, resolve_action, wanting,
};
use hedonic_types::{ActionId, AgentState, Category};
use serde::Serialize;
use tracing::info;

/// How many applied actions a session remembers.
pub const HISTORY_LEN: usize = 20;

/// How many recent actions a snapshot shows.
const SNAPSHOT_RECENT: usize = 3;

/// Catalog entry for one action, evaluated against the current state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionInfo {
    /// The action.
    pub id: ActionId,
    /// Its category.
    pub category: Category,
    /// Hours it takes.
    pub duration: f64,
    /// Human readable description.
    pub description: &'static str,
    /// Whether its precondition currently holds.
    pub available: bool,
}

/// What happened when an action was requested.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionReport {
    /// The requested action.
    pub id: ActionId,
    /// Details of the application, or `None` if it was refused.
    pub applied: Option<AppliedAction>,
    /// Reward added to the session total.
    pub reward: f64,
    /// Mood after the action.
    pub mood: Mood,
    /// Set when the agent is no longer viable.
    pub failure: Option<ViabilityFailure>,
}

impl ActionReport {
    /// Whether the action was carried out.
    pub const fn was_applied(&self) -> bool {
        self.applied.is_some()
    }
}

/// Serializable view of a session for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    /// The full agent state.
    pub state: AgentState,
    /// Current liking.
    pub liking: f64,
    /// Current wanting.
    pub wanting: f64,
    /// Whether the agent is viable.
    pub viable: bool,
    /// Mood, as glyph and label.
    pub mood: String,
    /// Hours played.
    pub elapsed_hours: f64,
    /// Reward accumulated so far.
    pub total_reward: f64,
    /// Most recent actions, oldest first.
    pub last_actions: Vec<ActionId>,
}

/// A single agent played one action at a time.
#[derive(Debug, Clone)]
pub struct Session {
    traits: AgentTraits,
    state: AgentState,
    elapsed_hours: f64,
    total_reward: f64,
    history: VecDeque<ActionId>,
    chance: Chance,
}

impl Session {
    /// Start a session for an agent with `traits`.
    pub fn new(traits: AgentTraits, chance: Chance) -> Self {
        Self {
            traits,
            state: create_agent(traits),
            elapsed_hours: 0.0,
            total_reward: 0.0,
            history: VecDeque::with_capacity(HISTORY_LEN),
            chance,
        }
    }

    /// Current agent state.
    pub const fn state(&self) -> &AgentState {
        &self.state
    }

    /// Hours played.
    pub const fn elapsed_hours(&self) -> f64 {
        self.elapsed_hours
    }

    /// Reward accumulated so far.
    pub const fn total_reward(&self) -> f64 {
        self.total_reward
    }

    /// Applied actions, oldest first, at most [`HISTORY_LEN`].
    pub fn history(&self) -> impl Iterator<Item = ActionId> + '_ {
        self.history.iter().copied()
    }

    /// Every catalog action with its current availability.
    pub fn available_actions(&self) -> Vec<ActionInfo> {
        ActionId::ALL
            .into_iter()
            .map(|id| ActionInfo {
                id,
                category: category(id),
                duration: duration(id),
                description: description(id),
                available: can_apply(id, &self.state),
            })
            .collect()
    }

    /// [`available_actions`](Self::available_actions) grouped by category.
    pub fn actions_by_category(&self) -> BTreeMap<Category, Vec<ActionInfo>> {
        let mut grouped: BTreeMap<Category, Vec<ActionInfo>> = BTreeMap::new();
        for info in self.available_actions() {
            grouped.entry(info.category).or_default().push(info);
        }
        grouped
    }

    /// Apply `id` if the agent is viable and the precondition holds.
    ///
    /// A refused action changes nothing.
    pub fn apply(&mut self, id: ActionId) -> ActionReport {
        if let Some(failure) = check_viability(&self.state) {
            return self.refused(id, Some(failure));
        }
        if !can_apply(id, &self.state) {
            return self.refused(id, None);
        }

        let applied = apply_event(&mut self.state, id, &mut self.chance);
        let hours = duration(id);
        advance(&mut self.state, hours);

        let reward = liking(&self.state) * hours;
        self.total_reward += reward;
        self.elapsed_hours += hours;

        if self.history.len() == HISTORY_LEN {
            self.history.pop_front();
        }
        self.history.push_back(id);

        let failure = check_viability(&self.state);
        if let Some(failure) = failure {
            info!(
                action = %id,
                %failure,
                hours = self.elapsed_hours,
                total_reward = self.total_reward,
                "agent no longer viable"
            );
        }

        ActionReport {
            id,
            applied: Some(applied),
            reward,
            mood: classify(&self.state),
            failure,
        }
    }

    /// Apply an action by name.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::UnknownAction`] if the name does not resolve.
    pub fn apply_named(&mut self, name: &str) -> Result<ActionReport, AgentError> {
        let id = resolve_action(name)?;
        Ok(self.apply(id))
    }

    /// Start over with a fresh agent built from the same traits.
    pub fn reset(&mut self) {
        self.state = create_agent(self.traits);
        self.elapsed_hours = 0.0;
        self.total_reward = 0.0;
        self.history.clear();
    }

    /// Display view of the current state.
    pub fn snapshot(&self) -> SessionSnapshot {
        let skip = self.history.len().saturating_sub(SNAPSHOT_RECENT);
        SessionSnapshot {
            state: self.state.clone(),
            liking: liking(&self.state),
            wanting: wanting(&self.state),
            viable: check_viability(&self.state).is_none(),
            mood: classify(&self.state).to_string(),
            elapsed_hours: self.elapsed_hours,
            total_reward: self.total_reward,
            last_actions: self.history.iter().skip(skip).copied().collect(),
        }
    }

    fn refused(&self, id: ActionId, failure: Option<ViabilityFailure>) -> ActionReport {
        ActionReport {
            id,
            applied: None,
            reward: 0.0,
            mood: classify(&self.state),
            failure,
        }
    }
}
