//! Physiology dynamics, the action catalog, and scoring for the hedonic
//! simulation.
//!
//! This crate contains the logic layer for agents: everything that operates
//! on [`AgentState`](hedonic_types::AgentState) without touching I/O. It sits
//! between `hedonic-types` (which defines the data) and `hedonic-core`
//! (which runs sequences and optimizes them).
//!
//! # Modules
//!
//! - [`actions`] -- Catalog metadata, effect handlers, and the orchestrator ([`apply_event`])
//! - [`agent`] -- Trait-adjusted agent creation ([`AgentTraits`], [`create_agent`])
//! - [`boost`] -- Reserve-gated neurotransmitter boosts ([`nt_boost`])
//! - [`chance`] -- Seedable source for stochastic outcomes ([`Chance`])
//! - [`error`] -- Error types for agent operations ([`AgentError`])
//! - [`mood`] -- Mood classification for display ([`Mood`])
//! - [`physiology`] -- Baselines, decay rates, tolerance and delivery constants
//! - [`receptivity`] -- Context appraisal and backfire
//! - [`scoring`] -- Liking and wanting
//! - [`viability`] -- Survival predicate ([`ViabilityFailure`])
//! - [`vitals`] -- Per-step homeostatic decay ([`advance`])

pub mod actions;
pub mod agent;
pub mod boost;
pub mod chance;
pub mod error;
pub mod mood;
pub mod physiology;
pub mod receptivity;
pub mod scoring;
pub mod viability;
pub mod vitals;

// Re-export primary types at crate root for convenience.
pub use actions::{AppliedAction, EffectOutcome, apply_event, can_apply};
pub use agent::{AgentTraits, create_agent};
pub use boost::{BoostProfile, nt_boost};
pub use chance::Chance;
pub use error::{AgentError, resolve_action};
pub use mood::{Mood, classify};
pub use scoring::{liking, wanting, yerkes_dodson_optimum};
pub use viability::{ViabilityFailure, check_viability, is_viable};
pub use vitals::advance;
