//! The action catalog and the pipeline that applies actions to an agent.
//!
//! # Submodules
//!
//! - [`catalog`] -- Duration, category, description and precondition per action.
//! - [`handlers`] -- The effect function of every action.
//! - [`orchestrator`] -- Receptivity, tolerance and cue learning around an effect.

pub mod catalog;
pub mod handlers;
pub mod orchestrator;

pub use catalog::{can_apply, category, description, duration};
pub use handlers::{EffectOutcome, apply_effect};
pub use orchestrator::{AppliedAction, apply_event};
