//! Shared type definitions for the hedonic physiology simulation.
//!
//! This crate is the single source of truth for the data that flows between
//! the dynamics engine, the simulation runner, and the optimizer. It holds
//! no behavior beyond accessors and clamping.
//!
//! # Modules
//!
//! - [`enums`] -- Action categories, tracked neurotransmitters, bounded attributes
//! - [`maps`] -- Fixed enum-keyed maps for per-category and per-reserve values
//! - [`structs`] -- Agent state and the two delayed-effect queue entries
//! - [`actions`] -- The closed set of action identifiers

pub mod actions;
pub mod enums;
pub mod maps;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use actions::ActionId;
pub use enums::{Attribute, Category, Neurotransmitter};
pub use maps::{CategoryMap, ReserveMap};
pub use structs::{ActiveEffect, AgentState, Rebound};
