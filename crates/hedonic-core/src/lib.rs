//! Configuration, sequence runs, interactive sessions, and the parallel
//! optimizer for the hedonic simulation.
//!
//! This crate drives the dynamics in `hedonic-agents` over time. It owns no
//! physiology of its own.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `hedonic-config.yaml` into
//!   strongly-typed structs.
//! - [`runner`] -- Sub-stepped runs of a fixed sequence ([`Runner`], [`RunResult`]).
//! - [`session`] -- One-action-at-a-time play ([`Session`]).
//! - [`optimizer`] -- Memetic genetic search on a rayon pool ([`Optimizer`]).
//! - [`report`] -- Compact sequence rendering ([`compress_sequence`]).

pub mod config;
pub mod optimizer;
pub mod report;
pub mod runner;
pub mod session;

pub use config::{ConfigError, OptimizerConfig, RunConfig, SimulationConfig};
pub use optimizer::{OptimizeResult, Optimizer, OptimizerError};
pub use report::{compress_sequence, summarize_sequence};
pub use runner::{RunResult, Runner, RunnerError, TimelineEntry};
pub use session::{ActionInfo, ActionReport, Session, SessionSnapshot};
