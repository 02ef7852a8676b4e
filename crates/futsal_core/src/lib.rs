//! # futsal_core - Deterministic Futsal Match Simulation Engine
//!
//! Tick-driven simulation of a five-a-side futsal match, one call per
//! simulated second, with a JSON API for whole-match runs.
//!
//! ## Features
//! - Deterministic simulation (same seed = same result)
//! - Futsal rules: accumulated fouls, power plays, rolling substitutions,
//!   one timeout per half, flying goalkeeper
//! - Swappable outcome model and random source for tests
//! - Structured events only; commentary text is left to the caller

// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]
// Outcome policy methods take config, context and rng
#![allow(clippy::too_many_arguments)]

pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod tactics;

// Re-export main API functions
pub use api::{simulate_match, simulate_match_json, MatchRequest};
pub use engine::{
    CommentaryHint, EngineConfig, MatchEngine, MatchState, OutcomeModel, SubscriptionId,
    TickResult,
};
pub use error::{MatchError, Result, SubstitutionError};
pub use models::{
    EventType, MatchEvent, MatchResult, Player, PlayerId, Position, Team, TeamSheet, TeamSide,
};
pub use tactics::{Formation, Mentality, Pressing, TeamTactic, Tempo};
