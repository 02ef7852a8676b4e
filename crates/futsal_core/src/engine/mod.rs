pub mod config; // Tuning configuration (clock, discipline, stamina, outcomes)
pub mod court; // Attack-relative progress and the seven court zones
pub mod live_match; // TickResult, commentary hints, subscribers
pub mod match_sim;
pub mod movement; // Formation targets and position smoothing
pub mod outcome_model; // Swappable outcome policy
pub mod probability;
pub mod rng;
pub mod stats; // Rating deltas
mod substitutions;

pub use config::{
    ClockConfig, DisciplineConfig, EngineConfig, MovementConfig, OutcomeConfig, StaminaConfig,
};
pub use court::CourtZone;
pub use live_match::{CommentaryHint, SubscriptionId, TickCallback, TickResult};
pub use match_sim::{
    can_transition, select_lineup, BallState, BookingOutcome, MatchEngine, MatchState, Phase,
    PlayerState, TeamState, BASE_RATING, ON_COURT,
};
pub use outcome_model::{
    DribbleOutcome, OutcomeModel, PenaltyContext, PenaltyOutcome, ShotContext, ShotOutcome,
    StandardOutcomes,
};
pub use probability::{Action, ActionContext};
pub use rng::{MatchRng, ScriptedRng, SeededRng};
pub use stats::{display_rating, RatingChange};
