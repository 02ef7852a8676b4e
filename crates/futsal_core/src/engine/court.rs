//! Court zones and attack-direction mirroring.
//!
//! Zones are banded on "progress": the ball's x measured from the possessing
//! side's own goal line. Home attacks towards x = 100 in the first half; ends
//! switch at half-time.

use serde::{Deserialize, Serialize};

use crate::models::{CourtPosition, Period, TeamSide};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CourtZone {
    OwnGoalArea,
    OwnBox,
    DefensiveThird,
    Midfield,
    AttackingThird,
    OpponentBox,
    OpponentGoalArea,
}

/// Progress where the attacking zones begin.
pub const ATTACKING_PROGRESS: f32 = 64.0;

impl CourtZone {
    pub fn from_progress(progress: f32) -> Self {
        match progress {
            p if p < 8.0 => CourtZone::OwnGoalArea,
            p if p < 16.0 => CourtZone::OwnBox,
            p if p < 36.0 => CourtZone::DefensiveThird,
            p if p < ATTACKING_PROGRESS => CourtZone::Midfield,
            p if p < 84.0 => CourtZone::AttackingThird,
            p if p < 92.0 => CourtZone::OpponentBox,
            _ => CourtZone::OpponentGoalArea,
        }
    }

    pub fn is_attacking(self) -> bool {
        matches!(
            self,
            CourtZone::AttackingThird | CourtZone::OpponentBox | CourtZone::OpponentGoalArea
        )
    }

    /// Inside the penalty area the attacking side is shooting at.
    pub fn is_opponent_box(self) -> bool {
        matches!(self, CourtZone::OpponentBox | CourtZone::OpponentGoalArea)
    }

    /// Multipliers on (pass, dribble, shoot, lose ball) weights.
    pub fn action_multipliers(self) -> [f32; 4] {
        match self {
            CourtZone::OwnGoalArea => [1.3, 0.4, 0.0, 1.2],
            CourtZone::OwnBox => [1.3, 0.5, 0.0, 1.1],
            CourtZone::DefensiveThird => [1.2, 0.8, 0.05, 1.0],
            CourtZone::Midfield => [1.0, 1.0, 0.3, 1.0],
            CourtZone::AttackingThird => [0.9, 1.1, 1.2, 1.0],
            CourtZone::OpponentBox => [0.7, 0.9, 3.0, 1.0],
            CourtZone::OpponentGoalArea => [0.5, 0.6, 4.5, 1.0],
        }
    }
}

/// Whether `side` attacks towards x = 100 in `period`.
pub fn attacks_right(side: TeamSide, period: Period) -> bool {
    match period {
        Period::SecondHalf => !side.is_home(),
        _ => side.is_home(),
    }
}

/// Court x → progress for `side`. Self-inverse.
pub fn progress_of(x: f32, side: TeamSide, period: Period) -> f32 {
    if attacks_right(side, period) {
        x
    } else {
        CourtPosition::MAX - x
    }
}

/// Progress → court x for `side`.
pub fn x_of(progress: f32, side: TeamSide, period: Period) -> f32 {
    progress_of(progress, side, period)
}

/// Court position of an attack-relative coordinate.
pub fn to_court(progress: f32, y: f32, side: TeamSide, period: Period) -> CourtPosition {
    CourtPosition::new(x_of(progress, side, period), y).clamped()
}

/// Zone of `ball` from the point of view of `side`.
pub fn zone_for(ball: CourtPosition, side: TeamSide, period: Period) -> CourtZone {
    CourtZone::from_progress(progress_of(ball.x, side, period))
}
