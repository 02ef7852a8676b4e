//! Match rating adjustments.

use serde::{Deserialize, Serialize};

/// Event that moves a player's running match rating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RatingChange {
    Goal,
    Assist,
    Save,
    ShotOnTarget,
    CompletedPass,
    Foul,
    YellowCard,
    /// Straight red or second yellow.
    Dismissal,
    PenaltyMiss,
}

impl RatingChange {
    pub fn delta(self) -> f32 {
        match self {
            RatingChange::Goal => 1.0,
            RatingChange::Assist => 0.6,
            RatingChange::Save => 0.3,
            RatingChange::ShotOnTarget => 0.1,
            RatingChange::CompletedPass => 0.02,
            RatingChange::Foul => -0.1,
            RatingChange::YellowCard => -0.5,
            RatingChange::Dismissal => -1.5,
            RatingChange::PenaltyMiss => -0.4,
        }
    }
}

/// Rating rounded to one decimal for reports.
pub fn display_rating(rating: f32) -> f32 {
    (rating * 10.0).round() / 10.0
}
