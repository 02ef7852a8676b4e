//! Constants of the outcome models.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutcomeConfig {
    // === Action selection ===
    pub pass_weight: f32,
    pub dribble_weight: f32,
    pub shoot_weight: f32,
    pub lose_ball_weight: f32,

    // === Pass ===
    pub pass_base: f32,
    pub pass_skill_divisor: f32,
    /// Subtracted per opponent pressing level.
    pub pressing_penalty: f32,
    pub pass_min_advance: f32,
    pub pass_max_advance: f32,

    // === Dribble ===
    pub dribble_base: f32,
    pub dribble_divisor: f32,
    pub dribble_min: f32,
    pub dribble_max: f32,
    /// Share of failed dribbles ruled a foul.
    pub dribble_foul_share: f32,
    pub dribble_min_advance: f32,
    pub dribble_max_advance: f32,

    // === Shot ===
    pub on_target_base: f32,
    pub on_target_min: f32,
    pub on_target_max: f32,
    pub goal_base: f32,
    pub goal_min: f32,
    pub goal_max: f32,
    /// Off-target flavour shares (cumulative order blocked, wide, post).
    pub blocked_share: f32,
    pub wide_share: f32,
    pub post_share: f32,

    // === Penalty ===
    pub penalty_base: f32,
    pub penalty_skill_factor: f32,
    pub penalty_min: f32,
    pub penalty_max: f32,
    /// Share of missed penalties that the keeper saves.
    pub penalty_save_share: f32,

    // === Set pieces ===
    pub corner_shot_chance: f32,
    pub free_kick_shot_chance: f32,

    /// Std-dev of the kickoff form jitter (form points).
    pub form_jitter_sigma: f32,
}

impl Default for OutcomeConfig {
    fn default() -> Self {
        Self {
            pass_weight: 50.0,
            dribble_weight: 25.0,
            shoot_weight: 8.0,
            lose_ball_weight: 6.0,

            pass_base: 0.7,
            pass_skill_divisor: 100.0,
            pressing_penalty: 0.1,
            pass_min_advance: 6.0,
            pass_max_advance: 16.0,

            dribble_base: 0.5,
            dribble_divisor: 50.0,
            dribble_min: 0.05,
            dribble_max: 0.95,
            dribble_foul_share: 0.3,
            dribble_min_advance: 4.0,
            dribble_max_advance: 10.0,

            on_target_base: 0.35,
            on_target_min: 0.15,
            on_target_max: 0.55,
            goal_base: 0.2,
            goal_min: 0.05,
            goal_max: 0.35,
            blocked_share: 0.40,
            wide_share: 0.45,
            post_share: 0.08,

            penalty_base: 0.75,
            penalty_skill_factor: 0.02,
            penalty_min: 0.5,
            penalty_max: 0.95,
            penalty_save_share: 0.6,

            corner_shot_chance: 0.3,
            free_kick_shot_chance: 0.5,

            form_jitter_sigma: 8.0,
        }
    }
}

impl OutcomeConfig {
    pub(super) fn probabilities(&self) -> [(&'static str, f32); 17] {
        [
            ("pass_base", self.pass_base),
            ("pressing_penalty", self.pressing_penalty),
            ("dribble_base", self.dribble_base),
            ("dribble_min", self.dribble_min),
            ("dribble_max", self.dribble_max),
            ("dribble_foul_share", self.dribble_foul_share),
            ("on_target_min", self.on_target_min),
            ("on_target_max", self.on_target_max),
            ("goal_min", self.goal_min),
            ("goal_max", self.goal_max),
            ("blocked_share", self.blocked_share),
            ("penalty_min", self.penalty_min),
            ("penalty_max", self.penalty_max),
            ("penalty_save_share", self.penalty_save_share),
            ("corner_shot_chance", self.corner_shot_chance),
            ("free_kick_shot_chance", self.free_kick_shot_chance),
            ("off_target_shares", self.blocked_share + self.wide_share + self.post_share),
        ]
    }
}
