//! Fouls, cards, power play and touchline rules.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisciplineConfig {
    /// Chance of a foul each open-play second.
    pub foul_chance_per_tick: f32,
    /// Team fouls in a half beyond this are punished with a penalty.
    pub accumulated_foul_limit: u8,

    pub card_base: f32,
    /// Added per foul the offender has committed this match.
    pub card_per_foul: f32,
    /// Aggression attribute is divided by this and added.
    pub aggression_divisor: f32,
    /// Share of shown cards that are straight reds.
    pub straight_red_share: f32,

    pub power_play_seconds: u16,
    /// A dismissal never takes a side below this.
    pub min_on_court: usize,
    pub timeouts_per_half: u8,
    /// A goal by the side with more players ends the opponent's power play.
    pub end_power_play_on_goal: bool,
}

impl Default for DisciplineConfig {
    fn default() -> Self {
        Self {
            foul_chance_per_tick: 0.02,
            accumulated_foul_limit: 5,

            card_base: 0.03,
            card_per_foul: 0.02,
            aggression_divisor: 500.0,
            straight_red_share: 0.05,

            power_play_seconds: 120,
            min_on_court: 4,
            timeouts_per_half: 1,
            end_power_play_on_goal: true,
        }
    }
}
