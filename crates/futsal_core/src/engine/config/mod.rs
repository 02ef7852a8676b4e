//! # Engine Configuration
//!
//! Every tuning constant of the match core lives here, grouped by concern.
//!
//! ## Presets
//! - `realistic()` is the default futsal balance
//! - `arcade()` produces more shots and goals
//! - `deterministic()` disables foul rolls and form jitter, for tests
//!
//! ```rust
//! use futsal_core::engine::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! assert!(config.validate().is_ok());
//! let arcade = EngineConfig::arcade();
//! assert!(arcade.outcome.goal_max > config.outcome.goal_max);
//! ```

mod discipline_config;
mod outcome_config;
mod stamina_config;

pub use discipline_config::DisciplineConfig;
pub use outcome_config::OutcomeConfig;
pub use stamina_config::StaminaConfig;

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClockConfig {
    pub half_minutes: u8,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self { half_minutes: 20 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MovementConfig {
    /// Fraction of the gap to the target covered each second.
    pub smoothing: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self { smoothing: 0.2 }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub clock: ClockConfig,
    pub discipline: DisciplineConfig,
    pub stamina: StaminaConfig,
    pub outcome: OutcomeConfig,
    pub movement: MovementConfig,
}

impl EngineConfig {
    pub fn realistic() -> Self {
        Self::default()
    }

    /// More shooting, leakier keepers.
    pub fn arcade() -> Self {
        let mut cfg = Self::default();
        cfg.outcome.shoot_weight = 12.0;
        cfg.outcome.on_target_max = 0.65;
        cfg.outcome.goal_base = 0.26;
        cfg.outcome.goal_max = 0.45;
        cfg.discipline.foul_chance_per_tick = 0.015;
        cfg
    }

    /// No foul rolls and no form jitter.
    pub fn deterministic() -> Self {
        let mut cfg = Self::default();
        cfg.discipline.foul_chance_per_tick = 0.0;
        cfg.outcome.form_jitter_sigma = 0.0;
        cfg
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let cfg: Self = serde_yaml::from_str(yaml)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.clock.half_minutes == 0 || self.clock.half_minutes > 60 {
            return Err(invalid(format!("half_minutes out of range: {}", self.clock.half_minutes)));
        }

        let d = &self.discipline;
        for (name, p) in [
            ("foul_chance_per_tick", d.foul_chance_per_tick),
            ("card_base", d.card_base),
            ("card_per_foul", d.card_per_foul),
            ("straight_red_share", d.straight_red_share),
        ] {
            check_probability(name, p)?;
        }
        if d.aggression_divisor <= 0.0 {
            return Err(invalid("aggression_divisor must be positive".to_string()));
        }
        if !(1..=5).contains(&d.min_on_court) {
            return Err(invalid(format!("min_on_court out of range: {}", d.min_on_court)));
        }

        let s = &self.stamina;
        if s.decay_per_second < 0.0 {
            return Err(invalid("decay_per_second must not be negative".to_string()));
        }
        if s.substitution_interval_secs == 0 {
            return Err(invalid("substitution_interval_secs must be positive".to_string()));
        }

        let o = &self.outcome;
        for (name, p) in o.probabilities() {
            check_probability(name, p)?;
        }
        for (name, lo, hi) in [
            ("dribble", o.dribble_min, o.dribble_max),
            ("on_target", o.on_target_min, o.on_target_max),
            ("goal", o.goal_min, o.goal_max),
            ("penalty", o.penalty_min, o.penalty_max),
            ("pass_advance", o.pass_min_advance, o.pass_max_advance),
            ("dribble_advance", o.dribble_min_advance, o.dribble_max_advance),
        ] {
            if lo > hi {
                return Err(invalid(format!("{name} range inverted: [{lo}, {hi}]")));
            }
        }
        let weights = [o.pass_weight, o.dribble_weight, o.shoot_weight, o.lose_ball_weight];
        if weights.iter().any(|w| *w < 0.0) || weights.iter().sum::<f32>() <= 0.0 {
            return Err(invalid("action weights must be non-negative with a positive sum".to_string()));
        }
        if o.pass_skill_divisor <= 0.0 || o.dribble_divisor <= 0.0 {
            return Err(invalid("skill divisors must be positive".to_string()));
        }

        check_probability("smoothing", self.movement.smoothing)?;
        Ok(())
    }
}

fn invalid(msg: String) -> MatchError {
    MatchError::InvalidConfig(msg)
}

fn check_probability(name: &str, p: f32) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be within [0, 1], got {p}")))
    }
}
