//! Stamina and fatigue substitution parameters.

use serde::{Deserialize, Serialize};

use crate::tactics::Tempo;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StaminaConfig {
    /// Stamina lost per second on court by an average (10) stamina attribute.
    pub decay_per_second: f32,
    /// How strongly the stamina attribute scales decay (0 = ignore).
    pub attribute_impact: f32,
    pub slow_tempo_multiplier: f32,
    pub fast_tempo_multiplier: f32,

    /// In-match seconds between automatic substitution checks.
    pub substitution_interval_secs: u32,
    /// On-court outfield players below this are substituted.
    pub substitution_floor: f32,
    /// Bench players must be above this to come on.
    pub fresh_threshold: f32,
}

impl Default for StaminaConfig {
    fn default() -> Self {
        Self {
            decay_per_second: 0.045,
            attribute_impact: 0.5,
            slow_tempo_multiplier: 0.85,
            fast_tempo_multiplier: 1.2,

            substitution_interval_secs: 30,
            substitution_floor: 40.0,
            fresh_threshold: 70.0,
        }
    }
}

impl StaminaConfig {
    /// Per-second decay for a player with the given stamina attribute (1..=20).
    pub fn decay_for(&self, stamina_attr: u8, tempo: Tempo) -> f32 {
        let attr_offset = (stamina_attr as f32 - 10.0) / 20.0;
        let attr_factor = (1.0 - self.attribute_impact * attr_offset).max(0.1);
        let tempo_factor = match tempo {
            Tempo::Slow => self.slow_tempo_multiplier,
            Tempo::Normal => 1.0,
            Tempo::Fast => self.fast_tempo_multiplier,
        };
        self.decay_per_second * attr_factor * tempo_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fitter_players_tire_slower() {
        let cfg = StaminaConfig::default();
        assert!(cfg.decay_for(18, Tempo::Normal) < cfg.decay_for(10, Tempo::Normal));
        assert!(cfg.decay_for(4, Tempo::Normal) > cfg.decay_for(10, Tempo::Normal));
        assert!((cfg.decay_for(10, Tempo::Normal) - cfg.decay_per_second).abs() < 1e-6);
    }

    #[test]
    fn test_fast_tempo_costs_more() {
        let cfg = StaminaConfig::default();
        assert!(cfg.decay_for(10, Tempo::Fast) > cfg.decay_for(10, Tempo::Slow));
    }
}
