//! Team-wide tactical settings supplied by the tactic provider.
//!
//! The match core reads these as multipliers on the action model and as the
//! pressing level in the pass model. Nothing here changes during a match.

use serde::{Deserialize, Serialize};

use super::Formation;

/// Tactic for one side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TeamTactic {
    #[serde(default)]
    pub mentality: Mentality,
    #[serde(default)]
    pub tempo: Tempo,
    #[serde(default)]
    pub pressing: Pressing,
    /// Only seeds the initial on-court positions.
    #[serde(default)]
    pub formation: Formation,
}

impl TeamTactic {
    pub fn new(mentality: Mentality, tempo: Tempo, pressing: Pressing) -> Self {
        Self { mentality, tempo, pressing, formation: Formation::default() }
    }

    pub fn with_formation(mut self, formation: Formation) -> Self {
        self.formation = formation;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Mentality {
    Defensive,
    #[default]
    Balanced,
    Attacking,
}

impl Mentality {
    /// Multiplier on the shoot weight of the action model.
    pub fn shoot_factor(self) -> f32 {
        match self {
            Mentality::Defensive => 0.7,
            Mentality::Balanced => 1.0,
            Mentality::Attacking => 1.4,
        }
    }

    /// Multiplier on the safe pass weight.
    pub fn pass_factor(self) -> f32 {
        match self {
            Mentality::Defensive => 1.2,
            Mentality::Balanced => 1.0,
            Mentality::Attacking => 0.9,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Tempo {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl Tempo {
    /// Multiplier on the direct actions (dribble, shoot).
    pub fn directness(self) -> f32 {
        match self {
            Tempo::Slow => 0.8,
            Tempo::Normal => 1.0,
            Tempo::Fast => 1.25,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Pressing {
    Low,
    #[default]
    Medium,
    High,
}

impl Pressing {
    /// 0 = low, 1 = medium, 2 = high.
    pub fn level(self) -> u8 {
        match self {
            Pressing::Low => 0,
            Pressing::Medium => 1,
            Pressing::High => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressing_levels() {
        assert_eq!(Pressing::Low.level(), 0);
        assert_eq!(Pressing::Medium.level(), 1);
        assert_eq!(Pressing::High.level(), 2);
    }

    #[test]
    fn test_tactic_deserializes_partial() {
        let tactic: TeamTactic =
            serde_json::from_str(r#"{"mentality": "attacking", "formation": "3-1"}"#).unwrap();
        assert_eq!(tactic.mentality, Mentality::Attacking);
        assert_eq!(tactic.tempo, Tempo::Normal);
        assert_eq!(tactic.pressing, Pressing::Medium);
        assert_eq!(tactic.formation, Formation::ThreeOne);
    }

    #[test]
    fn test_attacking_mentality_shoots_more() {
        assert!(Mentality::Attacking.shoot_factor() > Mentality::Balanced.shoot_factor());
        assert!(Mentality::Defensive.shoot_factor() < Mentality::Balanced.shoot_factor());
    }
}
