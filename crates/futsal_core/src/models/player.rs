use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier supplied by the roster provider. Unique across both squads.
pub type PlayerId = u32;

/// Upper bound of every attribute (1..=20 scale).
pub const ATTRIBUTE_MAX: u8 = 20;
/// Reflexes assumed for an outfield player standing in goal.
pub const OUTFIELD_REFLEXES: u8 = 4;

/// Player data for the match core.
///
/// Owned by the roster provider; the engine only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    /// Current ability, 1..=200.
    pub ability: u8,
    /// Base form, 0..=100. Jittered once when the match is created.
    #[serde(default = "default_form")]
    pub form: u8,
    #[serde(default)]
    pub attributes: PlayerAttributes,
}

fn default_form() -> u8 {
    50
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, position: Position, ability: u8) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            ability,
            form: default_form(),
            attributes: PlayerAttributes::for_position(position, 10),
        }
    }

    pub fn with_attributes(mut self, attributes: PlayerAttributes) -> Self {
        self.attributes = attributes;
        self
    }
}

/// Futsal position categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Goalkeeper,
    /// Fixo: last outfield player, organises the defence.
    Defender,
    /// Ala: wide player, carries the ball up the flanks.
    Winger,
    /// Pivô: target forward.
    Pivot,
}

impl Position {
    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::Goalkeeper)
    }

    pub fn is_outfield(&self) -> bool {
        !self.is_goalkeeper()
    }

    /// Whether a player of this category can cover `target` without a
    /// tactical reshuffle. Wingers bridge both outfield lines.
    pub fn is_compatible_position(&self, target: Position) -> bool {
        use Position::*;
        match (self, target) {
            (a, b) if *a == b => true,
            (Winger, Defender) | (Defender, Winger) => true,
            (Winger, Pivot) | (Pivot, Winger) => true,
            _ => false,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "FIX",
            Position::Winger => "ALA",
            Position::Pivot => "PIV",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gk" | "goalkeeper" | "goleiro" => Ok(Position::Goalkeeper),
            "fix" | "fixo" | "df" | "defender" => Ok(Position::Defender),
            "ala" | "winger" | "w" => Ok(Position::Winger),
            "piv" | "pivo" | "pivot" | "fw" | "forward" => Ok(Position::Pivot),
            other => Err(format!("unknown futsal position: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TechnicalAttributes {
    pub shooting: u8,
    pub passing: u8,
    pub dribbling: u8,
    pub first_touch: u8,
    pub technique: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MentalAttributes {
    pub decisions: u8,
    pub positioning: u8,
    pub work_rate: u8,
    pub composure: u8,
    pub teamwork: u8,
    pub aggression: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhysicalAttributes {
    pub pace: u8,
    pub acceleration: u8,
    pub stamina: u8,
    pub strength: u8,
    pub agility: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalkeepingAttributes {
    pub reflexes: u8,
    pub handling: u8,
    pub one_on_ones: u8,
    pub distribution: u8,
    pub aerial_ability: u8,
}

/// Attribute groups on the 1..=20 scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAttributes {
    pub technical: TechnicalAttributes,
    pub mental: MentalAttributes,
    pub physical: PhysicalAttributes,
    /// Only goalkeepers are expected to carry this group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goalkeeping: Option<GoalkeepingAttributes>,
}

impl Default for PlayerAttributes {
    fn default() -> Self {
        Self::from_uniform(10)
    }
}

impl PlayerAttributes {
    /// Every outfield attribute set to `val`, no goalkeeping group.
    pub fn from_uniform(val: u8) -> Self {
        let v = val.clamp(1, ATTRIBUTE_MAX);
        Self {
            technical: TechnicalAttributes {
                shooting: v,
                passing: v,
                dribbling: v,
                first_touch: v,
                technique: v,
            },
            mental: MentalAttributes {
                decisions: v,
                positioning: v,
                work_rate: v,
                composure: v,
                teamwork: v,
                aggression: v,
            },
            physical: PhysicalAttributes {
                pace: v,
                acceleration: v,
                stamina: v,
                strength: v,
                agility: v,
            },
            goalkeeping: None,
        }
    }

    /// Uniform attributes, plus a goalkeeping group for keepers.
    pub fn for_position(position: Position, val: u8) -> Self {
        let mut attrs = Self::from_uniform(val);
        if position.is_goalkeeper() {
            let v = val.clamp(1, ATTRIBUTE_MAX);
            attrs.goalkeeping = Some(GoalkeepingAttributes {
                reflexes: v,
                handling: v,
                one_on_ones: v,
                distribution: v,
                aerial_ability: v,
            });
        }
        attrs
    }

    /// Defensive skill used by the dribble model.
    pub fn defending(&self) -> f32 {
        let m = &self.mental;
        let p = &self.physical;
        (m.positioning as f32 + m.work_rate as f32 + p.strength as f32 + p.agility as f32) / 4.0
    }

    pub fn reflexes(&self) -> u8 {
        self.goalkeeping.map_or(OUTFIELD_REFLEXES, |gk| gk.reflexes)
    }

    pub fn one_on_ones(&self) -> u8 {
        self.goalkeeping.map_or(OUTFIELD_REFLEXES, |gk| gk.one_on_ones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_compatibility() {
        assert!(Position::Winger.is_compatible_position(Position::Pivot));
        assert!(Position::Defender.is_compatible_position(Position::Winger));
        assert!(!Position::Defender.is_compatible_position(Position::Pivot));
        assert!(!Position::Goalkeeper.is_compatible_position(Position::Defender));
        assert!(Position::Goalkeeper.is_compatible_position(Position::Goalkeeper));
    }

    #[test]
    fn test_position_parsing_accepts_futsal_names() {
        assert_eq!("fixo".parse::<Position>(), Ok(Position::Defender));
        assert_eq!("ALA".parse::<Position>(), Ok(Position::Winger));
        assert_eq!(" pivot ".parse::<Position>(), Ok(Position::Pivot));
        assert!("libero".parse::<Position>().is_err());
    }

    #[test]
    fn test_outfield_player_has_weak_reflexes() {
        let outfield = PlayerAttributes::for_position(Position::Winger, 18);
        let keeper = PlayerAttributes::for_position(Position::Goalkeeper, 18);
        assert_eq!(outfield.reflexes(), OUTFIELD_REFLEXES);
        assert_eq!(keeper.reflexes(), 18);
    }

    #[test]
    fn test_player_deserializes_with_defaults() {
        let json = r#"{"id": 7, "name": "Falcão", "position": "pivot", "ability": 150}"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.form, 50);
        assert_eq!(player.attributes.technical.shooting, 10);
        assert!(player.attributes.goalkeeping.is_none());
    }
}
