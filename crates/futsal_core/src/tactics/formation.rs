use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::Position;

/// Futsal formation, outfield lines counted from the back.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Formation {
    /// Diamond: fixo, two alas, pivot.
    #[default]
    #[serde(rename = "1-2-1")]
    Diamond,
    #[serde(rename = "2-2")]
    Square,
    #[serde(rename = "3-1")]
    ThreeOne,
    #[serde(rename = "4-0")]
    FourZero,
}

/// Starting slot, in attack-relative coordinates (x = 0 own goal line).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormationSlot {
    pub role: Position,
    pub progress: f32,
    pub y: f32,
}

const fn slot(role: Position, progress: f32, y: f32) -> FormationSlot {
    FormationSlot { role, progress, y }
}

pub const GOALKEEPER_SLOT: FormationSlot = slot(Position::Goalkeeper, 4.0, 50.0);

impl Formation {
    pub const ALL: [Formation; 4] =
        [Formation::Diamond, Formation::Square, Formation::ThreeOne, Formation::FourZero];

    pub fn code(self) -> &'static str {
        match self {
            Formation::Diamond => "1-2-1",
            Formation::Square => "2-2",
            Formation::ThreeOne => "3-1",
            Formation::FourZero => "4-0",
        }
    }

    /// The four outfield slots, deepest first.
    pub fn outfield_slots(self) -> [FormationSlot; 4] {
        use Position::*;
        match self {
            Formation::Diamond => [
                slot(Defender, 20.0, 50.0),
                slot(Winger, 38.0, 18.0),
                slot(Winger, 38.0, 82.0),
                slot(Pivot, 45.0, 50.0),
            ],
            Formation::Square => [
                slot(Defender, 22.0, 30.0),
                slot(Defender, 22.0, 70.0),
                slot(Winger, 42.0, 30.0),
                slot(Pivot, 42.0, 70.0),
            ],
            Formation::ThreeOne => [
                slot(Defender, 22.0, 50.0),
                slot(Winger, 30.0, 18.0),
                slot(Winger, 30.0, 82.0),
                slot(Pivot, 45.0, 50.0),
            ],
            Formation::FourZero => [
                slot(Defender, 30.0, 35.0),
                slot(Defender, 30.0, 65.0),
                slot(Winger, 40.0, 12.0),
                slot(Winger, 40.0, 88.0),
            ],
        }
    }

    /// Slot for the `index`-th outfield player; wraps past four.
    pub fn outfield_slot(self, index: usize) -> FormationSlot {
        self.outfield_slots()[index % 4]
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Formation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Formation::ALL
            .into_iter()
            .find(|f| f.code() == s.trim())
            .ok_or_else(|| format!("unknown futsal formation: {s}"))
    }
}
