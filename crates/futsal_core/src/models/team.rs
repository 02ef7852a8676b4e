use serde::{Deserialize, Serialize};
use std::fmt;

use super::Player;
use crate::tactics::TeamTactic;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    #[default]
    Home,
    Away,
}

impl TeamSide {
    pub const BOTH: [TeamSide; 2] = [TeamSide::Home, TeamSide::Away];

    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }

    #[inline]
    pub const fn is_home(self) -> bool {
        matches!(self, TeamSide::Home)
    }
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamSide::Home => f.write_str("home"),
            TeamSide::Away => f.write_str("away"),
        }
    }
}

/// Club identity as handed over by the fixture.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), short_name: None }
    }
}

/// Everything the roster/tactic provider supplies for one side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSheet {
    pub team: Team,
    #[serde(default)]
    pub tactic: TeamTactic,
    /// Ordered squad; lineup selection follows this order.
    pub players: Vec<Player>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for side in TeamSide::BOTH {
            assert_eq!(side.opponent().opponent(), side);
            assert_ne!(side.opponent(), side);
        }
    }

    #[test]
    fn test_team_sheet_defaults_tactic() {
        let json = r#"{"team": {"name": "Inter Movistar"}, "players": []}"#;
        let sheet: TeamSheet = serde_json::from_str(json).unwrap();
        assert_eq!(sheet.team.name, "Inter Movistar");
        assert_eq!(sheet.tactic, TeamTactic::default());
    }
}
