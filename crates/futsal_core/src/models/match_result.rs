//! Match Result Data Structures
//!
//! Output of a simulated match. Everything a consumer needs after full time
//! lives here; the live `MatchState` can be dropped once this is built.
//!
//! ## Data Flow
//!
//! ```text
//!  MatchEngine ──advance_one_second()──► MatchState
//!                                          │
//!                                          │ MatchResult::from(&state)
//!                                          ▼
//!                                     MatchResult
//!                                       ├─► score: (u8, u8)
//!                                       ├─► statistics: MatchStatistics
//!                                       ├─► events: Vec<MatchEvent>
//!                                       └─► players: Vec<PlayerLine>
//! ```

use serde::{Deserialize, Serialize};

use super::{MatchEvent, MatchStatistics, PlayerId, Position, Team, TeamSide};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub home_team: Team,
    pub away_team: Team,
    /// (home, away)
    pub score: (u8, u8),
    /// False when built from a match that has not reached full time.
    pub finished: bool,
    pub statistics: MatchStatistics,
    pub events: Vec<MatchEvent>,
    /// Every squad member, home first, in roster order.
    pub players: Vec<PlayerLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl MatchResult {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// `None` for a draw.
    pub fn winner(&self) -> Option<TeamSide> {
        match self.score.0.cmp(&self.score.1) {
            std::cmp::Ordering::Greater => Some(TeamSide::Home),
            std::cmp::Ordering::Less => Some(TeamSide::Away),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn players_of(&self, side: TeamSide) -> impl Iterator<Item = &PlayerLine> + '_ {
        self.players.iter().filter(move |p| p.side == side)
    }

    /// Highest rated player of the match; ties go to the first listed.
    pub fn player_of_the_match(&self) -> Option<&PlayerLine> {
        self.players
            .iter()
            .filter(|p| p.minutes_played > 0)
            .fold(None, |best: Option<&PlayerLine>, p| match best {
                Some(b) if b.rating >= p.rating => Some(b),
                _ => Some(p),
            })
    }
}

/// Per-player box score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerLine {
    pub id: PlayerId,
    pub name: String,
    pub side: TeamSide,
    pub position: Position,
    /// Match rating rounded to one decimal.
    pub rating: f32,
    pub goals: u8,
    pub assists: u8,
    pub saves: u8,
    pub shots: u8,
    pub fouls: u16,
    pub yellow_card: bool,
    pub sent_off: bool,
    pub minutes_played: u32,
}
