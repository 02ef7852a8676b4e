//! Phase state machine positions and their legal transitions.

use serde::{Deserialize, Serialize};

/// Where the ball is in the flow of play.
///
/// There is no terminal phase: the match ends on the clock, not here.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Kickoff,
    OpenPlay,
    Attack,
    Shot,
    GoalScored,
    Save,
    GoalKick,
    Corner,
    FreeKick,
    Penalty,
    Foul,
}

impl Phase {
    /// Restart that can lead straight to a shot.
    pub fn is_set_piece(self) -> bool {
        matches!(self, Phase::Corner | Phase::FreeKick | Phase::Penalty)
    }
}

/// Whether the machine may move from `from` to `to` in one step.
///
/// Staying put is always legal, as is a kickoff (period start).
pub fn can_transition(from: Phase, to: Phase) -> bool {
    use Phase::*;
    if from == to || to == Kickoff {
        return true;
    }
    match from {
        Kickoff => matches!(to, OpenPlay),
        OpenPlay => matches!(to, Attack | Shot | Foul),
        Attack => matches!(to, OpenPlay | Shot | Foul),
        Shot => matches!(to, GoalScored | Save | Corner | GoalKick),
        GoalScored => false,
        Save | GoalKick => matches!(to, OpenPlay | Attack),
        Corner => matches!(to, Shot | OpenPlay | Attack),
        FreeKick => matches!(to, Shot | OpenPlay | Attack),
        Penalty => matches!(to, GoalScored | Save | OpenPlay),
        Foul => matches!(to, FreeKick | Penalty),
    }
}
