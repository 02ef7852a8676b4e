//! Per-tick results and the subscription mechanism.
//!
//! Subscribers are called synchronously at the end of every accepted tick
//! with the post-tick state and the tick's result.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::match_sim::{MatchState, Phase};
use crate::models::{EventType, MatchEvent};

/// What the commentary layer should talk about this second.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CommentaryHint {
    Kickoff,
    BuildUp,
    Chance,
    Goal,
    SetPiece,
    Discipline,
    Substitution,
    Timeout,
    PeriodEnd,
    MatchEnd,
}

/// Outcome of `advance_one_second`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TickResult {
    /// Events appended this tick, in log order.
    pub events: Vec<MatchEvent>,
    /// False when the tick was rejected (not started, paused or finished).
    pub state_changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentary_hint: Option<CommentaryHint>,
}

impl TickResult {
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn has_event(&self, event_type: EventType) -> bool {
        self.events.iter().any(|e| e.event_type == event_type)
    }
}

/// Most newsworthy thing in `events`, else what the phase suggests.
pub fn commentary_hint(events: &[MatchEvent], phase: Phase) -> CommentaryHint {
    let has = |types: &[EventType]| events.iter().any(|e| types.contains(&e.event_type));

    if has(&[EventType::MatchEnd]) {
        CommentaryHint::MatchEnd
    } else if has(&[EventType::PeriodEnd]) {
        CommentaryHint::PeriodEnd
    } else if has(&[EventType::Goal]) {
        CommentaryHint::Goal
    } else if events.iter().any(|e| e.event_type.is_card()) {
        CommentaryHint::Discipline
    } else if has(&[EventType::Penalty, EventType::AccumulatedFoulPenalty]) {
        CommentaryHint::SetPiece
    } else if has(&[
        EventType::Shot,
        EventType::ShotOnTarget,
        EventType::Save,
        EventType::PenaltySaved,
        EventType::PenaltyMissed,
    ]) {
        CommentaryHint::Chance
    } else if has(&[EventType::Foul]) {
        CommentaryHint::Discipline
    } else if has(&[EventType::Substitution]) {
        CommentaryHint::Substitution
    } else if has(&[EventType::Timeout]) {
        CommentaryHint::Timeout
    } else {
        match phase {
            Phase::Kickoff | Phase::GoalScored => CommentaryHint::Kickoff,
            Phase::Attack | Phase::Shot => CommentaryHint::Chance,
            p if p.is_set_piece() || p == Phase::Foul => CommentaryHint::SetPiece,
            _ => CommentaryHint::BuildUp,
        }
    }
}

/// Handle returned by `subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

pub type TickCallback = Box<dyn FnMut(&MatchState, &TickResult) + Send>;

#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, TickCallback)>,
}

impl Subscribers {
    pub fn add(&mut self, callback: TickCallback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    /// Returns whether `id` was registered.
    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Call every subscriber in registration order.
    pub fn notify(&mut self, state: &MatchState, result: &TickResult) {
        for (_, callback) in self.entries.iter_mut() {
            callback(state, result);
        }
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
