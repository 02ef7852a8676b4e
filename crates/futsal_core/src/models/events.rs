use serde::{Deserialize, Serialize};

use super::{CourtPosition, MatchClock, PlayerId, TeamSide};

/// Immutable record appended to the match event log.
///
/// `description` is left empty by the engine; the commentary layer fills it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchEvent {
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(flatten)]
    pub clock: MatchClock,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<TeamSide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<PlayerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assist_player_id: Option<PlayerId>,
    /// Outgoing player of a substitution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replaced_player_id: Option<PlayerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ball_position: Option<CourtPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shot_flavor: Option<ShotFlavor>,
    /// Score (home, away) right after the event.
    pub score: (u8, u8),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Goal,
    Assist,
    /// Shot that missed the frame (see `shot_flavor`).
    Shot,
    ShotOnTarget,
    Save,
    Foul,
    YellowCard,
    RedCard,
    SecondYellow,
    Substitution,
    Timeout,
    Penalty,
    PenaltySaved,
    PenaltyMissed,
    AccumulatedFoulPenalty,
    PeriodEnd,
    MatchEnd,
}

impl EventType {
    pub fn is_card(self) -> bool {
        matches!(self, EventType::YellowCard | EventType::RedCard | EventType::SecondYellow)
    }
}

/// Off-target sub-outcome, event flavour only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ShotFlavor {
    Blocked,
    Wide,
    Post,
}

impl MatchEvent {
    pub fn new(event_type: EventType, clock: MatchClock, score: (u8, u8)) -> Self {
        Self {
            event_type,
            clock,
            side: None,
            player_id: None,
            assist_player_id: None,
            replaced_player_id: None,
            description: None,
            ball_position: None,
            shot_flavor: None,
            score,
        }
    }

    pub fn for_side(mut self, side: TeamSide) -> Self {
        self.side = Some(side);
        self
    }

    pub fn with_player(mut self, player_id: PlayerId) -> Self {
        self.player_id = Some(player_id);
        self
    }

    pub fn with_assist(mut self, assist: Option<PlayerId>) -> Self {
        self.assist_player_id = assist;
        self
    }

    pub fn replacing(mut self, player_out: PlayerId) -> Self {
        self.replaced_player_id = Some(player_out);
        self
    }

    pub fn at(mut self, ball: CourtPosition) -> Self {
        self.ball_position = Some(ball);
        self
    }

    pub fn with_shot_flavor(mut self, flavor: ShotFlavor) -> Self {
        self.shot_flavor = Some(flavor);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Period;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_event_type_tags_are_distinct_snake_case() {
        let mut seen = HashSet::new();
        for event_type in EventType::iter() {
            let tag = serde_json::to_string(&event_type).unwrap();
            let tag = tag.trim_matches('"').to_string();
            assert!(tag.chars().all(|c| c.is_ascii_lowercase() || c == '_'), "{tag}");
            assert!(seen.insert(tag), "duplicate tag for {:?}", event_type);
        }
        assert_eq!(seen.len(), 17);
    }

    #[test]
    fn test_event_serializes_flat_clock() {
        let event = MatchEvent::new(
            EventType::Goal,
            MatchClock::new(Period::FirstHalf, 12, 4),
            (1, 0),
        )
        .for_side(TeamSide::Home)
        .with_player(9)
        .with_assist(Some(10));

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "goal");
        assert_eq!(json["period"], "first_half");
        assert_eq!(json["minute"], 12);
        assert_eq!(json["second"], 4);
        assert_eq!(json["assist_player_id"], 10);
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_card_types() {
        assert!(EventType::SecondYellow.is_card());
        assert!(EventType::RedCard.is_card());
        assert!(EventType::YellowCard.is_card());
        assert!(!EventType::Foul.is_card());
    }
}
