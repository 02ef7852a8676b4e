//! Authoritative match snapshot.
//!
//! `MatchState` owns both team states, the ball, the event log and the
//! statistics. Only the engine mutates it; readers get a clone.

use serde::{Deserialize, Serialize};

use super::match_phase::Phase;
use crate::engine::probability::effective_ability;
use crate::engine::stats::display_rating;
use crate::models::{
    CourtPosition, EventType, MatchClock, MatchEvent, MatchResult, MatchStatistics, Period, Player,
    PlayerId, PlayerLine, Team, TeamSide,
};
use crate::tactics::TeamTactic;

/// Rating every player starts the match with.
pub const BASE_RATING: f32 = 6.0;

/// Static player data plus everything that changes during the match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerState {
    pub player: Player,
    pub position: CourtPosition,
    pub target: CourtPosition,
    /// 0..=100, never recovers.
    pub stamina: f32,
    /// Base form jittered once at creation.
    pub match_form: f32,
    pub yellow_card: bool,
    pub sent_off: bool,
    pub on_court: bool,
    pub seconds_played: u32,
    pub goals: u8,
    pub assists: u8,
    pub saves: u8,
    pub shots: u8,
    pub fouls_committed: u16,
    pub rating: f32,
}

impl PlayerState {
    pub fn new(player: Player, match_form: f32) -> Self {
        Self {
            player,
            position: CourtPosition::CENTER,
            target: CourtPosition::CENTER,
            stamina: 100.0,
            match_form,
            yellow_card: false,
            sent_off: false,
            on_court: false,
            seconds_played: 0,
            goals: 0,
            assists: 0,
            saves: 0,
            shots: 0,
            fouls_committed: 0,
            rating: BASE_RATING,
        }
    }

    #[inline]
    pub fn id(&self) -> PlayerId {
        self.player.id
    }

    pub fn minutes_played(&self) -> u32 {
        self.seconds_played / 60
    }

    pub fn effective_ability(&self) -> f32 {
        effective_ability(self.player.ability, self.match_form, self.stamina)
    }

    pub fn adjust_rating(&mut self, delta: f32) {
        self.rating = (self.rating + delta).clamp(1.0, 10.0);
    }
}

/// One side of the match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamState {
    pub side: TeamSide,
    pub team: Team,
    pub tactic: TeamTactic,
    /// Whole squad in provider order, including benched and sent-off players.
    pub roster: Vec<PlayerState>,
    /// On-court ids. Order fixes each player's formation slot.
    pub on_court: Vec<PlayerId>,
    pub accumulated_fouls: u8,
    pub timeouts_used: u8,
    pub power_play_seconds_remaining: u16,
    pub sent_off_player_id: Option<PlayerId>,
    pub is_using_flying_goalkeeper: bool,
    /// Last completed passer in the current possession.
    pub last_passer: Option<PlayerId>,
}

impl TeamState {
    pub fn new(side: TeamSide, team: Team, tactic: TeamTactic, roster: Vec<PlayerState>) -> Self {
        Self {
            side,
            team,
            tactic,
            roster,
            on_court: Vec::new(),
            accumulated_fouls: 0,
            timeouts_used: 0,
            power_play_seconds_remaining: 0,
            sent_off_player_id: None,
            is_using_flying_goalkeeper: false,
            last_passer: None,
        }
    }

    pub fn player(&self, id: PlayerId) -> Option<&PlayerState> {
        self.roster.iter().find(|p| p.id() == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut PlayerState> {
        self.roster.iter_mut().find(|p| p.id() == id)
    }

    pub fn is_on_court(&self, id: PlayerId) -> bool {
        self.on_court.contains(&id)
    }

    /// Roster players neither on court nor sent off, in roster order.
    pub fn bench(&self) -> Vec<PlayerId> {
        self.roster
            .iter()
            .filter(|p| !p.sent_off && !self.on_court.contains(&p.id()))
            .map(|p| p.id())
            .collect()
    }

    pub fn is_on_bench(&self, id: PlayerId) -> bool {
        self.player(id)
            .is_some_and(|p| !p.sent_off && !self.on_court.contains(&id))
    }

    pub fn on_court_players(&self) -> impl Iterator<Item = &PlayerState> + '_ {
        self.on_court.iter().filter_map(move |id| self.player(*id))
    }

    /// Goalkeeper currently on court, if any.
    pub fn goalkeeper(&self) -> Option<&PlayerState> {
        self.on_court_players().find(|p| p.player.position.is_goalkeeper())
    }

    /// Players who can carry and receive the ball.
    ///
    /// The goalkeeper joins them while flying. Falls back to everyone on
    /// court when no outfield player is left.
    pub fn outfield_ids(&self) -> Vec<PlayerId> {
        let flying = self.is_using_flying_goalkeeper;
        let ids: Vec<PlayerId> = self
            .on_court_players()
            .filter(|p| flying || p.player.position.is_outfield())
            .map(|p| p.id())
            .collect();
        if ids.is_empty() {
            self.on_court.clone()
        } else {
            ids
        }
    }

    /// Mean effective ability of the players on court.
    pub fn average_ability(&self) -> f32 {
        mean(self.on_court_players().map(|p| p.effective_ability()))
    }

    /// Mean defending rating of the on-court outfield players.
    pub fn average_defending(&self) -> f32 {
        let outfield = self
            .on_court_players()
            .filter(|p| p.player.position.is_outfield())
            .map(|p| p.player.attributes.defending());
        let avg = mean(outfield);
        if avg > 0.0 {
            avg
        } else {
            mean(self.on_court_players().map(|p| p.player.attributes.defending()))
        }
    }

    pub fn is_short_handed(&self) -> bool {
        self.power_play_seconds_remaining > 0
    }

    /// Reset at the start of each half.
    pub fn reset_half_counters(&mut self) {
        self.accumulated_fouls = 0;
        self.timeouts_used = 0;
    }
}

fn mean(values: impl Iterator<Item = f32>) -> f32 {
    let (sum, n) = values.fold((0.0, 0u32), |(s, n), v| (s + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f32
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BallState {
    pub position: CourtPosition,
    pub possession: Option<TeamSide>,
    pub carrier: Option<PlayerId>,
    pub in_play: bool,
}

/// Root aggregate of one match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchState {
    pub period: Period,
    pub minute: u8,
    pub second: u8,
    pub is_half_time: bool,
    pub is_full_time: bool,
    pub is_paused: bool,
    pub home_goals: u8,
    pub away_goals: u8,
    pub ball: BallState,
    pub home: TeamState,
    pub away: TeamState,
    /// Append-only.
    pub events: Vec<MatchEvent>,
    pub phase: Phase,
    pub stats: MatchStatistics,
    /// Side taking the next kickoff.
    pub kickoff_side: TeamSide,
}

impl MatchState {
    pub fn new(home: TeamState, away: TeamState) -> Self {
        Self {
            period: Period::NotStarted,
            minute: 0,
            second: 0,
            is_half_time: false,
            is_full_time: false,
            is_paused: false,
            home_goals: 0,
            away_goals: 0,
            ball: BallState { position: CourtPosition::CENTER, ..BallState::default() },
            home,
            away,
            events: Vec::new(),
            phase: Phase::Kickoff,
            stats: MatchStatistics::default(),
            kickoff_side: TeamSide::Home,
        }
    }

    pub fn clock(&self) -> MatchClock {
        MatchClock::new(self.period, self.minute, self.second)
    }

    pub fn clock_label(&self) -> String {
        self.clock().to_string()
    }

    pub fn score(&self) -> (u8, u8) {
        (self.home_goals, self.away_goals)
    }

    pub fn has_started(&self) -> bool {
        self.period != Period::NotStarted
    }

    /// Ticks are accepted.
    pub fn is_running(&self) -> bool {
        self.has_started() && !self.is_full_time && !self.is_paused
    }

    pub fn team(&self, side: TeamSide) -> &TeamState {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    pub fn team_mut(&mut self, side: TeamSide) -> &mut TeamState {
        match side {
            TeamSide::Home => &mut self.home,
            TeamSide::Away => &mut self.away,
        }
    }

    /// Side whose squad lists `id`.
    pub fn side_of(&self, id: PlayerId) -> Option<TeamSide> {
        TeamSide::BOTH.into_iter().find(|side| self.team(*side).player(id).is_some())
    }

    pub fn goals(&self, side: TeamSide) -> u8 {
        match side {
            TeamSide::Home => self.home_goals,
            TeamSide::Away => self.away_goals,
        }
    }

    pub fn events_of(&self, event_type: EventType) -> impl Iterator<Item = &MatchEvent> + '_ {
        self.events.iter().filter(move |e| e.event_type == event_type)
    }
}

impl PlayerState {
    fn line(&self, side: TeamSide) -> PlayerLine {
        PlayerLine {
            id: self.id(),
            name: self.player.name.clone(),
            side,
            position: self.player.position,
            rating: display_rating(self.rating),
            goals: self.goals,
            assists: self.assists,
            saves: self.saves,
            shots: self.shots,
            fouls: self.fouls_committed,
            yellow_card: self.yellow_card,
            sent_off: self.sent_off,
            minutes_played: self.minutes_played(),
        }
    }
}

impl From<&MatchState> for MatchResult {
    fn from(state: &MatchState) -> Self {
        let players = TeamSide::BOTH
            .into_iter()
            .flat_map(|side| state.team(side).roster.iter().map(move |p| p.line(side)))
            .collect();
        MatchResult {
            home_team: state.home.team.clone(),
            away_team: state.away.team.clone(),
            score: state.score(),
            finished: state.is_full_time,
            statistics: state.stats.clone(),
            events: state.events.clone(),
            players,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;

    fn team(n: u32) -> TeamState {
        let roster = (1..=n)
            .map(|i| {
                let pos = if i == 1 { Position::Goalkeeper } else { Position::Winger };
                PlayerState::new(Player::new(i, format!("P{i}"), pos, 100), 50.0)
            })
            .collect();
        let mut team = TeamState::new(TeamSide::Home, Team::new("A"), TeamTactic::default(), roster);
        team.on_court = (1..=5.min(n)).collect();
        team
    }

    #[test]
    fn test_bench_excludes_on_court_and_sent_off() {
        let mut t = team(8);
        t.roster[6].sent_off = true;
        assert_eq!(t.bench(), vec![6, 8]);
        assert!(t.is_on_bench(6));
        assert!(!t.is_on_bench(7));
        assert!(!t.is_on_bench(2));
        assert!(!t.is_on_bench(99));
    }

    #[test]
    fn test_outfield_ids_and_flying_keeper() {
        let mut t = team(5);
        assert_eq!(t.outfield_ids(), vec![2, 3, 4, 5]);
        t.is_using_flying_goalkeeper = true;
        assert_eq!(t.outfield_ids(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_outfield_ids_fall_back_to_keeper() {
        let mut t = team(5);
        t.on_court = vec![1];
        assert_eq!(t.outfield_ids(), vec![1]);
    }

    #[test]
    fn test_rating_clamped() {
        let mut p = PlayerState::new(Player::new(1, "X", Position::Pivot, 100), 50.0);
        p.adjust_rating(10.0);
        assert_eq!(p.rating, 10.0);
        p.adjust_rating(-20.0);
        assert_eq!(p.rating, 1.0);
    }

    #[test]
    fn test_result_lists_whole_squads_home_first() {
        let mut home = team(6);
        home.roster[1].goals = 2;
        home.roster[1].rating = 7.26;
        let mut away = team(5);
        away.side = TeamSide::Away;
        let mut state = MatchState::new(home, away);
        state.home_goals = 2;

        let result = MatchResult::from(&state);
        assert_eq!(result.score, (2, 0));
        assert!(!result.finished);
        assert_eq!(result.players.len(), 11);
        assert_eq!(result.players[0].side, TeamSide::Home);
        assert_eq!(result.players[6].side, TeamSide::Away);
        assert_eq!(result.players[1].goals, 2);
        assert_eq!(result.players[1].rating, 7.3);
        assert_eq!(result.winner(), Some(TeamSide::Home));
    }

    #[test]
    fn test_minutes_played_floor() {
        let mut p = PlayerState::new(Player::new(1, "X", Position::Pivot, 100), 50.0);
        p.seconds_played = 119;
        assert_eq!(p.minutes_played(), 1);
    }
}
