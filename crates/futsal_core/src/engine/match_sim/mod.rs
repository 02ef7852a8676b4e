//! Match Simulation Engine
//!
//! Tick-driven futsal match core. One call to
//! [`MatchEngine::advance_one_second`] is one simulated second.
//!
//! ## Architecture
//!
//! - L1: `probability.rs` - pure probability formulas
//! - L2: `outcome_model.rs` - swappable policy, one decision per call
//! - L3: `match_sim/` - stateful phase machine, discipline and substitutions
//!
//! ## Tick order
//!
//! ```text
//!  advance_one_second()
//!    │  (rejected: not started / paused / full time)
//!    ├─► auto second-half start (if half-time)
//!    ├─► clock +1s ──► 20:00? ──► period end, short-circuit
//!    ├─► stamina decay, seconds played
//!    ├─► position smoothing
//!    ├─► power-play countdown / reinforcement
//!    ├─► auto-substitution check (every 30s)
//!    ├─► phase simulation
//!    ├─► possession stats
//!    └─► subscribers(state, TickResult)
//! ```

mod card_system;
mod lineup;
mod match_phase;
mod match_state;
mod open_play;
mod set_pieces;
mod shooting;
mod touchline;

#[cfg(test)]
pub(crate) mod test_fixtures;


pub use card_system::BookingOutcome;
pub use lineup::{select_lineup, ON_COURT};
pub use match_phase::{can_transition, Phase};
pub use match_state::{BallState, MatchState, PlayerState, TeamState, BASE_RATING};

use std::fmt;

use rand::Rng;

use super::config::EngineConfig;
use super::live_match::{commentary_hint, Subscribers, SubscriptionId, TickResult};
use super::movement;
use super::outcome_model::{OutcomeModel, StandardOutcomes};
use super::rng::{MatchRng, SeededRng};
use super::stats::RatingChange;
use crate::error::Result;
use crate::models::{
    CourtPosition, EventType, MatchEvent, Period, Player, PlayerId, Team, TeamSheet, TeamSide,
};
use crate::tactics::TeamTactic;

pub struct MatchEngine {
    pub(crate) state: MatchState,
    pub(crate) config: EngineConfig,
    pub(crate) rng: Box<dyn MatchRng>,
    pub(crate) outcomes: Box<dyn OutcomeModel>,
    subscribers: Subscribers,
}

impl MatchEngine {
    /// Build a match from the provider's inputs with the default config and a
    /// fresh random seed.
    pub fn create_match(
        home_team: Team,
        away_team: Team,
        home_tactic: TeamTactic,
        away_tactic: TeamTactic,
        home_players: Vec<Player>,
        away_players: Vec<Player>,
    ) -> Result<Self> {
        let seed: u64 = rand::thread_rng().gen();
        Self::seeded(
            TeamSheet { team: home_team, tactic: home_tactic, players: home_players },
            TeamSheet { team: away_team, tactic: away_tactic, players: away_players },
            EngineConfig::default(),
            seed,
        )
    }

    /// Reproducible match: the same seed and inputs give the same match.
    pub fn seeded(home: TeamSheet, away: TeamSheet, config: EngineConfig, seed: u64) -> Result<Self> {
        Self::new(home, away, config, Box::new(SeededRng::new(seed)))
    }

    pub fn new(
        home: TeamSheet,
        away: TeamSheet,
        config: EngineConfig,
        mut rng: Box<dyn MatchRng>,
    ) -> Result<Self> {
        config.validate()?;
        lineup::check_rosters(&home.players, &away.players)?;

        let home = lineup::build_team(TeamSide::Home, home, &config, rng.as_mut());
        let away = lineup::build_team(TeamSide::Away, away, &config, rng.as_mut());
        let mut state = MatchState::new(home, away);
        for side in TeamSide::BOTH {
            movement::place_in_formation(state.team_mut(side), Period::FirstHalf);
        }

        Ok(Self {
            state,
            config,
            rng,
            outcomes: Box::new(StandardOutcomes),
            subscribers: Subscribers::default(),
        })
    }

    pub fn with_outcome_model(mut self, model: Box<dyn OutcomeModel>) -> Self {
        self.outcomes = model;
        self
    }

    // ========================================================================
    // Match flow
    // ========================================================================

    /// Start the first half with home possession. Fails once started.
    pub fn kickoff(&mut self) -> bool {
        if self.state.has_started() {
            return false;
        }
        self.state.period = Period::FirstHalf;
        self.state.is_paused = false;
        self.state.kickoff_side = TeamSide::Home;
        self.prepare_kickoff();
        log::info!(
            "[MATCH] kickoff: {} vs {}",
            self.state.home.team.name,
            self.state.away.team.name
        );
        true
    }

    /// Leave half-time: clock back to 00:00, ends switched, away kicks off.
    pub fn start_second_half(&mut self) -> bool {
        if self.state.period != Period::FirstHalf || !self.state.is_half_time {
            return false;
        }
        self.state.period = Period::SecondHalf;
        self.state.minute = 0;
        self.state.second = 0;
        self.state.is_half_time = false;
        self.state.kickoff_side = TeamSide::Away;
        for side in TeamSide::BOTH {
            self.state.team_mut(side).reset_half_counters();
        }
        self.state.phase = Phase::Kickoff;
        self.prepare_kickoff();
        log::info!("[MATCH] second half under way at {}-{}", self.state.home_goals, self.state.away_goals);
        true
    }

    pub fn pause(&mut self) {
        self.state.is_paused = true;
    }

    pub fn resume(&mut self) {
        self.state.is_paused = false;
    }

    /// Simulate one second. A no-op when the match is not running.
    pub fn advance_one_second(&mut self) -> TickResult {
        if !self.state.is_running() {
            return TickResult::unchanged();
        }
        let first_new_event = self.state.events.len();

        if self.state.is_half_time {
            self.start_second_half();
        }

        self.advance_clock();
        if self.state.minute >= self.config.clock.half_minutes {
            self.end_period();
        } else {
            self.update_stamina();
            self.update_positions();
            self.tick_power_plays();
            if self.substitution_check_due() {
                self.process_auto_substitutions();
            }
            self.simulate_phase();
            let holder = self.state.ball.possession;
            self.state.stats.record_possession(holder);
        }

        let events = self.state.events[first_new_event..].to_vec();
        let hint = commentary_hint(&events, self.state.phase);
        let result = TickResult { events, state_changed: true, commentary_hint: Some(hint) };
        self.subscribers.notify(&self.state, &result);
        result
    }

    fn advance_clock(&mut self) {
        self.state.second += 1;
        if self.state.second >= 60 {
            self.state.second = 0;
            self.state.minute += 1;
        }
    }

    fn end_period(&mut self) {
        self.state.ball.in_play = false;
        let period_end = self.event(EventType::PeriodEnd);
        self.push_event(period_end);

        match self.state.period {
            Period::FirstHalf => {
                self.state.is_half_time = true;
                log::info!("[MATCH] half-time {}-{}", self.state.home_goals, self.state.away_goals);
            }
            _ => {
                self.state.is_full_time = true;
                let match_end = self.event(EventType::MatchEnd);
                self.push_event(match_end);
                log::info!(
                    "[MATCH] full-time: {} {}-{} {}",
                    self.state.home.team.name,
                    self.state.home_goals,
                    self.state.away_goals,
                    self.state.away.team.name
                );
            }
        }
    }

    fn update_stamina(&mut self) {
        let stamina_cfg = &self.config.stamina;
        for side in TeamSide::BOTH {
            let team = self.state.team_mut(side);
            let tempo = team.tactic.tempo;
            let on_court = team.on_court.clone();
            for id in on_court {
                if let Some(p) = team.player_mut(id) {
                    let decay = stamina_cfg.decay_for(p.player.attributes.physical.stamina, tempo);
                    p.stamina = (p.stamina - decay).max(0.0);
                    p.seconds_played += 1;
                }
            }
        }
    }

    fn update_positions(&mut self) {
        let smoothing = self.config.movement.smoothing;
        let period = self.state.period;
        let ball = self.state.ball.clone();
        for side in TeamSide::BOTH {
            movement::update_team_positions(self.state.team_mut(side), &ball, period, smoothing);
        }
    }

    fn substitution_check_due(&self) -> bool {
        let elapsed = self.state.clock().period_seconds();
        elapsed > 0 && elapsed % self.config.stamina.substitution_interval_secs == 0
    }

    fn simulate_phase(&mut self) {
        match self.state.phase {
            Phase::Kickoff => self.take_kickoff(),
            Phase::OpenPlay | Phase::Attack => self.simulate_open_play(),
            Phase::Shot => self.resolve_pending_shot(),
            Phase::GoalScored => self.set_phase(Phase::Kickoff),
            Phase::Save | Phase::GoalKick => self.restart_from_goalkeeper(),
            Phase::Corner => self.take_corner(),
            Phase::FreeKick => self.take_free_kick(),
            Phase::Penalty => self.take_penalty(),
            Phase::Foul => self.resolve_foul(),
        }
    }

    // ========================================================================
    // Queries and subscriptions
    // ========================================================================

    /// Independent snapshot of the whole match.
    pub fn get_state(&self) -> MatchState {
        self.state.clone()
    }

    /// Borrowed view for callers that only read.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn get_score(&self) -> (u8, u8) {
        self.state.score()
    }

    /// e.g. `"2H 07:05"`.
    pub fn get_match_clock_label(&self) -> String {
        self.state.clock_label()
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&MatchState, &TickResult) + Send + 'static,
    {
        self.subscribers.add(Box::new(callback))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    // ========================================================================
    // Internal helpers shared by the phase handlers
    // ========================================================================

    /// Event stamped with the current clock, score and ball position.
    pub(crate) fn event(&self, event_type: EventType) -> MatchEvent {
        MatchEvent::new(event_type, self.state.clock(), self.state.score())
            .at(self.state.ball.position)
    }

    pub(crate) fn push_event(&mut self, event: MatchEvent) {
        log::debug!("[EVENT] {} {:?} side={:?}", event.clock, event.event_type, event.side);
        self.state.events.push(event);
    }

    pub(crate) fn set_phase(&mut self, to: Phase) {
        let from = self.state.phase;
        if !can_transition(from, to) {
            #[cfg(feature = "strict_contracts")]
            panic!("illegal phase transition {:?} -> {:?}", from, to);
            #[cfg(not(feature = "strict_contracts"))]
            log::error!("illegal phase transition {:?} -> {:?}", from, to);
        }
        self.state.phase = to;
    }

    pub(crate) fn rate(&mut self, side: TeamSide, id: PlayerId, change: RatingChange) {
        if let Some(p) = self.state.team_mut(side).player_mut(id) {
            p.adjust_rating(change.delta());
        }
    }

    /// Uniform pick from `ids`; `None` when empty.
    pub(crate) fn pick_player(&mut self, ids: &[PlayerId]) -> Option<PlayerId> {
        if ids.is_empty() {
            return None;
        }
        Some(ids[self.rng.pick(ids.len())])
    }

    /// Hand the ball to `side`. A change of side ends both passing chains.
    pub(crate) fn give_possession(&mut self, side: TeamSide, carrier: Option<PlayerId>) {
        if self.state.ball.possession != Some(side) {
            self.state.home.last_passer = None;
            self.state.away.last_passer = None;
        }
        self.state.ball.possession = Some(side);
        self.state.ball.carrier = carrier;
    }

    /// Give the ball to a random outfield player of `side`.
    pub(crate) fn turn_over_to(&mut self, side: TeamSide) {
        let pool = self.state.team(side).outfield_ids();
        let carrier = self.pick_player(&pool);
        self.give_possession(side, carrier);
    }

    /// Ball carrier of the possessing side, picking one if needed.
    pub(crate) fn ensure_carrier(&mut self, side: TeamSide) -> Option<PlayerId> {
        if let Some(id) = self.state.ball.carrier {
            if self.state.team(side).is_on_court(id) {
                return Some(id);
            }
        }
        let pool = self.state.team(side).outfield_ids();
        let carrier = self.pick_player(&pool);
        self.state.ball.carrier = carrier;
        carrier
    }

    /// Ball to the centre spot, teams back in formation.
    fn prepare_kickoff(&mut self) {
        let period = self.state.period;
        for side in TeamSide::BOTH {
            movement::place_in_formation(self.state.team_mut(side), period);
        }
        let side = self.state.kickoff_side;
        let taker = lineup::kickoff_taker(self.state.team(side));
        self.state.ball.position = CourtPosition::CENTER;
        self.state.ball.in_play = false;
        self.give_possession(side, taker);
    }
}

impl fmt::Debug for MatchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchEngine")
            .field("clock", &self.state.clock_label())
            .field("score", &self.state.score())
            .field("phase", &self.state.phase)
            .field("subscribers", &self.subscribers)
            .finish_non_exhaustive()
    }
}
