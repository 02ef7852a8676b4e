//! Restarts: kickoff, goalkeeper restarts, corners, free kicks and the
//! foul decision (free kick or penalty).

use super::lineup;
use super::match_phase::Phase;
use super::shooting::{KEEPER_RESTART_PROGRESS, PENALTY_MARK_PROGRESS, SECOND_PENALTY_MARK_PROGRESS};
use super::MatchEngine;
use crate::engine::court::{to_court, zone_for};
use crate::models::{CourtPosition, EventType};

/// Where a corner that is not shot directly is played to.
const CORNER_RECEIVE_PROGRESS: f32 = 85.0;

impl MatchEngine {
    pub(crate) fn take_kickoff(&mut self) {
        let side = self.state.kickoff_side;
        if self.state.ball.possession != Some(side) || self.state.ball.carrier.is_none() {
            let taker = lineup::kickoff_taker(self.state.team(side));
            self.give_possession(side, taker);
        }
        self.state.ball.position = CourtPosition::CENTER;
        self.state.ball.in_play = true;
        self.set_phase(Phase::OpenPlay);
    }

    /// After a save or goal kick the goalkeeper plays it out.
    pub(crate) fn restart_from_goalkeeper(&mut self) {
        let Some(side) = self.state.ball.possession else {
            self.turn_over_to(self.state.kickoff_side);
            self.set_phase(Phase::OpenPlay);
            return;
        };
        let keeper = self.keeper_or_any(side);
        self.state.ball.carrier = keeper;
        self.place_ball(side, KEEPER_RESTART_PROGRESS);
        self.state.ball.in_play = true;
        self.set_phase(Phase::OpenPlay);
    }

    pub(crate) fn take_corner(&mut self) {
        let Some(side) = self.state.ball.possession else {
            self.set_phase(Phase::OpenPlay);
            return;
        };
        self.state.ball.in_play = true;
        let direct = self.rng.chance(self.config.outcome.corner_shot_chance);

        let attackers = self.state.team(side).outfield_ids();
        let Some(receiver) = self.pick_player(&attackers) else {
            self.set_phase(Phase::OpenPlay);
            return;
        };
        self.state.ball.carrier = Some(receiver);
        let y = self.rng.range_f32(30.0, 70.0);
        self.state.ball.position = to_court(CORNER_RECEIVE_PROGRESS, y, side, self.state.period);

        if direct {
            self.set_phase(Phase::Shot);
            self.take_shot(side, receiver);
        } else {
            self.refresh_attack_phase();
        }
    }

    pub(crate) fn take_free_kick(&mut self) {
        let Some(side) = self.state.ball.possession else {
            self.set_phase(Phase::OpenPlay);
            return;
        };
        self.state.ball.in_play = true;
        let Some(taker) = self.ensure_carrier(side) else {
            self.set_phase(Phase::OpenPlay);
            return;
        };

        let in_range = zone_for(self.state.ball.position, side, self.state.period).is_attacking();
        if in_range && self.rng.chance(self.config.outcome.free_kick_shot_chance) {
            self.set_phase(Phase::Shot);
            self.take_shot(side, taker);
        } else {
            self.refresh_attack_phase();
        }
    }

    /// Decide the restart of the foul stopped on the previous tick.
    ///
    /// Past the accumulated-foul limit every foul is a penalty from the
    /// second mark; a foul in the box is a penalty from the first mark.
    pub(crate) fn resolve_foul(&mut self) {
        let Some(fouled) = self.state.ball.possession else {
            self.set_phase(Phase::FreeKick);
            return;
        };
        let offender = fouled.opponent();
        let limit = self.config.discipline.accumulated_foul_limit;
        let period = self.state.period;

        if self.state.team(offender).accumulated_fouls > limit {
            log::debug!(
                "[FOULS] {offender} on {} accumulated fouls, penalty",
                self.state.team(offender).accumulated_fouls
            );
            let accumulated = self.event(EventType::AccumulatedFoulPenalty).for_side(offender);
            self.push_event(accumulated);
            self.award_penalty(fouled, SECOND_PENALTY_MARK_PROGRESS);
        } else if zone_for(self.state.ball.position, fouled, period).is_opponent_box() {
            self.award_penalty(fouled, PENALTY_MARK_PROGRESS);
        } else {
            self.set_phase(Phase::FreeKick);
        }
    }

    fn award_penalty(&mut self, side: crate::models::TeamSide, mark: f32) {
        self.state.ball.position = to_court(mark, 50.0, side, self.state.period);
        self.state.ball.carrier = None;
        let penalty = self.event(EventType::Penalty).for_side(side);
        self.push_event(penalty);
        self.set_phase(Phase::Penalty);
    }
}
