//! Open play and attack: foul roll, action choice, pass and dribble.

use super::match_phase::Phase;
use super::MatchEngine;
use crate::engine::court::{progress_of, to_court, zone_for};
use crate::engine::probability::{Action, ActionContext};
use crate::engine::outcome_model::DribbleOutcome;
use crate::engine::stats::RatingChange;
use crate::models::{PlayerId, TeamSide};

/// Furthest the ball is carried by open play.
const MAX_PROGRESS: f32 = 97.0;

impl MatchEngine {
    pub(crate) fn simulate_open_play(&mut self) {
        let side = match self.state.ball.possession {
            Some(side) => side,
            None => {
                let side = self.state.kickoff_side;
                self.turn_over_to(side);
                side
            }
        };
        self.state.ball.in_play = true;

        if self.outcomes.foul_occurs(&self.config, self.rng.as_mut()) {
            let defenders = self.state.team(side.opponent()).on_court.clone();
            if let Some(offender) = self.pick_player(&defenders) {
                self.commit_foul(side.opponent(), offender);
                return;
            }
        }

        let Some(carrier) = self.ensure_carrier(side) else {
            log::warn!("[OPEN_PLAY] {side} has nobody on court to carry the ball");
            return;
        };

        let action = self.choose_action(side, carrier);
        match action {
            Action::Pass => self.attempt_pass(side, carrier),
            Action::Dribble => self.attempt_dribble(side, carrier),
            Action::Shoot => {
                self.set_phase(Phase::Shot);
                self.take_shot(side, carrier);
                return;
            }
            Action::LoseBall => self.turn_over_to(side.opponent()),
        }

        if matches!(self.state.phase, Phase::OpenPlay | Phase::Attack) {
            self.refresh_attack_phase();
        }
    }

    fn choose_action(&mut self, side: TeamSide, carrier: PlayerId) -> Action {
        let team = self.state.team(side);
        let (shooting, dribbling) = team
            .player(carrier)
            .map(|p| {
                let t = &p.player.attributes.technical;
                (t.shooting, t.dribbling)
            })
            .unwrap_or((1, 1));
        let ctx = ActionContext {
            zone: zone_for(self.state.ball.position, side, self.state.period),
            mentality: team.tactic.mentality,
            tempo: team.tactic.tempo,
            shooting,
            dribbling,
        };
        self.outcomes.choose_action(&self.config, &ctx, self.rng.as_mut())
    }

    fn attempt_pass(&mut self, side: TeamSide, passer: PlayerId) {
        let receivers: Vec<PlayerId> = self
            .state
            .team(side)
            .outfield_ids()
            .into_iter()
            .filter(|id| *id != passer)
            .collect();
        let Some(receiver) = self.pick_player(&receivers) else {
            return;
        };

        let passing = self
            .state
            .team(side)
            .player(passer)
            .map_or(1, |p| p.player.attributes.technical.passing);
        let pressing = self.state.team(side.opponent()).tactic.pressing.level();
        let completed =
            self.outcomes.pass_succeeds(&self.config, passing, pressing, self.rng.as_mut());
        self.state.stats.side_mut(side).record_pass(completed);

        if completed {
            self.rate(side, passer, RatingChange::CompletedPass);
            self.state.team_mut(side).last_passer = Some(passer);
            self.state.ball.carrier = Some(receiver);
            let (lo, hi) = (self.config.outcome.pass_min_advance, self.config.outcome.pass_max_advance);
            self.advance_ball(side, lo, hi);
        } else {
            self.turn_over_to(side.opponent());
        }
    }

    fn attempt_dribble(&mut self, side: TeamSide, carrier: PlayerId) {
        let dribbling = self
            .state
            .team(side)
            .player(carrier)
            .map_or(1, |p| p.player.attributes.technical.dribbling);
        let defending = self.state.team(side.opponent()).average_defending();

        match self.outcomes.resolve_dribble(&self.config, dribbling, defending, self.rng.as_mut()) {
            DribbleOutcome::Success => {
                let (lo, hi) =
                    (self.config.outcome.dribble_min_advance, self.config.outcome.dribble_max_advance);
                self.advance_ball(side, lo, hi);
            }
            DribbleOutcome::Foul => {
                let defenders = self.state.team(side.opponent()).on_court.clone();
                match self.pick_player(&defenders) {
                    Some(defender) => self.commit_foul(side.opponent(), defender),
                    None => self.turn_over_to(side.opponent()),
                }
            }
            DribbleOutcome::Dispossessed => self.turn_over_to(side.opponent()),
        }
    }

    /// Move the ball `lo..hi` towards the opponent goal and drift laterally.
    fn advance_ball(&mut self, side: TeamSide, lo: f32, hi: f32) {
        let period = self.state.period;
        let progress = progress_of(self.state.ball.position.x, side, period);
        let gain = self.rng.range_f32(lo, hi);
        let y = self.rng.range_f32(10.0, 90.0);
        self.state.ball.position = to_court((progress + gain).min(MAX_PROGRESS), y, side, period);
    }

    /// Attack while the ball is in the attacking zones, open play otherwise.
    pub(crate) fn refresh_attack_phase(&mut self) {
        let Some(side) = self.state.ball.possession else {
            return;
        };
        let zone = zone_for(self.state.ball.position, side, self.state.period);
        let next = if zone.is_attacking() { Phase::Attack } else { Phase::OpenPlay };
        self.set_phase(next);
    }
}
