//! Fouls, cards and sendings-off.

use serde::{Deserialize, Serialize};

use super::match_phase::Phase;
use super::MatchEngine;
use crate::engine::stats::RatingChange;
use crate::models::{EventType, PlayerId, TeamSide};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingOutcome {
    /// First yellow of the match.
    Booked,
    SentOff,
    /// Dismissal withheld: the side is already at the minimum on court.
    Withheld,
}

impl MatchEngine {
    /// `offender` of `side` fouls the team in possession.
    ///
    /// Counts the foul, rolls for a card and stops play in `Phase::Foul`;
    /// the restart is decided on the next tick.
    pub fn commit_foul(&mut self, side: TeamSide, offender: PlayerId) {
        let fouls_this_match = {
            let team = self.state.team_mut(side);
            let Some(p) = team.player_mut(offender) else {
                log::warn!("[FOULS] {offender} is not in the {side} squad, foul ignored");
                return;
            };
            p.fouls_committed = p.fouls_committed.saturating_add(1);
            let fouls = p.fouls_committed;
            team.accumulated_fouls = team.accumulated_fouls.saturating_add(1);
            fouls
        };
        let stats = self.state.stats.side_mut(side);
        stats.fouls = stats.fouls.saturating_add(1);
        self.rate(side, offender, RatingChange::Foul);

        let foul = self.event(EventType::Foul).for_side(side).with_player(offender);
        self.push_event(foul);

        // The fouled side keeps the ball for the restart
        let fouled = side.opponent();
        if self.state.ball.possession != Some(fouled) {
            self.turn_over_to(fouled);
        }
        self.state.ball.in_play = false;
        self.set_phase(Phase::Foul);

        let aggression = self
            .state
            .team(side)
            .player(offender)
            .map_or(0, |p| p.player.attributes.mental.aggression);
        if self
            .outcomes
            .card_shown(&self.config, fouls_this_match, aggression, self.rng.as_mut())
        {
            if self.outcomes.straight_red(&self.config, self.rng.as_mut()) {
                self.show_red(side, offender);
            } else {
                self.book_player(side, offender);
            }
        }
    }

    /// Show a yellow card. A second yellow sends the player off unless the
    /// side is already at the minimum number on court.
    pub fn book_player(&mut self, side: TeamSide, id: PlayerId) -> BookingOutcome {
        let already_booked = match self.state.team(side).player(id) {
            Some(p) if !p.sent_off => p.yellow_card,
            _ => return BookingOutcome::Withheld,
        };

        if !already_booked {
            if let Some(p) = self.state.team_mut(side).player_mut(id) {
                p.yellow_card = true;
            }
            let stats = self.state.stats.side_mut(side);
            stats.yellow_cards = stats.yellow_cards.saturating_add(1);
            self.rate(side, id, RatingChange::YellowCard);
            let card = self.event(EventType::YellowCard).for_side(side).with_player(id);
            self.push_event(card);
            return BookingOutcome::Booked;
        }

        if self.can_dismiss(side, id) {
            self.send_off(side, id, EventType::SecondYellow);
            BookingOutcome::SentOff
        } else {
            log::debug!("[CARDS] second yellow for {id} withheld, {side} at minimum");
            BookingOutcome::Withheld
        }
    }

    /// Straight red, subject to the same minimum-on-court rule.
    pub fn show_red(&mut self, side: TeamSide, id: PlayerId) -> BookingOutcome {
        if self.can_dismiss(side, id) {
            self.send_off(side, id, EventType::RedCard);
            BookingOutcome::SentOff
        } else {
            log::debug!("[CARDS] red card for {id} withheld, {side} at minimum");
            BookingOutcome::Withheld
        }
    }

    fn can_dismiss(&self, side: TeamSide, id: PlayerId) -> bool {
        let team = self.state.team(side);
        team.is_on_court(id) && team.on_court.len() > self.config.discipline.min_on_court
    }

    /// Remove `id` for the rest of the match and start the power play.
    fn send_off(&mut self, side: TeamSide, id: PlayerId, card: EventType) {
        let power_play = self.config.discipline.power_play_seconds;
        {
            let team = self.state.team_mut(side);
            team.on_court.retain(|p| *p != id);
            if let Some(p) = team.player_mut(id) {
                p.on_court = false;
                p.sent_off = true;
            }
            team.power_play_seconds_remaining = power_play;
            team.sent_off_player_id = Some(id);
            if team.last_passer == Some(id) {
                team.last_passer = None;
            }
        }
        let stats = self.state.stats.side_mut(side);
        stats.red_cards = stats.red_cards.saturating_add(1);
        self.rate(side, id, RatingChange::Dismissal);

        if self.state.ball.carrier == Some(id) {
            let pool = self.state.team(side).outfield_ids();
            self.state.ball.carrier = self.pick_player(&pool);
        }

        let event = self.event(card).for_side(side).with_player(id);
        self.push_event(event);
        log::debug!("[CARDS] {id} ({side}) sent off, power play {power_play}s");
    }
}
