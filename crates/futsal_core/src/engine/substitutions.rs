//! Player Substitution Logic
//!
//! Rolling substitutions and power-play bookkeeping, split out of
//! `match_sim/mod.rs`.
//!
//! ## Functions
//! - tick_power_plays: power-play countdown, reinforcement at zero
//! - reinforce: bring a short side back to five
//! - process_auto_substitutions: stamina-driven swaps every check
//! - find_substitution_candidate: tired player plus fresh replacement
//! - execute_substitution: in-place roster swap
//! - try_make_substitution / make_substitution: manual substitution
//!
//! Substitutions are unlimited and a substituted player may come back on.
//! Sent-off players never return.

use super::match_sim::{MatchEngine, PlayerState, ON_COURT};
use crate::error::SubstitutionError;
use crate::models::{CourtPosition, EventType, PlayerId, TeamSide};

impl MatchEngine {
    /// Count down both power plays; a side whose power play expires is
    /// brought back to five.
    pub(crate) fn tick_power_plays(&mut self) {
        for side in TeamSide::BOTH {
            let team = self.state.team_mut(side);
            if team.power_play_seconds_remaining == 0 {
                continue;
            }
            team.power_play_seconds_remaining -= 1;
            if team.power_play_seconds_remaining == 0 {
                log::debug!("[POWER_PLAY] {side} power play over");
                self.reinforce(side);
            }
        }
    }

    /// End `side`'s power play and promote the first bench player if the
    /// side is short.
    pub(crate) fn reinforce(&mut self, side: TeamSide) {
        let team = self.state.team_mut(side);
        team.power_play_seconds_remaining = 0;
        team.sent_off_player_id = None;
        if team.on_court.len() >= ON_COURT {
            return;
        }

        let Some(incoming) = team.bench().first().copied() else {
            log::warn!("[POWER_PLAY] {side} has nobody left on the bench to come on");
            return;
        };
        team.on_court.push(incoming);
        if let Some(p) = team.player_mut(incoming) {
            p.on_court = true;
            p.position = CourtPosition::CENTER;
            p.target = CourtPosition::CENTER;
        }

        let event = self.event(EventType::Substitution).for_side(side).with_player(incoming);
        self.push_event(event);
        log::debug!("[POWER_PLAY] {side} back to {} with {incoming}", self.state.team(side).on_court.len());
    }

    /// Swap at most one tired outfield player per side.
    pub(crate) fn process_auto_substitutions(&mut self) {
        for side in TeamSide::BOTH {
            if let Some((out, incoming)) = self.find_substitution_candidate(side) {
                log::debug!("[SUBS] {side} auto: {incoming} on for {out}");
                self.execute_substitution(side, out, incoming);
            }
        }
    }

    /// Most tired outfield player below the floor who has a fresh bench
    /// replacement of the same position, else of a compatible one.
    pub(crate) fn find_substitution_candidate(&self, side: TeamSide) -> Option<(PlayerId, PlayerId)> {
        let cfg = &self.config.stamina;
        let team = self.state.team(side);

        let mut tired: Vec<&PlayerState> = team
            .on_court_players()
            .filter(|p| p.player.position.is_outfield() && p.stamina < cfg.substitution_floor)
            .collect();
        tired.sort_by(|a, b| a.stamina.total_cmp(&b.stamina));

        let fresh: Vec<&PlayerState> = team
            .bench()
            .into_iter()
            .filter_map(|id| team.player(id))
            .filter(|p| p.stamina > cfg.fresh_threshold)
            .collect();

        tired.into_iter().find_map(|out| {
            let pos = out.player.position;
            strongest(fresh.iter().copied().filter(|p| p.player.position == pos))
                .or_else(|| {
                    strongest(
                        fresh
                            .iter()
                            .copied()
                            .filter(|p| p.player.position.is_compatible_position(pos)),
                    )
                })
                .map(|incoming| (out.id(), incoming))
        })
    }

    /// `incoming` takes `out`'s slot, position and target.
    pub(crate) fn execute_substitution(&mut self, side: TeamSide, out: PlayerId, incoming: PlayerId) {
        let team = self.state.team_mut(side);
        let Some(slot) = team.on_court.iter().position(|id| *id == out) else {
            return;
        };
        let (position, target) = match team.player_mut(out) {
            Some(p) => {
                p.on_court = false;
                (p.position, p.target)
            }
            None => return,
        };
        team.on_court[slot] = incoming;
        if let Some(p) = team.player_mut(incoming) {
            p.on_court = true;
            p.position = position;
            p.target = target;
        }
        if team.last_passer == Some(out) {
            team.last_passer = None;
        }
        if self.state.ball.carrier == Some(out) {
            self.state.ball.carrier = Some(incoming);
        }

        let event = self
            .event(EventType::Substitution)
            .for_side(side)
            .with_player(incoming)
            .replacing(out);
        self.push_event(event);
    }

    /// Manual substitution with the rejection reason.
    pub fn try_make_substitution(
        &mut self,
        side: TeamSide,
        out: PlayerId,
        incoming: PlayerId,
    ) -> Result<(), SubstitutionError> {
        if self.state.is_full_time {
            return Err(SubstitutionError::MatchFinished);
        }
        if out == incoming {
            return Err(SubstitutionError::SamePlayer);
        }
        let team = self.state.team(side);
        if !team.is_on_court(out) {
            return Err(SubstitutionError::NotOnCourt(out));
        }
        if team.player(incoming).is_some_and(|p| p.sent_off) {
            return Err(SubstitutionError::SentOff(incoming));
        }
        if !team.is_on_bench(incoming) {
            return Err(SubstitutionError::NotOnBench(incoming));
        }

        log::debug!("[SUBS] {side} manual: {incoming} on for {out}");
        self.execute_substitution(side, out, incoming);
        Ok(())
    }

    /// Manual substitution; `false` leaves the lineup untouched.
    pub fn make_substitution(&mut self, side: TeamSide, out: PlayerId, incoming: PlayerId) -> bool {
        self.try_make_substitution(side, out, incoming).is_ok()
    }
}

/// Highest ability; ties go to the earlier bench player.
fn strongest<'a>(candidates: impl Iterator<Item = &'a PlayerState>) -> Option<PlayerId> {
    candidates
        .fold(None::<&PlayerState>, |best, p| match best {
            Some(b) if b.player.ability >= p.player.ability => Some(b),
            _ => Some(p),
        })
        .map(|p| p.id())
}
