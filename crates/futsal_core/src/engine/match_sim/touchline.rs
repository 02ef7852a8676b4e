//! Bench decisions: timeouts and the flying goalkeeper.

use super::MatchEngine;
use crate::models::{EventType, TeamSide};

impl MatchEngine {
    /// Call a timeout for `side`. Pauses the match until [`resume`] is called.
    ///
    /// Refused before kickoff, after full time and once the half's quota is
    /// used up.
    ///
    /// [`resume`]: MatchEngine::resume
    pub fn call_timeout(&mut self, side: TeamSide) -> bool {
        if !self.state.has_started() || self.state.is_full_time {
            return false;
        }
        let per_half = self.config.discipline.timeouts_per_half;
        let team = self.state.team_mut(side);
        if team.timeouts_used >= per_half {
            log::debug!("[TIMEOUT] {side} has no timeouts left this half");
            return false;
        }
        team.timeouts_used += 1;

        let timeout = self.event(EventType::Timeout).for_side(side);
        self.push_event(timeout);
        self.state.is_paused = true;
        log::info!("[TIMEOUT] {side} at {}", self.state.clock_label());
        true
    }

    /// Send the goalkeeper forward for the rest of the match.
    pub fn activate_flying_goalkeeper(&mut self, side: TeamSide) -> bool {
        if self.state.is_full_time {
            return false;
        }
        let team = self.state.team_mut(side);
        if team.is_using_flying_goalkeeper {
            return false;
        }
        team.is_using_flying_goalkeeper = true;
        log::info!("[TACTICS] {side} switches to a flying goalkeeper");
        true
    }
}
