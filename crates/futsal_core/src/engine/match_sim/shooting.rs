//! Shots, penalties and goals.

use super::match_phase::Phase;
use super::match_state::PlayerState;
use super::MatchEngine;
use crate::engine::court::to_court;
use crate::engine::movement::keeper_away_from_goal;
use crate::engine::outcome_model::{PenaltyContext, PenaltyOutcome, ShotContext, ShotOutcome};
use crate::engine::probability::strength_ratio;
use crate::engine::stats::RatingChange;
use crate::models::{EventType, PlayerId, ShotFlavor, TeamSide};

/// Corner arc, attack-relative.
const CORNER_PROGRESS: f32 = 100.0;
/// Ball spot for goalkeeper restarts.
pub(crate) const KEEPER_RESTART_PROGRESS: f32 = 6.0;
/// Penalty mark, 6 m out on a 40 m court.
pub(crate) const PENALTY_MARK_PROGRESS: f32 = 85.0;
/// Second penalty mark (10 m), used from the sixth accumulated foul.
pub(crate) const SECOND_PENALTY_MARK_PROGRESS: f32 = 75.0;

impl MatchEngine {
    /// A shot left pending in `Phase::Shot` is taken by the current carrier.
    pub(crate) fn resolve_pending_shot(&mut self) {
        let Some(side) = self.state.ball.possession else {
            self.set_phase(Phase::GoalKick);
            return;
        };
        match self.ensure_carrier(side) {
            Some(shooter) => self.take_shot(side, shooter),
            None => {
                self.set_phase(Phase::GoalKick);
                self.turn_over_to(side.opponent());
            }
        }
    }

    /// Two-stage shot by `shooter`, resolved within the tick.
    pub(crate) fn take_shot(&mut self, side: TeamSide, shooter: PlayerId) {
        let defending = side.opponent();
        let Some(ctx) = self.shot_context(side, shooter) else {
            return;
        };

        let stats = self.state.stats.side_mut(side);
        stats.shots = stats.shots.saturating_add(1);
        if let Some(p) = self.state.team_mut(side).player_mut(shooter) {
            p.shots = p.shots.saturating_add(1);
        }

        match self.outcomes.resolve_shot(&self.config, &ctx, self.rng.as_mut()) {
            ShotOutcome::Goal => {
                self.count_on_target(side, shooter);
                self.score_goal(side, shooter);
            }
            ShotOutcome::Saved => {
                self.count_on_target(side, shooter);
                let on_target = self.event(EventType::ShotOnTarget).for_side(side).with_player(shooter);
                self.push_event(on_target);
                let keeper = self.credit_save(defending);
                let mut save = self.event(EventType::Save).for_side(defending);
                if let Some(keeper) = keeper {
                    save = save.with_player(keeper);
                }
                self.push_event(save);
                self.give_possession(defending, keeper);
                self.set_phase(Phase::Save);
            }
            ShotOutcome::OffTarget(flavor) => {
                let miss = self
                    .event(EventType::Shot)
                    .for_side(side)
                    .with_player(shooter)
                    .with_shot_flavor(flavor);
                self.push_event(miss);
                if flavor == ShotFlavor::Blocked {
                    let stats = self.state.stats.side_mut(side);
                    stats.corners = stats.corners.saturating_add(1);
                    let y = if self.rng.chance(0.5) { 0.0 } else { 100.0 };
                    self.state.ball.position = to_court(CORNER_PROGRESS, y, side, self.state.period);
                    self.state.ball.carrier = None;
                    self.set_phase(Phase::Corner);
                } else {
                    let keeper = self.keeper_or_any(defending);
                    self.give_possession(defending, keeper);
                    self.set_phase(Phase::GoalKick);
                }
                self.state.ball.in_play = false;
            }
        }
    }

    fn shot_context(&self, side: TeamSide, shooter: PlayerId) -> Option<ShotContext> {
        let attack = self.state.team(side);
        let defense = self.state.team(side.opponent());
        let p = attack.player(shooter)?;
        Some(ShotContext {
            strength_ratio: strength_ratio(attack.average_ability(), defense.average_ability()),
            shooting: p.player.attributes.technical.shooting,
            composure: p.player.attributes.mental.composure,
            stamina: p.stamina,
            keeper_reflexes: self.keeper_reflexes(side.opponent()),
        })
    }

    /// Reflexes of whoever guards `side`'s goal; zero for an empty net.
    fn keeper_reflexes(&self, side: TeamSide) -> u8 {
        let team = self.state.team(side);
        if keeper_away_from_goal(team, self.state.period) {
            return 0;
        }
        match team.goalkeeper() {
            Some(gk) => gk.player.attributes.reflexes(),
            None => team
                .on_court_players()
                .map(|p| p.player.attributes.reflexes())
                .max()
                .unwrap_or(0),
        }
    }

    /// Goalkeeper of `side`, else the on-court player with the best reflexes.
    fn penalty_keeper(&self, side: TeamSide) -> Option<&PlayerState> {
        let team = self.state.team(side);
        team.goalkeeper().or_else(|| {
            team.on_court_players().fold(None::<&PlayerState>, |best, p| match best {
                Some(b) if b.player.attributes.reflexes() >= p.player.attributes.reflexes() => {
                    Some(b)
                }
                _ => Some(p),
            })
        })
    }

    fn count_on_target(&mut self, side: TeamSide, shooter: PlayerId) {
        let stats = self.state.stats.side_mut(side);
        stats.shots_on_target = stats.shots_on_target.saturating_add(1);
        self.rate(side, shooter, RatingChange::ShotOnTarget);
    }

    /// Goalkeeper of `side`, else any player on court.
    pub(crate) fn keeper_or_any(&self, side: TeamSide) -> Option<PlayerId> {
        let team = self.state.team(side);
        team.goalkeeper()
            .map(|gk| gk.id())
            .or_else(|| team.on_court.first().copied())
    }

    /// Credit a save to `side`'s keeper; returns who made it.
    fn credit_save(&mut self, side: TeamSide) -> Option<PlayerId> {
        let keeper = self.keeper_or_any(side);
        let stats = self.state.stats.side_mut(side);
        stats.saves = stats.saves.saturating_add(1);
        if let Some(id) = keeper {
            if let Some(p) = self.state.team_mut(side).player_mut(id) {
                p.saves = p.saves.saturating_add(1);
            }
            self.rate(side, id, RatingChange::Save);
        }
        keeper
    }

    /// The only place the score changes.
    pub(crate) fn score_goal(&mut self, side: TeamSide, scorer: PlayerId) {
        match side {
            TeamSide::Home => self.state.home_goals = self.state.home_goals.saturating_add(1),
            TeamSide::Away => self.state.away_goals = self.state.away_goals.saturating_add(1),
        }
        if let Some(p) = self.state.team_mut(side).player_mut(scorer) {
            p.goals = p.goals.saturating_add(1);
        }
        self.rate(side, scorer, RatingChange::Goal);

        let assist = self.state.team(side).last_passer.filter(|id| *id != scorer);
        if let Some(id) = assist {
            if let Some(p) = self.state.team_mut(side).player_mut(id) {
                p.assists = p.assists.saturating_add(1);
            }
            self.rate(side, id, RatingChange::Assist);
        }

        let goal = self
            .event(EventType::Goal)
            .for_side(side)
            .with_player(scorer)
            .with_assist(assist);
        self.push_event(goal);
        if let Some(id) = assist {
            let credit = self.event(EventType::Assist).for_side(side).with_player(id);
            self.push_event(credit);
        }
        log::debug!(
            "[GOAL] {side} {scorer} at {} ({}-{})",
            self.state.clock_label(),
            self.state.home_goals,
            self.state.away_goals
        );

        self.state.ball.in_play = false;
        self.state.kickoff_side = side.opponent();
        self.give_possession(side.opponent(), None);
        self.set_phase(Phase::GoalScored);

        if self.config.discipline.end_power_play_on_goal {
            self.end_power_play_after_goal(side);
        }
    }

    /// The side with more players scored: the short side is restored.
    fn end_power_play_after_goal(&mut self, scorer: TeamSide) {
        let short = scorer.opponent();
        let short_team = self.state.team(short);
        if short_team.is_short_handed()
            && short_team.on_court.len() < self.state.team(scorer).on_court.len()
        {
            log::debug!("[POWER_PLAY] {short} restored after conceding");
            self.reinforce(short);
        }
    }

    /// Penalty for the side in possession.
    pub(crate) fn take_penalty(&mut self) {
        let Some(side) = self.state.ball.possession else {
            self.set_phase(Phase::OpenPlay);
            return;
        };
        let defending = side.opponent();
        let Some(taker) = self.penalty_taker(side) else {
            self.set_phase(Phase::OpenPlay);
            return;
        };

        let (keeper_reflexes, keeper_one_on_ones) = self
            .penalty_keeper(defending)
            .map(|gk| (gk.player.attributes.reflexes(), gk.player.attributes.one_on_ones()))
            .unwrap_or((0, 0));
        let ctx = {
            let p = self.state.team(side).player(taker);
            PenaltyContext {
                shooting: p.map_or(1, |p| p.player.attributes.technical.shooting),
                composure: p.map_or(1, |p| p.player.attributes.mental.composure),
                keeper_reflexes,
                keeper_one_on_ones,
            }
        };

        let stats = self.state.stats.side_mut(side);
        stats.shots = stats.shots.saturating_add(1);
        if let Some(p) = self.state.team_mut(side).player_mut(taker) {
            p.shots = p.shots.saturating_add(1);
        }
        self.state.ball.carrier = Some(taker);

        match self.outcomes.resolve_penalty(&self.config, &ctx, self.rng.as_mut()) {
            PenaltyOutcome::Scored => {
                self.count_on_target(side, taker);
                self.score_goal(side, taker);
            }
            PenaltyOutcome::Saved => {
                self.count_on_target(side, taker);
                self.rate(side, taker, RatingChange::PenaltyMiss);
                let saved = self.event(EventType::PenaltySaved).for_side(side).with_player(taker);
                self.push_event(saved);
                let keeper = self.credit_save(defending);
                self.give_possession(defending, keeper);
                self.set_phase(Phase::Save);
            }
            PenaltyOutcome::Missed => {
                self.rate(side, taker, RatingChange::PenaltyMiss);
                let missed = self.event(EventType::PenaltyMissed).for_side(side).with_player(taker);
                self.push_event(missed);
                let keeper = self.keeper_or_any(defending);
                self.give_possession(defending, keeper);
                self.place_ball(defending, KEEPER_RESTART_PROGRESS);
                self.set_phase(Phase::OpenPlay);
            }
        }
    }

    /// Best shooting + composure on court, outfield first.
    fn penalty_taker(&self, side: TeamSide) -> Option<PlayerId> {
        let team = self.state.team(side);
        let score = |id: &PlayerId| {
            team.player(*id).map_or(0u16, |p| {
                p.player.attributes.technical.shooting as u16 + p.player.attributes.mental.composure as u16
            })
        };
        // max_by_key keeps the last maximum; reverse so ties go to the first listed
        let best = |ids: Vec<PlayerId>| ids.into_iter().rev().max_by_key(score);
        let outfield: Vec<PlayerId> = team
            .on_court_players()
            .filter(|p| p.player.position.is_outfield())
            .map(|p| p.id())
            .collect();
        best(outfield).or_else(|| best(team.on_court.clone()))
    }

    /// Ball to `progress` on `side`'s attack axis, centre of the court.
    pub(crate) fn place_ball(&mut self, side: TeamSide, progress: f32) {
        self.state.ball.position = to_court(progress, 50.0, side, self.state.period);
    }
}
