//! Swappable outcome policy.
//!
//! The engine asks an [`OutcomeModel`] for every probabilistic decision. The
//! default methods apply the formulas in [`super::probability`] with one draw
//! each; tests override single decisions to force a scenario.

use serde::{Deserialize, Serialize};

use super::config::EngineConfig;
use super::probability::{self, Action, ActionContext};
use super::rng::MatchRng;
use crate::models::ShotFlavor;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DribbleOutcome {
    Success,
    /// The defender fouled the carrier.
    Foul,
    Dispossessed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShotOutcome {
    Goal,
    Saved,
    OffTarget(ShotFlavor),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PenaltyOutcome {
    Scored,
    Saved,
    Missed,
}

/// Inputs of the two-stage shot model.
#[derive(Debug, Clone, Copy)]
pub struct ShotContext {
    pub strength_ratio: f32,
    pub shooting: u8,
    pub composure: u8,
    pub stamina: f32,
    /// 0 when the net is unguarded.
    pub keeper_reflexes: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct PenaltyContext {
    pub shooting: u8,
    pub composure: u8,
    pub keeper_reflexes: u8,
    pub keeper_one_on_ones: u8,
}

pub trait OutcomeModel: Send {
    fn foul_occurs(&self, cfg: &EngineConfig, rng: &mut dyn MatchRng) -> bool {
        rng.chance(cfg.discipline.foul_chance_per_tick)
    }

    fn choose_action(
        &self,
        cfg: &EngineConfig,
        ctx: &ActionContext,
        rng: &mut dyn MatchRng,
    ) -> Action {
        let weights = probability::action_weights(&cfg.outcome, ctx);
        probability::weighted_pick(&weights, rng.next_f32()).unwrap_or(Action::Pass)
    }

    fn pass_succeeds(
        &self,
        cfg: &EngineConfig,
        passing: u8,
        pressing_level: u8,
        rng: &mut dyn MatchRng,
    ) -> bool {
        rng.chance(probability::pass_success_probability(&cfg.outcome, passing, pressing_level))
    }

    fn resolve_dribble(
        &self,
        cfg: &EngineConfig,
        dribbling: u8,
        defending: f32,
        rng: &mut dyn MatchRng,
    ) -> DribbleOutcome {
        let p = probability::dribble_success_probability(&cfg.outcome, dribbling, defending);
        if rng.chance(p) {
            DribbleOutcome::Success
        } else if rng.chance(cfg.outcome.dribble_foul_share) {
            DribbleOutcome::Foul
        } else {
            DribbleOutcome::Dispossessed
        }
    }

    fn resolve_shot(
        &self,
        cfg: &EngineConfig,
        ctx: &ShotContext,
        rng: &mut dyn MatchRng,
    ) -> ShotOutcome {
        let o = &cfg.outcome;
        let on_target =
            probability::on_target_probability(o, ctx.strength_ratio, ctx.shooting, ctx.composure);
        if !rng.chance(on_target) {
            return ShotOutcome::OffTarget(probability::off_target_flavor(o, rng.next_f32()));
        }
        let goal = probability::goal_probability(
            o,
            ctx.strength_ratio,
            ctx.shooting,
            ctx.keeper_reflexes,
            ctx.stamina,
        );
        if rng.chance(goal) {
            ShotOutcome::Goal
        } else {
            ShotOutcome::Saved
        }
    }

    fn resolve_penalty(
        &self,
        cfg: &EngineConfig,
        ctx: &PenaltyContext,
        rng: &mut dyn MatchRng,
    ) -> PenaltyOutcome {
        let p = probability::penalty_probability(
            &cfg.outcome,
            ctx.shooting,
            ctx.composure,
            ctx.keeper_reflexes,
            ctx.keeper_one_on_ones,
        );
        if rng.chance(p) {
            PenaltyOutcome::Scored
        } else if rng.chance(cfg.outcome.penalty_save_share) {
            PenaltyOutcome::Saved
        } else {
            PenaltyOutcome::Missed
        }
    }

    fn card_shown(
        &self,
        cfg: &EngineConfig,
        fouls_this_match: u16,
        aggression: u8,
        rng: &mut dyn MatchRng,
    ) -> bool {
        rng.chance(probability::card_probability(&cfg.discipline, fouls_this_match, aggression))
    }

    /// Asked only once a card has been shown.
    fn straight_red(&self, cfg: &EngineConfig, rng: &mut dyn MatchRng) -> bool {
        rng.chance(cfg.discipline.straight_red_share)
    }
}

/// The stock futsal model.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardOutcomes;

impl OutcomeModel for StandardOutcomes {}
