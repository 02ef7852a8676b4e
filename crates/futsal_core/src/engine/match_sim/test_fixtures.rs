//! Test Fixtures Module
//!
//! Shared squads, engines and outcome models for the match tests.
//!
//! ## Usage
//! ```ignore
//! use crate::engine::match_sim::test_fixtures::*;
//! ```

use std::sync::{Arc, Mutex};

use super::MatchEngine;
use crate::engine::config::EngineConfig;
use crate::engine::outcome_model::{
    OutcomeModel, PenaltyContext, PenaltyOutcome, ShotContext, ShotOutcome,
};
use crate::engine::probability::{Action, ActionContext};
use crate::engine::rng::{MatchRng, ScriptedRng};
use crate::models::{Player, PlayerId, Position, ShotFlavor, Team, TeamSheet};
use crate::tactics::TeamTactic;

// =============================================================================
// Squads
// =============================================================================

/// Eight-player squad order: starting five, then a bench of three.
pub const SQUAD_POSITIONS: [Position; 8] = [
    Position::Goalkeeper,
    Position::Defender,
    Position::Winger,
    Position::Winger,
    Position::Pivot,
    Position::Defender,
    Position::Winger,
    Position::Pivot,
];

/// First player id of the away squad.
pub const AWAY_FIRST_ID: PlayerId = 101;

/// Squad of `size` players with ids from `first_id`, cycling through
/// [`SQUAD_POSITIONS`].
pub fn create_test_squad(first_id: PlayerId, size: usize, ability: u8) -> Vec<Player> {
    (0..size)
        .map(|i| {
            let id = first_id + i as PlayerId;
            let pos = SQUAD_POSITIONS[i % SQUAD_POSITIONS.len()];
            Player::new(id, format!("Player {id}"), pos, ability)
        })
        .collect()
}

pub fn create_test_sheet(name: &str, first_id: PlayerId) -> TeamSheet {
    create_test_sheet_sized(name, first_id, SQUAD_POSITIONS.len())
}

pub fn create_test_sheet_sized(name: &str, first_id: PlayerId, size: usize) -> TeamSheet {
    TeamSheet {
        team: Team::new(name),
        tactic: TeamTactic::default(),
        players: create_test_squad(first_id, size, 100),
    }
}

// =============================================================================
// Engines
// =============================================================================

/// Eight-player squads, deterministic config, seeded draws.
pub fn create_test_engine(seed: u64) -> MatchEngine {
    let engine = MatchEngine::seeded(
        create_test_sheet("Home", 1),
        create_test_sheet("Away", AWAY_FIRST_ID),
        EngineConfig::deterministic(),
        seed,
    );
    match engine {
        Ok(engine) => engine,
        Err(err) => panic!("test engine: {err}"),
    }
}

/// Like [`create_test_engine`] but every draw is `value`.
pub fn create_constant_engine(value: f32) -> MatchEngine {
    let rng: Box<dyn MatchRng> = Box::new(ScriptedRng::constant(value));
    let engine = MatchEngine::new(
        create_test_sheet("Home", 1),
        create_test_sheet("Away", AWAY_FIRST_ID),
        EngineConfig::deterministic(),
        rng,
    );
    match engine {
        Ok(engine) => engine,
        Err(err) => panic!("test engine: {err}"),
    }
}

/// Engine already kicked off, driven by `model`.
pub fn started_with_model(seed: u64, model: Box<dyn OutcomeModel>) -> MatchEngine {
    let mut engine = create_test_engine(seed).with_outcome_model(model);
    assert!(engine.kickoff());
    engine
}

/// Tick `n` times, returning how many ticks were accepted.
pub fn run_ticks(engine: &mut MatchEngine, n: usize) -> usize {
    (0..n).filter(|_| engine.advance_one_second().state_changed).count()
}

// =============================================================================
// Forced outcome models
// =============================================================================

/// Every carrier shoots and every shot goes in.
pub struct AlwaysScore;

impl OutcomeModel for AlwaysScore {
    fn foul_occurs(&self, _: &EngineConfig, _: &mut dyn MatchRng) -> bool {
        false
    }

    fn choose_action(&self, _: &EngineConfig, _: &ActionContext, _: &mut dyn MatchRng) -> Action {
        Action::Shoot
    }

    fn resolve_shot(&self, _: &EngineConfig, _: &ShotContext, _: &mut dyn MatchRng) -> ShotOutcome {
        ShotOutcome::Goal
    }
}

/// Completed passes only: no shots, fouls or cards.
pub struct PassOnly;

impl OutcomeModel for PassOnly {
    fn foul_occurs(&self, _: &EngineConfig, _: &mut dyn MatchRng) -> bool {
        false
    }

    fn choose_action(&self, _: &EngineConfig, _: &ActionContext, _: &mut dyn MatchRng) -> Action {
        Action::Pass
    }

    fn pass_succeeds(&self, _: &EngineConfig, _: u8, _: u8, _: &mut dyn MatchRng) -> bool {
        true
    }
}

/// A foul every open-play second, never a card.
pub struct AlwaysFoul;

impl OutcomeModel for AlwaysFoul {
    fn foul_occurs(&self, _: &EngineConfig, _: &mut dyn MatchRng) -> bool {
        true
    }

    fn card_shown(&self, _: &EngineConfig, _: u16, _: u8, _: &mut dyn MatchRng) -> bool {
        false
    }
}

/// Every foul draws a straight red.
pub struct StraightRed;

impl OutcomeModel for StraightRed {
    fn foul_occurs(&self, _: &EngineConfig, _: &mut dyn MatchRng) -> bool {
        false
    }

    fn card_shown(&self, _: &EngineConfig, _: u16, _: u8, _: &mut dyn MatchRng) -> bool {
        true
    }

    fn straight_red(&self, _: &EngineConfig, _: &mut dyn MatchRng) -> bool {
        true
    }
}

/// Shoots every second and keeps the inputs of every shot and penalty.
/// Shots go wide and penalties are missed.
#[derive(Default, Clone)]
pub struct RecordContexts {
    pub shots: Arc<Mutex<Vec<ShotContext>>>,
    pub penalties: Arc<Mutex<Vec<PenaltyContext>>>,
}

impl OutcomeModel for RecordContexts {
    fn foul_occurs(&self, _: &EngineConfig, _: &mut dyn MatchRng) -> bool {
        false
    }

    fn choose_action(&self, _: &EngineConfig, _: &ActionContext, _: &mut dyn MatchRng) -> Action {
        Action::Shoot
    }

    fn resolve_shot(&self, _: &EngineConfig, ctx: &ShotContext, _: &mut dyn MatchRng) -> ShotOutcome {
        self.shots.lock().unwrap().push(*ctx);
        ShotOutcome::OffTarget(ShotFlavor::Wide)
    }

    fn resolve_penalty(
        &self,
        _: &EngineConfig,
        ctx: &PenaltyContext,
        _: &mut dyn MatchRng,
    ) -> PenaltyOutcome {
        self.penalties.lock().unwrap().push(*ctx);
        PenaltyOutcome::Missed
    }
}
