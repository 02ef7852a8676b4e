//! Squad validation and starting lineups.

use std::collections::HashSet;

use super::match_state::{PlayerState, TeamState};
use crate::engine::config::EngineConfig;
use crate::engine::rng::MatchRng;
use crate::error::{MatchError, Result};
use crate::models::{Player, PlayerId, Position, TeamSheet, TeamSide};

/// Players on court at full strength.
pub const ON_COURT: usize = 5;

/// Fail fast on squads the engine cannot play.
pub(crate) fn check_rosters(home: &[Player], away: &[Player]) -> Result<()> {
    if home.is_empty() {
        return Err(MatchError::EmptyRoster { side: TeamSide::Home });
    }
    if away.is_empty() {
        return Err(MatchError::EmptyRoster { side: TeamSide::Away });
    }

    let mut seen = HashSet::new();
    for player in home.iter().chain(away) {
        if !seen.insert(player.id) {
            return Err(MatchError::DuplicatePlayer { id: player.id });
        }
    }
    Ok(())
}

/// Starting five: the first goalkeeper plus the first four outfield players
/// when the squad has them, otherwise the first five listed.
pub fn select_lineup(players: &[Player]) -> Vec<PlayerId> {
    let keeper = players.iter().find(|p| p.position.is_goalkeeper());
    let outfield: Vec<PlayerId> = players
        .iter()
        .filter(|p| p.position.is_outfield())
        .take(ON_COURT - 1)
        .map(|p| p.id)
        .collect();

    match keeper {
        Some(gk) if outfield.len() == ON_COURT - 1 => {
            let mut lineup = Vec::with_capacity(ON_COURT);
            lineup.push(gk.id);
            lineup.extend(outfield);
            lineup
        }
        _ => players.iter().take(ON_COURT).map(|p| p.id).collect(),
    }
}

/// Team state with jittered form and the starting five on court.
pub(crate) fn build_team(
    side: TeamSide,
    sheet: TeamSheet,
    config: &EngineConfig,
    rng: &mut dyn MatchRng,
) -> TeamState {
    let sigma = config.outcome.form_jitter_sigma;
    let lineup = select_lineup(&sheet.players);

    if sheet.players.len() < ON_COURT {
        log::warn!(
            "[LINEUP] {} ({side}) has only {} players",
            sheet.team.name,
            sheet.players.len()
        );
    }
    if !sheet.players.iter().any(|p| p.position.is_goalkeeper()) {
        log::warn!("[LINEUP] {} ({side}) has no goalkeeper", sheet.team.name);
    }

    let roster = sheet
        .players
        .into_iter()
        .map(|player| {
            let form = rng.normal(player.form as f32, sigma).clamp(0.0, 100.0);
            let mut state = PlayerState::new(player, form);
            state.on_court = lineup.contains(&state.id());
            state
        })
        .collect();

    let mut team = TeamState::new(side, sheet.team, sheet.tactic, roster);
    team.on_court = lineup;
    team
}

/// Pivot if one is on court, else the last outfield player.
pub(crate) fn kickoff_taker(team: &TeamState) -> Option<PlayerId> {
    team.on_court_players()
        .find(|p| p.player.position == Position::Pivot)
        .map(|p| p.id())
        .or_else(|| team.outfield_ids().last().copied())
}
