//! Display positions: formation slots and target smoothing.
//!
//! Positions never feed the outcome models except for one thing: how far a
//! flying goalkeeper is from its own goal.

use super::court::{progress_of, to_court};
use super::match_sim::{BallState, TeamState};
use crate::models::{CourtPosition, Period, PlayerId};
use crate::tactics::{FormationSlot, GOALKEEPER_SLOT};

/// Block shift in attack-relative units while in possession.
const IN_POSSESSION_SHIFT: f32 = 15.0;
const OUT_OF_POSSESSION_SHIFT: f32 = -5.0;
/// Extra step per pressing level above medium.
const PRESSING_SHIFT: f32 = 5.0;
/// How far a flying goalkeeper pushes up while its side has the ball.
const FLYING_KEEPER_PROGRESS: f32 = 58.0;
/// A goalkeeper beyond this progress is treated as away from goal.
pub const KEEPER_AWAY_PROGRESS: f32 = 20.0;
/// Share of the ball's lateral position the block follows.
const LATERAL_FOLLOW: f32 = 0.2;

/// Formation slot of an on-court player.
///
/// Goalkeepers hold the keeper slot; outfield players take slots in
/// `on_court` order.
pub fn slot_for(team: &TeamState, id: PlayerId) -> FormationSlot {
    let mut outfield_index = 0;
    for &court_id in &team.on_court {
        let is_keeper = team
            .player(court_id)
            .is_some_and(|p| p.player.position.is_goalkeeper());
        if court_id == id {
            return if is_keeper {
                GOALKEEPER_SLOT
            } else {
                team.tactic.formation.outfield_slot(outfield_index)
            };
        }
        if !is_keeper {
            outfield_index += 1;
        }
    }
    team.tactic.formation.outfield_slot(outfield_index)
}

/// Kickoff position of an on-court player.
pub fn formation_position(team: &TeamState, id: PlayerId, period: Period) -> CourtPosition {
    let slot = slot_for(team, id);
    to_court(slot.progress, slot.y, team.side, period)
}

pub fn target_for(team: &TeamState, id: PlayerId, ball: &BallState, period: Period) -> CourtPosition {
    if ball.carrier == Some(id) {
        return ball.position;
    }

    let slot = slot_for(team, id);
    let in_possession = ball.possession == Some(team.side);

    if slot.role.is_goalkeeper() {
        if team.is_using_flying_goalkeeper && in_possession {
            return to_court(FLYING_KEEPER_PROGRESS, 50.0, team.side, period);
        }
        return to_court(slot.progress, slot.y, team.side, period);
    }

    let shift = if in_possession {
        IN_POSSESSION_SHIFT
    } else {
        OUT_OF_POSSESSION_SHIFT + (team.tactic.pressing.level() as f32 - 1.0) * PRESSING_SHIFT
    };
    let y = slot.y + (ball.position.y - slot.y) * LATERAL_FOLLOW;
    to_court(slot.progress + shift, y, team.side, period)
}

/// Move every on-court player `smoothing` of the way to its target.
pub fn update_team_positions(team: &mut TeamState, ball: &BallState, period: Period, smoothing: f32) {
    let targets: Vec<(PlayerId, CourtPosition)> = team
        .on_court
        .iter()
        .map(|id| (*id, target_for(team, *id, ball, period)))
        .collect();

    for (id, target) in targets {
        if let Some(p) = team.player_mut(id) {
            p.target = target;
            p.position = p.position.approach(target, smoothing);
        }
    }
}

/// Snap every on-court player to its formation slot.
pub fn place_in_formation(team: &mut TeamState, period: Period) {
    let spots: Vec<(PlayerId, CourtPosition)> = team
        .on_court
        .iter()
        .map(|id| (*id, formation_position(team, *id, period)))
        .collect();

    for (id, spot) in spots {
        if let Some(p) = team.player_mut(id) {
            p.position = spot;
            p.target = spot;
        }
    }
}

/// Flying goalkeeper caught up the court.
pub fn keeper_away_from_goal(team: &TeamState, period: Period) -> bool {
    team.is_using_flying_goalkeeper
        && team
            .goalkeeper()
            .is_some_and(|gk| progress_of(gk.position.x, team.side, period) > KEEPER_AWAY_PROGRESS)
}
