//! Probability formulas of the outcome models.
//!
//! All functions are pure: they take ratings and config, return a
//! probability or a choice. Randomness is applied by the caller.

use serde::{Deserialize, Serialize};

use super::config::{DisciplineConfig, OutcomeConfig};
use super::court::CourtZone;
use crate::models::ShotFlavor;
use crate::tactics::{Mentality, Tempo};

/// What the ball carrier tries this second.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Pass,
    Dribble,
    Shoot,
    LoseBall,
}

/// Inputs of the action model.
#[derive(Debug, Clone, Copy)]
pub struct ActionContext {
    pub zone: CourtZone,
    pub mentality: Mentality,
    pub tempo: Tempo,
    pub shooting: u8,
    pub dribbling: u8,
}

// ============================================================================
// Selection
// ============================================================================

/// Weighted choice with one uniform `draw` in `[0, 1)`.
///
/// The draw is scaled to the summed weight and each weight is subtracted in
/// order until the running total is non-positive, so a draw landing exactly
/// on a boundary goes to the earlier entry. Non-positive weights are never
/// chosen. Returns `None` when nothing has positive weight.
pub fn weighted_pick<T: Copy>(entries: &[(T, f32)], draw: f32) -> Option<T> {
    let total: f32 = entries.iter().map(|(_, w)| w.max(0.0)).sum();
    if total <= 0.0 {
        return None;
    }

    let mut remaining = draw * total;
    let mut last = None;
    for &(item, weight) in entries {
        if weight <= 0.0 {
            continue;
        }
        last = Some(item);
        remaining -= weight;
        if remaining <= 0.0 {
            return Some(item);
        }
    }
    // Float drift with draw close to 1.0
    last
}

pub fn action_weights(cfg: &OutcomeConfig, ctx: &ActionContext) -> [(Action, f32); 4] {
    let [zone_pass, zone_dribble, zone_shoot, zone_lose] = ctx.zone.action_multipliers();
    let directness = ctx.tempo.directness();
    let dribble_skill = 0.5 + ctx.dribbling as f32 / 20.0;
    let shoot_skill = 0.5 + ctx.shooting as f32 / 20.0;

    [
        (Action::Pass, cfg.pass_weight * zone_pass * ctx.mentality.pass_factor()),
        (Action::Dribble, cfg.dribble_weight * zone_dribble * directness * dribble_skill),
        (
            Action::Shoot,
            cfg.shoot_weight * zone_shoot * ctx.mentality.shoot_factor() * directness * shoot_skill,
        ),
        (Action::LoseBall, cfg.lose_ball_weight * zone_lose),
    ]
}

// ============================================================================
// Ratings
// ============================================================================

/// Ability scaled by match form (0..=100) and stamina (0..=100).
pub fn effective_ability(ability: u8, form: f32, stamina: f32) -> f32 {
    let form_factor = 0.85 + 0.3 * form.clamp(0.0, 100.0) / 100.0;
    let stamina_factor = 0.75 + 0.25 * stamina.clamp(0.0, 100.0) / 100.0;
    ability as f32 * form_factor * stamina_factor
}

/// Attacking / defending average on-court ability, clamped to [0.5, 2].
pub fn strength_ratio(attack: f32, defense: f32) -> f32 {
    if defense <= 0.0 {
        return 2.0;
    }
    (attack / defense).clamp(0.5, 2.0)
}

// ============================================================================
// Pass / Dribble
// ============================================================================

pub fn pass_success_probability(cfg: &OutcomeConfig, passing: u8, pressing_level: u8) -> f32 {
    let p = cfg.pass_base + passing as f32 / cfg.pass_skill_divisor
        - pressing_level as f32 * cfg.pressing_penalty;
    p.clamp(0.0, 1.0)
}

pub fn dribble_success_probability(cfg: &OutcomeConfig, dribbling: u8, defending: f32) -> f32 {
    let p = cfg.dribble_base + (dribbling as f32 - defending) / cfg.dribble_divisor;
    p.clamp(cfg.dribble_min, cfg.dribble_max)
}

// ============================================================================
// Shooting
// ============================================================================

pub fn on_target_probability(cfg: &OutcomeConfig, ratio: f32, shooting: u8, composure: u8) -> f32 {
    let p = cfg.on_target_base
        + (ratio - 1.0) * 0.15
        + (shooting as f32 - 10.0) / 100.0
        + (composure as f32 - 10.0) / 200.0;
    p.clamp(cfg.on_target_min, cfg.on_target_max)
}

/// Conversion chance of an on-target shot.
pub fn goal_probability(
    cfg: &OutcomeConfig,
    ratio: f32,
    shooting: u8,
    keeper_reflexes: u8,
    shooter_stamina: f32,
) -> f32 {
    let p = cfg.goal_base
        + (ratio - 1.0) * 0.1
        + (shooting as f32 - keeper_reflexes as f32) / 100.0
        + (shooter_stamina - 50.0) / 1000.0;
    p.clamp(cfg.goal_min, cfg.goal_max)
}

/// Flavour of an off-target shot from one uniform draw.
pub fn off_target_flavor(cfg: &OutcomeConfig, draw: f32) -> ShotFlavor {
    if draw < cfg.blocked_share {
        ShotFlavor::Blocked
    } else if draw < cfg.blocked_share + cfg.wide_share {
        ShotFlavor::Wide
    } else if draw < cfg.blocked_share + cfg.wide_share + cfg.post_share {
        ShotFlavor::Post
    } else {
        ShotFlavor::Wide
    }
}

pub fn penalty_probability(
    cfg: &OutcomeConfig,
    shooting: u8,
    composure: u8,
    reflexes: u8,
    one_on_ones: u8,
) -> f32 {
    let taker = (shooting as f32 + composure as f32) / 2.0;
    let keeper = (reflexes as f32 + one_on_ones as f32) / 2.0;
    let p = cfg.penalty_base + (taker - keeper) * cfg.penalty_skill_factor;
    p.clamp(cfg.penalty_min, cfg.penalty_max)
}

// ============================================================================
// Discipline
// ============================================================================

/// `fouls_this_match` includes the foul being judged.
pub fn card_probability(cfg: &DisciplineConfig, fouls_this_match: u16, aggression: u8) -> f32 {
    let p = cfg.card_base
        + fouls_this_match as f32 * cfg.card_per_foul
        + aggression as f32 / cfg.aggression_divisor;
    p.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> OutcomeConfig {
        OutcomeConfig::default()
    }

    #[test]
    fn test_weighted_pick_boundary_goes_to_first() {
        let entries = [("a", 1.0), ("b", 1.0)];
        assert_eq!(weighted_pick(&entries, 0.5), Some("a"));
        assert_eq!(weighted_pick(&entries, 0.500_1), Some("b"));
        assert_eq!(weighted_pick(&entries, 0.0), Some("a"));
    }

    #[test]
    fn test_weighted_pick_skips_zero_weights() {
        let entries = [("never", 0.0), ("x", 2.0), ("y", 0.0)];
        assert_eq!(weighted_pick(&entries, 0.0), Some("x"));
        assert_eq!(weighted_pick(&entries, 0.999), Some("x"));
        assert_eq!(weighted_pick(&[("z", 0.0)], 0.5), None);
        assert_eq!(weighted_pick::<&str>(&[], 0.5), None);
    }

    #[test]
    fn test_pass_probability_formula() {
        // 0.7 + 10/100 - 1*0.1
        assert!((pass_success_probability(&cfg(), 10, 1) - 0.7).abs() < 1e-6);
        assert!((pass_success_probability(&cfg(), 20, 0) - 0.9).abs() < 1e-6);
        assert!((pass_success_probability(&cfg(), 1, 2) - 0.51).abs() < 1e-6);
    }

    #[test]
    fn test_dribble_probability_clamped() {
        assert!((dribble_success_probability(&cfg(), 10, 10.0) - 0.5).abs() < 1e-6);
        assert!((dribble_success_probability(&cfg(), 20, 5.0) - 0.8).abs() < 1e-6);
        assert_eq!(dribble_success_probability(&cfg(), 1, 100.0), 0.05);
    }

    #[test]
    fn test_shot_probabilities_stay_in_band() {
        for ratio in [0.5, 1.0, 2.0] {
            for skill in [1u8, 10, 20] {
                let on = on_target_probability(&cfg(), ratio, skill, skill);
                assert!((0.15..=0.55).contains(&on));
                let goal = goal_probability(&cfg(), ratio, skill, 20 - skill + 1, 100.0);
                assert!((0.05..=0.35).contains(&goal));
            }
        }
    }

    #[test]
    fn test_goal_probability_average_inputs() {
        // 0.2 + 0 + 0 + 0
        assert!((goal_probability(&cfg(), 1.0, 10, 10, 50.0) - 0.2).abs() < 1e-6);
        // unguarded net beats a keeper
        assert!(goal_probability(&cfg(), 1.0, 10, 0, 50.0) > goal_probability(&cfg(), 1.0, 10, 15, 50.0));
    }

    #[test]
    fn test_off_target_flavor_bands() {
        let c = cfg();
        assert_eq!(off_target_flavor(&c, 0.0), ShotFlavor::Blocked);
        assert_eq!(off_target_flavor(&c, 0.39), ShotFlavor::Blocked);
        assert_eq!(off_target_flavor(&c, 0.40), ShotFlavor::Wide);
        assert_eq!(off_target_flavor(&c, 0.90), ShotFlavor::Post);
        assert_eq!(off_target_flavor(&c, 0.95), ShotFlavor::Wide);
    }

    #[test]
    fn test_penalty_probability() {
        assert!((penalty_probability(&cfg(), 10, 10, 10, 10) - 0.75).abs() < 1e-6);
        assert_eq!(penalty_probability(&cfg(), 20, 20, 1, 1), 0.95);
        assert_eq!(penalty_probability(&cfg(), 1, 1, 20, 20), 0.5);
    }

    #[test]
    fn test_card_probability() {
        let d = DisciplineConfig::default();
        // 0.03 + 2*0.02 + 10/500
        assert!((card_probability(&d, 2, 10) - 0.09).abs() < 1e-6);
    }

    #[test]
    fn test_strength_ratio_clamped() {
        assert_eq!(strength_ratio(300.0, 100.0), 2.0);
        assert_eq!(strength_ratio(10.0, 100.0), 0.5);
        assert_eq!(strength_ratio(100.0, 0.0), 2.0);
        assert!((strength_ratio(120.0, 100.0) - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_effective_ability_penalises_tired_players() {
        let fresh = effective_ability(100, 50.0, 100.0);
        let tired = effective_ability(100, 50.0, 20.0);
        assert!((fresh - 100.0).abs() < 1e-4);
        assert!(tired < fresh);
    }

    #[test]
    fn test_no_shots_from_own_box() {
        let ctx = ActionContext {
            zone: CourtZone::OwnBox,
            mentality: Mentality::Attacking,
            tempo: Tempo::Fast,
            shooting: 20,
            dribbling: 10,
        };
        let weights = action_weights(&cfg(), &ctx);
        assert_eq!(weights[2].0, Action::Shoot);
        assert_eq!(weights[2].1, 0.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Any draw picks an entry with positive weight.
            #[test]
            fn prop_weighted_pick_returns_positive_entry(
                weights in proptest::collection::vec(0.0f32..10.0, 1..8),
                draw in 0.0f32..1.0
            ) {
                let entries: Vec<(usize, f32)> = weights.iter().copied().enumerate().collect();
                let picked = weighted_pick(&entries, draw);
                if weights.iter().any(|w| *w > 0.0) {
                    let idx = picked.unwrap();
                    prop_assert!(weights[idx] > 0.0);
                } else {
                    prop_assert!(picked.is_none());
                }
            }

            #[test]
            fn prop_pass_probability_is_probability(passing in 1u8..=20, level in 0u8..=2) {
                let p = pass_success_probability(&OutcomeConfig::default(), passing, level);
                prop_assert!((0.0..=1.0).contains(&p));
            }
        }
    }
}
