use serde::{Deserialize, Serialize};

use crate::engine::{EngineConfig, MatchEngine};
use crate::error::{MatchError, Result};
use crate::models::{MatchResult, TeamSheet};

/// Request schema understood by this build.
pub const SCHEMA_VERSION: u8 = 1;

fn default_schema_version() -> u8 {
    SCHEMA_VERSION
}

/// A whole match to simulate: two team sheets, a seed and optional tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    pub seed: u64,
    pub home: TeamSheet,
    pub away: TeamSheet,
    /// Engine tuning; the realistic preset when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<EngineConfig>,
}

impl MatchRequest {
    pub fn new(seed: u64, home: TeamSheet, away: TeamSheet) -> Self {
        Self { schema_version: SCHEMA_VERSION, seed, home, away, config: None }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Run a match from kickoff to full time.
pub fn simulate_match(request: &MatchRequest) -> Result<MatchResult> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(MatchError::UnsupportedSchemaVersion(request.schema_version));
    }
    let config = request.config.clone().unwrap_or_default();
    let mut engine =
        MatchEngine::seeded(request.home.clone(), request.away.clone(), config, request.seed)?;

    engine.kickoff();
    while !engine.state().is_full_time {
        if !engine.advance_one_second().state_changed {
            break;
        }
    }

    Ok(MatchResult::from(engine.state()).with_seed(request.seed))
}

/// Main entry point for JSON API - simulates a match from a JSON request and
/// returns the `MatchResult` JSON.
pub fn simulate_match_json(request_json: &str) -> Result<String> {
    let request: MatchRequest = serde_json::from_str(request_json)?;
    let result = simulate_match(&request)?;
    Ok(serde_json::to_string(&result)?)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventType, Player, Position, Team};
    use crate::tactics::{Mentality, Pressing, TeamTactic, Tempo};
    use sha2::{Digest, Sha256};

    fn sheet(name: &str, first_id: u32) -> TeamSheet {
        let positions = [
            Position::Goalkeeper,
            Position::Defender,
            Position::Winger,
            Position::Winger,
            Position::Pivot,
            Position::Defender,
            Position::Winger,
        ];
        TeamSheet {
            team: Team::new(name),
            tactic: TeamTactic::default(),
            players: positions
                .iter()
                .enumerate()
                .map(|(i, pos)| {
                    let id = first_id + i as u32;
                    Player::new(id, format!("{name} {id}"), *pos, 110)
                })
                .collect(),
        }
    }

    fn request(seed: u64) -> MatchRequest {
        MatchRequest::new(seed, sheet("Lions", 1), sheet("Bears", 101))
    }

    #[test]
    fn test_simulate_match_reaches_full_time() {
        let result = simulate_match(&request(5)).unwrap();
        assert!(result.finished);
        assert_eq!(result.seed, Some(5));
        assert_eq!(result.players.len(), 14);
        assert_eq!(result.events.iter().filter(|e| e.event_type == EventType::MatchEnd).count(), 1);
        let goals = result.events.iter().filter(|e| e.event_type == EventType::Goal).count();
        assert_eq!(goals, (result.score.0 + result.score.1) as usize);
    }

    #[test]
    fn test_same_seed_byte_identical_json() {
        let json = serde_json::to_string(&request(77)).unwrap();
        let digest = |s: String| Sha256::digest(s.as_bytes()).to_vec();

        let first = digest(simulate_match_json(&json).unwrap());
        let second = digest(simulate_match_json(&json).unwrap());
        assert_eq!(first, second);

        let other = serde_json::to_string(&request(78)).unwrap();
        assert_ne!(first, digest(simulate_match_json(&other).unwrap()));
    }

    #[test]
    fn test_request_defaults() {
        let json = r#"{
            "seed": 3,
            "home": {"team": {"name": "A"}, "players": [
                {"id": 1, "name": "Keeper", "position": "goalkeeper", "ability": 90}
            ]},
            "away": {"team": {"name": "B"}, "tactic": {"mentality": "attacking"}, "players": [
                {"id": 2, "name": "Pivot", "position": "pivot", "ability": 90, "form": 70}
            ]}
        }"#;
        let req: MatchRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.schema_version, SCHEMA_VERSION);
        assert!(req.config.is_none());
        assert_eq!(req.home.tactic, TeamTactic::default());
        assert_eq!(
            req.away.tactic,
            TeamTactic::new(Mentality::Attacking, Tempo::Normal, Pressing::Medium)
        );
        assert_eq!(req.home.players[0].form, 50);

        // Degenerate one-player squads still play out
        let result = simulate_match(&req).unwrap();
        assert!(result.finished);
    }

    #[test]
    fn test_config_from_request_is_used() {
        let mut cfg = EngineConfig::deterministic();
        cfg.clock.half_minutes = 2;
        let result = simulate_match(&request(1).with_config(cfg)).unwrap();
        let end = result.events.last().unwrap();
        assert_eq!(end.event_type, EventType::MatchEnd);
        assert_eq!((end.clock.minute, end.clock.second), (2, 0));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(simulate_match_json("{ not json"), Err(MatchError::Deserialization(_))));

        let mut req = request(1);
        req.schema_version = 2;
        assert!(matches!(simulate_match(&req), Err(MatchError::UnsupportedSchemaVersion(2))));

        let mut req = request(1);
        req.away.players.clear();
        assert!(matches!(simulate_match(&req), Err(MatchError::EmptyRoster { .. })));

        let mut cfg = EngineConfig::default();
        cfg.discipline.min_on_court = 9;
        assert!(matches!(
            simulate_match(&request(1).with_config(cfg)),
            Err(MatchError::InvalidConfig(_))
        ));
    }
}
