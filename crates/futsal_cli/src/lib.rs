//! Futsal CLI Library
//!
//! Request/config loading, demo squads and text rendering for the
//! `futsal_cli` binary.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use futsal_core::engine::EngineConfig;
use futsal_core::models::{
    EventType, MatchEvent, MatchResult, Player, PlayerAttributes, Position, Team, TeamSheet,
    TeamSide,
};
use futsal_core::tactics::{Formation, Mentality, Pressing, TeamTactic, Tempo};
use futsal_core::MatchRequest;

/// Read a `MatchRequest` JSON file.
pub fn load_request(path: &Path) -> Result<MatchRequest> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse match request: {}", path.display()))
}

/// Read an engine config; `.yaml`/`.yml` as YAML, anything else as JSON.
pub fn load_config(path: &Path) -> Result<EngineConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let config = if is_yaml {
        EngineConfig::from_yaml_str(&text)
    } else {
        EngineConfig::from_json_str(&text)
    };
    config.with_context(|| format!("Invalid engine config: {}", path.display()))
}

/// Write `contents`, creating parent directories as needed.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(path, contents)
        .with_context(|| format!("Failed to write output file: {}", path.display()))
}

/// SHA256 of the result JSON (hex). Equal seeds give equal checksums.
pub fn result_checksum(result_json: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(result_json.as_bytes());
    format!("{:x}", hasher.finalize())
}

// ============================================================================
// Demo squads
// ============================================================================

const DEMO_POSITIONS: [Position; 9] = [
    Position::Goalkeeper,
    Position::Defender,
    Position::Winger,
    Position::Winger,
    Position::Pivot,
    Position::Goalkeeper,
    Position::Defender,
    Position::Winger,
    Position::Pivot,
];

fn demo_sheet(name: &str, first_id: u32, level: u8, tactic: TeamTactic) -> TeamSheet {
    let players = DEMO_POSITIONS
        .iter()
        .enumerate()
        .map(|(i, &pos)| {
            let id = first_id + i as u32;
            // Starters a notch above the bench
            let attr = if i < 5 { level } else { level.saturating_sub(2) };
            let ability = 60 + attr * 5;
            Player::new(id, format!("{name} #{}", i + 1), pos, ability)
                .with_attributes(PlayerAttributes::for_position(pos, attr))
        })
        .collect();
    TeamSheet { team: Team::new(name), tactic, players }
}

/// Two contrasting nine-player squads.
pub fn demo_request(seed: u64) -> MatchRequest {
    let home = demo_sheet(
        "Azul",
        1,
        13,
        TeamTactic::new(Mentality::Attacking, Tempo::Fast, Pressing::High)
            .with_formation(Formation::ThreeOne),
    );
    let away = demo_sheet(
        "Verde",
        101,
        12,
        TeamTactic::new(Mentality::Defensive, Tempo::Slow, Pressing::Low)
            .with_formation(Formation::Square),
    );
    MatchRequest::new(seed, home, away)
}

// ============================================================================
// Rendering
// ============================================================================

fn player_name(result: &MatchResult, id: Option<u32>) -> String {
    id.and_then(|id| result.players.iter().find(|p| p.id == id))
        .map_or_else(|| "-".to_string(), |p| p.name.clone())
}

fn team_name(result: &MatchResult, side: TeamSide) -> &str {
    match side {
        TeamSide::Home => &result.home_team.name,
        TeamSide::Away => &result.away_team.name,
    }
}

/// One line per event, e.g. `1H 05:07  goal         Azul  Azul #5 (Azul #3)`.
pub fn render_event(result: &MatchResult, event: &MatchEvent) -> String {
    let tag = serde_json::to_value(event.event_type)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default();
    let mut line = format!("{}  {:<24}", event.clock, tag);
    if let Some(side) = event.side {
        let _ = write!(line, " {}", team_name(result, side));
    }
    if event.player_id.is_some() {
        let _ = write!(line, "  {}", player_name(result, event.player_id));
    }
    if event.assist_player_id.is_some() {
        let _ = write!(line, " (assist {})", player_name(result, event.assist_player_id));
    }
    if event.replaced_player_id.is_some() {
        let _ = write!(line, " for {}", player_name(result, event.replaced_player_id));
    }
    line.trim_end().to_string()
}

pub fn render_events(result: &MatchResult) -> String {
    result
        .events
        .iter()
        .map(|e| render_event(result, e))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Final score, scorers and the side-by-side statistics table.
pub fn render_summary(result: &MatchResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} - {} {}{}",
        result.home_team.name,
        result.score.0,
        result.score.1,
        result.away_team.name,
        if result.finished { "" } else { " (unfinished)" }
    );
    if let Some(seed) = result.seed {
        let _ = writeln!(out, "seed {seed}");
    }

    let goals: Vec<&MatchEvent> =
        result.events.iter().filter(|e| e.event_type == EventType::Goal).collect();
    if !goals.is_empty() {
        out.push('\n');
        for goal in goals {
            let _ = writeln!(out, "  {}", render_event(result, goal));
        }
    }

    let (h, a) = (&result.statistics.home, &result.statistics.away);
    out.push('\n');
    let rows: [(&str, String, String); 8] = [
        ("Possession %", format!("{:.0}", h.possession), format!("{:.0}", a.possession)),
        ("Shots", h.shots.to_string(), a.shots.to_string()),
        ("On target", h.shots_on_target.to_string(), a.shots_on_target.to_string()),
        ("Saves", h.saves.to_string(), a.saves.to_string()),
        ("Corners", h.corners.to_string(), a.corners.to_string()),
        ("Fouls", h.fouls.to_string(), a.fouls.to_string()),
        ("Cards (Y/R)", format!("{}/{}", h.yellow_cards, h.red_cards), format!("{}/{}", a.yellow_cards, a.red_cards)),
        ("Pass accuracy %", format!("{:.0}", h.pass_accuracy), format!("{:.0}", a.pass_accuracy)),
    ];
    for (label, home, away) in rows {
        let _ = writeln!(out, "  {:<16} {:>6} {:>6}", label, home, away);
    }

    if let Some(best) = result.player_of_the_match() {
        let _ = writeln!(out, "\nPlayer of the match: {} ({:.1})", best.name, best.rating);
    }
    out
}
