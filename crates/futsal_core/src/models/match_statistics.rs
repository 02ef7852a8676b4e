use serde::{Deserialize, Serialize};

use super::TeamSide;

/// Counters for one side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TeamStatistics {
    /// Share of possession ticks, 0..=100.
    pub possession: f32,
    pub possession_ticks: u32,
    pub shots: u16,
    pub shots_on_target: u16,
    pub corners: u16,
    pub fouls: u16,
    pub yellow_cards: u16,
    pub red_cards: u16,
    pub saves: u16,
    pub passes: u16,
    pub passes_completed: u16,
    /// Completed / attempted, 0..=100.
    pub pass_accuracy: f32,
}

impl TeamStatistics {
    pub fn record_pass(&mut self, completed: bool) {
        self.passes = self.passes.saturating_add(1);
        if completed {
            self.passes_completed = self.passes_completed.saturating_add(1);
        }
        self.pass_accuracy = self.passes_completed as f32 / self.passes as f32 * 100.0;
    }
}

/// Aggregated statistics, symmetric per side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MatchStatistics {
    pub home: TeamStatistics,
    pub away: TeamStatistics,
}

impl MatchStatistics {
    pub fn side(&self, side: TeamSide) -> &TeamStatistics {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    pub fn side_mut(&mut self, side: TeamSide) -> &mut TeamStatistics {
        match side {
            TeamSide::Home => &mut self.home,
            TeamSide::Away => &mut self.away,
        }
    }

    /// Count one tick of possession and refresh both percentages.
    pub fn record_possession(&mut self, holder: Option<TeamSide>) {
        let Some(side) = holder else {
            return;
        };
        let stats = self.side_mut(side);
        stats.possession_ticks = stats.possession_ticks.saturating_add(1);

        let total = self.home.possession_ticks + self.away.possession_ticks;
        if total > 0 {
            self.home.possession = self.home.possession_ticks as f32 / total as f32 * 100.0;
            self.away.possession = 100.0 - self.home.possession;
        }
    }
}
