use serde::{Deserialize, Serialize};
use std::fmt;

/// Match period. Ordered so that clock stamps compare lexicographically.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    #[default]
    NotStarted,
    FirstHalf,
    SecondHalf,
}

impl Period {
    /// 0 before kickoff, then 1 and 2.
    pub fn number(self) -> u8 {
        match self {
            Period::NotStarted => 0,
            Period::FirstHalf => 1,
            Period::SecondHalf => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::NotStarted => "PRE",
            Period::FirstHalf => "1H",
            Period::SecondHalf => "2H",
        }
    }
}

/// (period, minute, second) stamp of the match clock.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatchClock {
    pub period: Period,
    pub minute: u8,
    pub second: u8,
}

impl MatchClock {
    pub fn new(period: Period, minute: u8, second: u8) -> Self {
        Self { period, minute, second }
    }

    /// Seconds elapsed in the current period.
    pub fn period_seconds(&self) -> u32 {
        self.minute as u32 * 60 + self.second as u32
    }
}

impl fmt::Display for MatchClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:02}:{:02}", self.period.label(), self.minute, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_orders_by_period_first() {
        let late_first = MatchClock::new(Period::FirstHalf, 20, 0);
        let early_second = MatchClock::new(Period::SecondHalf, 0, 1);
        assert!(late_first < early_second);
        assert!(MatchClock::new(Period::FirstHalf, 3, 59) < MatchClock::new(Period::FirstHalf, 4, 0));
    }

    #[test]
    fn test_clock_label_is_zero_padded() {
        assert_eq!(MatchClock::new(Period::SecondHalf, 5, 7).to_string(), "2H 05:07");
        assert_eq!(MatchClock::default().to_string(), "PRE 00:00");
    }
}
