use serde::{Deserialize, Serialize};

/// Coarse display coordinate on a 100×100 court.
///
/// x runs goal line to goal line, y touchline to touchline. Nothing in the
/// outcome models depends on collision-accurate positions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct CourtPosition {
    pub x: f32,
    pub y: f32,
}

impl CourtPosition {
    pub const MAX: f32 = 100.0;
    pub const CENTER: CourtPosition = CourtPosition { x: 50.0, y: 50.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn clamped(self) -> Self {
        Self { x: self.x.clamp(0.0, Self::MAX), y: self.y.clamp(0.0, Self::MAX) }
    }

    /// Move `factor` of the way towards `target`.
    pub fn approach(self, target: CourtPosition, factor: f32) -> Self {
        Self {
            x: self.x + (target.x - self.x) * factor,
            y: self.y + (target.y - self.y) * factor,
        }
    }

    pub fn distance(&self, other: &CourtPosition) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
