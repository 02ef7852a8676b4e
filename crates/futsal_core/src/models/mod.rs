pub mod clock;
pub mod court;
pub mod events;
pub mod match_result;
pub mod match_statistics;
pub mod player;
pub mod team;

pub use clock::{MatchClock, Period};
pub use court::CourtPosition;
pub use events::{EventType, MatchEvent, ShotFlavor};
pub use match_result::{MatchResult, PlayerLine};
pub use match_statistics::{MatchStatistics, TeamStatistics};
pub use player::{
    GoalkeepingAttributes, MentalAttributes, PhysicalAttributes, Player, PlayerAttributes,
    PlayerId, Position, TechnicalAttributes,
};
pub use team::{Team, TeamSheet, TeamSide};
