// Team tactics consumed by the match core.

pub mod formation;
pub mod team_instructions;

pub use formation::{Formation, FormationSlot, GOALKEEPER_SLOT};
pub use team_instructions::{Mentality, Pressing, TeamTactic, Tempo};
