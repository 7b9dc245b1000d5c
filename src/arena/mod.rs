//! Text-menu front end
//!
//! Collects combatant attributes, runs contests and narrates them on the console.

pub mod menu;
pub mod records;
pub mod theme;

pub use menu::Arena;
pub use records::MatchRecords;
pub use theme::{Theme, Tone};
