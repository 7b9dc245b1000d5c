//! Magical Arena - Turn-Based Duel Simulator
//!
//! Two combatants trade dice-rolled attacks until one of them falls. The contest
//! engine lives in [`combat`]; the menu, headless runner and settings wrap it.
//!
//! This library exposes the core modules for testing and reuse.

pub mod arena;
pub mod cli;
pub mod combat;
pub mod error;
pub mod headless;
pub mod roster;
pub mod settings;

// Re-export commonly used types
pub use combat::{
    run_contest, Combatant, Contest, ContestLog, DiceRoller, FixedRolls, GameRng, Side,
};
pub use error::ConfigError;
pub use headless::{ContestConfig, ContestReport};
pub use roster::{validate_pair, CombatantAttributes, RosterError};
