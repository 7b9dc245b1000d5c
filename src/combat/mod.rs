//! Combat system
//!
//! Implements the contest-resolution engine:
//! - Combatants and the A/B side handle
//! - Dice sources (seedable RNG, fixed sequences for tests)
//! - Round resolution, turn order, termination and winner rules
//! - The per-contest round log

pub mod combatant;
pub mod contest;
pub mod dice;
pub mod engine;
pub mod log;

pub use combatant::{Combatant, Side};
pub use contest::{run_contest, Contest, ContestState};
pub use dice::{DiceRoller, FixedRolls, GameRng, DIE_FACES};
pub use engine::RoundOutcome;
pub use log::{ContestLog, RoundRecord};
