//! Headless mode for scripted contests
//!
//! Runs a single contest from a JSON file without the interactive menu.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release -- --headless contest.json --output report.json
//! ```
//!
//! ## JSON Configuration
//!
//! ```json
//! {
//!   "combatant_a": { "name": "X", "health": 100, "strength": 20, "attack": 20 },
//!   "combatant_b": { "name": "Y", "health": 60, "strength": 10, "attack": 20 },
//!   "random_seed": 42
//! }
//! ```

pub mod config;
pub mod runner;

pub use config::ContestConfig;
pub use runner::{run_headless_contest, CombatantSummary, ContestReport};
