//! Headless contest execution
//!
//! Runs one contest without the menu, prints its narration and optionally writes
//! a JSON report, suitable for scripting and automated checks.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::combat::{Combatant, Contest, GameRng, RoundRecord, Side};
use crate::error::Result;

use super::config::ContestConfig;

/// Result of a completed headless contest
///
/// This struct provides programmatic access to contest results for testing and analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestReport {
    pub combatant_a: CombatantSummary,
    pub combatant_b: CombatantSummary,
    /// Who attacked in round one
    pub first_attacker: Option<Side>,
    /// Name of the winning combatant
    pub winner: Option<String>,
    /// Result line, e.g. "X wins"
    pub result: Option<String>,
    pub rounds: Vec<RoundRecord>,
    /// Random seed used (if deterministic mode)
    pub random_seed: Option<u64>,
}

/// Statistics for a single combatant after the contest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantSummary {
    pub name: String,
    pub starting_health: i64,
    /// Health remaining at contest end (0 if defeated)
    pub final_health: i64,
    pub strength: i64,
    pub attack: i64,
    /// Total damage dealt during the contest
    pub damage_dealt: i64,
}

impl ContestReport {
    /// Snapshot a contest. Winner and result stay empty until it has finished.
    pub fn from_contest(
        contest: &Contest,
        starting_health: (i64, i64),
        random_seed: Option<u64>,
    ) -> Self {
        let summarize = |c: &Combatant, starting_health: i64| CombatantSummary {
            name: c.name().to_string(),
            starting_health,
            final_health: c.health(),
            strength: c.strength(),
            attack: c.attack(),
            damage_dealt: contest.log().damage_dealt_by(c.name()),
        };

        Self {
            combatant_a: summarize(contest.combatant_a(), starting_health.0),
            combatant_b: summarize(contest.combatant_b(), starting_health.1),
            first_attacker: contest.first_attacker(),
            winner: contest
                .winner()
                .map(|side| contest.combatant(side).name().to_string()),
            result: contest.result().map(str::to_string),
            rounds: contest.log().entries.clone(),
            random_seed,
        }
    }

    /// Save the report as pretty-printed JSON
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Run a headless contest with the given configuration.
///
/// `output_override` takes precedence over the config's `output_path`.
pub fn run_headless_contest<W: Write>(
    config: &ContestConfig,
    output_override: Option<PathBuf>,
    out: &mut W,
) -> Result<ContestReport> {
    config.validate()?;

    writeln!(out, "Starting headless contest...")?;
    writeln!(
        out,
        "  A: {} (health {}, strength {}, attack {})",
        config.combatant_a.name,
        config.combatant_a.health,
        config.combatant_a.strength,
        config.combatant_a.attack
    )?;
    writeln!(
        out,
        "  B: {} (health {}, strength {}, attack {})",
        config.combatant_b.name,
        config.combatant_b.health,
        config.combatant_b.strength,
        config.combatant_b.attack
    )?;

    let mut dice = match config.random_seed {
        Some(seed) => {
            info!("Using deterministic RNG with seed: {}", seed);
            GameRng::from_seed(seed)
        }
        None => {
            info!("Using non-deterministic RNG (no seed provided)");
            GameRng::from_entropy()
        }
    };

    let starting_health = (config.combatant_a.health, config.combatant_b.health);
    let mut contest = Contest::new(
        config.combatant_a.clone().into_combatant(),
        config.combatant_b.clone().into_combatant(),
    );
    let result = contest.run(&mut dice).to_string();

    for narration in contest.narrations() {
        writeln!(out, "{}", narration)?;
    }
    writeln!(out, "Contest result: {}", result)?;

    let report = ContestReport::from_contest(&contest, starting_health, dice.seed);

    let output_path = output_override.or_else(|| config.output_path.as_ref().map(PathBuf::from));
    if let Some(path) = output_path {
        report.save_to_file(&path)?;
        writeln!(out, "Contest complete. Report saved to: {}", path.display())?;
    }

    Ok(report)
}
