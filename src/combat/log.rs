//! Contest logging
//!
//! Records every completed round for narration and post-contest reports.

use serde::{Deserialize, Serialize};

/// A single completed round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number
    pub round: u32,
    /// Name of the attacking combatant
    pub attacker: String,
    /// Name of the defending combatant
    pub defender: String,
    /// attack * offensive die
    pub offensive_roll: i64,
    /// strength * defensive die
    pub defensive_roll: i64,
    /// Damage dealt to the defender (never negative)
    pub damage: i64,
    /// Defender health once the damage landed
    pub defender_health: i64,
    /// Human-readable narration of the round
    pub message: String,
}

/// Append-only log of the rounds of one contest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestLog {
    /// All rounds in chronological order
    pub entries: Vec<RoundRecord>,
}

impl ContestLog {
    /// Append a round
    pub fn record(&mut self, entry: RoundRecord) {
        self.entries.push(entry);
    }

    /// Number of completed rounds
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Narration lines in round order
    pub fn narrations(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.message.clone()).collect()
    }

    /// Total damage dealt by the named combatant
    pub fn damage_dealt_by(&self, name: &str) -> i64 {
        self.entries
            .iter()
            .filter(|e| e.attacker == name)
            .map(|e| e.damage)
            .sum()
    }
}
