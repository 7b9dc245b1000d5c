//! JSON configuration parsing for headless mode

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::roster::{validate_pair, CombatantAttributes};

/// Headless contest configuration loaded from JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContestConfig {
    /// First combatant (side A)
    pub combatant_a: CombatantAttributes,
    /// Second combatant (side B)
    pub combatant_b: CombatantAttributes,
    /// Random seed for reproducing a contest
    #[serde(default)]
    pub random_seed: Option<u64>,
    /// Where to write the JSON contest report (optional)
    #[serde(default)]
    pub output_path: Option<String>,
}

impl ContestConfig {
    /// Load configuration from a JSON file and validate the combatants
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(contents: &str) -> Result<Self> {
        let config: ContestConfig = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validate_pair(&self.combatant_a, &self.combatant_b)?;
        Ok(())
    }

    /// Pick the dice seed: the command line wins, then this config, then the settings file
    pub fn resolve_seed(&mut self, cli_seed: Option<u64>, settings_seed: Option<u64>) {
        self.random_seed = cli_seed.or(self.random_seed).or(settings_seed);
    }
}
