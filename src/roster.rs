//! Combatant attributes and the checks that gate a contest
//!
//! A contest is only constructed from a pair that passes [`validate_pair`].
//! The engine itself never re-checks these rules.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::combat::{Combatant, DIE_FACES};

/// Raw combatant attributes as entered at the menu or read from JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantAttributes {
    pub name: String,
    pub health: i64,
    pub strength: i64,
    pub attack: i64,
}

impl CombatantAttributes {
    pub fn new(name: impl Into<String>, health: i64, strength: i64, attack: i64) -> Self {
        Self {
            name: name.into(),
            health,
            strength,
            attack,
        }
    }

    pub fn into_combatant(self) -> Combatant {
        Combatant::new(self.name, self.health, self.strength, self.attack)
    }

    /// Best possible offensive roll
    pub fn max_offense(&self) -> i64 {
        self.attack.saturating_mul(DIE_FACES)
    }
}

/// Reasons a pair of combatants may not enter the arena
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Player names must not be empty.")]
    EmptyName,

    #[error("Player names must be unique.")]
    DuplicateName,

    #[error("Player health must be greater than 0.")]
    NonPositiveHealth,

    #[error("Player strength must be greater than 0.")]
    NonPositiveStrength,

    #[error("Player attack must be greater than 0.")]
    NonPositiveAttack,

    #[error("{attacker} attack is too low to damage {defender}.")]
    AttackTooLow { attacker: String, defender: String },
}

/// Check that `first` and `second` may fight each other.
///
/// Rules are applied in a fixed order and the first failure is reported.
pub fn validate_pair(
    first: &CombatantAttributes,
    second: &CombatantAttributes,
) -> Result<(), RosterError> {
    if first.name.trim().is_empty() || second.name.trim().is_empty() {
        return Err(RosterError::EmptyName);
    }
    if first.name == second.name {
        return Err(RosterError::DuplicateName);
    }
    if first.health <= 0 || second.health <= 0 {
        return Err(RosterError::NonPositiveHealth);
    }
    if first.strength <= 0 || second.strength <= 0 {
        return Err(RosterError::NonPositiveStrength);
    }
    if first.attack <= 0 || second.attack <= 0 {
        return Err(RosterError::NonPositiveAttack);
    }

    // Each side's best roll must beat the other's raw strength
    if first.max_offense() <= second.strength {
        return Err(RosterError::AttackTooLow {
            attacker: "Player 1".to_string(),
            defender: "Player 2".to_string(),
        });
    }
    if second.max_offense() <= first.strength {
        return Err(RosterError::AttackTooLow {
            attacker: "Player 2".to_string(),
            defender: "Player 1".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(name: &str, health: i64, strength: i64, attack: i64) -> CombatantAttributes {
        CombatantAttributes::new(name, health, strength, attack)
    }

    #[test]
    fn test_valid_pair() {
        assert_eq!(
            validate_pair(&attrs("X", 100, 20, 20), &attrs("Y", 60, 10, 20)),
            Ok(())
        );
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(
            validate_pair(&attrs("  ", 100, 20, 20), &attrs("Y", 60, 10, 20)),
            Err(RosterError::EmptyName)
        );
    }

    #[test]
    fn test_duplicate_name() {
        assert_eq!(
            validate_pair(&attrs("X", 100, 20, 20), &attrs("X", 60, 10, 20)),
            Err(RosterError::DuplicateName)
        );
    }

    #[test]
    fn test_non_positive_attributes() {
        assert_eq!(
            validate_pair(&attrs("X", 0, 20, 20), &attrs("Y", 60, 10, 20)),
            Err(RosterError::NonPositiveHealth)
        );
        assert_eq!(
            validate_pair(&attrs("X", 100, 20, 20), &attrs("Y", 60, -1, 20)),
            Err(RosterError::NonPositiveStrength)
        );
        assert_eq!(
            validate_pair(&attrs("X", 100, 20, 0), &attrs("Y", 60, 10, 20)),
            Err(RosterError::NonPositiveAttack)
        );
    }

    #[test]
    fn test_health_checked_before_strength() {
        assert_eq!(
            validate_pair(&attrs("X", 0, 0, 0), &attrs("Y", 60, 10, 20)),
            Err(RosterError::NonPositiveHealth)
        );
    }

    #[test]
    fn test_lethality_boundary() {
        // 5 * 6 = 30 does not strictly exceed 30
        let err = validate_pair(&attrs("X", 100, 10, 5), &attrs("Y", 60, 30, 20)).unwrap_err();
        assert_eq!(
            err,
            RosterError::AttackTooLow {
                attacker: "Player 1".to_string(),
                defender: "Player 2".to_string(),
            }
        );
        assert_eq!(err.to_string(), "Player 1 attack is too low to damage Player 2.");

        // 6 * 6 = 36 clears it
        assert!(validate_pair(&attrs("X", 100, 10, 6), &attrs("Y", 60, 30, 20)).is_ok());
    }

    #[test]
    fn test_second_player_too_weak() {
        let err = validate_pair(&attrs("X", 100, 50, 20), &attrs("Y", 60, 10, 8)).unwrap_err();
        assert_eq!(err.to_string(), "Player 2 attack is too low to damage Player 1.");
    }

    #[test]
    fn test_into_combatant() {
        let c = attrs("X", 100, 20, 15).into_combatant();
        assert_eq!(c.name(), "X");
        assert_eq!(c.health(), 100);
        assert_eq!(c.strength(), 20);
        assert_eq!(c.attack(), 15);
    }
}
