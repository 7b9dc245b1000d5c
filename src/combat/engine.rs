//! Contest rules
//!
//! Pure functions covering starting order, round resolution, turn alternation,
//! termination and winner determination. Nothing here does I/O or fails; dice
//! come from the caller.

use super::combatant::{Combatant, Side};
use super::dice::DiceRoller;

/// Result of resolving one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    /// attack * offensive die
    pub offensive_roll: i64,
    /// strength * defensive die
    pub defensive_roll: i64,
    /// max(0, offensive - defensive)
    pub damage: i64,
    /// Attacker health, unchanged by the round
    pub attacker_health: i64,
    /// Defender health after the damage, floored at zero
    pub defender_health: i64,
    pub narration: String,
}

/// The combatant with lower-or-equal health attacks first. Ties go to A.
pub fn determine_starting_combatant(a: &Combatant, b: &Combatant) -> Side {
    if a.health() <= b.health() {
        Side::A
    } else {
        Side::B
    }
}

/// A contest is over once either side is at or below zero health
pub fn is_contest_over(health_a: i64, health_b: i64) -> bool {
    health_a <= 0 || health_b <= 0
}

/// Strict alternation between the two sides
pub fn switch_turn(current: Side) -> Side {
    current.opponent()
}

/// Damage is whatever the offense beats the defense by, never negative
pub fn compute_damage(offensive_roll: i64, defensive_roll: i64) -> i64 {
    offensive_roll.saturating_sub(defensive_roll).max(0)
}

/// Narration line for a round
pub fn narrate(attacker: &str, defender: &str, damage: i64) -> String {
    format!("{} attacked {} for {} damage", attacker, defender, damage)
}

/// Resolve one attack of `attacker` against `defender`.
///
/// The offensive die is rolled first, then the defensive die. Only the
/// defender's health changes.
pub fn resolve_round<D: DiceRoller + ?Sized>(
    attacker: &Combatant,
    defender: &mut Combatant,
    dice: &mut D,
) -> RoundOutcome {
    let offensive_roll = attacker.attack().saturating_mul(dice.roll_d6());
    let defensive_roll = defender.strength().saturating_mul(dice.roll_d6());
    let damage = compute_damage(offensive_roll, defensive_roll);
    let defender_health = defender.take_damage(damage);

    RoundOutcome {
        offensive_roll,
        defensive_roll,
        damage,
        attacker_health: attacker.health(),
        defender_health,
        narration: narrate(attacker.name(), defender.name(), damage),
    }
}

/// Result string for a finished contest.
///
/// A is checked first: if both sides are down, B is declared the winner.
pub fn determine_winner(name_a: &str, health_a: i64, name_b: &str, _health_b: i64) -> String {
    if health_a <= 0 {
        format!("{} wins", name_b)
    } else {
        format!("{} wins", name_a)
    }
}
