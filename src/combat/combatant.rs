//! Combatants and the side handle used to refer to them inside a contest

use serde::{Deserialize, Serialize};

/// One of the two participants of a contest.
///
/// Name, strength and attack are fixed once constructed. Health is the only
/// attribute the engine changes, and it never drops below zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combatant {
    name: String,
    health: i64,
    strength: i64,
    attack: i64,
}

impl Combatant {
    pub fn new(name: impl Into<String>, health: i64, strength: i64, attack: i64) -> Self {
        Self {
            name: name.into(),
            health,
            strength,
            attack,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current health
    pub fn health(&self) -> i64 {
        self.health
    }

    pub fn strength(&self) -> i64 {
        self.strength
    }

    pub fn attack(&self) -> i64 {
        self.attack
    }

    /// Subtract `damage` from health, flooring at zero.
    /// Returns the health after the hit.
    pub(crate) fn take_damage(&mut self, damage: i64) -> i64 {
        debug_assert!(damage >= 0, "take_damage: damage cannot be negative, got {}", damage);
        self.health = self.health.saturating_sub(damage).max(0);
        self.health
    }
}

/// Handle naming one of the two combatants of a contest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// The other side
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}
