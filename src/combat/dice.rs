//! Dice sources for round resolution
//!
//! The engine never touches a global RNG. Every die is drawn from a [`DiceRoller`]
//! handed to it by the caller, so tests can pin the faces with [`FixedRolls`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of faces on the contest die
pub const DIE_FACES: i64 = 6;

/// Source of six-sided die rolls.
pub trait DiceRoller {
    /// Roll one die, returning a face in `1..=6`.
    fn roll_d6(&mut self) -> i64;
}

impl<D: DiceRoller + ?Sized> DiceRoller for &mut D {
    fn roll_d6(&mut self) -> i64 {
        (**self).roll_d6()
    }
}

/// Production dice backed by a seedable `StdRng`
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: StdRng,
    /// The seed used to initialize this RNG (if deterministic)
    pub seed: Option<u64>,
}

impl GameRng {
    /// Create a new GameRng with a specific seed for reproducible runs
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create a new GameRng with random entropy (non-deterministic)
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Seeded when a seed is given, entropy otherwise
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl DiceRoller for GameRng {
    fn roll_d6(&mut self) -> i64 {
        self.rng.gen_range(1..=DIE_FACES)
    }
}

/// Replays a fixed sequence of faces, wrapping around at the end.
///
/// Faces are returned as given; no range check is applied.
#[derive(Debug, Clone)]
pub struct FixedRolls {
    faces: Vec<i64>,
    next: usize,
}

impl FixedRolls {
    /// Cycle through `faces` in order. An empty sequence behaves like `always(1)`.
    pub fn new(mut faces: Vec<i64>) -> Self {
        if faces.is_empty() {
            faces.push(1);
        }
        Self { faces, next: 0 }
    }

    /// Every roll shows the same face
    pub fn always(face: i64) -> Self {
        Self::new(vec![face])
    }

    /// How many dice have been rolled so far
    pub fn rolls_made(&self) -> usize {
        self.next
    }
}

impl DiceRoller for FixedRolls {
    fn roll_d6(&mut self) -> i64 {
        let face = self.faces[self.next % self.faces.len()];
        self.next += 1;
        face
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_rng_faces_in_range() {
        let mut rng = GameRng::from_seed(7);
        for _ in 0..1000 {
            let face = rng.roll_d6();
            assert!((1..=6).contains(&face), "face {} out of range", face);
        }
    }

    #[test]
    fn test_game_rng_hits_every_face() {
        let mut rng = GameRng::from_seed(99);
        let mut seen = [false; 6];
        for _ in 0..1000 {
            seen[(rng.roll_d6() - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "all six faces should appear");
    }

    #[test]
    fn test_same_seed_same_rolls() {
        let mut a = GameRng::from_seed(12345);
        let mut b = GameRng::from_seed(12345);
        let rolls_a: Vec<i64> = (0..32).map(|_| a.roll_d6()).collect();
        let rolls_b: Vec<i64> = (0..32).map(|_| b.roll_d6()).collect();
        assert_eq!(rolls_a, rolls_b);
        assert_eq!(a.seed, Some(12345));
    }

    #[test]
    fn test_entropy_rng_has_no_seed() {
        assert!(GameRng::from_entropy().seed.is_none());
        assert!(GameRng::from_optional_seed(None).seed.is_none());
        assert_eq!(GameRng::from_optional_seed(Some(3)).seed, Some(3));
    }

    #[test]
    fn test_fixed_rolls_cycle() {
        let mut dice = FixedRolls::new(vec![1, 2, 3]);
        let rolls: Vec<i64> = (0..7).map(|_| dice.roll_d6()).collect();
        assert_eq!(rolls, vec![1, 2, 3, 1, 2, 3, 1]);
        assert_eq!(dice.rolls_made(), 7);
    }

    #[test]
    fn test_fixed_rolls_empty_defaults_to_one() {
        let mut dice = FixedRolls::new(Vec::new());
        assert_eq!(dice.roll_d6(), 1);
    }

    #[test]
    fn test_mut_ref_is_a_roller() {
        fn roll_once<D: DiceRoller>(mut dice: D) -> i64 {
            dice.roll_d6()
        }

        let mut dice = FixedRolls::always(5);
        assert_eq!(roll_once(&mut dice), 5);
        assert_eq!(dice.rolls_made(), 1);
    }
}
