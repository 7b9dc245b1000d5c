//! A single engagement between two combatants
//!
//! A contest moves through `NotStarted -> InProgress -> Finished` in one call to
//! [`Contest::run`]. Once finished it is frozen: running it again hands back the
//! same result without rolling any more dice.

use tracing::{debug, info};

use super::combatant::{Combatant, Side};
use super::dice::DiceRoller;
use super::engine::{
    determine_starting_combatant, determine_winner, is_contest_over, resolve_round, switch_turn,
    RoundOutcome,
};
use super::log::{ContestLog, RoundRecord};

/// Lifecycle of a contest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContestState {
    NotStarted,
    InProgress,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Contest {
    combatants: [Combatant; 2],
    log: ContestLog,
    first_attacker: Option<Side>,
    result: Option<String>,
    state: ContestState,
}

impl Contest {
    /// Combatants are expected to be validated already (see [`crate::roster`]).
    pub fn new(a: Combatant, b: Combatant) -> Self {
        Self {
            combatants: [a, b],
            log: ContestLog::default(),
            first_attacker: None,
            result: None,
            state: ContestState::NotStarted,
        }
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    pub fn combatant_a(&self) -> &Combatant {
        self.combatant(Side::A)
    }

    pub fn combatant_b(&self) -> &Combatant {
        self.combatant(Side::B)
    }

    pub fn state(&self) -> ContestState {
        self.state
    }

    pub fn log(&self) -> &ContestLog {
        &self.log
    }

    /// Round narrations so far, in order
    pub fn narrations(&self) -> Vec<String> {
        self.log.narrations()
    }

    /// The result string, once the contest has finished
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Who attacked in round one, once the contest has started
    pub fn first_attacker(&self) -> Option<Side> {
        self.first_attacker
    }

    /// Side named in the result, once the contest has finished
    pub fn winner(&self) -> Option<Side> {
        if self.state != ContestState::Finished {
            return None;
        }
        if self.combatant_a().health() <= 0 {
            Some(Side::B)
        } else {
            Some(Side::A)
        }
    }

    /// Side that would attack first given the current health values
    pub fn starting_side(&self) -> Side {
        determine_starting_combatant(self.combatant_a(), self.combatant_b())
    }

    /// Run the contest to completion and return the result string.
    ///
    /// There is no round cap. If neither side can ever roll above the other's
    /// defense (possible only with attributes the roster would reject), this
    /// never returns.
    pub fn run<D: DiceRoller + ?Sized>(&mut self, dice: &mut D) -> &str {
        if self.state == ContestState::NotStarted {
            self.start();
        }

        if self.state == ContestState::InProgress {
            let mut current = self.first_attacker.unwrap_or_else(|| self.starting_side());
            while !is_contest_over(self.combatant_a().health(), self.combatant_b().health()) {
                self.play_round(current, dice);
                current = switch_turn(current);
            }
            self.finish();
        }

        self.result.as_deref().unwrap_or_default()
    }

    fn start(&mut self) {
        let first = self.starting_side();
        info!(
            "Contest started: {} ({} hp) vs {} ({} hp), {} attacks first",
            self.combatant_a().name(),
            self.combatant_a().health(),
            self.combatant_b().name(),
            self.combatant_b().health(),
            self.combatant(first).name()
        );
        self.first_attacker = Some(first);
        self.state = ContestState::InProgress;
    }

    fn play_round<D: DiceRoller + ?Sized>(&mut self, attacker: Side, dice: &mut D) -> RoundOutcome {
        let [a, b] = &mut self.combatants;
        let (attacker, defender) = match attacker {
            Side::A => (&*a, b),
            Side::B => (&*b, a),
        };

        let outcome = resolve_round(attacker, defender, dice);
        let round = self.log.len() as u32 + 1;

        debug!(
            "Round {}: {} ({} vs {}) -> {} at {} hp",
            round,
            outcome.narration,
            outcome.offensive_roll,
            outcome.defensive_roll,
            defender.name(),
            outcome.defender_health
        );

        self.log.record(RoundRecord {
            round,
            attacker: attacker.name().to_string(),
            defender: defender.name().to_string(),
            offensive_roll: outcome.offensive_roll,
            defensive_roll: outcome.defensive_roll,
            damage: outcome.damage,
            defender_health: outcome.defender_health,
            message: outcome.narration.clone(),
        });

        outcome
    }

    fn finish(&mut self) {
        let a = self.combatant_a();
        let b = self.combatant_b();
        let result = determine_winner(a.name(), a.health(), b.name(), b.health());
        info!("Contest finished after {} rounds: {}", self.log.len(), result);
        self.result = Some(result);
        self.state = ContestState::Finished;
    }
}

/// Run `contest` and hand back its narrations and result string
pub fn run_contest<D: DiceRoller + ?Sized>(
    contest: &mut Contest,
    dice: &mut D,
) -> (Vec<String>, String) {
    let result = contest.run(dice).to_string();
    (contest.narrations(), result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::dice::{FixedRolls, GameRng};

    fn contest(a: (&str, i64, i64, i64), b: (&str, i64, i64, i64)) -> Contest {
        Contest::new(
            Combatant::new(a.0, a.1, a.2, a.3),
            Combatant::new(b.0, b.1, b.2, b.3),
        )
    }

    #[test]
    fn test_new_contest_not_started() {
        let c = contest(("A", 100, 10, 10), ("B", 50, 5, 2));
        assert_eq!(c.state(), ContestState::NotStarted);
        assert!(c.result().is_none());
        assert!(c.winner().is_none());
        assert!(c.first_attacker().is_none());
        assert!(c.narrations().is_empty());
    }

    #[test]
    fn test_fixed_rolls_full_contest() {
        // Rolls of 4: B (lower health) starts, 2*4 - 10*4 = 0 damage to A.
        // A answers with 10*4 - 5*4 = 20 each round: 50 -> 30 -> 10 -> 0.
        let mut c = contest(("A", 100, 10, 10), ("B", 50, 5, 2));
        let mut dice = FixedRolls::always(4);

        let (narrations, result) = run_contest(&mut c, &mut dice);

        assert_eq!(
            narrations,
            vec![
                "B attacked A for 0 damage",
                "A attacked B for 20 damage",
                "B attacked A for 0 damage",
                "A attacked B for 20 damage",
                "B attacked A for 0 damage",
                "A attacked B for 20 damage",
            ]
        );
        assert_eq!(result, "A wins");
        assert_eq!(c.state(), ContestState::Finished);
        assert_eq!(c.first_attacker(), Some(Side::B));
        assert_eq!(c.winner(), Some(Side::A));
        assert_eq!(c.combatant_a().health(), 100);
        assert_eq!(c.combatant_b().health(), 0);
        assert_eq!(dice.rolls_made(), 12);
    }

    #[test]
    fn test_equal_health_a_strikes_first() {
        let mut c = contest(("A", 10, 1, 10), ("B", 10, 1, 10));
        let mut dice = FixedRolls::new(vec![6, 1]);

        let result = c.run(&mut dice).to_string();

        assert_eq!(c.narrations(), vec!["A attacked B for 59 damage"]);
        assert_eq!(result, "A wins");
    }

    #[test]
    fn test_finished_contest_is_idempotent() {
        let mut c = contest(("A", 100, 10, 10), ("B", 50, 5, 2));
        let mut dice = FixedRolls::always(4);

        let first = c.run(&mut dice).to_string();
        let rolls = dice.rolls_made();
        let second = c.run(&mut dice).to_string();

        assert_eq!(first, second);
        assert_eq!(dice.rolls_made(), rolls, "no dice rolled after finishing");
        assert_eq!(c.log().len(), 3 * 2);
    }

    #[test]
    fn test_identity_attributes_untouched() {
        let mut c = contest(("X", 100, 20, 20), ("Y", 60, 10, 20));
        c.run(&mut GameRng::from_seed(1));

        assert_eq!(c.combatant_a().name(), "X");
        assert_eq!(c.combatant_a().strength(), 20);
        assert_eq!(c.combatant_a().attack(), 20);
        assert_eq!(c.combatant_b().name(), "Y");
        assert_eq!(c.combatant_b().strength(), 10);
        assert_eq!(c.combatant_b().attack(), 20);
    }

    #[test]
    fn test_health_never_negative_in_log() {
        for seed in 0..50 {
            let mut c = contest(("X", 100, 20, 20), ("Y", 60, 10, 20));
            c.run(&mut GameRng::from_seed(seed));

            assert!(c.log().entries.iter().all(|e| e.defender_health >= 0));
            assert!(c.log().entries.iter().all(|e| e.damage >= 0));
            assert!(c.combatant_a().health() >= 0);
            assert!(c.combatant_b().health() >= 0);
        }
    }

    #[test]
    fn test_dyn_dice_source() {
        let mut c = contest(("A", 100, 10, 10), ("B", 50, 5, 2));
        let mut fixed = FixedRolls::always(4);
        let dice: &mut dyn DiceRoller = &mut fixed;

        assert_eq!(c.run(dice), "A wins");
    }

    #[test]
    fn test_already_defeated_side_yields_no_rounds() {
        let mut c = contest(("A", 0, 10, 10), ("B", 50, 5, 2));
        let mut dice = FixedRolls::always(4);

        assert_eq!(c.run(&mut dice), "B wins");
        assert!(c.narrations().is_empty());
        assert_eq!(dice.rolls_made(), 0);
    }
}
