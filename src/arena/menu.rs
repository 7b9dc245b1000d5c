//! Interactive arena menu
//!
//! Three nested loops: the main menu, the arena lobby and the match loop. Input is
//! line oriented; end of input at any prompt ends the session quietly.

use std::io::{self, BufRead, Write};
use tracing::{debug, info};

use crate::combat::{Contest, DiceRoller};
use crate::roster::{validate_pair, CombatantAttributes};

use super::records::MatchRecords;
use super::theme::{Theme, Tone};

/// Whether the session keeps going after a menu returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// A line answer to a numeric prompt
enum Answer {
    Number(i64),
    Invalid(String),
    Eof,
}

/// Outcome of asking for one combatant's attributes
enum Collected {
    Ready(CombatantAttributes),
    Invalid(String),
    Eof,
}

pub struct Arena<R, W, D> {
    input: R,
    output: W,
    theme: Theme,
    dice: D,
    records: MatchRecords,
}

impl<R: BufRead, W: Write, D: DiceRoller> Arena<R, W, D> {
    pub fn new(input: R, output: W, theme: Theme, dice: D) -> Self {
        Self {
            input,
            output,
            theme,
            dice,
            records: MatchRecords::default(),
        }
    }

    /// Results of the matches played so far
    pub fn records(&self) -> &MatchRecords {
        &self.records
    }

    /// Run the main menu until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.say(Tone::Title, "Welcome to Magical Arena 1.0!")?;
            self.say(Tone::Notice, "Press 1 to enter the arena or press 0 to exit")?;

            match self.ask_number("Enter your choice: ")? {
                Answer::Eof => return Ok(()),
                Answer::Invalid(_) => {
                    self.say(Tone::Error, "Please enter a valid choice or press 0 to exit")?;
                }
                Answer::Number(0) => {
                    self.say(Tone::Error, "Exiting the application. Goodbye!")?;
                    return Ok(());
                }
                Answer::Number(1) => {
                    if self.lobby()? == Flow::Quit {
                        return Ok(());
                    }
                }
                Answer::Number(_) => {
                    self.say(Tone::Error, "Invalid choice. Please enter 0 or 1.")?;
                }
            }
        }
    }

    fn lobby(&mut self) -> io::Result<Flow> {
        self.say(Tone::Notice, "Entering the arena...")?;
        self.say(Tone::Title, "Welcome to the arena!")?;
        self.say(Tone::Menu, "Press 1 to teleport into matches or press 0 to exit")?;

        match self.ask_number("Enter your choice: ")? {
            Answer::Eof => Ok(Flow::Quit),
            Answer::Invalid(input) => {
                self.say(Tone::Error, &format!("Invalid input: {}", input))?;
                Ok(Flow::Continue)
            }
            Answer::Number(1) => {
                let flow = self.match_loop()?;
                if flow == Flow::Continue {
                    self.say(Tone::Notice, "Leaving the arena.")?;
                }
                Ok(flow)
            }
            Answer::Number(0) => {
                self.say(Tone::Notice, "Exiting the arena.")?;
                Ok(Flow::Continue)
            }
            Answer::Number(_) => {
                self.say(Tone::Error, "Invalid choice. Returning to the main menu.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn match_loop(&mut self) -> io::Result<Flow> {
        loop {
            self.say(Tone::Menu, "Press 1 to start a match or press 0 to exit the arena")?;

            match self.ask_number("Enter your choice: ")? {
                Answer::Eof => return Ok(Flow::Quit),
                Answer::Invalid(_) => {
                    self.say(Tone::Error, "Please enter a valid choice or press 0 to exit")?;
                    return Ok(Flow::Continue);
                }
                Answer::Number(0) => {
                    self.say(Tone::Notice, "Exiting the matches section.")?;
                    return Ok(Flow::Continue);
                }
                Answer::Number(1) => {
                    if self.play_match()? == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                }
                Answer::Number(_) => {
                    self.say(Tone::Error, "Invalid choice. Please enter 0 or 1.")?;
                }
            }
        }
    }

    fn play_match(&mut self) -> io::Result<Flow> {
        self.say(Tone::Title, "Entering a new match...")?;

        let first = match self.collect_combatant("Player 1")? {
            Collected::Ready(attrs) => attrs,
            Collected::Invalid(reason) => return self.abort_match("Player 1", &reason),
            Collected::Eof => return Ok(Flow::Quit),
        };
        let second = match self.collect_combatant("Player 2")? {
            Collected::Ready(attrs) => attrs,
            Collected::Invalid(reason) => return self.abort_match("Player 2", &reason),
            Collected::Eof => return Ok(Flow::Quit),
        };

        if let Err(e) = validate_pair(&first, &second) {
            debug!("Rejected match setup: {}", e);
            self.say(Tone::Error, &e.to_string())?;
            return Ok(Flow::Continue);
        }

        let mut contest = Contest::new(first.into_combatant(), second.into_combatant());
        let result = contest.run(&mut self.dice).to_string();

        for narration in contest.narrations() {
            self.say(Tone::Narration, &narration)?;
        }

        let match_no = self.records.record(result.clone());
        info!("Match {} recorded: {}", match_no, result);
        self.say(Tone::Success, &format!("Match result: {}", result))?;

        Ok(Flow::Continue)
    }

    fn abort_match(&mut self, label: &str, reason: &str) -> io::Result<Flow> {
        self.say(Tone::Error, &format!("Error creating {}: {}", label, reason))?;
        Ok(Flow::Continue)
    }

    fn collect_combatant(&mut self, label: &str) -> io::Result<Collected> {
        self.say(Tone::Title, &format!("Enter attributes for {}:", label))?;

        let Some(name) = self.ask_line("Name: ")? else {
            return Ok(Collected::Eof);
        };

        let mut values = [0i64; 3];
        for (slot, field) in values.iter_mut().zip(["health", "strength", "attack"]) {
            let prompt = format!("{}{}: ", field[..1].to_uppercase(), &field[1..]);
            let Some(raw) = self.ask_line(&prompt)? else {
                return Ok(Collected::Eof);
            };
            match raw.parse::<i64>() {
                Ok(value) => *slot = value,
                Err(e) => {
                    return Ok(Collected::Invalid(format!(
                        "failed to get player {}: {}",
                        field, e
                    )))
                }
            }
        }

        let [health, strength, attack] = values;
        Ok(Collected::Ready(CombatantAttributes::new(name, health, strength, attack)))
    }

    fn ask_number(&mut self, prompt: &str) -> io::Result<Answer> {
        Ok(match self.ask_line(prompt)? {
            None => Answer::Eof,
            Some(line) => match line.parse::<i64>() {
                Ok(n) => Answer::Number(n),
                Err(_) => Answer::Invalid(line),
            },
        })
    }

    /// Prompt and read one trimmed line. `None` at end of input.
    /// Bytes that are not UTF-8 become U+FFFD instead of failing the session.
    fn ask_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    fn say(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", self.theme.paint(tone, text))
    }
}
