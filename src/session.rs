//! The interactive flashcard session: menu loop and action handlers.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use rand::Rng;

use crate::collection::{CardCollection, Conflict};
use crate::console::{Console, Tone};
use crate::error::StorageError;
use crate::models::{Action, ActionResult, Card};
use crate::storage;

fn menu_prompt() -> String {
    let actions: Vec<&str> = Action::all().iter().map(|a| a.name()).collect();
    format!("Input the action ({}):", actions.join(", "))
}

/// One run of the trainer, owning the cards and the console.
pub struct Session<C, G> {
    console: C,
    rng: G,
    cards: CardCollection,
}

impl<C: Console, G: Rng> Session<C, G> {
    pub fn new(console: C, rng: G) -> Self {
        Self {
            console,
            rng,
            cards: CardCollection::new(),
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Main Loop
    // ══════════════════════════════════════════════════════════════════════

    /// Run the menu loop until `exit` or end of input.
    ///
    /// `import` is loaded before the first prompt; `export` is written after
    /// the farewell, even when the loop stopped on a console error.
    pub fn run(&mut self, import: Option<&Path>, export: Option<&Path>) -> Result<()> {
        if let Some(path) = import {
            self.import_from(path).context("Failed to import cards at startup")?;
        }

        let outcome = self.menu_loop();
        if let Err(e) = &outcome {
            log::warn!("menu loop stopped: {}", e);
        }

        self.console.write_line("Bye bye!")?;
        if let Some(path) = export {
            self.export_to(path).context("Failed to export cards on exit")?;
        }
        outcome.context("Console I/O failed")
    }

    fn menu_loop(&mut self) -> io::Result<()> {
        let menu = menu_prompt();
        loop {
            self.console.write_line("")?;
            self.console.write_styled(&menu, Tone::Prompt)?;
            let Some(choice) = self.console.read_line()? else {
                log::debug!("input closed, leaving session");
                break;
            };
            let Some(action) = Action::from_input(&choice) else {
                continue;
            };
            if action == Action::Exit {
                break;
            }

            match self.perform(action) {
                Ok(result) => log::debug!("{} -> {:?}", action.name(), result),
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    log::debug!("input closed during {}", action.name());
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Run a single menu action.
    pub fn perform(&mut self, action: Action) -> io::Result<ActionResult> {
        match action {
            Action::Add => self.add_card(),
            Action::Remove => self.remove_card(),
            Action::Import => {
                let path = self.prompt("File name:")?;
                self.import_from(Path::new(&path))
            }
            Action::Export => {
                let path = self.prompt("File name:")?;
                self.export_to(Path::new(&path))
            }
            Action::Ask => self.ask(),
            Action::Log => self.save_log(),
            Action::HardestCard => self.hardest_cards(),
            Action::ResetStats => self.reset_stats(),
            Action::Exit => Ok(ActionResult::Success),
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Actions
    // ══════════════════════════════════════════════════════════════════════

    fn add_card(&mut self) -> io::Result<ActionResult> {
        let term = self.prompt("The card:")?;
        if self.cards.contains_term(&term) {
            return self.report_term_exists(&term);
        }

        let definition = self.prompt("The definition of the card:")?;
        let message = format!("The pair (\"{}\":\"{}\") has been added.", term, definition);
        match self.cards.insert(Card::new(term.clone(), definition.clone())) {
            Ok(()) => {
                self.say(Tone::Success, &message)?;
                Ok(ActionResult::Success)
            }
            Err(Conflict::Definition) => {
                self.say(
                    Tone::Error,
                    &format!("The definition \"{}\" already exists.", definition),
                )?;
                Ok(ActionResult::DefinitionAlreadyExist)
            }
            Err(Conflict::Term) => self.report_term_exists(&term),
        }
    }

    fn report_term_exists(&mut self, term: &str) -> io::Result<ActionResult> {
        self.say(Tone::Error, &format!("The card \"{}\" already exists.", term))?;
        Ok(ActionResult::TermAlreadyExist)
    }

    fn remove_card(&mut self) -> io::Result<ActionResult> {
        let term = self.prompt("Which card?")?;
        match self.cards.remove(&term) {
            Some(card) => {
                log::debug!("removed {:?}", card);
                self.say(Tone::Success, "The card has been removed.")?;
                Ok(ActionResult::Success)
            }
            None => {
                self.say(
                    Tone::Error,
                    &format!("Can't remove \"{}\": there is no such card.", term),
                )?;
                Ok(ActionResult::TermNotExist)
            }
        }
    }

    /// Load cards from `path`, replacing cards that share a term or definition.
    pub fn import_from(&mut self, path: &Path) -> io::Result<ActionResult> {
        match storage::load_cards(path) {
            Ok(cards) => {
                let count = cards.len();
                for card in cards {
                    for old in self.cards.upsert(card) {
                        log::debug!("import replaced {:?}", old);
                    }
                }
                self.say(Tone::Success, &format!("{} cards have been loaded.", count))?;
                Ok(ActionResult::Success)
            }
            Err(StorageError::NotFound { .. }) => {
                self.say(Tone::Error, "File not found.")?;
                Ok(ActionResult::FileNotFound)
            }
            Err(e) => {
                log::warn!("import from {:?} failed: {}", path, e);
                self.say(
                    Tone::Error,
                    &format!("Could not read cards from \"{}\": {}", path.display(), e),
                )?;
                Ok(ActionResult::FileError)
            }
        }
    }

    /// Write every card to `path`.
    pub fn export_to(&mut self, path: &Path) -> io::Result<ActionResult> {
        let saved = storage::save_cards(path, self.cards.iter());
        match saved {
            Ok(count) => {
                self.say(Tone::Success, &format!("{} cards have been saved", count))?;
                Ok(ActionResult::Success)
            }
            Err(e) => {
                log::warn!("export to {:?} failed: {}", path, e);
                self.say(
                    Tone::Error,
                    &format!("Could not save cards to \"{}\": {}", path.display(), e),
                )?;
                Ok(ActionResult::FileError)
            }
        }
    }

    fn ask(&mut self) -> io::Result<ActionResult> {
        let answer = self.prompt("How many times to ask?")?;
        let Ok(rounds) = answer.trim().parse::<u32>() else {
            self.say(Tone::Error, "Please enter a whole number.")?;
            return Ok(ActionResult::InvalidNumber);
        };
        if rounds > 0 && self.cards.is_empty() {
            self.say(Tone::Error, "There are no cards to ask about.")?;
            return Ok(ActionResult::NoCards);
        }

        for _ in 0..rounds {
            self.ask_round()?;
        }
        Ok(ActionResult::Success)
    }

    fn ask_round(&mut self) -> io::Result<()> {
        let index = self.rng.random_range(0..self.cards.len());
        let Some(card) = self.cards.nth(index).cloned() else {
            return Ok(());
        };

        let answer = self.prompt(&format!("Print the definition of \"{}\":", card.term))?;
        if answer == card.definition {
            return self.say(Tone::Success, "Correct!");
        }

        let message = match self.cards.get_by_definition(&answer) {
            Some(other) => format!(
                "Wrong. The right answer is \"{}\", but your definition is correct for \"{}\".",
                card.definition, other.term
            ),
            None => format!("Wrong. The right answer is \"{}\".", card.definition),
        };
        if let Some(count) = self.cards.record_wrong_answer(&card.term) {
            log::debug!("{:?} now has {} wrong answers", card.term, count);
        }
        self.say(Tone::Error, &message)
    }

    fn save_log(&mut self) -> io::Result<ActionResult> {
        let name = self.prompt("File name:")?;
        let path = Path::new(&name);
        let saved = storage::save_log(path, self.console.session_log().lines());
        match saved {
            Ok(()) => {
                self.say(Tone::Success, "The log has been saved.")?;
                Ok(ActionResult::Success)
            }
            Err(e) => {
                log::warn!("saving log to {:?} failed: {}", path, e);
                self.say(
                    Tone::Error,
                    &format!("Could not save the log to \"{}\": {}", path.display(), e),
                )?;
                Ok(ActionResult::FileError)
            }
        }
    }

    fn hardest_cards(&mut self) -> io::Result<ActionResult> {
        let hardest = self.cards.hardest().map(|(max, cards)| {
            let terms: Vec<String> = cards.iter().map(|c| format!("\"{}\"", c.term)).collect();
            (max, terms)
        });
        let Some((max, terms)) = hardest else {
            self.say(Tone::Info, "There are no cards with errors.")?;
            return Ok(ActionResult::WrongAnswersNo);
        };

        let message = if terms.len() == 1 {
            format!("The hardest card is {}. You have {} errors answering it.", terms[0], max)
        } else {
            format!(
                "The hardest cards are {}. You have {} errors answering them.",
                terms.join(", "),
                max
            )
        };
        self.say(Tone::Info, &message)?;
        Ok(ActionResult::WrongAnswersYes)
    }

    fn reset_stats(&mut self) -> io::Result<ActionResult> {
        self.cards.reset_stats();
        self.say(Tone::Success, "Card statistics have been reset.")?;
        Ok(ActionResult::Success)
    }

    // ══════════════════════════════════════════════════════════════════════
    // Console Helpers
    // ══════════════════════════════════════════════════════════════════════

    fn say(&mut self, tone: Tone, line: &str) -> io::Result<()> {
        self.console.write_styled(line, tone)
    }

    /// Print `question` and read the reply. End of input is an `UnexpectedEof` error.
    fn prompt(&mut self, question: &str) -> io::Result<String> {
        self.console.write_styled(question, Tone::Prompt)?;
        self.console.read_line()?.ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "input closed at a prompt")
        })
    }
}
