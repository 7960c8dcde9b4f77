//! Data models for flashcards and session actions.

use serde::{Deserialize, Serialize};

/// A single flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub term: String,
    pub definition: String,
    #[serde(default)]
    pub wrong_answers: u32,
}

impl Card {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            wrong_answers: 0,
        }
    }
}

/// Outcome reported by every session action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResult {
    TermAlreadyExist,
    DefinitionAlreadyExist,
    TermNotExist,
    FileNotFound,
    Success,
    WrongAnswersNo,
    WrongAnswersYes,
    InvalidNumber,
    NoCards,
    FileError,
}

/// A menu command typed at the action prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
}

impl Action {
    /// Parse a menu line. Matching is exact and case-sensitive.
    pub fn from_input(input: &str) -> Option<Self> {
        match input {
            "add" => Some(Self::Add),
            "remove" => Some(Self::Remove),
            "import" => Some(Self::Import),
            "export" => Some(Self::Export),
            "ask" => Some(Self::Ask),
            "exit" => Some(Self::Exit),
            "log" => Some(Self::Log),
            "hardest card" => Some(Self::HardestCard),
            "reset stats" => Some(Self::ResetStats),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Import => "import",
            Self::Export => "export",
            Self::Ask => "ask",
            Self::Exit => "exit",
            Self::Log => "log",
            Self::HardestCard => "hardest card",
            Self::ResetStats => "reset stats",
        }
    }

    pub fn all() -> &'static [Action] {
        &[
            Action::Add,
            Action::Remove,
            Action::Import,
            Action::Export,
            Action::Ask,
            Action::Exit,
            Action::Log,
            Action::HardestCard,
            Action::ResetStats,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_names_parse_back() {
        for action in Action::all() {
            assert_eq!(Action::from_input(action.name()), Some(*action));
        }
    }

    #[test]
    fn test_action_matching_is_exact() {
        assert_eq!(Action::from_input("Add"), None);
        assert_eq!(Action::from_input(" add"), None);
        assert_eq!(Action::from_input("hardest"), None);
        assert_eq!(Action::from_input(""), None);
    }

    #[test]
    fn test_card_defaults_missing_wrong_answers() {
        let card: Card = serde_json::from_str(r#"{"term":"a","definition":"b"}"#).unwrap();
        assert_eq!(card, Card::new("a", "b"));
    }
}
