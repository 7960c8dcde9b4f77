//! Card table keyed uniquely by term and by definition.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::models::Card;

/// Why a card could not be inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conflict {
    Term,
    Definition,
}

/// The live card collection.
///
/// Cards are owned by the term map; the definition map only points back at
/// the owning term, so both views always resolve to the same card. Cards
/// keep the order they were first added in. All mutation goes through this
/// type.
#[derive(Debug, Default)]
pub struct CardCollection {
    by_term: IndexMap<String, Card>,
    by_definition: HashMap<String, String>,
}

impl CardCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.by_term.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_term.is_empty()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.get(term).is_some()
    }

    pub fn contains_definition(&self, definition: &str) -> bool {
        self.by_definition.contains_key(definition)
    }

    pub fn get(&self, term: &str) -> Option<&Card> {
        self.by_term.get(term)
    }

    pub fn get_by_definition(&self, definition: &str) -> Option<&Card> {
        self.by_definition
            .get(definition)
            .and_then(|term| self.by_term.get(term))
    }

    /// The `index`-th card in insertion order.
    pub fn nth(&self, index: usize) -> Option<&Card> {
        self.by_term.get_index(index).map(|(_, card)| card)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.by_term.values()
    }

    /// Insert a new card, refusing duplicate terms or definitions.
    pub fn insert(&mut self, card: Card) -> Result<(), Conflict> {
        if self.contains_term(&card.term) {
            return Err(Conflict::Term);
        }
        if self.contains_definition(&card.definition) {
            return Err(Conflict::Definition);
        }
        self.link(card);
        Ok(())
    }

    /// Insert a card, replacing whatever holds its term or its definition.
    ///
    /// A replaced term keeps its position. Returns the cards that were
    /// displaced.
    pub fn upsert(&mut self, card: Card) -> Vec<Card> {
        let mut displaced = Vec::new();
        if let Some(owner) = self.by_definition.get(&card.definition).cloned() {
            if owner != card.term {
                displaced.extend(self.remove(&owner));
            }
        }
        if let Some(old) = self.by_term.get(&card.term) {
            self.by_definition.remove(&old.definition);
        }
        if let Some(old) = self.link(card) {
            displaced.insert(0, old);
        }
        displaced
    }

    /// Remove a card by term, clearing both of its slots.
    pub fn remove(&mut self, term: &str) -> Option<Card> {
        let card = self.by_term.shift_remove(term)?;
        self.by_definition.remove(&card.definition);
        Some(card)
    }

    /// Bump the wrong-answer count of `term`, returning the new count.
    pub fn record_wrong_answer(&mut self, term: &str) -> Option<u32> {
        let card = self.by_term.get_mut(term)?;
        card.wrong_answers = card.wrong_answers.saturating_add(1);
        Some(card.wrong_answers)
    }

    pub fn reset_stats(&mut self) {
        for card in self.by_term.values_mut() {
            card.wrong_answers = 0;
        }
    }

    /// Cards tied for the highest non-zero wrong-answer count.
    pub fn hardest(&self) -> Option<(u32, Vec<&Card>)> {
        let max = self.iter().map(|c| c.wrong_answers).max()?;
        if max == 0 {
            return None;
        }
        let cards = self.iter().filter(|c| c.wrong_answers == max).collect();
        Some((max, cards))
    }

    fn link(&mut self, card: Card) -> Option<Card> {
        self.by_definition
            .insert(card.definition.clone(), card.term.clone());
        self.by_term.insert(card.term.clone(), card)
    }
}
