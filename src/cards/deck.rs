//! An ordered draw pile.
//!
//! Cards are drawn from the top; cards may be returned to either end.
//! Drawing from an empty deck is not an error — it yields `None` and logs
//! a warning, since deck exhaustion is a normal game situation the match
//! driver decides how to punish.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::GameRng;

use super::data::CardData;

/// An ordered pile of cards, drawn from the top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<CardData>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck from a list, first entry on top.
    #[must_use]
    pub fn from_cards(cards: Vec<CardData>) -> Self {
        debug!(count = cards.len(), "deck initialized");
        Self {
            cards: cards.into(),
        }
    }

    /// Number of cards left.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is out of cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draw the top card.
    pub fn draw(&mut self) -> Option<CardData> {
        let card = self.cards.pop_front();
        if card.is_none() {
            warn!("attempted to draw from empty deck");
        }
        card
    }

    /// Put a card on top of the deck.
    pub fn add_to_top(&mut self, card: CardData) {
        debug!(card = %card, "added card to top of deck");
        self.cards.push_front(card);
    }

    /// Put a card on the bottom of the deck.
    pub fn add_to_bottom(&mut self, card: CardData) {
        debug!(card = %card, "added card to bottom of deck");
        self.cards.push_back(card);
    }

    /// Shuffle the deck with the match RNG.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<CardData> = std::mem::take(&mut self.cards).into();
        rng.shuffle(&mut cards);
        self.cards = cards.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_of(names: &[&str]) -> Deck {
        Deck::from_cards(names.iter().map(|n| CardData::new(*n, 1, 1)).collect())
    }

    #[test]
    fn test_draw_order_is_top_first() {
        let mut deck = deck_of(&["a", "b", "c"]);

        assert_eq!(deck.draw().unwrap().name, "a");
        assert_eq!(deck.draw().unwrap().name, "b");
        assert_eq!(deck.cards_remaining(), 1);
    }

    #[test]
    fn test_draw_empty() {
        let mut deck = Deck::new();
        assert!(deck.draw().is_none());
        assert!(deck.is_empty());
    }

    #[test]
    fn test_add_to_top_draws_next() {
        let mut deck = deck_of(&["a"]);
        deck.add_to_top(CardData::new("b", 1, 1));

        assert_eq!(deck.draw().unwrap().name, "b");
        assert_eq!(deck.draw().unwrap().name, "a");
    }

    #[test]
    fn test_add_to_bottom_draws_last() {
        let mut deck = deck_of(&["a"]);
        deck.add_to_bottom(CardData::new("b", 1, 1));

        assert_eq!(deck.draw().unwrap().name, "a");
        assert_eq!(deck.draw().unwrap().name, "b");
    }

    #[test]
    fn test_shuffle_deterministic_and_complete() {
        let names: Vec<String> = (0..20).map(|i| format!("card-{i}")).collect();
        let cards: Vec<CardData> = names.iter().map(|n| CardData::new(n.clone(), 1, 1)).collect();

        let mut deck_a = Deck::from_cards(cards.clone());
        let mut deck_b = Deck::from_cards(cards);
        deck_a.shuffle(&mut GameRng::new(42));
        deck_b.shuffle(&mut GameRng::new(42));

        assert_eq!(deck_a, deck_b);

        let mut drawn: Vec<String> = Vec::new();
        while let Some(card) = deck_a.draw() {
            drawn.push(card.name);
        }
        drawn.sort();
        let mut expected = names;
        expected.sort();
        assert_eq!(drawn, expected);
    }
}
