//! Match configuration.
//!
//! The core never hardcodes gameplay numbers: starting health, battlefield
//! size, deck contents, and the shuffle seed are all supplied at match
//! start via `MatchConfig`.

use serde::{Deserialize, Serialize};

use crate::cards::CardData;

/// Configuration for a single match.
///
/// ## Example
///
/// ```
/// use duelcore::core::MatchConfig;
///
/// let config = MatchConfig::default()
///     .with_starting_health(30)
///     .with_seed(7);
/// assert_eq!(config.starting_health, 30);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Health each player starts with.
    pub starting_health: i32,

    /// Addressable slots per battlefield.
    pub battlefield_slots: usize,

    /// Seed for the match RNG (deck shuffling).
    pub seed: u64,

    /// Deck lists, first player's then second player's.
    /// Empty lists are fine; decks are optional.
    pub decks: [Vec<CardData>; 2],
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            starting_health: 20,
            battlefield_slots: 7,
            seed: 0,
            decks: [Vec::new(), Vec::new()],
        }
    }
}

impl MatchConfig {
    /// Set the starting health (builder pattern).
    #[must_use]
    pub fn with_starting_health(mut self, health: i32) -> Self {
        self.starting_health = health;
        self
    }

    /// Set the battlefield slot count (builder pattern).
    #[must_use]
    pub fn with_battlefield_slots(mut self, slots: usize) -> Self {
        self.battlefield_slots = slots;
        self
    }

    /// Set the shuffle seed (builder pattern).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set both deck lists (builder pattern).
    #[must_use]
    pub fn with_decks(mut self, first: Vec<CardData>, second: Vec<CardData>) -> Self {
        self.decks = [first, second];
        self
    }
}
