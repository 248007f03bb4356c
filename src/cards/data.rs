//! Card stat blocks.

use serde::{Deserialize, Serialize};

/// The stats a card contributes when its creature enters play.
///
/// This is pure data supplied by the card/effect collaborators; the core
/// reads it to build `Creature` entities and never interprets anything
/// beyond the fields named here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardData {
    /// Display name.
    pub name: String,

    /// Attack value of the summoned creature.
    pub attack: i32,

    /// Starting health of the summoned creature.
    pub health: i32,
}

impl CardData {
    /// Create a card stat block.
    #[must_use]
    pub fn new(name: impl Into<String>, attack: i32, health: i32) -> Self {
        Self {
            name: name.into(),
            attack,
            health,
        }
    }
}

impl std::fmt::Display for CardData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}/{})", self.name, self.attack, self.health)
    }
}
