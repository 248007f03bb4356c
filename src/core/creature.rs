//! The creature entity.

use serde::{Deserialize, Serialize};

use super::entity::TargetId;
use super::player::PlayerSide;

/// A creature in play.
///
/// Attack is non-negative by construction. Health may go non-positive
/// transiently: the drain step applies damage first and the death
/// consequence is derived afterwards by the event hub cascade.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    /// Stable identity, unique within the match.
    pub id: TargetId,

    /// Display name.
    pub name: String,

    /// Attack value dealt when this creature's declared attack resolves.
    pub attack: i32,

    /// Current health.
    pub health: i32,

    /// The side controlling this creature.
    pub owner: PlayerSide,
}

impl Creature {
    /// Create a creature. Negative attack values are clamped to zero.
    #[must_use]
    pub fn new(
        id: TargetId,
        name: impl Into<String>,
        attack: i32,
        health: i32,
        owner: PlayerSide,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            attack: attack.max(0),
            health,
            owner,
        }
    }

    /// Whether this creature's health has been reduced to zero or below.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

impl std::fmt::Display for Creature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}/{})", self.name, self.attack, self.health)
    }
}
