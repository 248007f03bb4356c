//! A player's battlefield: the ordered collection of their creatures in play.
//!
//! The battlefield is owned by exactly one `Player` and mutated only
//! through its narrow API; everything else gets read access. Creature
//! order is insertion order, which is also slot order: the creature at
//! position `i` occupies slot `i`. Slots past the current creature count
//! up to `slot_count` are empty but still addressable.

use serde::{Deserialize, Serialize};

use super::creature::Creature;
use super::entity::TargetId;

/// Ordered collection of a player's creatures with a fixed slot count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Battlefield {
    creatures: Vec<Creature>,
    slot_count: usize,
}

impl Battlefield {
    /// Create an empty battlefield with the given number of slots.
    #[must_use]
    pub fn new(slot_count: usize) -> Self {
        Self {
            creatures: Vec::new(),
            slot_count,
        }
    }

    /// Number of addressable slots, occupied or not.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Number of creatures in play.
    #[must_use]
    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    /// Whether no creatures are in play.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// Whether another creature fits.
    #[must_use]
    pub fn has_room(&self) -> bool {
        self.creatures.len() < self.slot_count
    }

    /// Add a creature to the next free slot.
    ///
    /// Returns `false` (and leaves the battlefield unchanged) when full.
    pub fn push(&mut self, creature: Creature) -> bool {
        if !self.has_room() {
            return false;
        }
        self.creatures.push(creature);
        true
    }

    /// Remove a creature by id, preserving the order of the rest.
    pub fn remove(&mut self, id: TargetId) -> Option<Creature> {
        let index = self.creatures.iter().position(|c| c.id == id)?;
        Some(self.creatures.remove(index))
    }

    /// Find a creature by id.
    #[must_use]
    pub fn find(&self, id: TargetId) -> Option<&Creature> {
        self.creatures.iter().find(|c| c.id == id)
    }

    /// Find a creature by id, mutably.
    pub fn find_mut(&mut self, id: TargetId) -> Option<&mut Creature> {
        self.creatures.iter_mut().find(|c| c.id == id)
    }

    /// The creature occupying a slot, if any.
    #[must_use]
    pub fn creature_in_slot(&self, index: usize) -> Option<&Creature> {
        self.creatures.get(index)
    }

    /// Iterate creatures in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.creatures.iter()
    }
}
