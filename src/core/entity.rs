//! Combatant identity.
//!
//! Every combatant — creature or player — carries a stable, unique
//! `TargetId` used for all cross-references. Ids are allocated
//! monotonically by [`GameState`](super::GameState) and are never reused
//! within a running match, so a stale id simply fails to resolve instead
//! of aliasing a different combatant.
//!
//! `SlotRef` addresses a battlefield position. Slots exist independently
//! of their occupants: an empty slot is a legal combat target.

use serde::{Deserialize, Serialize};

use super::player::PlayerSide;

/// Unique identifier for any combatant in a match.
///
/// Players and creatures both have TargetIds. Resolution against the
/// current `GameState` decides which kind an id refers to.
///
/// ```
/// use duelcore::core::TargetId;
///
/// let id = TargetId::new(7);
/// assert_eq!(id.raw(), 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TargetId(pub u32);

impl TargetId {
    /// Create a target ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for TargetId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Target({})", self.0)
    }
}

/// A positional reference to a battlefield slot.
///
/// Slots are addressable even when no creature occupies them; combat may
/// target an empty slot (see `GameAction::MarkCombatTarget`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotRef {
    /// Which player's battlefield the slot belongs to.
    pub side: PlayerSide,
    /// Zero-based slot index on that battlefield.
    pub index: usize,
}

impl SlotRef {
    /// Create a slot reference.
    #[must_use]
    pub const fn new(side: PlayerSide, index: usize) -> Self {
        Self { side, index }
    }
}

impl std::fmt::Display for SlotRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot({}, {})", self.side, self.index)
    }
}
