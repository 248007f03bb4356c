//! The targeting seam between the input layer and the combat resolver.
//!
//! The input collaborator owns the actual pointer/raycast mechanism. What
//! crosses the boundary is already typed: the attacking card reference and
//! the list of recognizable combatant references under the release point,
//! in front-to-back render order. The resolver only decides validity and
//! outcome — it never sees raw screen coordinates.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, PlayerSide, SlotRef, TargetId};

/// A card reference as the input layer sees it: which side owns the card,
/// and which creature it is linked to, if any. Links can dangle — the card
/// visual may outlive its creature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRef {
    /// The side that owns the card.
    pub side: PlayerSide,
    /// The linked creature, if the link is set.
    pub creature: Option<TargetId>,
}

impl CardRef {
    /// A card linked to a creature.
    #[must_use]
    pub const fn linked(side: PlayerSide, creature: TargetId) -> Self {
        Self {
            side,
            creature: Some(creature),
        }
    }

    /// A card with no creature link.
    #[must_use]
    pub const fn unlinked(side: PlayerSide) -> Self {
        Self {
            side,
            creature: None,
        }
    }
}

/// A recognizable combatant reference under the pointer.
///
/// Produced by the input layer's hit test, front-to-back. Anything that is
/// not a combatant reference (decoration, empty board) never reaches the
/// resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitTarget {
    /// A card on a battlefield.
    Card(CardRef),
    /// A battlefield slot, occupied or not.
    Slot(SlotRef),
    /// A player's portrait (their "face").
    PlayerPortrait {
        /// The portrait's owner.
        side: PlayerSide,
    },
}

impl HitTarget {
    /// The side this hit belongs to.
    #[must_use]
    pub fn side(&self) -> PlayerSide {
        match self {
            HitTarget::Card(card) => card.side,
            HitTarget::Slot(slot) => slot.side,
            HitTarget::PlayerPortrait { side } => *side,
        }
    }

    /// Whether this hit is a valid target for an attacker on the given
    /// side: it must be on the opposing side (which also rules out the
    /// attacking card itself), and a slot must actually exist on the
    /// defending battlefield.
    #[must_use]
    pub fn is_valid_target(&self, attacker_side: PlayerSide, state: &GameState) -> bool {
        if self.side() == attacker_side {
            return false;
        }
        match self {
            HitTarget::Slot(slot) => slot.index < state.player(slot.side).battlefield.slot_count(),
            _ => true,
        }
    }
}
