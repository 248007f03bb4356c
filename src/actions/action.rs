//! Game actions: declared-but-unresolved combat effects.
//!
//! A closed sum type over the three effect kinds the combat pipeline
//! produces. Actions are immutable once constructed; adding a kind is a
//! compile-time-checked change everywhere actions are matched.

use serde::{Deserialize, Serialize};

use crate::core::{SlotRef, TargetId};

/// One end of a pending action, for visualization and resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionTarget {
    /// A creature, by id.
    Creature(TargetId),
    /// A player, by id.
    Player(TargetId),
    /// A battlefield slot, occupied or not.
    Slot(SlotRef),
}

/// A declared combat effect, queued until the resolution phase drains it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Deal `amount` damage to a creature.
    DamageCreature {
        /// The creature taking damage.
        target: TargetId,
        /// Damage amount.
        amount: i32,
        /// The attacking creature.
        source: TargetId,
    },

    /// Deal `amount` damage to a player.
    DamagePlayer {
        /// The player taking damage.
        target: TargetId,
        /// Damage amount.
        amount: i32,
        /// The attacking creature.
        source: TargetId,
    },

    /// Mark a battlefield slot as this attacker's combat target.
    /// What the mark resolves into is decided at drain time from the
    /// slot's occupancy.
    MarkCombatTarget {
        /// The attacking creature.
        attacker: TargetId,
        /// The targeted slot.
        slot: SlotRef,
    },
}

impl GameAction {
    /// The creature this action originates from.
    #[must_use]
    pub fn source(&self) -> TargetId {
        match self {
            GameAction::DamageCreature { source, .. }
            | GameAction::DamagePlayer { source, .. } => *source,
            GameAction::MarkCombatTarget { attacker, .. } => *attacker,
        }
    }

    /// The entity or slot this action is aimed at.
    #[must_use]
    pub fn target(&self) -> ActionTarget {
        match self {
            GameAction::DamageCreature { target, .. } => ActionTarget::Creature(*target),
            GameAction::DamagePlayer { target, .. } => ActionTarget::Player(*target),
            GameAction::MarkCombatTarget { slot, .. } => ActionTarget::Slot(*slot),
        }
    }
}

impl std::fmt::Display for GameAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameAction::DamageCreature {
                target,
                amount,
                source,
            } => write!(f, "DamageCreature({source} -> {target}, {amount})"),
            GameAction::DamagePlayer {
                target,
                amount,
                source,
            } => write!(f, "DamagePlayer({source} -> {target}, {amount})"),
            GameAction::MarkCombatTarget { attacker, slot } => {
                write!(f, "MarkCombatTarget({attacker} -> {slot})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerSide;

    #[test]
    fn test_source_and_target() {
        let action = GameAction::DamageCreature {
            target: TargetId::new(5),
            amount: 3,
            source: TargetId::new(4),
        };
        assert_eq!(action.source(), TargetId::new(4));
        assert_eq!(action.target(), ActionTarget::Creature(TargetId::new(5)));

        let slot = SlotRef::new(PlayerSide::Second, 2);
        let mark = GameAction::MarkCombatTarget {
            attacker: TargetId::new(4),
            slot,
        };
        assert_eq!(mark.source(), TargetId::new(4));
        assert_eq!(mark.target(), ActionTarget::Slot(slot));
    }

    #[test]
    fn test_display() {
        let action = GameAction::DamagePlayer {
            target: TargetId::new(1),
            amount: 2,
            source: TargetId::new(6),
        };
        assert_eq!(
            format!("{}", action),
            "DamagePlayer(Target(6) -> Target(1), 2)"
        );
    }

    #[test]
    fn test_serialization() {
        let action = GameAction::MarkCombatTarget {
            attacker: TargetId::new(4),
            slot: SlotRef::new(PlayerSide::First, 0),
        };
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: GameAction = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}
