//! Error types for contract violations.
//!
//! Only programming-contract violations surface as errors: using the event
//! hub before initializing it, passing an entity id that does not resolve
//! to a live combatant, or asking for combat without an active match.
//! Targeting misses (no attacker, no valid target) are expected,
//! frequent outcomes and are handled as silent no-ops where they occur —
//! they never reach this type.

use thiserror::Error;

use super::entity::TargetId;

/// A contract violation in the combat core.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// An event hub operation ran before `initialize()`.
    #[error("event hub has not been initialized")]
    NotInitialized,

    /// A required player reference did not resolve to a live player.
    #[error("no player with id {0}")]
    UnknownPlayer(TargetId),

    /// A required creature reference did not resolve to a live creature.
    #[error("no creature with id {0}")]
    UnknownCreature(TargetId),

    /// A combat operation ran without a surrounding match context.
    #[error("no active match")]
    NoActiveMatch,
}
