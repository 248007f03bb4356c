//! # duelcore
//!
//! The combat action pipeline of a two-player, turn-based card battler.
//!
//! ## Design Principles
//!
//! 1. **Everything flows through the hub**: all state-change consequences
//!    are derived and broadcast by the [`events::EventHub`]; presentation
//!    code observes the game only through its listeners.
//!
//! 2. **Declare now, resolve later**: a targeting gesture queues an
//!    immutable [`actions::GameAction`]; the queue is drained in strict
//!    FIFO order at a phase boundary the match driver chooses.
//!
//! 3. **Misses are not errors**: invalid or missed targeting gestures are
//!    silent no-ops with zero state mutation. Only contract violations
//!    (uninitialized hub, dangling ids, no active match) surface as
//!    [`core::GameError`].
//!
//! 4. **Single-threaded and synchronous**: no operation suspends or
//!    yields mid-cascade; by the time a notify call returns, every
//!    listener of every cascade step has run exactly once.
//!
//! ## Modules
//!
//! - `core`: combatant identity, players, creatures, battlefields, match
//!   state, configuration, RNG, errors
//! - `cards`: card stat blocks and draw piles
//! - `events`: the event hub and its ordered listener registries
//! - `actions`: the action sum type, the FIFO queue, indicator views
//! - `combat`: targeting seam, combat resolver, drain-and-resolve step
//! - `session`: process-level facade tying hub and match state together

pub mod actions;
pub mod cards;
pub mod combat;
pub mod core;
pub mod events;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Battlefield, Creature, GameError, GameRng, GameState, MatchConfig, Player, PlayerPair,
    PlayerSide, SlotRef, TargetId,
};

pub use crate::cards::{CardData, Deck};

pub use crate::events::{
    CreatureDamaged, CreatureDied, EventHub, GameInitialized, GameOver, GameStateChanged,
    ListenerId, PlayerDamaged,
};

pub use crate::actions::{ActionIndicator, ActionQueue, ActionTarget, GameAction};

pub use crate::combat::{CardRef, CombatResolver, HitTarget};

pub use crate::session::GameSession;
