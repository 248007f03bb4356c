//! Core data model: combatant identity, players, creatures, battlefields,
//! match state, configuration, RNG, and error types.

pub mod battlefield;
pub mod config;
pub mod creature;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use battlefield::Battlefield;
pub use config::MatchConfig;
pub use creature::Creature;
pub use entity::{SlotRef, TargetId};
pub use error::GameError;
pub use player::{Player, PlayerPair, PlayerSide};
pub use rng::GameRng;
pub use state::GameState;
