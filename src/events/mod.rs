//! Event hub: ordered listener registries and cascading notifications.

pub mod hub;
pub mod listener;

pub use hub::{
    CreatureDamaged, CreatureDied, EventHub, GameInitialized, GameOver, GameStateChanged,
    PlayerDamaged,
};
pub use listener::{ListenerId, ListenerSet};
