//! The event hub.
//!
//! Single channel through which all gameplay state-change consequences are
//! derived and broadcast. The hub is an explicitly constructed, explicitly
//! owned value: callers create it, initialize it, and pass it to whoever
//! needs to publish or subscribe. It survives across matches; calling
//! [`EventHub::initialize`] again starts a fresh listener slate so a new
//! match never inherits a previous match's subscriptions.
//!
//! ## Cascades
//!
//! Notify operations are synchronous and run their cascades depth-first
//! before returning:
//!
//! - player damaged → listeners fire, then if the player's health is zero
//!   or below (the caller applies the reduction first), exactly one
//!   game-over notification for the opponent;
//! - creature damaged → listeners fire, then if the creature's health is
//!   zero or below, exactly one creature-died notification;
//! - creature died → listeners fire, then one game-state-changed
//!   notification. Died strictly precedes the generic refresh so
//!   presentation code can tear down the creature's visual first.
//!
//! Listeners never receive the hub itself, so a listener cannot start a
//! new cascade from inside one; independently triggered cascades have no
//! ordering guarantee relative to each other.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameError, GameState, TargetId};

use super::listener::{ListenerId, ListenerSet};

/// Fired once when a match has finished initializing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInitialized;

/// Catch-all "something changed, recompute the view" signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateChanged;

/// A player took damage. The reduction has already been applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDamaged {
    /// The damaged player.
    pub player: TargetId,
    /// Damage amount.
    pub amount: i32,
}

/// A creature took damage. The reduction has already been applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureDamaged {
    /// The damaged creature.
    pub creature: TargetId,
    /// Damage amount.
    pub amount: i32,
}

/// A creature's health reached zero or below.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureDied {
    /// The dead creature.
    pub creature: TargetId,
}

/// The match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOver {
    /// The winning player.
    pub winner: TargetId,
}

/// Publish/subscribe hub for gameplay events.
///
/// All guarded operations fail with [`GameError::NotInitialized`] until
/// [`initialize`](EventHub::initialize) has run. Listener removal is
/// always allowed — tearing down a view must work even around hub resets.
#[derive(Debug, Default)]
pub struct EventHub {
    initialized: bool,
    registered_players: FxHashSet<TargetId>,

    game_initialized: ListenerSet<GameInitialized>,
    state_changed: ListenerSet<GameStateChanged>,
    player_damaged: ListenerSet<PlayerDamaged>,
    creature_damaged: ListenerSet<CreatureDamaged>,
    creature_died: ListenerSet<CreatureDied>,
    game_over: ListenerSet<GameOver>,
}

impl EventHub {
    /// Create a hub. It must be initialized before use.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the hub, clearing all listener and registration state.
    ///
    /// Safe to call again between matches; every call starts from a clean
    /// slate so no listener leaks across match boundaries.
    pub fn initialize(&mut self) {
        self.clear_all_listeners();
        self.initialized = true;
        debug!("event hub initialized");
    }

    /// Whether the hub has been initialized.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn ensure_initialized(&self) -> Result<(), GameError> {
        if self.initialized {
            Ok(())
        } else {
            Err(GameError::NotInitialized)
        }
    }

    fn clear_all_listeners(&mut self) {
        self.game_initialized.clear();
        self.state_changed.clear();
        self.player_damaged.clear();
        self.creature_damaged.clear();
        self.creature_died.clear();
        self.game_over.clear();
        self.registered_players.clear();
    }

    // === Player registration ===

    /// Register a player, wiring their damage signal to the hub.
    ///
    /// Idempotent: registering an already-registered player changes
    /// nothing, so the damage route can never notify twice for one hit.
    /// Returns whether the player was newly registered.
    pub fn register_player(
        &mut self,
        state: &GameState,
        player: TargetId,
    ) -> Result<bool, GameError> {
        self.ensure_initialized()?;
        let entity = state
            .player_by_id(player)
            .ok_or(GameError::UnknownPlayer(player))?;

        let added = self.registered_players.insert(player);
        if added {
            debug!(side = %entity.side, "player registered with event hub");
        }
        Ok(added)
    }

    /// Remove a player's registration. No-op if not registered.
    pub fn unregister_player(&mut self, player: TargetId) -> bool {
        let removed = self.registered_players.remove(&player);
        if removed {
            debug!(%player, "player unregistered from event hub");
        }
        removed
    }

    /// Whether a player is currently registered.
    #[must_use]
    pub fn is_player_registered(&self, player: TargetId) -> bool {
        self.registered_players.contains(&player)
    }

    /// A player entity's damage signal.
    ///
    /// This is the route the resolution driver uses when player damage is
    /// applied: it forwards to [`notify_player_damaged`] only for
    /// registered players. Unregistered players take the damage silently.
    ///
    /// [`notify_player_damaged`]: EventHub::notify_player_damaged
    pub fn player_damage_dealt(
        &mut self,
        state: &GameState,
        player: TargetId,
        amount: i32,
    ) -> Result<(), GameError> {
        self.ensure_initialized()?;
        if self.registered_players.contains(&player) {
            self.notify_player_damaged(state, player, amount)
        } else {
            debug!(%player, amount, "damage to unregistered player, not broadcast");
            Ok(())
        }
    }

    // === Listener registration ===

    /// Add a game-initialized listener.
    pub fn add_game_initialized_listener(
        &mut self,
        listener: impl FnMut(&GameInitialized) + 'static,
    ) -> Result<ListenerId, GameError> {
        self.ensure_initialized()?;
        Ok(self.game_initialized.add(listener))
    }

    /// Remove a game-initialized listener by handle.
    pub fn remove_game_initialized_listener(&mut self, id: ListenerId) -> bool {
        self.game_initialized.remove(id)
    }

    /// Add a game-state-changed listener.
    pub fn add_state_changed_listener(
        &mut self,
        listener: impl FnMut(&GameStateChanged) + 'static,
    ) -> Result<ListenerId, GameError> {
        self.ensure_initialized()?;
        Ok(self.state_changed.add(listener))
    }

    /// Remove a game-state-changed listener by handle.
    pub fn remove_state_changed_listener(&mut self, id: ListenerId) -> bool {
        self.state_changed.remove(id)
    }

    /// Add a player-damaged listener.
    pub fn add_player_damaged_listener(
        &mut self,
        listener: impl FnMut(&PlayerDamaged) + 'static,
    ) -> Result<ListenerId, GameError> {
        self.ensure_initialized()?;
        Ok(self.player_damaged.add(listener))
    }

    /// Remove a player-damaged listener by handle.
    pub fn remove_player_damaged_listener(&mut self, id: ListenerId) -> bool {
        self.player_damaged.remove(id)
    }

    /// Add a creature-damaged listener.
    pub fn add_creature_damaged_listener(
        &mut self,
        listener: impl FnMut(&CreatureDamaged) + 'static,
    ) -> Result<ListenerId, GameError> {
        self.ensure_initialized()?;
        Ok(self.creature_damaged.add(listener))
    }

    /// Remove a creature-damaged listener by handle.
    pub fn remove_creature_damaged_listener(&mut self, id: ListenerId) -> bool {
        self.creature_damaged.remove(id)
    }

    /// Add a creature-died listener.
    pub fn add_creature_died_listener(
        &mut self,
        listener: impl FnMut(&CreatureDied) + 'static,
    ) -> Result<ListenerId, GameError> {
        self.ensure_initialized()?;
        Ok(self.creature_died.add(listener))
    }

    /// Remove a creature-died listener by handle.
    pub fn remove_creature_died_listener(&mut self, id: ListenerId) -> bool {
        self.creature_died.remove(id)
    }

    /// Add a game-over listener.
    pub fn add_game_over_listener(
        &mut self,
        listener: impl FnMut(&GameOver) + 'static,
    ) -> Result<ListenerId, GameError> {
        self.ensure_initialized()?;
        Ok(self.game_over.add(listener))
    }

    /// Remove a game-over listener by handle.
    pub fn remove_game_over_listener(&mut self, id: ListenerId) -> bool {
        self.game_over.remove(id)
    }

    // === Notify operations ===

    /// Fire the game-initialized listeners once.
    pub fn notify_game_initialized(&mut self) -> Result<(), GameError> {
        self.ensure_initialized()?;
        debug!("game initialization notification sent");
        self.game_initialized.emit(&GameInitialized);
        Ok(())
    }

    /// Fire the game-state-changed listeners once.
    pub fn notify_game_state_changed(&mut self) -> Result<(), GameError> {
        self.ensure_initialized()?;
        self.state_changed.emit(&GameStateChanged);
        Ok(())
    }

    /// Fire player-damaged listeners; cascade to game-over if the player
    /// is at zero or below.
    ///
    /// The caller applies the health reduction before this call. Fails
    /// with [`GameError::UnknownPlayer`] if the id does not resolve.
    pub fn notify_player_damaged(
        &mut self,
        state: &GameState,
        player: TargetId,
        amount: i32,
    ) -> Result<(), GameError> {
        self.ensure_initialized()?;
        let entity = state
            .player_by_id(player)
            .ok_or(GameError::UnknownPlayer(player))?;
        let health = entity.health;
        let side = entity.side;

        self.player_damaged.emit(&PlayerDamaged { player, amount });
        debug!(%side, amount, health, "player damaged notification");

        if health <= 0 {
            // Opponent lookup cannot fail while the player itself resolves.
            let winner = state.player(side.opponent()).id;
            self.notify_game_over(state, winner)?;
        }
        Ok(())
    }

    /// Fire creature-damaged listeners; cascade to creature-died if the
    /// creature is at zero or below.
    ///
    /// The caller applies the health reduction before this call. Fails
    /// with [`GameError::UnknownCreature`] if the id does not resolve.
    pub fn notify_creature_damaged(
        &mut self,
        state: &GameState,
        creature: TargetId,
        amount: i32,
    ) -> Result<(), GameError> {
        self.ensure_initialized()?;
        let entity = state
            .find_creature(creature)
            .ok_or(GameError::UnknownCreature(creature))?;
        let health = entity.health;

        self.creature_damaged
            .emit(&CreatureDamaged { creature, amount });
        debug!(name = %entity_name(state, creature), amount, health, "creature damaged notification");

        if health <= 0 {
            self.notify_creature_died(state, creature)?;
        }
        Ok(())
    }

    /// Fire creature-died listeners, then game-state-changed.
    ///
    /// Died strictly precedes the generic refresh: presentation code
    /// removing the creature's visual must see the death first.
    pub fn notify_creature_died(
        &mut self,
        state: &GameState,
        creature: TargetId,
    ) -> Result<(), GameError> {
        self.ensure_initialized()?;
        if state.find_creature(creature).is_none() {
            return Err(GameError::UnknownCreature(creature));
        }

        self.creature_died.emit(&CreatureDied { creature });
        debug!(name = %entity_name(state, creature), "creature died notification");

        self.notify_game_state_changed()
    }

    /// Fire game-over listeners for the winning player.
    pub fn notify_game_over(
        &mut self,
        state: &GameState,
        winner: TargetId,
    ) -> Result<(), GameError> {
        self.ensure_initialized()?;
        let entity = state
            .player_by_id(winner)
            .ok_or(GameError::UnknownPlayer(winner))?;

        debug!(side = %entity.side, "game over notification");
        self.game_over.emit(&GameOver { winner });
        Ok(())
    }
}

fn entity_name(state: &GameState, creature: TargetId) -> String {
    state
        .find_creature(creature)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| creature.to_string())
}
