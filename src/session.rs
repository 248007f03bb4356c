//! The game session: process-level owner of the event hub and the
//! match-scoped combat state.
//!
//! The hub survives across matches; everything else in the session is
//! rebuilt by [`start_match`](GameSession::start_match). Combat entry
//! points fail with [`GameError::NoActiveMatch`] when no match is running
//! — that is the one error the combat path can produce, everything else
//! about a bad gesture is a silent no-op inside the resolver.
//!
//! ## Match startup order
//!
//! 1. `start_match` — re-initializes the hub (dropping all listeners from
//!    any previous match), builds the players, shuffles the decks,
//!    registers both players;
//! 2. the driver wires presentation listeners through
//!    [`hub_mut`](GameSession::hub_mut);
//! 3. `announce_initialized` — fires `GameInitialized` to the listeners
//!    wired in step 2.

use tracing::debug;

use crate::actions::{pending_indicators, ActionIndicator, ActionQueue};
use crate::cards::{CardData, Deck};
use crate::combat::{resolve_pending, CardRef, CombatResolver, HitTarget};
use crate::core::{
    GameError, GameRng, GameState, MatchConfig, PlayerPair, PlayerSide, TargetId,
};
use crate::events::EventHub;

/// Everything scoped to one running match.
#[derive(Debug)]
struct MatchState {
    state: GameState,
    queue: ActionQueue,
    resolver: CombatResolver,
    decks: PlayerPair<Deck>,
}

/// Process-level facade over the combat pipeline.
#[derive(Debug, Default)]
pub struct GameSession {
    hub: EventHub,
    current: Option<MatchState>,
}

impl GameSession {
    /// Create a session with an uninitialized hub and no match.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The event hub, for listener registration and inspection.
    #[must_use]
    pub fn hub(&self) -> &EventHub {
        &self.hub
    }

    /// The event hub, mutably.
    pub fn hub_mut(&mut self) -> &mut EventHub {
        &mut self.hub
    }

    /// Whether a match is currently running.
    #[must_use]
    pub fn is_match_active(&self) -> bool {
        self.current.is_some()
    }

    /// Start a fresh match.
    ///
    /// Re-initializes the hub (all previous listeners are dropped), builds
    /// both players, shuffles each deck on its own RNG stream, and
    /// registers both players with the hub. Replaces any match already in
    /// progress.
    pub fn start_match(&mut self, config: MatchConfig) -> Result<(), GameError> {
        self.hub.initialize();

        let state = GameState::new(&config);
        let rng = GameRng::new(config.seed);
        let [first_cards, second_cards] = config.decks;

        let mut decks = PlayerPair::new(|_| Deck::new());
        for (side, cards) in PlayerSide::both().into_iter().zip([first_cards, second_cards]) {
            let mut deck = Deck::from_cards(cards);
            let mut stream = rng.for_context(match side {
                PlayerSide::First => "deck-first",
                PlayerSide::Second => "deck-second",
            });
            deck.shuffle(&mut stream);
            decks[side] = deck;
        }

        for side in PlayerSide::both() {
            self.hub.register_player(&state, state.player(side).id)?;
        }

        debug!(seed = config.seed, "match started");
        self.current = Some(MatchState {
            state,
            queue: ActionQueue::new(),
            resolver: CombatResolver::new(),
            decks,
        });
        Ok(())
    }

    /// Fire `GameInitialized` once presentation listeners are wired.
    pub fn announce_initialized(&mut self) -> Result<(), GameError> {
        if self.current.is_none() {
            return Err(GameError::NoActiveMatch);
        }
        self.hub.notify_game_initialized()
    }

    /// End the current match, if any. The hub (and its listeners) survive
    /// until the next `start_match` re-initializes it.
    pub fn end_match(&mut self) -> bool {
        let ended = self.current.take().is_some();
        if ended {
            debug!("match ended");
        }
        ended
    }

    /// The current match's data model.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.current.as_ref().map(|m| &m.state)
    }

    /// The current match's pending actions.
    #[must_use]
    pub fn queue(&self) -> Option<&ActionQueue> {
        self.current.as_ref().map(|m| &m.queue)
    }

    /// Handle a released targeting gesture. See
    /// [`CombatResolver::handle_creature_combat`] for the targeting rules;
    /// misses are silent no-ops, only a missing match is an error.
    pub fn handle_creature_combat(
        &mut self,
        attacking_card: CardRef,
        hits: &[HitTarget],
    ) -> Result<(), GameError> {
        let m = self.current.as_mut().ok_or(GameError::NoActiveMatch)?;
        m.resolver
            .handle_creature_combat(&m.state, &mut m.queue, attacking_card, hits);
        Ok(())
    }

    /// Whether a creature has declared an attack this round.
    /// `false` outside a match.
    #[must_use]
    pub fn has_creature_attacked(&self, creature: TargetId) -> bool {
        self.current
            .as_ref()
            .is_some_and(|m| m.resolver.has_creature_attacked(creature))
    }

    /// Round boundary: make every creature eligible to attack again.
    pub fn reset_attacking_creatures(&mut self) -> Result<(), GameError> {
        let m = self.current.as_mut().ok_or(GameError::NoActiveMatch)?;
        m.resolver.reset_attacking_creatures();
        Ok(())
    }

    /// Drain and resolve all pending actions in FIFO order.
    pub fn resolve_pending_actions(&mut self) -> Result<(), GameError> {
        let Some(m) = self.current.as_mut() else {
            return Err(GameError::NoActiveMatch);
        };
        resolve_pending(&mut m.state, &mut m.queue, &mut self.hub)
    }

    /// Indicator endpoints for every pending action, in queue order.
    pub fn pending_indicators(&self) -> Result<Vec<ActionIndicator>, GameError> {
        let m = self.current.as_ref().ok_or(GameError::NoActiveMatch)?;
        Ok(pending_indicators(&m.queue, &m.state))
    }

    /// Draw the top card of a side's deck.
    pub fn draw(&mut self, side: PlayerSide) -> Result<Option<CardData>, GameError> {
        let m = self.current.as_mut().ok_or(GameError::NoActiveMatch)?;
        Ok(m.decks[side].draw())
    }

    /// Put a creature with a card's stats onto a side's battlefield.
    ///
    /// Returns `None` when the battlefield is full. Fires
    /// `GameStateChanged` on success.
    pub fn summon(
        &mut self,
        side: PlayerSide,
        card: &CardData,
    ) -> Result<Option<TargetId>, GameError> {
        let Some(m) = self.current.as_mut() else {
            return Err(GameError::NoActiveMatch);
        };
        let summoned = m.state.summon(side, card.name.clone(), card.attack, card.health);
        if summoned.is_some() {
            self.hub.notify_game_state_changed()?;
        }
        Ok(summoned)
    }
}
