//! The drain-and-resolve step.
//!
//! Pops pending actions in FIFO order and, for each one, applies its
//! numeric effect to the data model first and then invokes the matching
//! event hub notification — the hub derives the consequences (death,
//! game over) from the already-updated state.
//!
//! When this runs is the match driver's decision; the core never drains
//! on its own.

use tracing::debug;

use crate::actions::{ActionQueue, GameAction};
use crate::core::{GameError, GameState, TargetId};
use crate::events::EventHub;

/// Drain the queue, applying and notifying each action in FIFO order.
///
/// Actions whose target has left play earlier in the same drain are
/// skipped silently — two attackers may legally have declared against the
/// same creature. Errors only surface for contract violations (an
/// uninitialized hub).
pub fn resolve_pending(
    state: &mut GameState,
    queue: &mut ActionQueue,
    hub: &mut EventHub,
) -> Result<(), GameError> {
    while let Some(action) = queue.pop_next() {
        debug!(action = %action, "resolving action");
        apply_action(state, hub, &action)?;
    }
    Ok(())
}

fn apply_action(
    state: &mut GameState,
    hub: &mut EventHub,
    action: &GameAction,
) -> Result<(), GameError> {
    match *action {
        GameAction::DamageCreature { target, amount, .. } => {
            damage_creature(state, hub, target, amount)
        }
        GameAction::DamagePlayer { target, amount, .. } => {
            damage_player(state, hub, target, amount)
        }
        GameAction::MarkCombatTarget { attacker, slot } => {
            // The mark resolves against the board as it stands now.
            let Some(attacker_entity) = state.find_creature(attacker) else {
                debug!(%attacker, "marked attacker left play before resolution");
                return Ok(());
            };
            let amount = attacker_entity.attack;

            let occupant = state
                .player(slot.side)
                .battlefield
                .creature_in_slot(slot.index)
                .map(|c| c.id);
            match occupant {
                Some(target) => damage_creature(state, hub, target, amount),
                None => {
                    let target = state.player(slot.side).id;
                    damage_player(state, hub, target, amount)
                }
            }
        }
    }
}

fn damage_creature(
    state: &mut GameState,
    hub: &mut EventHub,
    target: TargetId,
    amount: i32,
) -> Result<(), GameError> {
    let Some(creature) = state.find_creature_mut(target) else {
        debug!(%target, "target creature already gone, skipping");
        return Ok(());
    };
    creature.health -= amount;

    hub.notify_creature_damaged(state, target, amount)?;

    // The died/state-changed cascade has run; now finalize the death.
    if state.find_creature(target).is_some_and(|c| c.is_dead()) {
        state.remove_creature(target);
    }
    Ok(())
}

fn damage_player(
    state: &mut GameState,
    hub: &mut EventHub,
    target: TargetId,
    amount: i32,
) -> Result<(), GameError> {
    let Some(player) = state.player_by_id_mut(target) else {
        debug!(%target, "target player not found, skipping");
        return Ok(());
    };
    player.health -= amount;

    hub.player_damage_dealt(state, target, amount)
}
