//! Pending-action indicators.
//!
//! The data half of drawing "who is attacking what": each pending action
//! maps to a pair of anchors the presentation layer can resolve to screen
//! positions. Actions whose endpoints no longer resolve against the
//! current state produce no indicator — a stale arrow is worse than none.

use serde::{Deserialize, Serialize};

use crate::core::GameState;

use super::action::{ActionTarget, GameAction};
use super::queue::ActionQueue;

/// An indicator endpoint pair for one pending action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionIndicator {
    /// Where the indicator starts (always the attacker).
    pub from: ActionTarget,
    /// Where the indicator points.
    pub to: ActionTarget,
}

/// Build indicators for every currently pending action, in queue order.
///
/// An action contributes an indicator only when its source still resolves
/// and, for entity targets, the target still resolves. Slot targets always
/// resolve — slots are addressable even when empty.
#[must_use]
pub fn pending_indicators(queue: &ActionQueue, state: &GameState) -> Vec<ActionIndicator> {
    queue
        .pending_actions()
        .filter_map(|action| indicator_for(action, state))
        .collect()
}

fn indicator_for(action: &GameAction, state: &GameState) -> Option<ActionIndicator> {
    let source = action.source();
    state.find_creature(source)?;

    let to = action.target();
    match to {
        ActionTarget::Creature(id) => {
            state.find_creature(id)?;
        }
        ActionTarget::Player(id) => {
            state.player_by_id(id)?;
        }
        ActionTarget::Slot(_) => {}
    }

    Some(ActionIndicator {
        from: ActionTarget::Creature(source),
        to,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MatchConfig, PlayerSide, SlotRef, TargetId};

    fn setup() -> (GameState, TargetId, TargetId) {
        let mut state = GameState::new(&MatchConfig::default());
        let attacker = state.summon(PlayerSide::First, "Wolf", 2, 2).unwrap();
        let target = state.summon(PlayerSide::Second, "Imp", 1, 1).unwrap();
        (state, attacker, target)
    }

    #[test]
    fn test_indicator_per_action_kind() {
        let (state, attacker, target) = setup();
        let enemy = state.player(PlayerSide::Second).id;
        let slot = SlotRef::new(PlayerSide::Second, 3);

        let mut queue = ActionQueue::new();
        queue.add_action(GameAction::DamageCreature {
            target,
            amount: 2,
            source: attacker,
        });
        queue.add_action(GameAction::DamagePlayer {
            target: enemy,
            amount: 2,
            source: attacker,
        });
        queue.add_action(GameAction::MarkCombatTarget { attacker, slot });

        let indicators = pending_indicators(&queue, &state);
        assert_eq!(indicators.len(), 3);
        assert_eq!(indicators[0].from, ActionTarget::Creature(attacker));
        assert_eq!(indicators[0].to, ActionTarget::Creature(target));
        assert_eq!(indicators[1].to, ActionTarget::Player(enemy));
        assert_eq!(indicators[2].to, ActionTarget::Slot(slot));
    }

    #[test]
    fn test_unresolvable_endpoints_skipped() {
        let (mut state, attacker, target) = setup();

        let mut queue = ActionQueue::new();
        queue.add_action(GameAction::DamageCreature {
            target,
            amount: 2,
            source: attacker,
        });

        state.remove_creature(target);
        assert!(pending_indicators(&queue, &state).is_empty());
    }

    #[test]
    fn test_dead_source_skipped() {
        let (mut state, attacker, target) = setup();

        let mut queue = ActionQueue::new();
        queue.add_action(GameAction::DamageCreature {
            target,
            amount: 2,
            source: attacker,
        });

        state.remove_creature(attacker);
        assert!(pending_indicators(&queue, &state).is_empty());
    }
}
