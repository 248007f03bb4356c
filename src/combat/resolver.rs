//! The combat resolver.
//!
//! Converts a targeting gesture into a validated, queued action while
//! enforcing one declared attack per creature per round.
//!
//! ## Per-round state machine
//!
//! Each attacking creature is either *eligible* (absent from the
//! attack-history set) or *declared* (present). Declared is terminal for
//! the round: only [`reset_attacking_creatures`] returns creatures to
//! eligible, and it clears the whole set at once — never per-creature.
//!
//! ## Failure semantics
//!
//! "No attacker", "no valid target" and "target creature gone" are
//! expected, frequent outcomes of normal play: the gesture simply produces
//! no action and mutates nothing. They are logged and absorbed here, never
//! surfaced as errors. A gesture either fully succeeds (action enqueued,
//! attacker marked) or leaves the queue and history untouched.
//!
//! [`reset_attacking_creatures`]: CombatResolver::reset_attacking_creatures

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::actions::{ActionQueue, GameAction};
use crate::core::{GameState, TargetId};

use super::targeting::{CardRef, HitTarget};

/// Targeting state machine and per-round attack tracking.
#[derive(Clone, Debug, Default)]
pub struct CombatResolver {
    attacking_ids: FxHashSet<TargetId>,
}

impl CombatResolver {
    /// Create a resolver with an empty attack history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a released targeting gesture for an attacking card.
    ///
    /// Walks the front-to-back hit list for the first valid opposing
    /// target and queues the matching action kind: a card with a live
    /// creature queues `DamageCreature`, a slot queues `MarkCombatTarget`,
    /// a player portrait queues `DamagePlayer`. The attacker enters the
    /// attack history only after its action is enqueued.
    ///
    /// The hit list order is the tie-break: with stacked targets, the
    /// first valid entry wins, deterministically for identical input.
    pub fn handle_creature_combat(
        &mut self,
        state: &GameState,
        queue: &mut ActionQueue,
        attacking_card: CardRef,
        hits: &[HitTarget],
    ) {
        let Some(attacker_id) = attacking_card.creature else {
            warn!("attacking card has no linked creature");
            return;
        };
        let Some(attacker) = state.find_creature(attacker_id) else {
            warn!(%attacker_id, "attacker creature not found");
            return;
        };

        if self.attacking_ids.contains(&attacker.id) {
            debug!(attacker = %attacker.name, "creature has already attacked this round");
            return;
        }

        let Some(hit) = hits
            .iter()
            .find(|hit| hit.is_valid_target(attacker.owner, state))
        else {
            warn!(attacker = %attacker.name, "no valid target under pointer");
            return;
        };

        let action = match *hit {
            HitTarget::Card(card) => {
                let Some(target_id) = card.creature else {
                    debug!("target card has no linked creature");
                    return;
                };
                let Some(target) = state.find_creature(target_id) else {
                    debug!(%target_id, "target creature not found");
                    return;
                };
                debug!(attacker = %attacker.name, target = %target.name, "declaring creature attack");
                GameAction::DamageCreature {
                    target: target.id,
                    amount: attacker.attack,
                    source: attacker.id,
                }
            }
            HitTarget::Slot(slot) => {
                debug!(attacker = %attacker.name, %slot, "declaring slot attack");
                GameAction::MarkCombatTarget {
                    attacker: attacker.id,
                    slot,
                }
            }
            HitTarget::PlayerPortrait { side } => {
                debug!(attacker = %attacker.name, target = %side, "declaring player attack");
                GameAction::DamagePlayer {
                    target: state.player(side).id,
                    amount: attacker.attack,
                    source: attacker.id,
                }
            }
        };

        queue.add_action(action);
        // Mark only after the action is queued.
        self.attacking_ids.insert(attacker.id);
    }

    /// Whether a creature has declared an attack this round.
    #[must_use]
    pub fn has_creature_attacked(&self, creature: TargetId) -> bool {
        self.attacking_ids.contains(&creature)
    }

    /// Number of creatures that have declared an attack this round.
    #[must_use]
    pub fn attackers_this_round(&self) -> usize {
        self.attacking_ids.len()
    }

    /// Round boundary: make every creature eligible to attack again.
    pub fn reset_attacking_creatures(&mut self) {
        debug!("reset attacking creatures tracking");
        self.attacking_ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MatchConfig, PlayerSide, SlotRef};

    struct Setup {
        state: GameState,
        queue: ActionQueue,
        resolver: CombatResolver,
        attacker: TargetId,
        defender: TargetId,
    }

    fn setup() -> Setup {
        let mut state = GameState::new(&MatchConfig::default());
        let attacker = state.summon(PlayerSide::First, "Wolf", 3, 2).unwrap();
        let defender = state.summon(PlayerSide::Second, "Imp", 1, 4).unwrap();
        Setup {
            state,
            queue: ActionQueue::new(),
            resolver: CombatResolver::new(),
            attacker,
            defender,
        }
    }

    fn card(state: &GameState, id: TargetId) -> CardRef {
        let side = state.find_creature(id).unwrap().owner;
        CardRef::linked(side, id)
    }

    #[test]
    fn test_successful_declaration() {
        let mut s = setup();
        let hits = [HitTarget::Card(card(&s.state, s.defender))];

        s.resolver
            .handle_creature_combat(&s.state, &mut s.queue, card(&s.state, s.attacker), &hits);

        assert_eq!(s.queue.len(), 1);
        assert_eq!(
            s.queue.pop_next().unwrap(),
            GameAction::DamageCreature {
                target: s.defender,
                amount: 3,
                source: s.attacker,
            }
        );
        assert!(s.resolver.has_creature_attacked(s.attacker));
    }

    #[test]
    fn test_one_attack_per_round() {
        let mut s = setup();
        let hits = [HitTarget::Card(card(&s.state, s.defender))];
        let attacker_card = card(&s.state, s.attacker);

        s.resolver
            .handle_creature_combat(&s.state, &mut s.queue, attacker_card, &hits);
        s.resolver
            .handle_creature_combat(&s.state, &mut s.queue, attacker_card, &hits);

        assert_eq!(s.queue.len(), 1);
        assert_eq!(s.resolver.attackers_this_round(), 1);

        s.resolver.reset_attacking_creatures();
        assert!(!s.resolver.has_creature_attacked(s.attacker));

        s.resolver
            .handle_creature_combat(&s.state, &mut s.queue, attacker_card, &hits);
        assert_eq!(s.queue.len(), 2);
    }

    #[test]
    fn test_same_side_target_rejected() {
        let mut s = setup();
        let friendly = s.state.summon(PlayerSide::First, "Bear", 2, 2).unwrap();
        let hits = [HitTarget::Card(card(&s.state, friendly))];

        s.resolver
            .handle_creature_combat(&s.state, &mut s.queue, card(&s.state, s.attacker), &hits);

        assert!(s.queue.is_empty());
        assert!(!s.resolver.has_creature_attacked(s.attacker));
    }

    #[test]
    fn test_no_hits_is_silent_noop() {
        let mut s = setup();

        s.resolver
            .handle_creature_combat(&s.state, &mut s.queue, card(&s.state, s.attacker), &[]);

        assert!(s.queue.is_empty());
        assert_eq!(s.resolver.attackers_this_round(), 0);
    }

    #[test]
    fn test_unlinked_attacker_is_silent_noop() {
        let mut s = setup();
        let hits = [HitTarget::Card(card(&s.state, s.defender))];

        s.resolver.handle_creature_combat(
            &s.state,
            &mut s.queue,
            CardRef::unlinked(PlayerSide::First),
            &hits,
        );

        assert!(s.queue.is_empty());
    }

    #[test]
    fn test_dangling_target_link_is_silent_noop() {
        let mut s = setup();
        let hits = [HitTarget::Card(CardRef::linked(
            PlayerSide::Second,
            TargetId::new(99),
        ))];

        s.resolver
            .handle_creature_combat(&s.state, &mut s.queue, card(&s.state, s.attacker), &hits);

        assert!(s.queue.is_empty());
        assert!(!s.resolver.has_creature_attacked(s.attacker));
    }

    #[test]
    fn test_front_to_back_tie_break() {
        let mut s = setup();
        let second_defender = s.state.summon(PlayerSide::Second, "Ogre", 4, 4).unwrap();
        // Same-side card in front is skipped; first valid opposing card wins.
        let friendly = s.state.summon(PlayerSide::First, "Bear", 2, 2).unwrap();
        let hits = [
            HitTarget::Card(card(&s.state, friendly)),
            HitTarget::Card(card(&s.state, second_defender)),
            HitTarget::Card(card(&s.state, s.defender)),
        ];

        s.resolver
            .handle_creature_combat(&s.state, &mut s.queue, card(&s.state, s.attacker), &hits);

        match s.queue.pop_next().unwrap() {
            GameAction::DamageCreature { target, .. } => assert_eq!(target, second_defender),
            other => panic!("unexpected action: {other}"),
        }
    }

    #[test]
    fn test_slot_hit_marks_combat_target() {
        let mut s = setup();
        let slot = SlotRef::new(PlayerSide::Second, 4);
        let hits = [HitTarget::Slot(slot)];

        s.resolver
            .handle_creature_combat(&s.state, &mut s.queue, card(&s.state, s.attacker), &hits);

        assert_eq!(
            s.queue.pop_next().unwrap(),
            GameAction::MarkCombatTarget {
                attacker: s.attacker,
                slot,
            }
        );
        assert!(s.resolver.has_creature_attacked(s.attacker));
    }

    #[test]
    fn test_portrait_hit_damages_player() {
        let mut s = setup();
        let hits = [HitTarget::PlayerPortrait {
            side: PlayerSide::Second,
        }];

        s.resolver
            .handle_creature_combat(&s.state, &mut s.queue, card(&s.state, s.attacker), &hits);

        assert_eq!(
            s.queue.pop_next().unwrap(),
            GameAction::DamagePlayer {
                target: s.state.player(PlayerSide::Second).id,
                amount: 3,
                source: s.attacker,
            }
        );
    }
}
