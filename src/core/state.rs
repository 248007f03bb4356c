//! Match-scoped game state.
//!
//! `GameState` owns both players (and through them, every creature in
//! play) and allocates combatant ids. It is created at match start and
//! dropped at match end; nothing in it survives across matches.
//!
//! Lookup is id-based: combat code passes `TargetId`s around, and the
//! state decides whether an id currently resolves to a player, a creature,
//! or nothing at all. Ids of dead creatures stop resolving, they are never
//! reissued.

use serde::{Deserialize, Serialize};

use super::config::MatchConfig;
use super::creature::Creature;
use super::entity::TargetId;
use super::player::{Player, PlayerPair, PlayerSide};

/// Complete match-scoped data model: both players and their battlefields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    players: PlayerPair<Player>,
    next_id: u32,
}

impl GameState {
    /// Create the state for a fresh match.
    ///
    /// Player ids are allocated first (0 and 1), creature ids follow.
    #[must_use]
    pub fn new(config: &MatchConfig) -> Self {
        let mut next_id = 0u32;
        let players = PlayerPair::new(|side| {
            let id = TargetId::new(next_id + side.index() as u32);
            Player::new(id, side, config.starting_health, config.battlefield_slots)
        });
        next_id += 2;

        Self { players, next_id }
    }

    /// Allocate a fresh combatant id. Ids are never reused within a match.
    pub fn alloc_target(&mut self) -> TargetId {
        let id = TargetId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// The player on a given side.
    #[must_use]
    pub fn player(&self, side: PlayerSide) -> &Player {
        &self.players[side]
    }

    /// The player on a given side, mutably.
    pub fn player_mut(&mut self, side: PlayerSide) -> &mut Player {
        &mut self.players[side]
    }

    /// Resolve a player by id.
    #[must_use]
    pub fn player_by_id(&self, id: TargetId) -> Option<&Player> {
        self.players.iter().map(|(_, p)| p).find(|p| p.id == id)
    }

    /// Resolve a player by id, mutably.
    pub fn player_by_id_mut(&mut self, id: TargetId) -> Option<&mut Player> {
        self.players.iter_mut().map(|(_, p)| p).find(|p| p.id == id)
    }

    /// The opponent of the player with the given id.
    #[must_use]
    pub fn opponent_of(&self, id: TargetId) -> Option<&Player> {
        let side = self.player_by_id(id)?.side;
        Some(self.player(side.opponent()))
    }

    /// Resolve a creature by id, searching both battlefields.
    #[must_use]
    pub fn find_creature(&self, id: TargetId) -> Option<&Creature> {
        PlayerSide::both()
            .into_iter()
            .find_map(|side| self.players[side].battlefield.find(id))
    }

    /// Resolve a creature by id, mutably.
    pub fn find_creature_mut(&mut self, id: TargetId) -> Option<&mut Creature> {
        // Two passes to keep the borrow checker satisfied with the pair.
        if self.players[PlayerSide::First].battlefield.find(id).is_some() {
            return self.players[PlayerSide::First].battlefield.find_mut(id);
        }
        self.players[PlayerSide::Second].battlefield.find_mut(id)
    }

    /// Place a new creature on a side's battlefield.
    ///
    /// Returns `None` when the battlefield is full; the creature's id is
    /// allocated only on success.
    pub fn summon(
        &mut self,
        side: PlayerSide,
        name: impl Into<String>,
        attack: i32,
        health: i32,
    ) -> Option<TargetId> {
        if !self.players[side].battlefield.has_room() {
            return None;
        }
        let id = self.alloc_target();
        let creature = Creature::new(id, name, attack, health, side);
        self.players[side].battlefield.push(creature);
        Some(id)
    }

    /// Remove a creature from whichever battlefield holds it.
    pub fn remove_creature(&mut self, id: TargetId) -> Option<Creature> {
        for side in PlayerSide::both() {
            if let Some(creature) = self.players[side].battlefield.remove(id) {
                return Some(creature);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(&MatchConfig::default())
    }

    #[test]
    fn test_new_allocates_player_ids() {
        let state = state();
        let p1 = state.player(PlayerSide::First);
        let p2 = state.player(PlayerSide::Second);

        assert_eq!(p1.id, TargetId::new(0));
        assert_eq!(p2.id, TargetId::new(1));
        assert_eq!(p1.health, MatchConfig::default().starting_health);
    }

    #[test]
    fn test_player_by_id() {
        let state = state();
        assert_eq!(
            state.player_by_id(TargetId::new(1)).unwrap().side,
            PlayerSide::Second
        );
        assert!(state.player_by_id(TargetId::new(9)).is_none());
    }

    #[test]
    fn test_opponent_of() {
        let state = state();
        let p1_id = state.player(PlayerSide::First).id;
        assert_eq!(state.opponent_of(p1_id).unwrap().side, PlayerSide::Second);
        assert!(state.opponent_of(TargetId::new(50)).is_none());
    }

    #[test]
    fn test_summon_and_find() {
        let mut state = state();
        let id = state.summon(PlayerSide::Second, "Imp", 1, 1).unwrap();

        let creature = state.find_creature(id).unwrap();
        assert_eq!(creature.owner, PlayerSide::Second);
        assert_eq!(creature.name, "Imp");

        state.find_creature_mut(id).unwrap().health -= 1;
        assert!(state.find_creature(id).unwrap().is_dead());
    }

    #[test]
    fn test_ids_never_reused() {
        let mut state = state();
        let first = state.summon(PlayerSide::First, "A", 1, 1).unwrap();
        state.remove_creature(first);
        let second = state.summon(PlayerSide::First, "B", 1, 1).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_summon_full_battlefield() {
        let config = MatchConfig::default().with_battlefield_slots(1);
        let mut state = GameState::new(&config);

        assert!(state.summon(PlayerSide::First, "A", 1, 1).is_some());
        assert!(state.summon(PlayerSide::First, "B", 1, 1).is_none());
        assert!(state.summon(PlayerSide::Second, "C", 1, 1).is_some());
    }

    #[test]
    fn test_remove_creature_either_side() {
        let mut state = state();
        let a = state.summon(PlayerSide::First, "A", 1, 1).unwrap();
        let b = state.summon(PlayerSide::Second, "B", 1, 1).unwrap();

        assert_eq!(state.remove_creature(b).unwrap().id, b);
        assert_eq!(state.remove_creature(a).unwrap().id, a);
        assert!(state.remove_creature(a).is_none());
    }
}
