//! Player sides, per-side storage, and the player entity.
//!
//! ## PlayerSide
//!
//! A match always has exactly two sides. The opponent relationship is
//! derived from the side (`opponent()` is total and involutive), so it is
//! fixed for the whole match by construction — there is no mutable
//! opponent pointer to wire up or invalidate.
//!
//! ## PlayerPair
//!
//! Per-side data storage indexable by `PlayerSide`. The two-player
//! counterpart of a per-player map: O(1) access, no hashing.
//!
//! ## Player
//!
//! The player entity: identity, health, and the battlefield of creatures
//! under their control.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::battlefield::Battlefield;
use super::entity::TargetId;

/// One of the two sides of a match.
///
/// ```
/// use duelcore::core::PlayerSide;
///
/// assert_eq!(PlayerSide::First.opponent(), PlayerSide::Second);
/// assert_eq!(PlayerSide::Second.opponent(), PlayerSide::First);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSide {
    /// The first player.
    First,
    /// The second player.
    Second,
}

impl PlayerSide {
    /// Get the opposing side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerSide::First => PlayerSide::Second,
            PlayerSide::Second => PlayerSide::First,
        }
    }

    /// Both sides, first player first.
    #[must_use]
    pub const fn both() -> [PlayerSide; 2] {
        [PlayerSide::First, PlayerSide::Second]
    }

    /// Zero-based index of this side (First = 0, Second = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerSide::First => 0,
            PlayerSide::Second => 1,
        }
    }
}

impl std::fmt::Display for PlayerSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerSide::First => write!(f, "Player 1"),
            PlayerSide::Second => write!(f, "Player 2"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use duelcore::core::{PlayerPair, PlayerSide};
///
/// let mut wins: PlayerPair<u32> = PlayerPair::new(|_| 0);
/// wins[PlayerSide::First] += 1;
/// assert_eq!(wins[PlayerSide::First], 1);
/// assert_eq!(wins[PlayerSide::Second], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(factory: impl Fn(PlayerSide) -> T) -> Self {
        Self {
            data: [factory(PlayerSide::First), factory(PlayerSide::Second)],
        }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to one side's data.
    #[must_use]
    pub fn get(&self, side: PlayerSide) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to one side's data.
    pub fn get_mut(&mut self, side: PlayerSide) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (side, &T) pairs, first player first.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerSide, &T)> {
        PlayerSide::both().into_iter().zip(self.data.iter())
    }

    /// Iterate over (side, &mut T) pairs, first player first.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerSide, &mut T)> {
        PlayerSide::both().into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<PlayerSide> for PlayerPair<T> {
    type Output = T;

    fn index(&self, side: PlayerSide) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<PlayerSide> for PlayerPair<T> {
    fn index_mut(&mut self, side: PlayerSide) -> &mut Self::Output {
        self.get_mut(side)
    }
}

/// A player entity.
///
/// Health may go non-positive; the game-over consequence is derived by the
/// event hub when the damage notification arrives, not here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable identity, unique within the match.
    pub id: TargetId,

    /// Which side this player occupies.
    pub side: PlayerSide,

    /// Current health.
    pub health: i32,

    /// Creatures in play under this player's control.
    pub battlefield: Battlefield,
}

impl Player {
    /// Create a player with the given starting health and battlefield size.
    #[must_use]
    pub fn new(id: TargetId, side: PlayerSide, health: i32, slots: usize) -> Self {
        Self {
            id,
            side,
            health,
            battlefield: Battlefield::new(slots),
        }
    }

    /// The opposing side.
    #[must_use]
    pub fn opponent_side(&self) -> PlayerSide {
        self.side.opponent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent_involutive() {
        for side in PlayerSide::both() {
            assert_eq!(side.opponent().opponent(), side);
            assert_ne!(side.opponent(), side);
        }
    }

    #[test]
    fn test_side_display() {
        assert_eq!(format!("{}", PlayerSide::First), "Player 1");
        assert_eq!(format!("{}", PlayerSide::Second), "Player 2");
    }

    #[test]
    fn test_pair_factory_and_indexing() {
        let pair: PlayerPair<usize> = PlayerPair::new(|s| s.index() * 10);
        assert_eq!(pair[PlayerSide::First], 0);
        assert_eq!(pair[PlayerSide::Second], 10);
    }

    #[test]
    fn test_pair_mutation() {
        let mut pair: PlayerPair<i32> = PlayerPair::with_value(5);
        pair[PlayerSide::Second] = 9;
        assert_eq!(pair[PlayerSide::First], 5);
        assert_eq!(pair[PlayerSide::Second], 9);
    }

    #[test]
    fn test_pair_iter_order() {
        let pair: PlayerPair<&str> = PlayerPair::new(|s| match s {
            PlayerSide::First => "a",
            PlayerSide::Second => "b",
        });
        let collected: Vec<_> = pair.iter().collect();
        assert_eq!(collected[0], (PlayerSide::First, &"a"));
        assert_eq!(collected[1], (PlayerSide::Second, &"b"));
    }

    #[test]
    fn test_player_new() {
        let player = Player::new(TargetId::new(0), PlayerSide::First, 20, 7);
        assert_eq!(player.health, 20);
        assert_eq!(player.opponent_side(), PlayerSide::Second);
        assert!(player.battlefield.is_empty());
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new(TargetId::new(1), PlayerSide::Second, 20, 7);
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
