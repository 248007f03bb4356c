//! The action queue.
//!
//! An ordered buffer of declared-but-unresolved actions, decoupling "an
//! attack was declared" from "an attack was resolved". Insertion order is
//! the only order: no priorities, no reordering, no deduplication — if the
//! same attacker declares twice before a drain, both actions are
//! visualized and both resolve.
//!
//! The queue is match-scoped and owned by one component; everyone else
//! gets the read view from [`pending_actions`](ActionQueue::pending_actions).

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::action::GameAction;

/// FIFO buffer of pending combat actions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionQueue {
    pending: VecDeque<GameAction>,
}

impl ActionQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action to the tail. Never rejects.
    pub fn add_action(&mut self, action: GameAction) {
        debug!(action = %action, "action queued");
        self.pending.push_back(action);
    }

    /// The full ordered sequence of pending actions, without removal.
    ///
    /// Always reflects every action enqueued and not yet drained, in
    /// enqueue order.
    pub fn pending_actions(&self) -> impl Iterator<Item = &GameAction> {
        self.pending.iter()
    }

    /// Remove and return the oldest pending action.
    pub fn pop_next(&mut self) -> Option<GameAction> {
        self.pending.pop_front()
    }

    /// Number of pending actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop all pending actions (queue reset, e.g. a new round).
    pub fn clear(&mut self) {
        if !self.pending.is_empty() {
            debug!(dropped = self.pending.len(), "action queue cleared");
        }
        self.pending.clear();
    }
}
