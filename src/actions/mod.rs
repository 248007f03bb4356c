//! Pending combat actions: the action sum type, the FIFO queue, and the
//! visualization-facing indicator view.

pub mod action;
pub mod indicators;
pub mod queue;

pub use action::{ActionTarget, GameAction};
pub use indicators::{pending_indicators, ActionIndicator};
pub use queue::ActionQueue;
