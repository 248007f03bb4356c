//! Combat: targeting seam, the combat resolver, and the drain step.

pub mod resolution;
pub mod resolver;
pub mod targeting;

pub use resolution::resolve_pending;
pub use resolver::CombatResolver;
pub use targeting::{CardRef, HitTarget};
