//! Eligibility specifications consumed by the todo list aggregate.
//!
//! Each specification is a small named predicate over a [`TodoItem`], kept
//! apart from the aggregate so that each business rule can be tested and
//! changed on its own.

pub mod can_modify;
pub mod valid_progression;

pub use can_modify::CanModifySpecification;
pub use valid_progression::ValidProgressionSpecification;

use crate::domain::models::TodoItem;

/// A business rule evaluated against a single item.
pub trait ItemSpecification: Send + Sync {
    /// Whether the item satisfies the rule in its current state.
    fn is_satisfied_by(&self, item: &TodoItem) -> bool;

    /// Human-readable explanation used when the rule is not satisfied.
    fn reason(&self) -> String;
}
