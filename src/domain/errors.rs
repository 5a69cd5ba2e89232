//! Domain errors for the todo list aggregate.

use thiserror::Error;

use super::models::ItemId;

/// Failures reported by [`TodoList`](super::models::TodoList) operations.
///
/// Every failure is local to one operation and represents a caller or input
/// error. Callers distinguish failures by variant, never by message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("Invalid category: '{0}' is not one of the valid categories")]
    InvalidCategory(String),

    #[error("Item not found: {0}")]
    NotFound(ItemId),

    #[error("Item {id} cannot be modified: {reason}")]
    CannotModify { id: ItemId, reason: String },

    #[error("Invalid progression for item {id}: {reason}")]
    InvalidProgression { id: ItemId, reason: String },

    #[error("Item already exists: {0}")]
    DuplicateId(ItemId),

    #[error("No item ids left after {0}")]
    IdsExhausted(ItemId),
}

impl TodoError {
    /// Stable machine-readable code for transport layers.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCategory(_) => "INVALID_CATEGORY",
            Self::NotFound(_) => "NOT_FOUND",
            Self::CannotModify { .. } => "CANNOT_MODIFY",
            Self::InvalidProgression { .. } => "INVALID_PROGRESSION",
            Self::DuplicateId(_) => "DUPLICATE_ID",
            Self::IdsExhausted(_) => "IDS_EXHAUSTED",
        }
    }
}

pub type TodoResult<T> = Result<T, TodoError>;
