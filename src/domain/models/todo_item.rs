//! Todo item entity.
//!
//! An item accumulates progress through an ordered history of
//! [`Progression`]s. The entity never rejects a change: all policy lives in
//! the [`TodoList`](super::TodoList) aggregate, which validates before it
//! delegates here.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::progression::{Progression, MAX_PERCENT};

/// Identifier of a todo item, unique within a list.
pub type ItemId = u64;

/// A todo item owned by a [`TodoList`](super::TodoList).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    id: ItemId,
    title: String,
    description: String,
    category: String,
    progressions: Vec<Progression>,
}

impl TodoItem {
    /// Create an item with an empty progression history.
    pub fn new(
        id: ItemId,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            category: category.into(),
            progressions: Vec::new(),
        }
    }

    /// Unique identifier within its list.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Title, fixed at creation.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Category as given at creation.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Progression history in chronological order.
    pub fn progressions(&self) -> &[Progression] {
        &self.progressions
    }

    /// Exact sum of all recorded progression percentages.
    pub fn total_progress(&self) -> Decimal {
        self.progressions.iter().map(Progression::percent).sum()
    }

    /// Total progress has reached 100%.
    pub fn is_completed(&self) -> bool {
        self.total_progress() >= MAX_PERCENT
    }

    /// Date of the most recent progression, if any.
    pub fn last_progression_date(&self) -> Option<DateTime<Utc>> {
        self.progressions.last().map(Progression::date)
    }

    /// Replace the description. Title, category and history are untouched.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Append a progression. Callers are responsible for ordering and caps.
    pub fn add_progression(&mut self, date: DateTime<Utc>, percent: Decimal) {
        self.progressions.push(Progression::new(date, percent));
    }
}
