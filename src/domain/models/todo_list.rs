//! Todo list aggregate.
//!
//! The list owns every [`TodoItem`] and is the only place items are
//! created, changed or destroyed. Each operation resolves its target item,
//! consults the relevant specification, and only then delegates the change
//! to the entity.
//!
//! The aggregate is not internally synchronized. Hosts that share one list
//! between callers must serialize access around each operation.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::todo_item::{ItemId, TodoItem};
use crate::domain::errors::{TodoError, TodoResult};
use crate::domain::ports::CategorySource;
use crate::domain::specifications::{
    CanModifySpecification, ItemSpecification, ValidProgressionSpecification,
};

/// Items keyed by id, guarded by the modification and progression rules.
pub struct TodoList {
    items: HashMap<ItemId, TodoItem>,
    categories: Arc<dyn CategorySource>,
    can_modify: CanModifySpecification,
    valid_progression: ValidProgressionSpecification,
}

impl TodoList {
    /// Create an empty list validating categories against `categories`.
    pub fn new(categories: Arc<dyn CategorySource>) -> Self {
        Self {
            items: HashMap::new(),
            categories,
            can_modify: CanModifySpecification::default(),
            valid_progression: ValidProgressionSpecification::default(),
        }
    }

    /// Replace the modification rule.
    pub fn with_modify_rule(mut self, rule: CanModifySpecification) -> Self {
        self.can_modify = rule;
        self
    }

    /// Replace the progression rule.
    pub fn with_progression_rule(mut self, rule: ValidProgressionSpecification) -> Self {
        self.valid_progression = rule;
        self
    }

    /// Create and store a new item.
    ///
    /// Fails with [`TodoError::InvalidCategory`] when the category source
    /// rejects `category`, and with [`TodoError::DuplicateId`] when `id` is
    /// already taken.
    pub fn add_item(
        &mut self,
        id: ItemId,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> TodoResult<&TodoItem> {
        let category = category.into();
        if !self.categories.contains(&category) {
            return Err(TodoError::InvalidCategory(category));
        }
        if self.items.contains_key(&id) {
            return Err(TodoError::DuplicateId(id));
        }

        let item = TodoItem::new(id, title, description, category);
        Ok(&*self.items.entry(id).or_insert(item))
    }

    /// Replace an item's description.
    pub fn update_item(
        &mut self,
        id: ItemId,
        description: impl Into<String>,
    ) -> TodoResult<&TodoItem> {
        let item = self.items.get_mut(&id).ok_or(TodoError::NotFound(id))?;
        if !self.can_modify.is_satisfied_by(item) {
            return Err(TodoError::CannotModify {
                id,
                reason: self.can_modify.reason(),
            });
        }

        item.set_description(description);
        Ok(&*item)
    }

    /// Delete an item, returning it.
    pub fn remove_item(&mut self, id: ItemId) -> TodoResult<TodoItem> {
        let item = self.items.get(&id).ok_or(TodoError::NotFound(id))?;
        if !self.can_modify.is_satisfied_by(item) {
            return Err(TodoError::CannotModify {
                id,
                reason: self.can_modify.reason(),
            });
        }

        self.items.remove(&id).ok_or(TodoError::NotFound(id))
    }

    /// Append a progression to an item's history.
    ///
    /// Gated only by the progression rule: an item past the modification
    /// threshold still accepts progress up to 100%.
    pub fn register_progression(
        &mut self,
        id: ItemId,
        date: DateTime<Utc>,
        percent: Decimal,
    ) -> TodoResult<&TodoItem> {
        let item = self.items.get_mut(&id).ok_or(TodoError::NotFound(id))?;
        self.valid_progression
            .check(item, date, percent)
            .map_err(|reason| TodoError::InvalidProgression { id, reason })?;

        item.add_progression(date, percent);
        debug_assert!(
            self.valid_progression.is_satisfied_by(item),
            "{}",
            self.valid_progression.reason()
        );
        Ok(&*item)
    }

    /// Every item, ascending by id.
    pub fn get_all_items(&self) -> Vec<&TodoItem> {
        let mut items: Vec<&TodoItem> = self.items.values().collect();
        items.sort_by_key(|item| item.id());
        items
    }

    pub fn get_item(&self, id: ItemId) -> TodoResult<&TodoItem> {
        self.items.get(&id).ok_or(TodoError::NotFound(id))
    }

    /// One past the highest id in use, or 1 for an empty list.
    ///
    /// Fails with [`TodoError::IdsExhausted`] once `ItemId::MAX` is taken.
    pub fn next_id(&self) -> TodoResult<ItemId> {
        match self.items.keys().max() {
            None => Ok(1),
            Some(&max) => max.checked_add(1).ok_or(TodoError::IdsExhausted(max)),
        }
    }

    /// Categories currently accepted by the category source.
    pub fn categories(&self) -> Vec<String> {
        self.categories.categories()
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Debug for TodoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoList")
            .field("items", &self.items.len())
            .field("can_modify", &self.can_modify)
            .field("valid_progression", &self.valid_progression)
            .finish_non_exhaustive()
    }
}
