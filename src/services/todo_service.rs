//! Todo service: the host-side owner of a [`TodoList`].
//!
//! The aggregate is not internally synchronized, so the service keeps it
//! behind a single exclusive lock held for exactly one aggregate operation
//! per call. It also assigns ids for transports that do not carry one and
//! logs every outcome; the aggregate itself stays silent.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::errors::{TodoError, TodoResult};
use crate::domain::models::{ItemId, TodoItem, TodoList};

/// Serializes access to one [`TodoList`] across concurrent callers.
pub struct TodoService {
    list: Mutex<TodoList>,
}

impl TodoService {
    /// Take ownership of `list`.
    pub fn new(list: TodoList) -> Self {
        Self {
            list: Mutex::new(list),
        }
    }

    /// Create an item under the next free id.
    pub async fn create_item(
        &self,
        title: String,
        description: String,
        category: String,
    ) -> TodoResult<TodoItem> {
        let mut list = self.list.lock().await;
        let id = match list.next_id() {
            Ok(id) => id,
            Err(err) => {
                warn!(code = err.error_code(), error = %err, "cannot assign item id");
                return Err(err);
            }
        };
        let result = list.add_item(id, title, description, category).cloned();
        log_outcome("add_item", id, &result);
        result
    }

    /// Create an item under a caller-chosen id.
    pub async fn add_item(
        &self,
        id: ItemId,
        title: String,
        description: String,
        category: String,
    ) -> TodoResult<TodoItem> {
        let result = self
            .list
            .lock()
            .await
            .add_item(id, title, description, category)
            .cloned();
        log_outcome("add_item", id, &result);
        result
    }

    /// Replace an item's description.
    pub async fn update_item(&self, id: ItemId, description: String) -> TodoResult<TodoItem> {
        let result = self
            .list
            .lock()
            .await
            .update_item(id, description)
            .cloned();
        log_outcome("update_item", id, &result);
        result
    }

    /// Remove an item and return it.
    pub async fn remove_item(&self, id: ItemId) -> TodoResult<TodoItem> {
        let result = self.list.lock().await.remove_item(id);
        log_outcome("remove_item", id, &result);
        result
    }

    /// Record a progression against an item.
    pub async fn register_progression(
        &self,
        id: ItemId,
        date: DateTime<Utc>,
        percent: Decimal,
    ) -> TodoResult<TodoItem> {
        let result = self
            .list
            .lock()
            .await
            .register_progression(id, date, percent)
            .cloned();
        if let Ok(item) = &result {
            info!(
                item_id = id,
                percent = %percent,
                total_progress = %item.total_progress(),
                completed = item.is_completed(),
                "progression registered"
            );
        } else {
            log_outcome("register_progression", id, &result);
        }
        result
    }

    /// Snapshot of every item, ascending by id.
    pub async fn list_items(&self) -> Vec<TodoItem> {
        let items: Vec<TodoItem> = self
            .list
            .lock()
            .await
            .get_all_items()
            .into_iter()
            .cloned()
            .collect();
        debug!(count = items.len(), "listed items");
        items
    }

    pub async fn get_item(&self, id: ItemId) -> TodoResult<TodoItem> {
        self.list.lock().await.get_item(id).cloned()
    }

    /// Categories currently accepted for new items.
    pub async fn categories(&self) -> Vec<String> {
        self.list.lock().await.categories()
    }
}

fn log_outcome(operation: &'static str, id: ItemId, result: &Result<TodoItem, TodoError>) {
    match result {
        Ok(item) => info!(
            operation,
            item_id = id,
            category = item.category(),
            "item operation succeeded"
        ),
        Err(err) => warn!(
            operation,
            item_id = id,
            code = err.error_code(),
            error = %err,
            "item operation rejected"
        ),
    }
}
