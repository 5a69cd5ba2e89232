//! Todo Tracker - personal todo list with dated progress
//!
//! A single list aggregate owns categorised items. Each item accumulates
//! dated percentage progressions; items become frozen for edits once more
//! than half done, and progress can never exceed 100% or go back in time.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): the list aggregate, its specifications and ports
//! - **Service Layer** (`services`): serialized access to the aggregate
//! - **Adapters** (`adapters`): category sources and the HTTP API
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use rust_decimal::Decimal;
//! use todo_tracker::adapters::categories::StaticCategorySource;
//! use todo_tracker::domain::models::{parse_progression_date, TodoList};
//!
//! let categories = Arc::new(StaticCategorySource::new(["Work", "Personal"]));
//! let mut list = TodoList::new(categories);
//! list.add_item(1, "Write report", "Quarterly numbers", "work").unwrap();
//!
//! let date = parse_progression_date("2024-01-15").unwrap();
//! let item = list.register_progression(1, date, Decimal::from(30)).unwrap();
//! assert_eq!(item.total_progress(), Decimal::from(30));
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{Config, ItemId, Progression, TodoItem, TodoList};
pub use domain::ports::CategorySource;
pub use domain::{TodoError, TodoResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::TodoService;
