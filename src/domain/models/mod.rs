pub mod config;
pub mod progression;
pub mod todo_item;
pub mod todo_list;

pub use config::{Config, LoggingConfig, ServerConfig};
pub use progression::{parse_progression_date, Progression, MAX_PERCENT, MIN_PERCENT};
pub use todo_item::{ItemId, TodoItem};
pub use todo_list::TodoList;
