//! Service layer: hosts the aggregate for concurrent callers.

pub mod todo_service;

pub use todo_service::TodoService;
