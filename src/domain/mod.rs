//! Domain layer for the todo tracker
//!
//! This module contains the list aggregate, its entities and value objects,
//! the eligibility specifications it consults, and the ports it depends on.

pub mod errors;
pub mod models;
pub mod ports;
pub mod specifications;

// Re-export error types for convenient access
pub use errors::{TodoError, TodoResult};
