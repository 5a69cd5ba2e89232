//! Adapters for the aggregate's collaborators and transports.

pub mod categories;
pub mod http;
