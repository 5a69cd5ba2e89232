//! CLI command implementations.

pub mod category;
pub mod item;
pub mod serve;
