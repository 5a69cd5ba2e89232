//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the interfaces that adapters must implement:
//! - CategorySource: supplies the currently valid item categories
//!
//! These traits keep the aggregate independent of how collaborators are
//! sourced (static configuration, runtime-replaceable list, lookup store).

pub mod category_source;

pub use category_source::CategorySource;
