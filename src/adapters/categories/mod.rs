//! Category source adapters.
//!
//! - `StaticCategorySource`: fixed list, typically taken from configuration
//! - `SharedCategorySource`: list that can be replaced while the host runs

pub mod shared_source;
pub mod static_source;

pub use shared_source::SharedCategorySource;
pub use static_source::StaticCategorySource;
