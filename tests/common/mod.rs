//! Common test utilities for integration tests

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use todo_tracker::adapters::categories::StaticCategorySource;
use todo_tracker::domain::models::TodoList;

pub const CATEGORIES: [&str; 4] = ["Work", "Personal", "Education", "Health"];

/// A fresh list accepting the default categories.
pub fn new_list() -> TodoList {
    TodoList::new(Arc::new(StaticCategorySource::new(CATEGORIES)))
}

/// Midnight UTC on the given calendar day.
pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid calendar date")
}

/// Setup test logging
#[allow(dead_code)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("todo_tracker=debug")
        .try_init();
}
