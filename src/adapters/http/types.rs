//! Request and response bodies of the items HTTP API.
//!
//! Shared by the server handlers and the CLI client.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::models::{ItemId, Progression, TodoItem};

/// Body of `POST /items`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateItemRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Body of `PUT /items/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `POST /items/{id}/progressions`.
///
/// `date` accepts RFC 3339 or `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterProgressionRequest {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub percent: Option<Decimal>,
}

/// Body of `PUT /categories`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplaceCategoriesRequest {
    #[serde(default)]
    pub categories: Vec<String>,
}

/// One entry of an item's progression history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionResponse {
    pub date: DateTime<Utc>,
    pub percent: Decimal,
}

impl From<&Progression> for ProgressionResponse {
    fn from(p: &Progression) -> Self {
        Self {
            date: p.date(),
            percent: p.percent(),
        }
    }
}

/// An item as exposed over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemResponse {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub total_progress: Decimal,
    pub is_completed: bool,
    pub last_progression_date: Option<DateTime<Utc>>,
    pub progressions: Vec<ProgressionResponse>,
}

impl From<&TodoItem> for ItemResponse {
    fn from(item: &TodoItem) -> Self {
        Self {
            id: item.id(),
            title: item.title().to_string(),
            description: item.description().to_string(),
            category: item.category().to_string(),
            total_progress: item.total_progress(),
            is_completed: item.is_completed(),
            last_progression_date: item.last_progression_date(),
            progressions: item.progressions().iter().map(ProgressionResponse::from).collect(),
        }
    }
}

impl From<TodoItem> for ItemResponse {
    fn from(item: TodoItem) -> Self {
        Self::from(&item)
    }
}

/// Current category list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// Error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}
