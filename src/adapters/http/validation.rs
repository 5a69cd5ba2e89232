//! Request shape validation applied before the aggregate is invoked.
//!
//! Some of these checks repeat the aggregate's own rules (percent range);
//! the aggregate still re-validates everything it is given.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

use super::types::{
    CreateItemRequest, RegisterProgressionRequest, ReplaceCategoriesRequest, UpdateItemRequest,
};
use crate::domain::models::{parse_progression_date, MAX_PERCENT, MIN_PERCENT};

pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 500;
pub const MAX_CATEGORY_LEN: usize = 50;

/// A request rejected before reaching the service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("percent must be between 0 and 100, got {0}")]
    PercentOutOfRange(Decimal),

    #[error("invalid date '{0}': expected RFC 3339 or YYYY-MM-DD")]
    InvalidDate(String),

    #[error("duplicate category '{0}' (categories are case-insensitive)")]
    DuplicateCategory(String),
}

impl RequestValidationError {
    /// Code shared by every boundary rejection, including undecodable bodies.
    pub const CODE: &'static str = "VALIDATION_ERROR";

    pub fn error_code(&self) -> &'static str {
        Self::CODE
    }
}

/// A create request that passed shape validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub title: String,
    pub description: String,
    pub category: String,
}

/// A progression request that passed shape validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewProgression {
    pub date: DateTime<Utc>,
    pub percent: Decimal,
}

fn required(value: Option<String>, field: &'static str) -> Result<String, RequestValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(RequestValidationError::MissingField(field)),
    }
}

fn max_len(value: &str, field: &'static str, max: usize) -> Result<(), RequestValidationError> {
    if value.chars().count() > max {
        return Err(RequestValidationError::TooLong { field, max });
    }
    Ok(())
}

impl CreateItemRequest {
    pub fn validate(self) -> Result<NewItem, RequestValidationError> {
        let title = required(self.title, "title")?;
        max_len(&title, "title", MAX_TITLE_LEN)?;

        let description = self.description.unwrap_or_default();
        max_len(&description, "description", MAX_DESCRIPTION_LEN)?;

        let category = required(self.category, "category")?;
        max_len(&category, "category", MAX_CATEGORY_LEN)?;

        Ok(NewItem {
            title,
            description,
            category,
        })
    }
}

impl UpdateItemRequest {
    pub fn validate(self) -> Result<String, RequestValidationError> {
        let description = self
            .description
            .ok_or(RequestValidationError::MissingField("description"))?;
        max_len(&description, "description", MAX_DESCRIPTION_LEN)?;
        Ok(description)
    }
}

impl RegisterProgressionRequest {
    pub fn validate(self) -> Result<NewProgression, RequestValidationError> {
        let raw_date = required(self.date, "date")?;
        let date = parse_progression_date(&raw_date)
            .ok_or(RequestValidationError::InvalidDate(raw_date))?;

        let percent = self
            .percent
            .ok_or(RequestValidationError::MissingField("percent"))?;
        if !(MIN_PERCENT..=MAX_PERCENT).contains(&percent) {
            return Err(RequestValidationError::PercentOutOfRange(percent));
        }

        Ok(NewProgression { date, percent })
    }
}

impl ReplaceCategoriesRequest {
    pub fn validate(self) -> Result<Vec<String>, RequestValidationError> {
        if self.categories.is_empty() {
            return Err(RequestValidationError::MissingField("categories"));
        }
        let mut seen = HashSet::new();
        self.categories
            .into_iter()
            .map(|name| -> Result<String, RequestValidationError> {
                let name = required(Some(name), "category")?;
                max_len(&name, "category", MAX_CATEGORY_LEN)?;
                if !seen.insert(name.to_lowercase()) {
                    return Err(RequestValidationError::DuplicateCategory(name));
                }
                Ok(name)
            })
            .collect()
    }
}
