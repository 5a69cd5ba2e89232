//! Rules for recording a new progression against an item.
//!
//! The three checks are exposed separately so each failure carries its own
//! message.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::ItemSpecification;
use crate::domain::models::{TodoItem, MAX_PERCENT, MIN_PERCENT};

/// Rules a new progression must pass before it is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidProgressionSpecification {
    max_total: Decimal,
}

impl ValidProgressionSpecification {
    /// Rule capping the total at 100%.
    pub fn new() -> Self {
        Self {
            max_total: MAX_PERCENT,
        }
    }

    pub fn max_total(&self) -> Decimal {
        self.max_total
    }

    /// Percent lies within `[0, 100]`.
    pub fn is_valid_percent(&self, percent: Decimal) -> bool {
        (MIN_PERCENT..=MAX_PERCENT).contains(&percent)
    }

    pub fn invalid_percent_reason(&self, percent: Decimal) -> String {
        format!("percent must be between {MIN_PERCENT} and {MAX_PERCENT}, got {percent}")
    }

    /// Appending `percent` would push the total past the cap.
    pub fn would_exceed_max_total(&self, current_total: Decimal, percent: Decimal) -> bool {
        current_total + percent > self.max_total
    }

    pub fn exceed_max_total_reason(&self, current_total: Decimal, percent: Decimal) -> String {
        format!(
            "total progress would be {}%, exceeding the maximum of {}%",
            current_total + percent,
            self.max_total
        )
    }

    /// `date` is strictly after the item's latest progression. Items with no
    /// history accept any date.
    pub fn is_after_latest(&self, item: &TodoItem, date: DateTime<Utc>) -> bool {
        item.last_progression_date()
            .is_none_or(|latest| date > latest)
    }

    pub fn not_after_latest_reason(&self, item: &TodoItem, date: DateTime<Utc>) -> String {
        match item.last_progression_date() {
            Some(latest) => format!(
                "date {} must be after the latest progression date {}",
                date.to_rfc3339(),
                latest.to_rfc3339()
            ),
            None => format!("date {} is not valid", date.to_rfc3339()),
        }
    }

    /// Run every check in order, returning the reason of the first failure.
    pub fn check(&self, item: &TodoItem, date: DateTime<Utc>, percent: Decimal) -> Result<(), String> {
        if !self.is_valid_percent(percent) {
            return Err(self.invalid_percent_reason(percent));
        }
        if !self.is_after_latest(item, date) {
            return Err(self.not_after_latest_reason(item, date));
        }
        let current_total = item.total_progress();
        if self.would_exceed_max_total(current_total, percent) {
            return Err(self.exceed_max_total_reason(current_total, percent));
        }
        Ok(())
    }
}

impl Default for ValidProgressionSpecification {
    fn default() -> Self {
        Self::new()
    }
}

/// As an item-level rule: the recorded history itself is well formed.
impl ItemSpecification for ValidProgressionSpecification {
    fn is_satisfied_by(&self, item: &TodoItem) -> bool {
        let ordered = item
            .progressions()
            .windows(2)
            .all(|pair| pair[1].date() > pair[0].date());
        let in_range = item
            .progressions()
            .iter()
            .all(|p| self.is_valid_percent(p.percent()));
        ordered && in_range && item.total_progress() <= self.max_total
    }

    fn reason(&self) -> String {
        format!(
            "progressions must be dated in strictly increasing order, each between {MIN_PERCENT} and {MAX_PERCENT}%, totalling at most {}%",
            self.max_total
        )
    }
}
