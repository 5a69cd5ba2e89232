//! Progression value object.
//!
//! A progression is one dated percentage-of-completion increment recorded
//! against a todo item. Progressions are never mutated once recorded.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lowest percentage a single progression may carry.
pub const MIN_PERCENT: Decimal = Decimal::ZERO;

/// Highest percentage a single progression may carry, and the cap on an
/// item's accumulated progress.
pub const MAX_PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// A dated percentage increment. Equal iff date and percent are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Progression {
    date: DateTime<Utc>,
    percent: Decimal,
}

impl Progression {
    pub fn new(date: DateTime<Utc>, percent: Decimal) -> Self {
        Self { date, percent }
    }

    /// When the progress was made.
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Share of the item completed by this step.
    pub fn percent(&self) -> Decimal {
        self.percent
    }
}

/// Parse a progression date from either RFC 3339 or a bare `YYYY-MM-DD`
/// (interpreted as midnight UTC).
pub fn parse_progression_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
