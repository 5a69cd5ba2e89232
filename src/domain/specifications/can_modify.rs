use rust_decimal::Decimal;

use super::ItemSpecification;
use crate::domain::models::TodoItem;

/// Items may be updated or removed only while their accumulated progress
/// is at or below a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanModifySpecification {
    threshold: Decimal,
}

impl CanModifySpecification {
    /// Progress percentage above which an item is frozen.
    pub const DEFAULT_THRESHOLD: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

    /// Rule with the default 50% threshold.
    pub fn new() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }

    /// Rule freezing items whose total exceeds `threshold`.
    pub fn with_threshold(threshold: Decimal) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> Decimal {
        self.threshold
    }
}

impl Default for CanModifySpecification {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemSpecification for CanModifySpecification {
    fn is_satisfied_by(&self, item: &TodoItem) -> bool {
        item.total_progress() <= self.threshold
    }

    fn reason(&self) -> String {
        format!(
            "items with more than {}% progress can no longer be modified",
            self.threshold
        )
    }
}
