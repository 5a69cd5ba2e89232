use std::sync::RwLock;

use crate::domain::ports::CategorySource;

/// Category set that can be swapped at runtime.
///
/// Replacing the set only affects items created afterwards; items already
/// in a list keep the category they were accepted with.
#[derive(Debug, Default)]
pub struct SharedCategorySource {
    categories: RwLock<Vec<String>>,
}

impl SharedCategorySource {
    /// Start with `categories`; see [`Self::replace`].
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: RwLock::new(categories.into_iter().map(Into::into).collect()),
        }
    }

    /// Swap in a new category set.
    pub fn replace<I, S>(&self, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let updated: Vec<String> = categories.into_iter().map(Into::into).collect();
        match self.categories.write() {
            Ok(mut guard) => *guard = updated,
            Err(poisoned) => *poisoned.into_inner() = updated,
        }
    }
}

impl CategorySource for SharedCategorySource {
    fn categories(&self) -> Vec<String> {
        match self.categories.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}
