use crate::domain::ports::CategorySource;

/// Fixed set of categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticCategorySource {
    categories: Vec<String>,
}

impl StaticCategorySource {
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }
}

impl CategorySource for StaticCategorySource {
    fn categories(&self) -> Vec<String> {
        self.categories.clone()
    }
}
