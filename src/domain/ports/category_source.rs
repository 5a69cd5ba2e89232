/// Source of the categories an item may be filed under.
///
/// The aggregate consults this once per item creation and never caches the
/// answer, so implementations are free to change their set at runtime.
pub trait CategorySource: Send + Sync {
    /// Currently valid category names, in display order.
    fn categories(&self) -> Vec<String>;

    /// Case-insensitive membership test.
    fn contains(&self, category: &str) -> bool {
        let wanted = category.to_lowercase();
        self.categories()
            .iter()
            .any(|name| name.to_lowercase() == wanted)
    }
}
