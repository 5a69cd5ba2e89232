//! Table output formatting for items and categories using comfy-table.

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use rust_decimal::Decimal;
use std::env;

use super::truncate;
use crate::adapters::http::types::{ItemResponse, ProgressionResponse};

const TITLE_WIDTH: usize = 40;

/// Table formatter for CLI output
pub struct TableFormatter {
    use_colors: bool,
}

impl TableFormatter {
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Format a list of items as a table
    pub fn format_items(&self, items: &[ItemResponse]) -> String {
        let mut table = base_table();

        table.set_header(vec![
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Title").add_attribute(Attribute::Bold),
            Cell::new("Category").add_attribute(Attribute::Bold),
            Cell::new("Progress").add_attribute(Attribute::Bold),
            Cell::new("Last Update").add_attribute(Attribute::Bold),
        ]);

        for item in items {
            let last = item
                .last_progression_date
                .map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string());

            table.add_row(vec![
                Cell::new(item.id),
                Cell::new(truncate(&item.title, TITLE_WIDTH)),
                Cell::new(&item.category),
                self.progress_cell(item.total_progress, item.is_completed),
                Cell::new(last),
            ]);
        }

        table.to_string()
    }

    /// Format an item's progression history
    pub fn format_progressions(&self, progressions: &[ProgressionResponse]) -> String {
        let mut table = base_table();
        table.set_header(vec![
            Cell::new("Date").add_attribute(Attribute::Bold),
            Cell::new("Percent").add_attribute(Attribute::Bold),
        ]);

        for p in progressions {
            table.add_row(vec![
                Cell::new(p.date.format("%Y-%m-%d %H:%M:%S UTC")),
                Cell::new(format!("{}%", p.percent.normalize())),
            ]);
        }

        table.to_string()
    }

    fn progress_cell(&self, total: Decimal, completed: bool) -> Cell {
        let text = format!("{}%", total.normalize());
        if !self.use_colors {
            return Cell::new(if completed { format!("{text} ✓") } else { text });
        }
        let color = if completed {
            Color::Green
        } else if total > Decimal::ZERO {
            Color::Yellow
        } else {
            Color::White
        };
        Cell::new(text).fg(color)
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn supports_color() -> bool {
    env::var_os("NO_COLOR").is_none() && console::colors_enabled()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn item(id: u64, total: i64) -> ItemResponse {
        ItemResponse {
            id,
            title: format!("Item {id}"),
            description: String::new(),
            category: "Work".to_string(),
            total_progress: Decimal::from(total),
            is_completed: total >= 100,
            last_progression_date: (total > 0)
                .then(|| Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
            progressions: Vec::new(),
        }
    }

    #[test]
    fn test_format_items_contains_rows() {
        let formatter = TableFormatter::with_colors(false);
        let out = formatter.format_items(&[item(1, 0), item(2, 100)]);

        assert!(out.contains("Item 1"));
        assert!(out.contains("Item 2"));
        assert!(out.contains("100% ✓"));
        assert!(out.contains("2024-03-01"));
    }

    #[test]
    fn test_format_progressions() {
        let formatter = TableFormatter::with_colors(false);
        let out = formatter.format_progressions(&[ProgressionResponse {
            date: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
            percent: Decimal::new(125, 1),
        }]);

        assert!(out.contains("12.5%"));
        assert!(out.contains("2024-01-02"));
    }
}
