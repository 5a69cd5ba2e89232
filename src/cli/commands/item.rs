//! Item CLI commands.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Subcommand};
use rust_decimal::Decimal;

use crate::adapters::http::types::ItemResponse;
use crate::cli::client::TodoClient;
use crate::cli::output::table::TableFormatter;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{parse_progression_date, ItemId};

#[derive(Args, Debug)]
pub struct ItemArgs {
    #[command(subcommand)]
    pub command: ItemCommands,
}

#[derive(Subcommand, Debug)]
pub enum ItemCommands {
    /// Add a new item
    Add {
        /// Item title
        title: String,
        /// Category (one of the configured categories, any case)
        #[arg(short = 'C', long)]
        category: String,
        /// Item description
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Change an item's description
    Update {
        id: ItemId,
        /// New description
        #[arg(short, long)]
        description: String,
    },
    /// Remove an item
    Remove { id: ItemId },
    /// Record progress on an item
    Progress {
        id: ItemId,
        /// Percentage points to add (0-100)
        #[arg(short, long)]
        percent: Decimal,
        /// Date of the progress, RFC 3339 or YYYY-MM-DD (defaults to now)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List all items
    List,
    /// Show a single item with its progress history
    Show { id: ItemId },
}

#[derive(Debug, serde::Serialize)]
pub struct ItemActionOutput {
    pub action: &'static str,
    pub item: ItemResponse,
}

impl CommandOutput for ItemActionOutput {
    fn to_human(&self) -> String {
        let mut line = format!(
            "Item {} {}: {} [{}]",
            self.item.id, self.action, self.item.title, self.item.category
        );
        if self.action == "progressed" {
            line.push_str(&format!(
                " now at {}%",
                self.item.total_progress.normalize()
            ));
            if self.item.is_completed {
                line.push_str(" (completed)");
            }
        }
        line
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[derive(Debug, serde::Serialize)]
pub struct ItemListOutput {
    pub items: Vec<ItemResponse>,
    pub total: usize,
}

impl CommandOutput for ItemListOutput {
    fn to_human(&self) -> String {
        if self.items.is_empty() {
            return "No items found.".to_string();
        }
        let completed = self.items.iter().filter(|i| i.is_completed).count();
        format!(
            "{}\n\n{} item(s), {} completed",
            TableFormatter::new().format_items(&self.items),
            self.total,
            completed
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[derive(Debug, serde::Serialize)]
pub struct ItemDetailOutput {
    pub item: ItemResponse,
}

impl CommandOutput for ItemDetailOutput {
    fn to_human(&self) -> String {
        let item = &self.item;
        let mut lines = vec![
            format!("Item: {}", item.title),
            format!("ID: {}", item.id),
            format!("Category: {}", item.category),
            format!("Description: {}", item.description),
            format!(
                "Progress: {}%{}",
                item.total_progress.normalize(),
                if item.is_completed { " (completed)" } else { "" }
            ),
        ];

        if item.progressions.is_empty() {
            lines.push("\nNo progress recorded.".to_string());
        } else {
            lines.push("\nHistory:".to_string());
            lines.push(TableFormatter::new().format_progressions(&item.progressions));
        }

        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Resolve the date argument of `item progress`, defaulting to now.
pub fn resolve_progress_date(date: Option<&str>) -> Result<String> {
    match date {
        None => Ok(Utc::now().to_rfc3339()),
        Some(raw) => parse_progression_date(raw)
            .map(|d| d.to_rfc3339())
            .with_context(|| format!("Invalid date '{raw}': expected RFC 3339 or YYYY-MM-DD")),
    }
}

pub async fn execute(args: ItemArgs, client: &TodoClient, json_mode: bool) -> Result<()> {
    match args.command {
        ItemCommands::Add {
            title,
            category,
            description,
        } => {
            let item = client
                .create_item(&title, &description, &category)
                .await
                .context("Failed to add item")?;
            output(&ItemActionOutput { action: "added", item }, json_mode);
        }
        ItemCommands::Update { id, description } => {
            let item = client
                .update_item(id, &description)
                .await
                .with_context(|| format!("Failed to update item {id}"))?;
            output(&ItemActionOutput { action: "updated", item }, json_mode);
        }
        ItemCommands::Remove { id } => {
            let item = client
                .remove_item(id)
                .await
                .with_context(|| format!("Failed to remove item {id}"))?;
            output(&ItemActionOutput { action: "removed", item }, json_mode);
        }
        ItemCommands::Progress { id, percent, date } => {
            let date = resolve_progress_date(date.as_deref())?;
            let item = client
                .register_progression(id, &date, percent)
                .await
                .with_context(|| format!("Failed to record progress on item {id}"))?;
            output(
                &ItemActionOutput {
                    action: "progressed",
                    item,
                },
                json_mode,
            );
        }
        ItemCommands::List => {
            let items = client.list_items().await.context("Failed to list items")?;
            let total = items.len();
            output(&ItemListOutput { items, total }, json_mode);
        }
        ItemCommands::Show { id } => {
            let item = client
                .get_item(id)
                .await
                .with_context(|| format!("Failed to retrieve item {id}"))?;
            output(&ItemDetailOutput { item }, json_mode);
        }
    }

    Ok(())
}
