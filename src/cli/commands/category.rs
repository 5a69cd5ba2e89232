//! Category CLI commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::cli::client::TodoClient;
use crate::cli::output::{output, CommandOutput};

#[derive(Args, Debug)]
pub struct CategoryArgs {
    #[command(subcommand)]
    pub command: CategoryCommands,
}

#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List accepted categories
    List,
    /// Replace the accepted categories (existing items keep theirs)
    Set {
        #[arg(required = true, num_args = 1..)]
        categories: Vec<String>,
    },
}

#[derive(Debug, serde::Serialize)]
pub struct CategoryListOutput {
    pub categories: Vec<String>,
}

impl CommandOutput for CategoryListOutput {
    fn to_human(&self) -> String {
        if self.categories.is_empty() {
            return "No categories configured.".to_string();
        }
        let mut lines = vec![format!("{} categories:", self.categories.len())];
        lines.extend(self.categories.iter().map(|c| format!("  - {c}")));
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: CategoryArgs, client: &TodoClient, json_mode: bool) -> Result<()> {
    let response = match args.command {
        CategoryCommands::List => client
            .categories()
            .await
            .context("Failed to list categories")?,
        CategoryCommands::Set { categories } => client
            .replace_categories(categories)
            .await
            .context("Failed to replace categories")?,
    };

    output(
        &CategoryListOutput {
            categories: response.categories,
        },
        json_mode,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_list_human_output() {
        let out = CategoryListOutput {
            categories: vec!["Work".to_string(), "Health".to_string()],
        };
        assert_eq!(out.to_human(), "2 categories:\n  - Work\n  - Health");
    }
}
