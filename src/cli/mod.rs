//! Command-line interface.
//!
//! `serve` hosts the list; every other command is a thin client that talks
//! to a running server over HTTP.

pub mod client;
pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;

use crate::cli::client::ClientError;
use crate::cli::commands::category::CategoryArgs;
use crate::cli::commands::item::ItemArgs;
use crate::cli::commands::serve::ServeArgs;

#[derive(Parser)]
#[command(name = "todo-tracker")]
#[command(about = "Personal todo list with categorised items and dated progress", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Path to a configuration file (defaults to .todo/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of a running server (defaults to the configured host and port)
    #[arg(long, global = true, env = "TODO_API_URL")]
    pub server: Option<String>,

    /// Verbose client logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),

    /// Item management commands
    Item(ItemArgs),

    /// Category commands
    Category(CategoryArgs),
}

/// Report a command failure and exit with a non-zero status.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    let code = err
        .downcast_ref::<ClientError>()
        .and_then(ClientError::code)
        .unwrap_or("ERROR")
        .to_string();

    if json_mode {
        let body = serde_json::json!({
            "error": format!("{err:#}"),
            "code": code,
        });
        eprintln!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("{} {err:#}", style("Error:").red().bold());
    }
    std::process::exit(1);
}
