//! `serve` command: run the items HTTP server until Ctrl-C.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::Args;
use tracing::info;

use crate::adapters::categories::SharedCategorySource;
use crate::adapters::http::{AppState, ItemsHttpServer};
use crate::domain::models::{Config, TodoList};
use crate::infrastructure::config::ConfigLoader;
use crate::services::TodoService;

#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Override the configured bind host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the configured port
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Apply command-line overrides on top of the loaded configuration.
pub fn apply_overrides(mut config: Config, args: &ServeArgs) -> Result<Config> {
    if let Some(host) = &args.host {
        config.server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    ConfigLoader::validate(&config)?;
    Ok(config)
}

/// Wire the category source, aggregate and service into server state.
pub fn build_state(config: &Config) -> AppState {
    let categories = Arc::new(SharedCategorySource::new(config.categories.clone()));
    let list = TodoList::new(categories.clone());
    AppState::new(Arc::new(TodoService::new(list)), categories)
}

pub async fn execute(args: ServeArgs, config: Config) -> Result<()> {
    let config = apply_overrides(config, &args)?;
    let state = build_state(&config);

    info!(
        host = %config.server.host,
        port = config.server.port,
        categories = config.categories.len(),
        "starting todo tracker server"
    );

    ItemsHttpServer::new(state, config.server)
        .serve_with_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await
        .map_err(|e| anyhow!("server error: {e}"))
}
