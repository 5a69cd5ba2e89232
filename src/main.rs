//! Todo Tracker CLI entry point.

use clap::Parser;

use todo_tracker::cli::client::TodoClient;
use todo_tracker::cli::commands::{category, item, serve};
use todo_tracker::cli::{handle_error, Cli, Commands};
use todo_tracker::infrastructure::config::ConfigLoader;
use todo_tracker::infrastructure::logging::{LogConfig, LoggerImpl};

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ConfigLoader::load_optional(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve(args) => {
            let _logger = LoggerImpl::init(&LogConfig::from(&config.logging))?;
            serve::execute(args, config).await
        }
        Commands::Item(args) => {
            LoggerImpl::init_client(cli.verbose);
            let client = TodoClient::new(cli.server.unwrap_or_else(|| config.server.base_url()))?;
            item::execute(args, &client, cli.json).await
        }
        Commands::Category(args) => {
            LoggerImpl::init_client(cli.verbose);
            let client = TodoClient::new(cli.server.unwrap_or_else(|| config.server.base_url()))?;
            category::execute(args, &client, cli.json).await
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli).await {
        handle_error(err, json);
    }
}
