use anyhow::Result;
use car_import::{config::Config, server};
use colored::Colorize;
use tracing::info;

/// Execute the start command (blocks until shutdown)
pub async fn execute(cfg: Config) -> Result<()> {
    println!("{}", "Starting CarImport in foreground mode...".green());
    info!(
        host = %cfg.server.host,
        port = cfg.server.port,
        metrics = cfg.metrics.enabled,
        "Starting CarImport"
    );

    server::start_server(cfg).await
}
