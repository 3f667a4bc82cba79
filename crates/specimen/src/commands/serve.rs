//! Preview server command.

use anyhow::Result;
use specimen_server::{PreviewServer, PreviewServerConfig};

use crate::config::ConfigFile;

/// Run the serve command.
pub async fn run(config: &ConfigFile, port: Option<u16>, open: bool) -> Result<()> {
    let port = port.unwrap_or(config.server.port);
    tracing::info!("Starting preview server on port {}", port);

    let server_config = PreviewServerConfig {
        registry_path: config.registry.path.clone(),
        examples_dir: config.registry.examples_dir.clone(),
        options: config.pipeline_options(),
        port,
        host: config.server.host.clone(),
        open,
    };

    PreviewServer::new(server_config).start().await?;

    Ok(())
}
