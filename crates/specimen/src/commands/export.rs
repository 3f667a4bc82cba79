//! Batch export command.

use std::path::PathBuf;

use anyhow::Result;
use specimen_export::{ExportBuilder, ExportConfig};

use crate::config::ConfigFile;

/// Run the export command.
pub async fn run(
    config: &ConfigFile,
    output: Option<PathBuf>,
    components: Vec<String>,
) -> Result<()> {
    tracing::info!("Exporting examples...");

    let export_config = ExportConfig {
        output_dir: output.unwrap_or_else(|| config.export.output.clone()),
        components,
    };

    let result = ExportBuilder::new(config.pipeline()?, export_config).export()?;

    tracing::info!(
        "Exported {} examples ({} fallbacks) in {}ms",
        result.examples,
        result.fallbacks,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
