//! Show how a component name resolves.

use anyhow::{Context, Result};
use specimen_synth::{validate, ResolvedMetadata};

use crate::config::ConfigFile;

/// Run the inspect command.
pub async fn run(config: &ConfigFile, name: &str) -> Result<()> {
    let pipeline = config.pipeline()?;

    let meta = pipeline.resolve(name)?;
    let diagnostics = validate(&meta, pipeline.registry())?;

    println!("{}", describe(&meta)?);

    for diagnostic in diagnostics {
        println!("warning[{}]: {}", diagnostic.code, diagnostic.message);
    }

    Ok(())
}

/// Resolved metadata as pretty JSON.
fn describe(meta: &ResolvedMetadata) -> Result<String> {
    serde_json::to_string_pretty(meta).context("Failed to serialize metadata")
}
