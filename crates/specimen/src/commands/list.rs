//! List registered components.

use anyhow::Result;

use crate::config::ConfigFile;

/// Run the list command.
pub async fn run(config: &ConfigFile) -> Result<()> {
    let pipeline = config.pipeline()?;
    let names = pipeline.list_available();

    tracing::debug!(
        "{} components in {}",
        names.len(),
        config.registry.path.display()
    );

    for name in names {
        println!("{}", name);
    }

    Ok(())
}
