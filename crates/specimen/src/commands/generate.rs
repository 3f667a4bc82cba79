//! Print the synthesized example for a component.

use anyhow::Result;

use crate::config::ConfigFile;

/// Run the generate command.
///
/// Unlike `render`, resolution and validation errors are reported as
/// failures instead of being turned into an error-display snippet.
pub async fn run(config: &ConfigFile, name: &str) -> Result<()> {
    let generated = config.pipeline()?.generate_detailed(name)?;

    tracing::debug!(
        "Generated {} via {:?}",
        name,
        generated.synthesized.strategy
    );

    print!("{}", generated.synthesized.source);

    Ok(())
}
