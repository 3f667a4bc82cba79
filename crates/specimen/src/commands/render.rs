//! Print the display-ready example for a component.

use anyhow::Result;
use specimen_synth::{RenderHooks, RenderOutcome, Shape};

use crate::config::ConfigFile;

/// Run the render command.
pub async fn run(config: &ConfigFile, name: &str) -> Result<()> {
    let pipeline = config.pipeline()?;
    let rendered = pipeline.render(name, &RenderHooks::new());

    match &rendered.outcome {
        RenderOutcome::Example(Shape::Unrecognized) => {
            tracing::warn!("{} has no entry-point invocation", name);
        }
        RenderOutcome::Example(shape) => tracing::debug!("Rendered {} as {:?}", name, shape),
        RenderOutcome::Fallback(failure) => {
            tracing::warn!("Rendered fallback for {}: {}", name, failure.title);
        }
    }

    print!("{}", rendered.source);

    Ok(())
}
