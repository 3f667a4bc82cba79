//! Initialize specimen in a project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing specimen...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    let root = config_path.parent().unwrap_or(Path::new(""));

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    // Create starter registry
    let registry_path = root.join("registry.yaml");
    if !registry_path.exists() || yes {
        fs::write(&registry_path, DEFAULT_REGISTRY).context("Failed to write registry.yaml")?;
        tracing::info!("Created {}", registry_path.display());
    }

    // Create examples directory with one curated example
    let snippets_dir = root.join("snippets");
    if !snippets_dir.exists() {
        fs::create_dir_all(&snippets_dir).context("Failed to create snippets directory")?;
    }

    let date_picker_path = snippets_dir.join("date-picker.tsx");
    if !date_picker_path.exists() || yes {
        fs::write(&date_picker_path, DEFAULT_DATE_PICKER_EXAMPLE)
            .context("Failed to write date-picker.tsx")?;
        tracing::info!("Created {}", date_picker_path.display());
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'specimen render Badge' to see a generated example.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Specimen Configuration

[registry]
# Component registry (.yaml, .yml, .json or .toml)
path = "registry.yaml"

# Pre-authored examples, matched to components by file name
examples_dir = "snippets"

[library]
# Module that generated examples import components from
entry = "@/components/ui"

[preview]
# Function the preview sandbox uses to mount an example
entry_point = "render"

# Attribute carrying inspector ids
instrument_attribute = "data-inspect-id"

[export]
output = "dist/examples"

[server]
port = 7777
host = "127.0.0.1"
"#;

const DEFAULT_REGISTRY: &str = r#"components:
  Button:
    props:
      variant: [default, secondary, outline, ghost]
      size: [sm, md, lg]
      disabled: boolean

  Badge:
    props:
      variant: [solid, outline, subtle]

  Input:
    selfClosing: true
    props:
      placeholder: string
      disabled: boolean

  PasswordInput:
    aliasFor: Input
    aliasProps:
      type: password

  Dialog:
    requiredParts: [DialogTrigger, DialogContent, DialogHeader, DialogTitle, DialogDescription]
  DialogTrigger: {}
  DialogContent: {}
  DialogHeader: {}
  DialogTitle: {}
  DialogDescription: {}

  DatePicker:
    requiresContext: true

aliases:
  TextField: Input
"#;

const DEFAULT_DATE_PICKER_EXAMPLE: &str = r#"'use client';

import { useState } from "react";
import { DatePicker } from "@/components/ui";

export default function DatePickerDemo() {
  const [date, setDate] = useState<Date | undefined>(new Date());

  return <DatePicker value={date} onChange={setDate} />;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFile;
    use specimen_synth::{RenderHooks, RenderOutcome, Shape};
    use tempfile::tempdir;

    #[test]
    fn default_config_parses() {
        let config = ConfigFile::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.registry.examples_dir.as_deref(), Some(Path::new("snippets")));
    }

    #[tokio::test]
    async fn scaffolds_a_renderable_project() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("specimen.toml");

        run(&config_path, false).await.unwrap();

        let mut config = ConfigFile::load(&config_path).unwrap();
        config.registry.path = temp.path().join("registry.yaml");
        config.registry.examples_dir = Some(temp.path().join("snippets"));

        let pipeline = config.pipeline().unwrap();
        for name in pipeline.list_available() {
            let rendered = pipeline.render(&name, &RenderHooks::new());
            assert!(!rendered.is_fallback(), "{name} fell back");
        }

        let picker = pipeline.render("DatePicker", &RenderHooks::new());
        assert!(picker.source.contains("export default function DatePickerExample()"));
        assert_eq!(picker.outcome, RenderOutcome::Example(Shape::DefaultFunction));
    }

    #[tokio::test]
    async fn keeps_existing_config_without_yes() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("specimen.toml");
        fs::write(&config_path, "# mine\n").unwrap();

        run(&config_path, false).await.unwrap();

        assert_eq!(fs::read_to_string(&config_path).unwrap(), "# mine\n");
        assert!(!temp.path().join("registry.yaml").exists());
    }
}
