//! Configuration file (specimen.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use specimen_registry::Registry;
use specimen_synth::{ExamplePipeline, PipelineOptions};

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub library: LibraryConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub export: ExportSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize)]
pub struct RegistryConfig {
    #[serde(default = "default_registry_path")]
    pub path: PathBuf,
    /// Directory of pre-authored examples
    pub examples_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct LibraryConfig {
    #[serde(default = "default_library_entry")]
    pub entry: String,
}

#[derive(Debug, Deserialize)]
pub struct PreviewConfig {
    #[serde(default = "default_entry_point")]
    pub entry_point: String,
    #[serde(default = "default_instrument_attribute")]
    pub instrument_attribute: String,
}

#[derive(Debug, Deserialize)]
pub struct ExportSettings {
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            path: default_registry_path(),
            examples_dir: None,
        }
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            entry: default_library_entry(),
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            entry_point: default_entry_point(),
            instrument_attribute: default_instrument_attribute(),
        }
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output: default_output(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

fn default_registry_path() -> PathBuf {
    PathBuf::from("registry.yaml")
}
fn default_library_entry() -> String {
    PipelineOptions::default().library_entry
}
fn default_entry_point() -> String {
    PipelineOptions::default().entry_point
}
fn default_instrument_attribute() -> String {
    PipelineOptions::default().instrument_attribute
}
fn default_output() -> PathBuf {
    PathBuf::from("dist/examples")
}
fn default_port() -> u16 {
    7777
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}

impl ConfigFile {
    /// Load configuration from `path` if it exists.
    /// Returns an error if the config file exists but is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No {} found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            library_entry: self.library.entry.clone(),
            entry_point: self.preview.entry_point.clone(),
            instrument_attribute: self.preview.instrument_attribute.clone(),
        }
    }

    /// Load the configured registry with its examples attached.
    pub fn load_registry(&self) -> Result<Registry> {
        Registry::load(&self.registry.path, self.registry.examples_dir.as_deref())
            .with_context(|| format!("Failed to load registry {}", self.registry.path.display()))
    }

    /// Build a pipeline over the configured registry.
    pub fn pipeline(&self) -> Result<ExamplePipeline> {
        Ok(ExamplePipeline::new(
            self.load_registry()?,
            self.pipeline_options(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let config = ConfigFile::load(Path::new("/definitely/not/specimen.toml")).unwrap();

        assert_eq!(config.registry.path, PathBuf::from("registry.yaml"));
        assert_eq!(config.server.port, 7777);
        assert_eq!(config.pipeline_options(), PipelineOptions::default());
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config = ConfigFile::parse(
            r#"
[registry]
path = "ui/registry.json"
examples_dir = "ui/snippets"

[preview]
entry_point = "mount"
"#,
        )
        .unwrap();

        assert_eq!(config.registry.path, PathBuf::from("ui/registry.json"));
        assert_eq!(
            config.registry.examples_dir,
            Some(PathBuf::from("ui/snippets"))
        );
        assert_eq!(config.preview.entry_point, "mount");
        assert_eq!(config.preview.instrument_attribute, "data-inspect-id");
        assert_eq!(config.library.entry, "@/components/ui");
        assert_eq!(config.export.output, PathBuf::from("dist/examples"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("specimen.toml");
        fs::write(&path, "[server]\nport = \"not a number\"\n").unwrap();

        let err = ConfigFile::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn builds_pipeline_from_registry_file() {
        let temp = tempdir().unwrap();
        let registry = temp.path().join("registry.yaml");
        fs::write(&registry, "components:\n  Badge: {}\n").unwrap();

        let mut config = ConfigFile::default();
        config.registry.path = registry;

        let pipeline = config.pipeline().unwrap();
        assert_eq!(pipeline.list_available(), vec!["Badge"]);
    }
}
