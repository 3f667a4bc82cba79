//! The component registry: name -> metadata plus an alias table.
//!
//! A registry is loaded once (from a JSON, YAML or TOML document, optionally
//! enriched with pre-authored examples from a directory) and then shared
//! read-only by every pipeline that renders examples from it.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::component::{ComponentInfo, PreAuthoredExample};

/// Document format of a registry file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Read-only catalog of component metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    /// Entries by canonical name, in declaration order
    #[serde(default)]
    components: IndexMap<String, ComponentInfo>,

    /// Alias name -> canonical name
    #[serde(default)]
    aliases: IndexMap<String, String>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a registry document, picking the format from the extension.
    pub fn from_path(path: &Path) -> Result<Self, RegistryError> {
        let format = Format::from_path(path)
            .ok_or_else(|| RegistryError::UnsupportedFormat(path.display().to_string()))?;

        let content = fs::read_to_string(path).map_err(|e| RegistryError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let registry = Self::parse(&content, format)?;
        tracing::debug!(
            "Loaded {} components and {} aliases from {}",
            registry.components.len(),
            registry.aliases.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Parse a registry document.
    pub fn parse(content: &str, format: Format) -> Result<Self, RegistryError> {
        match format {
            Format::Json => {
                serde_json::from_str(content).map_err(|e| RegistryError::Parse(e.to_string()))
            }
            Format::Yaml => {
                serde_yaml::from_str(content).map_err(|e| RegistryError::Parse(e.to_string()))
            }
            Format::Toml => toml::from_str(content).map_err(|e| RegistryError::Parse(e.to_string())),
        }
    }

    /// Register (or replace) a component.
    pub fn insert(&mut self, name: impl Into<String>, info: ComponentInfo) -> &mut Self {
        self.components.insert(name.into(), info);
        self
    }

    /// Add an alias-table entry.
    pub fn alias(&mut self, alias: impl Into<String>, canonical: impl Into<String>) -> &mut Self {
        self.aliases.insert(alias.into(), canonical.into());
        self
    }

    /// Look up an entry by its exact name.
    pub fn get(&self, name: &str) -> Option<&ComponentInfo> {
        self.components.get(name)
    }

    /// Check if an entry exists.
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Map a requested name through the alias table (identity when absent).
    pub fn canonical_name<'a>(&'a self, requested: &'a str) -> &'a str {
        self.aliases
            .get(requested)
            .map(String::as_str)
            .unwrap_or(requested)
    }

    /// All canonical names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.components.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterate entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ComponentInfo)> {
        self.components.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Scan a directory of example sources and attach each file as the
    /// pre-authored example of the component named by its file stem.
    ///
    /// Matching is case-insensitive. Files whose stem names no registered
    /// component are skipped.
    pub fn attach_examples(&mut self, dir: &Path) -> Result<usize, RegistryError> {
        if !dir.exists() {
            return Err(RegistryError::DirectoryNotFound(dir.display().to_string()));
        }

        let mut count = 0;

        for entry in WalkDir::new(dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if ext != "tsx" && ext != "jsx" {
                continue;
            }

            let filename = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            if filename.contains(".test.")
                || filename.contains(".spec.")
                || filename.contains(".stories.")
                || filename == "index.tsx"
                || filename == "index.jsx"
            {
                continue;
            }

            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
            let Some(name) = self.find_ignore_case(stem).map(str::to_string) else {
                tracing::debug!("No component matches example {}", path.display());
                continue;
            };

            let source = fs::read_to_string(path).map_err(|e| RegistryError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

            if let Some(info) = self.components.get_mut(&name) {
                info.pre_authored_example = Some(PreAuthoredExample::Source(source));
                count += 1;
            }
        }

        Ok(count)
    }

    /// Load a registry document and attach examples from `examples_dir`.
    ///
    /// A missing examples directory is not an error; it is logged and the
    /// registry is returned without curated examples.
    pub fn load(path: &Path, examples_dir: Option<&Path>) -> Result<Self, RegistryError> {
        let mut registry = Self::from_path(path)?;

        if let Some(dir) = examples_dir {
            match registry.attach_examples(dir) {
                Ok(count) => tracing::debug!("Attached {} examples from {}", count, dir.display()),
                Err(RegistryError::DirectoryNotFound(dir)) => {
                    tracing::warn!("Examples directory not found: {}", dir)
                }
                Err(e) => return Err(e),
            }
        }

        Ok(registry)
    }

    fn find_ignore_case(&self, stem: &str) -> Option<&str> {
        let wanted = stem.to_lowercase().replace(['-', '_'], "");
        self.components
            .keys()
            .find(|name| name.to_lowercase() == wanted)
            .map(String::as_str)
    }
}

/// Errors that can occur with the registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse registry: {0}")]
    Parse(String),

    #[error("Unsupported registry format: {0} (expected .json, .yaml, .yml or .toml)")]
    UnsupportedFormat(String),

    #[error("Examples directory not found: {0}")]
    DirectoryNotFound(String),
}
