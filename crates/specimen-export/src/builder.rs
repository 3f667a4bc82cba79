//! Example exporter.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use specimen_synth::{
    to_kebab_case, ExamplePipeline, RenderFailure, RenderHooks, RenderOutcome, Shape,
};

/// File name of the export manifest.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Configuration for an export run.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Output directory
    pub output_dir: PathBuf,

    /// Components to export; empty means every registered component
    pub components: Vec<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist/examples"),
            components: vec![],
        }
    }
}

/// Result of an export run.
#[derive(Debug)]
pub struct ExportResult {
    /// Number of modules written
    pub examples: usize,

    /// How many of those are error-display fallbacks
    pub fallbacks: usize,

    /// Total export time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,

    /// Per-component outcomes, in export order
    pub manifest: Vec<ManifestEntry>,
}

/// Errors that can occur during export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write {path}: {message}")]
    WriteError { path: String, message: String },

    #[error("Failed to serialize manifest: {0}")]
    ManifestError(String),
}

/// Outcome of one exported component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportStatus {
    Ok,
    Fallback,
}

/// One line of `manifest.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestEntry {
    /// Requested component name
    pub name: String,

    /// Module file name, relative to the output directory
    pub file: String,

    pub status: ExportStatus,

    /// Recognized entry shape for successful examples
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,

    /// Failure message for fallbacks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Renders examples to disk.
pub struct ExportBuilder {
    config: ExportConfig,
    pipeline: ExamplePipeline,
}

impl ExportBuilder {
    /// Create a new export builder.
    pub fn new(pipeline: ExamplePipeline, config: ExportConfig) -> Self {
        Self { config, pipeline }
    }

    /// Render every selected component and write the output directory.
    pub fn export(&self) -> Result<ExportResult, ExportError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| write_error(&self.config.output_dir, e))?;

        let names = self.selected_components();
        tracing::info!(
            "Exporting {} examples to {}",
            names.len(),
            self.config.output_dir.display()
        );

        // Render and write in parallel
        let results: Vec<Result<ManifestEntry, ExportError>> = names
            .par_iter()
            .map(|name| self.export_component(name))
            .collect();

        let mut manifest = Vec::with_capacity(results.len());
        for result in results {
            manifest.push(result?);
        }

        self.write_manifest(&manifest)?;

        let fallbacks = manifest
            .iter()
            .filter(|entry| entry.status == ExportStatus::Fallback)
            .count();

        Ok(ExportResult {
            examples: manifest.len(),
            fallbacks,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
            manifest,
        })
    }

    fn selected_components(&self) -> Vec<String> {
        if self.config.components.is_empty() {
            self.pipeline.list_available()
        } else {
            self.config.components.clone()
        }
    }

    /// Render one component and write its module.
    fn export_component(&self, name: &str) -> Result<ManifestEntry, ExportError> {
        let rendered = self.pipeline.render(name, &RenderHooks::new());

        let file = format!("{}.example.tsx", to_kebab_case(name));
        let path = self.config.output_dir.join(&file);
        fs::write(&path, &rendered.source).map_err(|e| write_error(&path, e))?;

        let entry = match rendered.outcome {
            RenderOutcome::Example(shape) => ManifestEntry {
                name: name.to_string(),
                file,
                status: ExportStatus::Ok,
                shape: Some(shape),
                error: None,
            },
            RenderOutcome::Fallback(RenderFailure { message, .. }) => {
                tracing::warn!("Exported fallback for {}", name);
                ManifestEntry {
                    name: name.to_string(),
                    file,
                    status: ExportStatus::Fallback,
                    shape: None,
                    error: Some(message),
                }
            }
        };

        Ok(entry)
    }

    fn write_manifest(&self, manifest: &[ManifestEntry]) -> Result<(), ExportError> {
        let json = serde_json::to_string_pretty(manifest)
            .map_err(|e| ExportError::ManifestError(e.to_string()))?;

        let path = self.config.output_dir.join(MANIFEST_FILE);
        fs::write(&path, json).map_err(|e| write_error(&path, e))
    }
}

fn write_error(path: &Path, e: std::io::Error) -> ExportError {
    ExportError::WriteError {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}
