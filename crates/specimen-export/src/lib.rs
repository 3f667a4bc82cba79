//! Batch export of rendered examples.
//!
//! Renders every component in a registry in parallel and writes one module
//! per component plus a manifest describing the outcome of each.

pub mod builder;

pub use builder::{
    ExportBuilder, ExportConfig, ExportError, ExportResult, ExportStatus, ManifestEntry,
};
