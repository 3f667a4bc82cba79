//! Component metadata registry for specimen.
//!
//! This crate defines the declarative description of a UI component
//! (kind, required sub-parts, prop shapes, pre-authored examples) and loads
//! registries from JSON, YAML or TOML documents.

pub mod component;
pub mod registry;

pub use component::{
    ComponentInfo, ComponentKind, Literal, PreAuthoredExample, PropDescriptor, PropMap,
};
pub use registry::{Format, Registry, RegistryError};
