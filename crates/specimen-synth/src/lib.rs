//! Example-code synthesis for component documentation previews.
//!
//! Given a registry entry describing a UI component, this crate produces a
//! complete, runnable example module for it, rewrites that module so the
//! preview sandbox can execute it, and degrades any failure to an
//! error-display snippet instead of surfacing it to the caller.
//!
//! The stages run in a fixed order:
//! resolve, validate, synthesize (templates, variants, props,
//! instrumentation), then normalize.

pub mod casing;
pub mod error;
pub mod fallback;
pub mod instrument;
pub mod normalize;
pub mod pipeline;
pub mod props;
pub mod resolve;
pub mod synth;
pub mod templates;
pub mod validate;
pub mod variants;

pub use casing::{to_camel_case, to_kebab_case, to_pascal_case};
pub use error::SynthError;
pub use fallback::{build_fallback, RenderFailure};
pub use instrument::Instrumentor;
pub use normalize::{Normalized, Normalizer, Shape};
pub use pipeline::{
    ExamplePipeline, Generated, PipelineOptions, RenderHooks, RenderOutcome, Rendered,
};
pub use resolve::{ResolvedMetadata, Resolver};
pub use synth::{Strategy, Synthesized, Synthesizer};
pub use templates::Template;
pub use validate::{validate, Diagnostic};
pub use variants::{expand_variants, VariantAxis};
