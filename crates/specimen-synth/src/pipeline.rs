//! The public entry points: resolve, generate, render, list.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use specimen_registry::Registry;

use crate::error::SynthError;
use crate::fallback::{build_fallback, RenderFailure};
use crate::instrument::{Instrumentor, DEFAULT_ATTRIBUTE};
use crate::normalize::{Normalized, Normalizer, Shape, DEFAULT_ENTRY_POINT};
use crate::resolve::{ResolvedMetadata, Resolver};
use crate::synth::{Synthesized, Synthesizer};
use crate::validate::{validate, Diagnostic};

/// Knobs shared by every host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    /// Module specifier components are imported from
    pub library_entry: String,

    /// Sandbox function that mounts the example
    pub entry_point: String,

    /// Attribute carrying inspector ids
    pub instrument_attribute: String,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            library_entry: "@/components/ui".to_string(),
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
            instrument_attribute: DEFAULT_ATTRIBUTE.to_string(),
        }
    }
}

/// Optional callbacks for [`ExamplePipeline::render`].
#[derive(Default, Clone, Copy)]
pub struct RenderHooks<'a> {
    /// Called once with the failure when `render` falls back
    pub on_error: Option<&'a dyn Fn(&RenderFailure)>,
    /// Called once with the normalized source on success
    pub on_success: Option<&'a dyn Fn(&str)>,
}

impl<'a> RenderHooks<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_error(mut self, hook: &'a dyn Fn(&RenderFailure)) -> Self {
        self.on_error = Some(hook);
        self
    }

    pub fn on_success(mut self, hook: &'a dyn Fn(&str)) -> Self {
        self.on_success = Some(hook);
        self
    }
}

/// How a render call ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Example generated and normalized
    Example(Shape),
    /// Generation failed; the source is the error display
    Fallback(RenderFailure),
}

/// Display-ready source from [`ExamplePipeline::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub source: String,
    pub outcome: RenderOutcome,
}

impl Rendered {
    pub fn is_fallback(&self) -> bool {
        matches!(self.outcome, RenderOutcome::Fallback(_))
    }
}

/// Generation result with the intermediate artifacts kept.
#[derive(Debug, Clone)]
pub struct Generated {
    pub metadata: ResolvedMetadata,
    pub diagnostics: Vec<Diagnostic>,
    pub synthesized: Synthesized,
}

/// Example-code pipeline over an immutable registry.
///
/// Cheap to clone and safe to share across threads; every call owns its
/// intermediate state.
#[derive(Debug, Clone)]
pub struct ExamplePipeline {
    registry: Arc<Registry>,
    options: PipelineOptions,
    synthesizer: Synthesizer,
    normalizer: Normalizer,
}

impl ExamplePipeline {
    pub fn new(registry: impl Into<Arc<Registry>>, options: PipelineOptions) -> Self {
        let instrumentor = Instrumentor::new(&options.instrument_attribute);
        let synthesizer = Synthesizer::new(options.library_entry.clone(), instrumentor);
        let normalizer = Normalizer::new(&options.entry_point);

        Self {
            registry: registry.into(),
            options,
            synthesizer,
            normalizer,
        }
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Resolve a requested name to canonical metadata.
    pub fn resolve(&self, name: &str) -> Result<ResolvedMetadata, SynthError> {
        Resolver::new(&self.registry).resolve(name)
    }

    /// Resolve, validate and synthesize, keeping every intermediate result.
    pub fn generate_detailed(&self, name: &str) -> Result<Generated, SynthError> {
        let metadata = self.resolve(name)?;
        let diagnostics = validate(&metadata, &self.registry)?;
        let synthesized = self.synthesizer.synthesize(&metadata);

        Ok(Generated {
            metadata,
            diagnostics,
            synthesized,
        })
    }

    /// Example source for `name`, not yet normalized.
    pub fn generate(&self, name: &str) -> Result<String, SynthError> {
        self.generate_detailed(name)
            .map(|generated| generated.synthesized.source)
    }

    /// Normalize arbitrary module source for the sandbox.
    pub fn normalize(&self, source: &str) -> Normalized {
        self.normalizer.normalize(source)
    }

    /// Display-ready source for `name`. Never fails.
    ///
    /// Any error or panic while generating is turned into an error-display
    /// snippet, and `hooks.on_error` is called exactly once. A panicking hook
    /// is logged and does not change the result.
    pub fn render(&self, name: &str, hooks: &RenderHooks<'_>) -> Rendered {
        self.render_with(name, hooks, || {
            self.generate(name)
                .map(|source| self.normalizer.normalize(&source))
        })
    }

    fn render_with(
        &self,
        name: &str,
        hooks: &RenderHooks<'_>,
        attempt: impl FnOnce() -> Result<Normalized, SynthError>,
    ) -> Rendered {
        let failure = match panic::catch_unwind(AssertUnwindSafe(attempt)) {
            Ok(Ok(normalized)) => {
                if let Some(on_success) = hooks.on_success {
                    run_hook("on_success", name, || on_success(&normalized.source));
                }
                return Rendered {
                    source: normalized.source,
                    outcome: RenderOutcome::Example(normalized.shape),
                };
            }
            Ok(Err(error)) => RenderFailure::from_error(name, error, &self.list_available()),
            Err(payload) => RenderFailure::from_panic(name, panic_message(payload.as_ref())),
        };

        tracing::error!("Failed to render example for {}: {}", name, failure.message);

        if let Some(on_error) = hooks.on_error {
            run_hook("on_error", name, || on_error(&failure));
        }

        Rendered {
            source: build_fallback(&failure.title, &failure.message, &self.options.entry_point),
            outcome: RenderOutcome::Fallback(failure),
        }
    }

    /// All canonical names in the registry, sorted.
    pub fn list_available(&self) -> Vec<String> {
        self.registry
            .names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

fn run_hook(hook: &str, component: &str, call: impl FnOnce()) {
    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(call)) {
        tracing::warn!(
            "{} hook panicked for {}: {}",
            hook,
            component,
            panic_message(payload.as_ref())
        );
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
