//! Example synthesis: dispatch on kind and template, then assemble a module.

use std::sync::LazyLock;

use regex::Regex;
use specimen_registry::{ComponentKind, PropMap};

use crate::casing::{example_fn_name, to_pascal_case};
use crate::instrument::Instrumentor;
use crate::props::serialize_props;
use crate::resolve::ResolvedMetadata;
use crate::templates::Template;
use crate::variants::{expand_variants, VariantAxis};

static DEFAULT_EXPORT_FN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(export\s+default\s+function\s+)[A-Za-z_$][A-Za-z0-9_$]*(\s*\()")
        .expect("Invalid default export regex")
});

/// How the example body was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Curated example from the registry
    PreAuthored,
    /// Named special-case template
    Template(Template),
    /// One instance per variant value
    Variants,
    /// Single generic instance
    Generic,
    /// Compound component without a template
    CompoundWrapper,
}

/// Output of the synthesizer before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct Synthesized {
    /// Complete module source
    pub source: String,
    /// Component names imported from the library entry point
    pub imports: Vec<String>,
    pub strategy: Strategy,
}

/// Produces example modules from resolved metadata.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    library_entry: String,
    instrumentor: Instrumentor,
}

impl Synthesizer {
    pub fn new(library_entry: impl Into<String>, instrumentor: Instrumentor) -> Self {
        Self {
            library_entry: library_entry.into(),
            instrumentor,
        }
    }

    /// Synthesize a complete example module for `meta`.
    pub fn synthesize(&self, meta: &ResolvedMetadata) -> Synthesized {
        if let Some(example) = &meta.example {
            tracing::debug!("Using pre-authored example for {}", meta.requested_name);
            let renamed = rename_entry_function(example.source(), &meta.requested_name);
            let source = if meta.kind == ComponentKind::Standalone {
                self.instrumentor.instrument(&renamed, &meta.requested_name)
            } else {
                renamed
            };
            return Synthesized {
                source,
                imports: Vec::new(),
                strategy: Strategy::PreAuthored,
            };
        }

        let (tree, extra, strategy) = match meta.kind {
            ComponentKind::Compound => synthesize_compound(meta),
            _ => synthesize_standalone(meta),
        };
        tracing::debug!("Synthesized {} via {:?}", meta.requested_name, strategy);

        let tree = self.instrumentor.instrument(&tree, &meta.requested_name);

        let mut imports = vec![meta.canonical_name.clone()];
        for name in extra {
            if !imports.contains(&name) {
                imports.push(name);
            }
        }

        let source = self.assemble(&meta.requested_name, &imports, &tree);

        Synthesized {
            source,
            imports,
            strategy,
        }
    }

    /// Directive and import line, blank line, then the wrapper function.
    fn assemble(&self, requested: &str, imports: &[String], tree: &str) -> String {
        let body = tree
            .lines()
            .map(|line| {
                if line.is_empty() {
                    String::new()
                } else {
                    format!("    {}", line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"'use client';

import {{ {imports} }} from "{entry}";

export default function {name}() {{
  return (
{body}
  );
}}
"#,
            imports = imports.join(", "),
            entry = self.library_entry,
            name = example_fn_name(requested),
            body = body,
        )
    }
}

/// Tag tree, additional imports, and the strategy that produced them.
type Body = (String, Vec<String>, Strategy);

fn template_body(template: Template, meta: &ResolvedMetadata) -> Body {
    let display = to_pascal_case(&meta.requested_name);
    let parts = template.parts().iter().map(|p| p.to_string()).collect();
    (template.render(&display), parts, Strategy::Template(template))
}

fn synthesize_standalone(meta: &ResolvedMetadata) -> Body {
    if let Some(template) = Template::lookup(&meta.canonical_name, ComponentKind::Standalone) {
        return template_body(template, meta);
    }

    if let Some(axis) = VariantAxis::select(&meta.props) {
        return (expand_variants(meta, &axis), Vec::new(), Strategy::Variants);
    }

    let attrs = serialize_props(&meta.props, &PropMap::new());
    (
        element(&meta.canonical_name, &attrs, meta.self_closing),
        Vec::new(),
        Strategy::Generic,
    )
}

fn synthesize_compound(meta: &ResolvedMetadata) -> Body {
    if let Some(template) = Template::lookup(&meta.canonical_name, ComponentKind::Compound) {
        return template_body(template, meta);
    }

    // Minimal wrapper: the first required part (if any) as placeholder child.
    let name = &meta.canonical_name;
    match meta.required_parts.first() {
        Some(part) => (
            format!("<{name}>\n  <{part}>Example</{part}>\n</{name}>"),
            vec![part.clone()],
            Strategy::CompoundWrapper,
        ),
        None => (
            format!("<{name}>\n  <div>Example</div>\n</{name}>"),
            Vec::new(),
            Strategy::CompoundWrapper,
        ),
    }
}

/// A single component instance with a literal "Example" child.
pub(crate) fn element(name: &str, attrs: &str, self_closing: bool) -> String {
    if self_closing {
        format!("<{name}{attrs} />")
    } else {
        format!("<{name}{attrs}>Example</{name}>")
    }
}

/// Rename the default-exported function to `<Pascal(name)>Example`.
pub fn rename_entry_function(source: &str, component: &str) -> String {
    let replacement = format!("${{1}}{}${{2}}", example_fn_name(component));
    DEFAULT_EXPORT_FN_RE
        .replace(source, replacement.as_str())
        .into_owned()
}
