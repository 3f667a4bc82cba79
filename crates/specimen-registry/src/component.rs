//! Component metadata as declared in a registry file.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered prop descriptors. Declaration order matters for variant axis
/// selection and for the five-prop cap applied when serializing.
pub type PropMap = IndexMap<String, PropDescriptor>;

/// How a component must be demonstrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Renders on its own.
    Standalone,
    /// Needs a fixed nesting of named sub-parts.
    Compound,
    /// Stands in for another registry entry.
    Alias,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentKind::Standalone => write!(f, "standalone"),
            ComponentKind::Compound => write!(f, "compound"),
            ComponentKind::Alias => write!(f, "alias"),
        }
    }
}

/// A literal value usable as an enum option or attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Flag(bool),
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Flag(b) => write!(f, "{}", b),
            Literal::Number(n) => write!(f, "{}", n),
            Literal::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::Text(s.to_string())
    }
}

/// Describes one prop: a type tag (`"string"`, `"boolean"`), a literal
/// default, or the list of values an enum-like prop accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropDescriptor {
    Options(Vec<Literal>),
    Flag(bool),
    Number(serde_json::Number),
    Text(String),
}

impl PropDescriptor {
    /// Build an enum descriptor from string options.
    pub fn options<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PropDescriptor::Options(
            values
                .into_iter()
                .map(|v| Literal::Text(v.into()))
                .collect(),
        )
    }

    /// Non-empty enum options, if this descriptor is one.
    pub fn as_options(&self) -> Option<&[Literal]> {
        match self {
            PropDescriptor::Options(values) if !values.is_empty() => Some(values),
            _ => None,
        }
    }
}

impl From<&str> for PropDescriptor {
    fn from(s: &str) -> Self {
        PropDescriptor::Text(s.to_string())
    }
}

impl From<bool> for PropDescriptor {
    fn from(b: bool) -> Self {
        PropDescriptor::Flag(b)
    }
}

impl From<Literal> for PropDescriptor {
    fn from(l: Literal) -> Self {
        match l {
            Literal::Flag(b) => PropDescriptor::Flag(b),
            Literal::Number(n) => PropDescriptor::Number(n),
            Literal::Text(s) => PropDescriptor::Text(s),
        }
    }
}

/// A hand-written example shipped with the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreAuthoredExample {
    /// Bare source text
    Source(String),
    /// Source with display metadata
    Detailed {
        source: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

impl PreAuthoredExample {
    /// The example's source text.
    pub fn source(&self) -> &str {
        match self {
            PreAuthoredExample::Source(source) => source,
            PreAuthoredExample::Detailed { source, .. } => source,
        }
    }

    /// Optional display title.
    pub fn title(&self) -> Option<&str> {
        match self {
            PreAuthoredExample::Source(_) => None,
            PreAuthoredExample::Detailed { title, .. } => title.as_deref(),
        }
    }
}

/// Metadata for a single registry entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentInfo {
    /// Explicit kind; inferred from the other fields when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ComponentKind>,

    /// Names that must co-resolve for a compound component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_parts: Option<Vec<String>>,

    /// Component cannot render meaningfully outside a larger host
    pub requires_context: bool,

    /// Rendered as `<Name />` rather than with children
    pub self_closing: bool,

    /// Canonical name this entry stands in for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_for: Option<String>,

    /// Props merged over the alias target's props
    #[serde(alias = "aliasProps", skip_serializing_if = "IndexMap::is_empty")]
    pub alias_prop_overrides: PropMap,

    /// Prop name -> descriptor, in declaration order
    #[serde(alias = "props", skip_serializing_if = "IndexMap::is_empty")]
    pub prop_descriptors: PropMap,

    /// Curated example that wins over generated templates
    #[serde(alias = "example", skip_serializing_if = "Option::is_none")]
    pub pre_authored_example: Option<PreAuthoredExample>,
}

impl ComponentInfo {
    /// A plain standalone entry with no props.
    pub fn standalone() -> Self {
        Self::default()
    }

    /// A compound entry requiring the given parts.
    pub fn compound<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required_parts: Some(parts.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// An alias entry pointing at `target`.
    pub fn alias_of(target: impl Into<String>) -> Self {
        Self {
            alias_for: Some(target.into()),
            ..Self::default()
        }
    }

    /// Add a prop descriptor.
    pub fn with_prop(
        mut self,
        name: impl Into<String>,
        descriptor: impl Into<PropDescriptor>,
    ) -> Self {
        self.prop_descriptors.insert(name.into(), descriptor.into());
        self
    }

    /// Add an alias prop override.
    pub fn with_alias_prop(
        mut self,
        name: impl Into<String>,
        descriptor: impl Into<PropDescriptor>,
    ) -> Self {
        self.alias_prop_overrides
            .insert(name.into(), descriptor.into());
        self
    }

    /// Attach a pre-authored example.
    pub fn with_example(mut self, source: impl Into<String>) -> Self {
        self.pre_authored_example = Some(PreAuthoredExample::Source(source.into()));
        self
    }

    /// Mark as self-closing.
    pub fn self_closing(mut self) -> Self {
        self.self_closing = true;
        self
    }

    /// Mark as depending on ambient host state.
    pub fn requiring_context(mut self) -> Self {
        self.requires_context = true;
        self
    }

    /// Kind after inference: `aliasFor` wins, then `requiredParts`.
    pub fn effective_kind(&self) -> ComponentKind {
        if let Some(kind) = self.kind {
            return kind;
        }
        if self.alias_for.is_some() {
            ComponentKind::Alias
        } else if self.required_parts.is_some() {
            ComponentKind::Compound
        } else {
            ComponentKind::Standalone
        }
    }
}
