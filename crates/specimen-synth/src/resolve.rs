//! Name resolution: alias table, alias entries, canonical metadata.

use serde::Serialize;
use specimen_registry::{ComponentKind, PreAuthoredExample, PropMap, Registry};

use crate::error::SynthError;

/// Canonical metadata for one request. Never holds [`ComponentKind::Alias`]:
/// alias entries are dereferenced before synthesis sees them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedMetadata {
    /// Name as requested by the caller
    pub requested_name: String,

    /// Registry key the example is generated from
    pub canonical_name: String,

    /// Alias entry the request went through, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_of: Option<String>,

    /// Standalone or compound
    pub kind: ComponentKind,

    /// Parts that must co-resolve (compound only)
    pub required_parts: Vec<String>,

    /// Prop descriptors with alias overrides merged in
    pub props: PropMap,

    pub requires_context: bool,

    pub self_closing: bool,

    /// Curated example, if the requested entry ships one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<PreAuthoredExample>,
}

impl ResolvedMetadata {
    /// Whether this record was reached through an alias entry.
    pub fn is_alias(&self) -> bool {
        self.alias_of.is_some()
    }
}

/// Resolves requested names against a registry.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    registry: &'a Registry,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Resolve `requested` to canonical metadata.
    pub fn resolve(&self, requested: &str) -> Result<ResolvedMetadata, SynthError> {
        let canonical = self.registry.canonical_name(requested);
        let entry = self
            .registry
            .get(canonical)
            .ok_or_else(|| SynthError::ComponentNotFound {
                requested: requested.to_string(),
                canonical: canonical.to_string(),
            })?;

        if entry.effective_kind() != ComponentKind::Alias {
            return Ok(ResolvedMetadata {
                requested_name: requested.to_string(),
                canonical_name: canonical.to_string(),
                alias_of: None,
                kind: entry.effective_kind(),
                required_parts: entry.required_parts.clone().unwrap_or_default(),
                props: entry.prop_descriptors.clone(),
                requires_context: entry.requires_context,
                self_closing: entry.self_closing,
                example: entry.pre_authored_example.clone(),
            });
        }

        // Follow the aliasFor chain, collecting overrides outermost first.
        let mut chain = vec![canonical];
        let mut overrides = vec![&entry.alias_prop_overrides];
        let mut current = entry;

        let (target_name, target) = loop {
            let Some(next) = current.alias_for.as_deref() else {
                return Err(SynthError::malformed(
                    chain[chain.len() - 1],
                    "declared as alias but has no aliasFor target",
                ));
            };

            if chain.contains(&next) {
                chain.push(next);
                return Err(SynthError::malformed(
                    canonical,
                    format!("alias cycle: {}", chain.join(" -> ")),
                ));
            }

            let target = self
                .registry
                .get(next)
                .ok_or_else(|| SynthError::ComponentNotFound {
                    requested: requested.to_string(),
                    canonical: next.to_string(),
                })?;

            if target.effective_kind() != ComponentKind::Alias {
                break (next, target);
            }

            chain.push(next);
            overrides.push(&target.alias_prop_overrides);
            current = target;
        };

        let mut props = target.prop_descriptors.clone();
        for layer in overrides.iter().rev() {
            for (key, value) in layer.iter() {
                props.insert(key.clone(), value.clone());
            }
        }

        tracing::debug!("Resolved alias {} -> {}", canonical, target_name);

        Ok(ResolvedMetadata {
            requested_name: requested.to_string(),
            canonical_name: target_name.to_string(),
            alias_of: Some(canonical.to_string()),
            kind: target.effective_kind(),
            required_parts: target.required_parts.clone().unwrap_or_default(),
            props,
            requires_context: target.requires_context,
            self_closing: target.self_closing,
            example: entry.pre_authored_example.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use specimen_registry::{ComponentInfo, PropDescriptor};

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .insert(
                "Input",
                ComponentInfo::standalone()
                    .with_prop("placeholder", "string")
                    .with_prop("type", "text")
                    .self_closing(),
            )
            .insert(
                "PasswordInput",
                ComponentInfo::alias_of("Input").with_alias_prop("type", "password"),
            )
            .insert(
                "SecretInput",
                ComponentInfo::alias_of("PasswordInput").with_alias_prop("autoComplete", "off"),
            )
            .insert("Dangling", ComponentInfo::alias_of("Missing"))
            .alias("TextField", "Input");
        registry
    }

    #[test]
    fn resolves_plain_entry() {
        let registry = registry();
        let meta = Resolver::new(&registry).resolve("Input").unwrap();

        assert_eq!(meta.canonical_name, "Input");
        assert_eq!(meta.kind, ComponentKind::Standalone);
        assert!(meta.self_closing);
        assert!(!meta.is_alias());
    }

    #[test]
    fn resolves_through_alias_table() {
        let registry = registry();
        let meta = Resolver::new(&registry).resolve("TextField").unwrap();

        assert_eq!(meta.requested_name, "TextField");
        assert_eq!(meta.canonical_name, "Input");
    }

    #[test]
    fn dereferences_alias_entries_with_overrides() {
        let registry = registry();
        let meta = Resolver::new(&registry).resolve("PasswordInput").unwrap();

        assert_eq!(meta.canonical_name, "Input");
        assert_eq!(meta.alias_of.as_deref(), Some("PasswordInput"));
        assert_eq!(meta.kind, ComponentKind::Standalone);
        assert!(meta.self_closing);
        assert_eq!(meta.props["type"], PropDescriptor::from("password"));
        assert_eq!(meta.props["placeholder"], PropDescriptor::from("string"));
    }

    #[test]
    fn outer_alias_overrides_win_in_chains() {
        let mut registry = registry();
        registry.insert(
            "PinInput",
            ComponentInfo::alias_of("PasswordInput").with_alias_prop("type", "tel"),
        );
        let resolver = Resolver::new(&registry);

        let secret = resolver.resolve("SecretInput").unwrap();
        assert_eq!(secret.canonical_name, "Input");
        assert_eq!(secret.props["type"], PropDescriptor::from("password"));
        assert_eq!(secret.props["autoComplete"], PropDescriptor::from("off"));

        let pin = resolver.resolve("PinInput").unwrap();
        assert_eq!(pin.props["type"], PropDescriptor::from("tel"));
    }

    #[test]
    fn missing_name_is_not_found() {
        let registry = registry();
        let err = Resolver::new(&registry).resolve("Foo").unwrap_err();

        assert_eq!(
            err,
            SynthError::ComponentNotFound {
                requested: "Foo".to_string(),
                canonical: "Foo".to_string(),
            }
        );
    }

    #[test]
    fn missing_alias_target_is_not_found() {
        let registry = registry();
        let err = Resolver::new(&registry).resolve("Dangling").unwrap_err();

        assert_eq!(
            err,
            SynthError::ComponentNotFound {
                requested: "Dangling".to_string(),
                canonical: "Missing".to_string(),
            }
        );
    }

    #[test]
    fn alias_cycles_are_malformed() {
        let mut registry = Registry::new();
        registry
            .insert("A", ComponentInfo::alias_of("B"))
            .insert("B", ComponentInfo::alias_of("A"));

        let err = Resolver::new(&registry).resolve("A").unwrap_err();
        assert!(matches!(err, SynthError::Malformed { .. }));
        assert!(err.to_string().contains("A -> B -> A"));
    }

    #[test]
    fn explicit_alias_without_target_is_malformed() {
        let mut registry = Registry::new();
        registry.insert(
            "Broken",
            ComponentInfo {
                kind: Some(ComponentKind::Alias),
                ..Default::default()
            },
        );

        let err = Resolver::new(&registry).resolve("Broken").unwrap_err();
        assert!(matches!(err, SynthError::Malformed { ref name, .. } if name == "Broken"));
    }
}
