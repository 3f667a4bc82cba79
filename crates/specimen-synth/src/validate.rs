//! Structural checks on resolved metadata.
//!
//! Missing required parts are hard failures. A context-dependent component
//! without a curated example only yields a warning: generation still
//! proceeds, possibly with a low-fidelity example.

use specimen_registry::Registry;

use crate::error::SynthError;
use crate::resolve::ResolvedMetadata;

/// A non-fatal validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Machine-readable code (e.g. "specimen::validate::missing-example")
    pub code: &'static str,
    /// Human-readable message
    pub message: String,
}

/// Validate `meta` against the registry it was resolved from.
///
/// Warnings are logged and returned; only missing sub-parts are errors.
pub fn validate(
    meta: &ResolvedMetadata,
    registry: &Registry,
) -> Result<Vec<Diagnostic>, SynthError> {
    if let Some(missing) = meta
        .required_parts
        .iter()
        .find(|part| !registry.contains(part))
    {
        return Err(SynthError::SubcomponentNotFound {
            missing: missing.clone(),
            parent: meta.canonical_name.clone(),
        });
    }

    let mut diagnostics = Vec::new();

    if meta.requires_context && meta.example.is_none() {
        let message = format!(
            "{} depends on ambient host state but ships no pre-authored example; \
             the generated example may not render meaningfully on its own",
            meta.requested_name
        );
        tracing::warn!("{}", message);
        diagnostics.push(Diagnostic {
            code: "specimen::validate::missing-example",
            message,
        });
    }

    Ok(diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::Resolver;
    use specimen_registry::ComponentInfo;

    #[test]
    fn accepts_complete_compound() {
        let mut registry = Registry::new();
        registry
            .insert("Tabs", ComponentInfo::compound(["TabsList", "TabsTrigger"]))
            .insert("TabsList", ComponentInfo::standalone())
            .insert("TabsTrigger", ComponentInfo::standalone());

        let meta = Resolver::new(&registry).resolve("Tabs").unwrap();
        assert_eq!(validate(&meta, &registry).unwrap(), vec![]);
    }

    #[test]
    fn names_the_first_missing_part() {
        let mut registry = Registry::new();
        registry
            .insert(
                "Tabs",
                ComponentInfo::compound(["TabsList", "TabsTrigger", "TabsContent"]),
            )
            .insert("TabsList", ComponentInfo::standalone());

        let meta = Resolver::new(&registry).resolve("Tabs").unwrap();
        let err = validate(&meta, &registry).unwrap_err();

        assert_eq!(
            err,
            SynthError::SubcomponentNotFound {
                missing: "TabsTrigger".to_string(),
                parent: "Tabs".to_string(),
            }
        );
    }

    #[test]
    fn warns_on_context_component_without_example() {
        let mut registry = Registry::new();
        registry.insert("FormField", ComponentInfo::standalone().requiring_context());

        let meta = Resolver::new(&registry).resolve("FormField").unwrap();
        let diagnostics = validate(&meta, &registry).unwrap();

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, "specimen::validate::missing-example");
        assert!(diagnostics[0].message.contains("FormField"));
    }

    #[test]
    fn context_component_with_example_is_clean() {
        let mut registry = Registry::new();
        registry.insert(
            "FormField",
            ComponentInfo::standalone()
                .requiring_context()
                .with_example("export default function Demo() { return <Form />; }"),
        );

        let meta = Resolver::new(&registry).resolve("FormField").unwrap();
        assert!(validate(&meta, &registry).unwrap().is_empty());
    }
}
