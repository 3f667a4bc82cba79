//! Variant axis selection and expansion.

use specimen_registry::{Literal, PropDescriptor, PropMap};

use crate::props::serialize_props;
use crate::resolve::ResolvedMetadata;
use crate::synth::element;

/// An enum-like prop demonstrated with one instance per value.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantAxis {
    pub prop_name: String,
    pub values: Vec<Literal>,
}

impl VariantAxis {
    /// Pick the axis from prop descriptors.
    ///
    /// A non-empty array prop named exactly `variant` wins; otherwise the
    /// first non-optional array prop in declaration order.
    pub fn select(props: &PropMap) -> Option<Self> {
        let axis = |(name, descriptor): (&String, &PropDescriptor)| {
            descriptor.as_options().map(|values| VariantAxis {
                prop_name: name.clone(),
                values: values.to_vec(),
            })
        };

        if let Some(found) = props.get_key_value("variant").and_then(axis) {
            return Some(found);
        }

        props
            .iter()
            .filter(|(name, _)| !name.ends_with('?'))
            .find_map(axis)
    }
}

/// Render one labeled instance per axis value, stacked vertically.
pub fn expand_variants(meta: &ResolvedMetadata, axis: &VariantAxis) -> String {
    let mut out = String::from("<div className=\"flex flex-col gap-4\">\n");

    for value in &axis.values {
        let mut overrides = PropMap::new();
        overrides.insert(axis.prop_name.clone(), PropDescriptor::from(value.clone()));
        let attrs = serialize_props(&meta.props, &overrides);

        let caption = format!("{}=\"{}\"", axis.prop_name, value);

        out.push_str("  <div className=\"flex flex-col items-start gap-1\">\n");
        out.push_str(&format!(
            "    <span className=\"text-xs text-muted-foreground\">{}</span>\n",
            escape_text(&caption)
        ));
        out.push_str(&format!(
            "    {}\n",
            element(&meta.canonical_name, &attrs, meta.self_closing)
        ));
        out.push_str("  </div>\n");
    }

    out.push_str("</div>");
    out
}

/// Escape characters that would end JSX text.
fn escape_text(s: &str) -> String {
    s.replace('{', "&#123;")
        .replace('}', "&#125;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::Resolver;
    use specimen_registry::{ComponentInfo, Registry};

    fn props(entries: &[(&str, PropDescriptor)]) -> PropMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn prefers_prop_named_variant() {
        let p = props(&[
            ("size", PropDescriptor::options(["sm", "lg"])),
            ("variant", PropDescriptor::options(["solid", "ghost"])),
        ]);

        let axis = VariantAxis::select(&p).unwrap();
        assert_eq!(axis.prop_name, "variant");
        assert_eq!(axis.values.len(), 2);
    }

    #[test]
    fn falls_back_to_first_required_array_in_declaration_order() {
        let p = props(&[
            ("label", "string".into()),
            ("tone?", PropDescriptor::options(["info", "warn"])),
            ("size", PropDescriptor::options(["sm", "lg"])),
            ("align", PropDescriptor::options(["start", "end"])),
        ]);

        let axis = VariantAxis::select(&p).unwrap();
        assert_eq!(axis.prop_name, "size");
    }

    #[test]
    fn no_axis_without_arrays() {
        let p = props(&[
            ("label", "string".into()),
            ("variant", PropDescriptor::Options(vec![])),
        ]);
        assert!(VariantAxis::select(&p).is_none());
    }

    #[test]
    fn expands_one_instance_per_value() {
        let mut registry = Registry::new();
        registry.insert(
            "Badge",
            ComponentInfo::standalone()
                .with_prop("variant", PropDescriptor::options(["solid", "outline", "subtle"])),
        );
        let meta = Resolver::new(&registry).resolve("Badge").unwrap();
        let axis = VariantAxis::select(&meta.props).unwrap();

        let body = expand_variants(&meta, &axis);

        assert_eq!(body.matches("<Badge ").count(), 3);
        assert!(body.contains(r#"<Badge variant="outline">Example</Badge>"#));
        assert!(body.contains(r#">variant="subtle"</span>"#));
    }

    #[test]
    fn late_declared_axis_reaches_every_instance() {
        let mut registry = Registry::new();
        registry.insert(
            "Alert",
            ComponentInfo::standalone()
                .with_prop("title", "string")
                .with_prop("description", "string")
                .with_prop("icon", "Icon")
                .with_prop("role", "alert")
                .with_prop("dismissible", true)
                .with_prop("tone", PropDescriptor::options(["info", "warning", "danger"])),
        );
        let meta = Resolver::new(&registry).resolve("Alert").unwrap();
        let axis = VariantAxis::select(&meta.props).unwrap();
        assert_eq!(axis.prop_name, "tone");

        let body = expand_variants(&meta, &axis);

        for value in ["info", "warning", "danger"] {
            assert_eq!(body.matches(&format!(r#"tone="{value}">Example"#)).count(), 1);
        }
    }

    #[test]
    fn escapes_caption_braces() {
        assert_eq!(escape_text("a={b}"), "a=&#123;b&#125;");
    }
}
