//! Prop descriptors to literal attribute text.

use specimen_registry::{Literal, PropDescriptor, PropMap};

use crate::casing::capitalize;

/// Example snippets are intentionally terse.
const MAX_PROPS: usize = 5;

/// Defaults for props declared with the `"string"` type tag.
static STRING_DEFAULTS: &[(&str, &str)] = &[
    ("label", "Label"),
    ("placeholder", "Enter text"),
    ("title", "Title"),
    ("description", "Description"),
    ("value", "Value"),
    ("defaultValue", "Value"),
    ("name", "example"),
    ("id", "example"),
    ("href", "#"),
    ("src", "/placeholder.svg"),
    ("alt", "Example image"),
    ("text", "Text"),
    ("message", "Message"),
    ("heading", "Heading"),
];

/// Serialize `props` with `overrides` merged over them into attribute text.
///
/// Returns a space-prefixed string of `key="value"` / bare `key` tokens, or
/// the empty string when nothing survives filtering.
///
/// Overridden keys always survive the entry cap; the remaining slots go to
/// the other props in declaration order.
pub fn serialize_props(props: &PropMap, overrides: &PropMap) -> String {
    let mut merged = props.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }

    let mut slots = MAX_PROPS.saturating_sub(overrides.len());
    let tokens: Vec<String> = merged
        .iter()
        .filter(|(key, _)| {
            if overrides.contains_key(*key) {
                return true;
            }
            if slots == 0 {
                return false;
            }
            slots -= 1;
            true
        })
        .filter_map(|(key, value)| serialize_prop(key, value))
        .collect();

    if tokens.is_empty() {
        String::new()
    } else {
        format!(" {}", tokens.join(" "))
    }
}

/// Serialize a single prop, or `None` when it should be omitted.
fn serialize_prop(key: &str, value: &PropDescriptor) -> Option<String> {
    let key = key.strip_suffix('?').unwrap_or(key);

    if key == "error" {
        return None;
    }

    match value {
        PropDescriptor::Options(values) => values.first().map(|first| match first {
            Literal::Number(n) => format!("{}={{{}}}", key, n),
            other => format!(r#"{}="{}""#, key, escape_attr(&other.to_string())),
        }),
        PropDescriptor::Flag(true) => Some(key.to_string()),
        PropDescriptor::Flag(false) => None,
        PropDescriptor::Number(n) => Some(format!("{}={{{}}}", key, n)),
        PropDescriptor::Text(text) if text.contains('|') => None,
        PropDescriptor::Text(text) if text == "boolean" => None,
        PropDescriptor::Text(text) if text == "string" => {
            let default = string_default(key);
            if default.is_empty() {
                None
            } else {
                Some(format!(r#"{}="{}""#, key, escape_attr(&default)))
            }
        }
        PropDescriptor::Text(text) => Some(format!(r#"{}="{}""#, key, escape_attr(text))),
    }
}

fn string_default(key: &str) -> String {
    STRING_DEFAULTS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.to_string())
        .unwrap_or_else(|| capitalize(key))
}

/// Escape a value for a double-quoted JSX attribute.
fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;").replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn props(entries: &[(&str, PropDescriptor)]) -> PropMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn empty_props_serialize_to_nothing() {
        assert_eq!(serialize_props(&PropMap::new(), &PropMap::new()), "");
    }

    #[test]
    fn applies_type_aware_defaults() {
        let p = props(&[
            ("label", "string".into()),
            ("placeholder?", "string".into()),
            ("tone", "string".into()),
            ("disabled", "boolean".into()),
            ("size", PropDescriptor::options(["sm", "md", "lg"])),
        ]);

        assert_eq!(
            serialize_props(&p, &PropMap::new()),
            r#" label="Label" placeholder="Enter text" tone="Tone" size="sm""#
        );
    }

    #[test]
    fn skips_unions_errors_and_false() {
        let p = props(&[
            ("align", "start | center | end".into()),
            ("error", "Something went wrong".into()),
            ("open", false.into()),
            ("loading", true.into()),
        ]);

        assert_eq!(serialize_props(&p, &PropMap::new()), " loading");
    }

    #[test]
    fn emits_other_literals_verbatim() {
        let p = props(&[
            ("type", "email".into()),
            ("max", PropDescriptor::Number(10i64.into())),
        ]);

        assert_eq!(
            serialize_props(&p, &PropMap::new()),
            r#" type="email" max={10}"#
        );
    }

    #[test]
    fn caps_at_five_entries_before_filtering() {
        let p = props(&[
            ("a", "boolean".into()),
            ("b", "boolean".into()),
            ("c", "boolean".into()),
            ("d", "boolean".into()),
            ("e", "boolean".into()),
            ("f", "visible".into()),
        ]);

        assert_eq!(serialize_props(&p, &PropMap::new()), "");
    }

    #[test]
    fn overrides_replace_in_place() {
        let p = props(&[
            ("variant", PropDescriptor::options(["solid", "outline"])),
            ("label", "string".into()),
        ]);
        let o = props(&[("variant", "outline".into()), ("type", "password".into())]);

        assert_eq!(
            serialize_props(&p, &o),
            r#" variant="outline" label="Label" type="password""#
        );
    }

    #[test]
    fn overrides_survive_the_cap() {
        let p = props(&[
            ("title", "string".into()),
            ("description", "string".into()),
            ("icon", "Icon".into()),
            ("role", "alert".into()),
            ("dismissible", true.into()),
            ("tone", PropDescriptor::options(["info", "warning"])),
        ]);
        let o = props(&[("tone", "warning".into())]);

        assert_eq!(
            serialize_props(&p, &o),
            r#" title="Title" description="Description" icon="Icon" role="alert" tone="warning""#
        );
    }

    #[test]
    fn escapes_quotes_in_values() {
        let p = props(&[("title", r#"Say "hi""#.into())]);
        assert_eq!(
            serialize_props(&p, &PropMap::new()),
            r#" title="Say &quot;hi&quot;""#
        );
    }
}
