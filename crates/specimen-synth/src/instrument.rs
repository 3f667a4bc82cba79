//! Inspector instrumentation: a unique, stable id on every component tag.
//!
//! Given the same source and component name the produced ids are always the
//! same, and tags that already carry the attribute are left alone, so
//! running the instrumentor on its own output is a no-op.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::casing::to_kebab_case;

/// Attribute used when none is configured.
pub const DEFAULT_ATTRIBUTE: &str = "data-inspect-id";

/// Structural wrappers that never receive an id.
const SKIPPED_TAGS: &[&str] = &["Fragment", "React.Fragment", "Suspense", "StrictMode"];

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    // <Name attrs> or <Name attrs />; quoted values are opaque, {...}
    // expressions nest up to two levels deep
    Regex::new(
        r#"<([A-Z][A-Za-z0-9]*(?:\.[A-Za-z][A-Za-z0-9]*)*)((?:\s(?:[^<>{}"']|"[^"]*"|'[^']*'|\{(?:[^{}]|\{[^{}]*\})*\})*)?)\s*/?>"#,
    )
    .expect("Invalid tag regex")
});

/// Attaches inspector ids to component tags.
#[derive(Debug, Clone)]
pub struct Instrumentor {
    attribute: String,
    existing_re: Regex,
}

impl Default for Instrumentor {
    fn default() -> Self {
        Self::new(DEFAULT_ATTRIBUTE)
    }
}

impl Instrumentor {
    /// Create an instrumentor writing `attribute`.
    pub fn new(attribute: &str) -> Self {
        let existing_re = Regex::new(&format!(r#"{}="([^"]*)""#, regex::escape(attribute)))
            .expect("escaped attribute is a valid pattern");
        Self {
            attribute: attribute.to_string(),
            existing_re,
        }
    }

    /// The attribute name written by this instrumentor.
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Insert an id attribute into every uninstrumented component tag.
    ///
    /// The first tag gets `<slug>-example`, later ones
    /// `<slug>-<tag-slug>-<index>`. Ids already present in `source` are
    /// never reused.
    pub fn instrument(&self, source: &str, component_name: &str) -> String {
        let slug = to_kebab_case(component_name);
        let marker = format!("{}=", self.attribute);

        let mut used: HashSet<String> = self
            .existing_re
            .captures_iter(source)
            .map(|c| c[1].to_string())
            .collect();

        let mut insertions: Vec<(usize, String)> = Vec::new();
        let mut index = 0;

        for caps in TAG_RE.captures_iter(source) {
            let (Some(whole), Some(name), Some(attrs)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };

            // Generic type arguments such as useState<Date>() look like tags.
            let preceded_by_ident = source[..whole.start()]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$' || c == '.');
            if preceded_by_ident {
                continue;
            }

            if SKIPPED_TAGS.contains(&name.as_str()) || attrs.as_str().contains(&marker) {
                continue;
            }

            let tag_slug = to_kebab_case(name.as_str());
            let mut id = if index == 0 {
                format!("{}-example", slug)
            } else {
                format!("{}-{}-{}", slug, tag_slug, index)
            };
            let mut bump = index;
            while used.contains(&id) {
                bump += 1;
                id = format!("{}-{}-{}", slug, tag_slug, bump);
            }

            // Right after the last attribute, before any `/>` or `>`.
            let kept = attrs.as_str().trim_end().trim_end_matches('/').trim_end();
            let pos = attrs.start() + kept.len();

            insertions.push((pos, format!(r#" {}="{}""#, self.attribute, id)));
            used.insert(id);
            index += 1;
        }

        // Back-to-front so earlier offsets stay valid.
        let mut out = source.to_string();
        for (pos, text) in insertions.into_iter().rev() {
            out.insert_str(pos, &text);
        }
        out
    }

    /// All ids present in `source`, in order of appearance.
    pub fn ids(&self, source: &str) -> Vec<String> {
        self.existing_re
            .captures_iter(source)
            .map(|c| c[1].to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn instruments_single_tag() {
        let out =
            Instrumentor::default().instrument(r#"<Badge variant="solid">New</Badge>"#, "Badge");
        assert_eq!(
            out,
            r#"<Badge variant="solid" data-inspect-id="badge-example">New</Badge>"#
        );
    }

    #[test]
    fn inserts_before_self_closing_slash() {
        let out = Instrumentor::default().instrument("<Input />", "PasswordInput");
        assert_eq!(out, r#"<Input data-inspect-id="password-input-example" />"#);
    }

    #[test]
    fn numbers_nested_tags() {
        let source = "<DropdownMenu>\n  <DropdownMenuTrigger>Open</DropdownMenuTrigger>\n  <DropdownMenuItem />\n</DropdownMenu>";
        let out = Instrumentor::default().instrument(source, "DropdownMenu");

        assert!(out.contains(r#"<DropdownMenu data-inspect-id="dropdown-menu-example">"#));
        assert!(out.contains(
            r#"<DropdownMenuTrigger data-inspect-id="dropdown-menu-dropdown-menu-trigger-1">"#
        ));
        assert!(out.contains(
            r#"<DropdownMenuItem data-inspect-id="dropdown-menu-dropdown-menu-item-2" />"#
        ));
    }

    #[test]
    fn is_idempotent() {
        let inst = Instrumentor::default();
        let source = "<Card>\n  <CardHeader />\n  <CardContent>Body</CardContent>\n</Card>";

        let once = inst.instrument(source, "Card");
        let twice = inst.instrument(&once, "Card");

        assert_eq!(once, twice);
    }

    #[test]
    fn ids_are_unique_with_partial_instrumentation() {
        let inst = Instrumentor::default();
        let source = r#"<Badge data-inspect-id="badge-example" /><Badge /><Badge />"#;

        let out = inst.instrument(source, "Badge");
        let ids = inst.ids(&out);
        let unique: HashSet<_> = ids.iter().collect();

        assert_eq!(ids.len(), 3);
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn skips_wrappers_lowercase_and_generics() {
        let inst = Instrumentor::default();
        let source =
            "<React.Fragment><div><Fragment /></div>{useState<Date>(null)}<Calendar /></React.Fragment>";

        let out = inst.instrument(source, "Calendar");

        assert_eq!(inst.ids(&out), vec!["calendar-example".to_string()]);
        assert!(out.contains("useState<Date>(null)"));
    }

    #[test]
    fn tolerates_arrow_functions_in_attributes() {
        let out = Instrumentor::default()
            .instrument("<Button onClick={() => go()}>Go</Button>", "Button");
        assert_eq!(
            out,
            r#"<Button onClick={() => go()} data-inspect-id="button-example">Go</Button>"#
        );
    }

    #[test]
    fn quoted_values_may_contain_angle_brackets() {
        let inst = Instrumentor::default();

        let out = inst.instrument(r#"<Button onClick="() => void">Example</Button>"#, "Button");
        assert_eq!(
            out,
            r#"<Button onClick="() => void" data-inspect-id="button-example">Example</Button>"#
        );

        let out = inst.instrument("<Tooltip content='a > b {c}' />", "Tooltip");
        assert_eq!(
            out,
            r#"<Tooltip content='a > b {c}' data-inspect-id="tooltip-example" />"#
        );
    }

    #[test]
    fn honors_custom_attribute() {
        let inst = Instrumentor::new("data-testid");
        let out = inst.instrument("<Badge />", "Badge");
        assert_eq!(out, r#"<Badge data-testid="badge-example" />"#);
        assert_eq!(inst.attribute(), "data-testid");
    }
}
