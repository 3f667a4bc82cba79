use std::cell::RefCell;

use pretty_assertions::assert_eq;
use specimen_registry::{Format, Registry};
use specimen_synth::{
    ExamplePipeline, Instrumentor, PipelineOptions, RenderFailure, RenderHooks, RenderOutcome,
    Shape,
};

const REGISTRY: &str = r#"{
  "components": {
    "Badge": { "props": { "variant": ["solid", "outline", "subtle"] } },
    "Input": { "props": { "placeholder": "string" } },
    "PasswordInput": { "aliasFor": "Input", "aliasProps": { "type": "password" } },
    "Dangling": { "aliasFor": "Missing" },
    "Broken": { "kind": "alias" },
    "Tabs": { "requiredParts": ["TabsList", "TabsTrigger"] },
    "TabsList": {}
  },
  "aliases": { "Tag": "Badge" }
}"#;

fn pipeline() -> ExamplePipeline {
    let registry = Registry::parse(REGISTRY, Format::Json).unwrap();
    ExamplePipeline::new(registry, PipelineOptions::default())
}

/// Render `name`, collecting every failure passed to `on_error`.
fn render_collecting(name: &str) -> (specimen_synth::Rendered, Vec<RenderFailure>) {
    let failures = RefCell::new(Vec::new());
    let on_error = |failure: &RenderFailure| failures.borrow_mut().push(failure.clone());

    let rendered = pipeline().render(name, &RenderHooks::new().on_error(&on_error));
    (rendered, failures.into_inner())
}

#[test]
fn badge_renders_one_instance_per_variant() {
    let (rendered, failures) = render_collecting("Badge");

    assert!(failures.is_empty());
    assert_eq!(rendered.outcome, RenderOutcome::Example(Shape::DefaultFunction));

    let source = &rendered.source;
    assert!(source.contains(r#"import { Badge } from "@/components/ui";"#));
    assert!(source.contains("export default function BadgeExample()"));
    assert_eq!(source.matches("<Badge variant=").count(), 3);
    for value in ["solid", "outline", "subtle"] {
        assert!(source.contains(&format!(r#"<Badge variant="{value}""#)));
        assert!(source.contains(&format!(r#">variant="{value}"</span>"#)));
    }

    let ids = Instrumentor::default().ids(source);
    assert_eq!(ids.len(), 3);
    assert!(source.ends_with("render(<BadgeExample />);\n"));
}

#[test]
fn password_input_renders_through_alias() {
    let (rendered, failures) = render_collecting("PasswordInput");

    assert!(failures.is_empty());
    let source = &rendered.source;
    assert!(source.contains(r#"import { Input } from "@/components/ui";"#));
    assert!(source.contains("export default function PasswordInputExample()"));
    assert!(source.contains(
        r#"<Input placeholder="Enter text" type="password" data-inspect-id="password-input-example">Example</Input>"#
    ));
    assert_eq!(Instrumentor::default().ids(source).len(), 1);
}

#[test]
fn alias_table_entries_are_transparent() {
    let p = pipeline();

    let via_alias = p.resolve("Tag").unwrap();
    let direct = p.resolve("Badge").unwrap();

    assert_eq!(via_alias.canonical_name, direct.canonical_name);
    assert_eq!(via_alias.props, direct.props);
    assert_eq!(via_alias.kind, direct.kind);
}

#[test]
fn alias_generates_target_example_with_overrides() {
    let p = pipeline();

    let expected = p
        .generate("Input")
        .unwrap()
        .replace("function InputExample", "function PasswordInputExample")
        .replace(r#""input-example""#, r#""password-input-example""#)
        .replace(
            r#"placeholder="Enter text""#,
            r#"placeholder="Enter text" type="password""#,
        );

    assert_eq!(p.generate("PasswordInput").unwrap(), expected);
}

#[test]
fn alias_table_generates_the_same_tree() {
    let p = pipeline();

    let expected = p
        .generate("Badge")
        .unwrap()
        .replace("function BadgeExample", "function TagExample")
        .replace(r#""badge-example""#, r#""tag-example""#)
        .replace(r#""badge-badge-"#, r#""tag-badge-"#);

    assert_eq!(p.generate("Tag").unwrap(), expected);
}

#[test]
fn missing_component_falls_back_with_available_names() {
    let (rendered, failures) = render_collecting("Foo");

    assert!(rendered.is_fallback());
    assert_eq!(failures.len(), 1);
    assert!(rendered.source.contains("Foo"));
    assert!(rendered
        .source
        .contains("Available components: Badge, Broken, Dangling, Input, PasswordInput, Tabs, TabsList"));
    assert!(rendered.source.ends_with("render(<ExampleError />);\n"));
}

#[test]
fn missing_subcomponent_names_dependency_and_parent() {
    let (rendered, failures) = render_collecting("Tabs");

    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].title, "Missing subcomponent");
    assert!(rendered.source.contains("TabsTrigger"));
    assert!(rendered.source.contains("Component Tabs requires"));
}

#[test]
fn render_is_total() {
    for name in ["Foo", "Dangling", "Broken", "Tabs", "", "<script>", "Badge"] {
        let (rendered, failures) = render_collecting(name);
        assert!(!rendered.source.is_empty(), "{name}");
        assert_eq!(failures.len(), usize::from(rendered.is_fallback()), "{name}");
    }
}

#[test]
fn dangling_alias_names_the_missing_target() {
    let (rendered, _) = render_collecting("Dangling");
    assert!(rendered
        .source
        .contains("Component not found: Dangling (resolved as Missing)"));
}

#[test]
fn malformed_alias_uses_generic_message() {
    let (rendered, failures) = render_collecting("Broken");

    assert_eq!(failures[0].title, "Example generation failed");
    assert!(rendered.source.contains("no aliasFor target"));
}
