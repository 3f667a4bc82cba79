//! Entry-point normalization.
//!
//! The preview sandbox executes a module and expects exactly one call to its
//! entry point (`render(<Example />)` by default). Authored and synthesized
//! examples come in several shapes; each shape is recognized by one rule and
//! the rules are tried in a fixed order, first match wins.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

use crate::casing::capitalize;

/// Entry point used when none is configured.
pub const DEFAULT_ENTRY_POINT: &str = "render";

/// Identifier invoked when a module mentions it and declares nothing else.
const PREVIEW_IDENT: &str = "Preview";

const ELEMENT_CALL: &str = "React.createElement";

static DEFAULT_FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"export\s+default\s+function\s+([A-Za-z_$][A-Za-z0-9_$]*)")
        .expect("Invalid default function regex")
});

static DEFAULT_CONST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*export\s+default\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*;?\s*$")
        .expect("Invalid default constant regex")
});

static NAMED_FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^A-Za-z0-9_$.])function\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*\(")
        .expect("Invalid named function regex")
});

static FUNCTION_CONST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:^|[^A-Za-z0-9_$.])(?:const|let|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*(?:async\s+)?(?:function\b|\([^()]*\)\s*=>|[A-Za-z_$][A-Za-z0-9_$]*\s*=>)",
    )
    .expect("Invalid function constant regex")
});

static PREVIEW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b{}\b", PREVIEW_IDENT)).expect("Invalid preview regex")
});

/// Which authoring shape a module was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shape {
    /// `render(name())`, rewritten to tag form
    CalledIdentifier,
    /// `render(<name />)`, rewritten to a PascalCase tag
    LowercaseTag,
    /// Already carries a well-formed invocation
    HasInvocation,
    /// Nothing but a `React.createElement(...)` expression
    BareElement,
    /// `export default function Name`
    DefaultFunction,
    /// `export default Name;`
    DefaultConstant,
    /// Some named function declaration
    NamedFunction,
    /// A constant bound to a function or arrow
    FunctionConstant,
    /// Mentions the conventional `Preview` identifier
    PreviewIdent,
    /// A `React.createElement(...)` expression somewhere in the body
    ElementExpression,
    /// None of the above; left unchanged
    Unrecognized,
}

impl Shape {
    /// Whether output of this shape carries exactly one invocation.
    pub fn has_invocation(self) -> bool {
        self != Shape::Unrecognized
    }
}

/// Normalizer output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub source: String,
    pub shape: Shape,
}

type Rule = fn(&Normalizer, &str) -> Option<String>;

/// Ordered rules; the first to return `Some` decides the shape.
const RULES: &[(Shape, Rule)] = &[
    (Shape::CalledIdentifier, Normalizer::called_identifier),
    (Shape::LowercaseTag, Normalizer::lowercase_tag),
    (Shape::HasInvocation, Normalizer::has_invocation),
    (Shape::BareElement, Normalizer::bare_element),
    (Shape::DefaultFunction, Normalizer::default_function),
    (Shape::DefaultConstant, Normalizer::default_constant),
    (Shape::NamedFunction, Normalizer::named_function),
    (Shape::FunctionConstant, Normalizer::function_constant),
    (Shape::PreviewIdent, Normalizer::preview_ident),
    (Shape::ElementExpression, Normalizer::element_expression),
];

/// Rewrites module source so it invokes the sandbox entry point once.
#[derive(Debug, Clone)]
pub struct Normalizer {
    entry_point: String,
    called_re: Regex,
    lower_tag_re: Regex,
    invocation_re: Regex,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_ENTRY_POINT)
    }
}

impl Normalizer {
    /// Create a normalizer for the given entry-point function name.
    pub fn new(entry_point: &str) -> Self {
        let entry = regex::escape(entry_point);
        let prefix = r"(^|[^A-Za-z0-9_$.])";

        let build = |pattern: String| Regex::new(&pattern).expect("escaped entry point is valid");

        Self {
            entry_point: entry_point.to_string(),
            called_re: build(format!(
                r"{prefix}{entry}\s*\(\s*([A-Za-z_$][A-Za-z0-9_$]*)\s*\(\s*\)\s*\)"
            )),
            lower_tag_re: build(format!(r"{prefix}{entry}\s*\(\s*<([a-z][A-Za-z0-9_$]*)")),
            invocation_re: build(format!(
                r"{prefix}{entry}\s*\(\s*(?:<[A-Z]|React\.createElement\s*\()"
            )),
        }
    }

    /// The entry-point function name.
    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    /// Normalize `source`, reporting which shape it was recognized as.
    pub fn normalize(&self, source: &str) -> Normalized {
        for (shape, rule) in RULES {
            if let Some(out) = rule(self, source) {
                tracing::trace!("Normalized example as {:?}", shape);
                return Normalized {
                    source: out,
                    shape: *shape,
                };
            }
        }

        tracing::warn!(
            "Example has no recognizable entry shape; {}() is not invoked",
            self.entry_point
        );
        Normalized {
            source: source.to_string(),
            shape: Shape::Unrecognized,
        }
    }

    /// `render(name())` becomes `render(<Name />)`.
    pub fn called_identifier(&self, source: &str) -> Option<String> {
        if !self.called_re.is_match(source) {
            return None;
        }
        let out = self.called_re.replace(source, |caps: &Captures| {
            format!("{}{}(<{} />)", &caps[1], self.entry_point, capitalize(&caps[2]))
        });
        Some(out.into_owned())
    }

    /// `render(<demo />)` becomes `render(<Demo />)`, closing tag included.
    pub fn lowercase_tag(&self, source: &str) -> Option<String> {
        let caps = self.lower_tag_re.captures(source)?;
        let whole = caps.get(0)?;
        let name = &caps[2];
        let pascal = capitalize(name);

        let head = format!("{}{}(<{}", &caps[1], self.entry_point, pascal);
        let closing = format!("</{}>", name);
        let rest = source[whole.end()..].replacen(&closing, &format!("</{}>", pascal), 1);

        Some(format!("{}{}{}", &source[..whole.start()], head, rest))
    }

    /// Any well-formed invocation leaves the source alone.
    pub fn has_invocation(&self, source: &str) -> Option<String> {
        self.invocation_re
            .is_match(source)
            .then(|| source.to_string())
    }

    /// The whole module is one `React.createElement(...)` expression.
    pub fn bare_element(&self, source: &str) -> Option<String> {
        let trimmed = source.trim();
        if !trimmed.starts_with(ELEMENT_CALL) {
            return None;
        }
        let expr = element_call_at(trimmed, 0)?;
        let tail = trimmed[expr.len()..].trim_start();
        if !(tail.is_empty() || tail == ";") {
            return None;
        }
        Some(self.append_invocation(source, expr))
    }

    /// `export default function Name(...)`
    pub fn default_function(&self, source: &str) -> Option<String> {
        let caps = DEFAULT_FUNCTION_RE.captures(source)?;
        Some(self.append_tag(source, &caps[1]))
    }

    /// `export default Name;`
    pub fn default_constant(&self, source: &str) -> Option<String> {
        let caps = DEFAULT_CONST_RE.captures(source)?;
        Some(self.append_tag(source, &caps[1]))
    }

    /// First named function declaration, exported or not.
    pub fn named_function(&self, source: &str) -> Option<String> {
        let caps = NAMED_FUNCTION_RE.captures(source)?;
        Some(self.append_tag(source, &caps[1]))
    }

    /// First `const name = () => ...` or `const name = function`.
    pub fn function_constant(&self, source: &str) -> Option<String> {
        let caps = FUNCTION_CONST_RE.captures(source)?;
        Some(self.append_tag(source, &caps[1]))
    }

    /// Body mentions `Preview`.
    pub fn preview_ident(&self, source: &str) -> Option<String> {
        PREVIEW_RE
            .is_match(source)
            .then(|| self.append_tag(source, PREVIEW_IDENT))
    }

    /// First `React.createElement(...)` anywhere in the body.
    pub fn element_expression(&self, source: &str) -> Option<String> {
        let start = source.find(ELEMENT_CALL)?;
        let expr = element_call_at(source, start)?;
        Some(self.append_invocation(source, expr))
    }

    fn append_tag(&self, source: &str, name: &str) -> String {
        self.append_invocation(source, &format!("<{} />", capitalize(name)))
    }

    fn append_invocation(&self, source: &str, argument: &str) -> String {
        format!(
            "{}\n\n{}({});\n",
            source.trim_end(),
            self.entry_point,
            argument
        )
    }
}

/// The `React.createElement(...)` call starting at byte `start`, with its
/// parentheses balanced. String literals are skipped.
fn element_call_at(source: &str, start: usize) -> Option<&str> {
    let rest = &source[start..];
    let open = rest.find('(')?;
    if rest[ELEMENT_CALL.len()..open].trim() != "" {
        return None;
    }

    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in rest.char_indices().skip_while(|(i, _)| *i < open) {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '"' | '\'' | '`' => quote = Some(c),
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&rest[..=i]);
                }
            }
            _ => {}
        }
    }

    None
}
