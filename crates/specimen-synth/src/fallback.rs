//! Error-display snippet used whenever example generation fails.

use serde::Serialize;

use crate::error::SynthError;

/// Why `render` fell back, as handed to the `on_error` hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{title}: {message}")]
pub struct RenderFailure {
    /// Name the caller asked for
    pub component: String,
    /// Short heading shown in the preview
    pub title: String,
    /// Detail text shown under the heading
    pub message: String,
    /// Underlying pipeline error; `None` for caught panics
    #[serde(skip)]
    pub cause: Option<SynthError>,
}

impl RenderFailure {
    /// Build the failure for a pipeline error.
    ///
    /// `available` is only consulted for not-found errors.
    pub fn from_error(component: &str, error: SynthError, available: &[String]) -> Self {
        let (title, message) = match &error {
            SynthError::ComponentNotFound { .. } => (
                "Component not found",
                format!(
                    "{}\n\nAvailable components: {}",
                    error,
                    if available.is_empty() {
                        "(none)".to_string()
                    } else {
                        available.join(", ")
                    }
                ),
            ),
            SynthError::SubcomponentNotFound { .. } => {
                ("Missing subcomponent", error.to_string())
            }
            SynthError::Malformed { .. } => ("Example generation failed", error.to_string()),
        };

        Self {
            component: component.to_string(),
            title: title.to_string(),
            message,
            cause: Some(error),
        }
    }

    /// Build the failure for a panic caught while generating.
    pub fn from_panic(component: &str, message: impl Into<String>) -> Self {
        Self {
            component: component.to_string(),
            title: "Example generation failed".to_string(),
            message: message.into(),
            cause: None,
        }
    }
}

/// A self-contained component showing `title` and `message`.
///
/// Uses only inline styles and string literals, and already invokes
/// `entry_point`, so it needs no normalization and cannot fail to render.
pub fn build_fallback(title: &str, message: &str, entry_point: &str) -> String {
    format!(
        r##"const title = {title};
const message = {message};

function ExampleError() {{
  return (
    <div
      role="alert"
      style={{{{
        padding: 16,
        borderRadius: 8,
        border: "1px solid #fca5a5",
        background: "#fef2f2",
        color: "#991b1b",
        fontFamily: "ui-sans-serif, system-ui, sans-serif",
      }}}}
    >
      <strong>{{title}}</strong>
      <pre style={{{{ marginTop: 8, whiteSpace: "pre-wrap", fontSize: 12 }}}}>{{message}}</pre>
    </div>
  );
}}

{entry_point}(<ExampleError />);
"##,
        title = js_string(title),
        message = js_string(message),
        entry_point = entry_point,
    )
}

/// Quote `s` as a JavaScript string literal.
fn js_string(s: &str) -> String {
    // JSON strings are valid JS literals apart from U+2028/U+2029.
    serde_json::Value::from(s)
        .to_string()
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}
