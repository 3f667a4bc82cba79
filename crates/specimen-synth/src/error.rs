//! Errors raised while resolving and synthesizing examples.

/// Errors that can occur in the synthesis pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SynthError {
    #[error("Component not found: {requested} (resolved as {canonical})")]
    ComponentNotFound { requested: String, canonical: String },

    #[error("Component {parent} requires {missing}, which is not registered")]
    SubcomponentNotFound { missing: String, parent: String },

    #[error("Malformed registry entry {name}: {reason}")]
    Malformed { name: String, reason: String },
}

impl SynthError {
    pub(crate) fn malformed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        SynthError::Malformed {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
