//! Rendering errors.

use thiserror::Error;

/// Error returned when style content cannot be rendered.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A template expression failed to compile or evaluate.
    #[error("invalid style expression `{expr}`: {source}")]
    Expression {
        expr: String,
        #[source]
        source: minijinja::Error,
    },
}
