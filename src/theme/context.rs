//! Render-time context for deferred style content.

use serde_json::Value;

use super::theme::Theme;

/// The context handed to [`StyleFn`](crate::StyleFn)s and template expressions.
///
/// It borrows the active theme and carries optional component props.
#[derive(Debug, Clone)]
pub struct Context<'a> {
    theme: &'a Theme,
    props: Value,
}

impl<'a> Context<'a> {
    /// Creates a context with no props.
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            props: Value::Null,
        }
    }

    /// Attaches props, returning the updated context.
    pub fn with_props(mut self, props: Value) -> Self {
        self.props = props;
        self
    }

    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    pub fn props(&self) -> &Value {
        &self.props
    }

    /// Looks up a single prop by name.
    pub fn prop(&self, name: &str) -> Option<&Value> {
        self.props.get(name)
    }
}
