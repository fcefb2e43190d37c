//! Style content passed to breakpoints and renderers.

use std::fmt;
use std::sync::Arc;

use super::object::StyleObject;
use crate::theme::Context;

/// A deferred style computation, evaluated against the render context.
pub type StyleFn = Arc<dyn Fn(&Context<'_>) -> StyleContent + Send + Sync>;

/// One segment of a [`Template`].
#[derive(Clone)]
pub enum Piece {
    /// Literal CSS text, emitted verbatim.
    Literal(String),
    /// Nested content, rendered in place.
    Content(StyleContent),
    /// A template expression such as `theme.accent | default('red')`,
    /// evaluated when the template is rendered.
    Expr(String),
    /// A function of the render context, called when the template is rendered.
    Function(StyleFn),
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Piece::Content(content) => f.debug_tuple("Content").field(content).finish(),
            Piece::Expr(expr) => f.debug_tuple("Expr").field(expr).finish(),
            Piece::Function(_) => f.write_str("Function(..)"),
        }
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Piece::Literal(a), Piece::Literal(b)) => a == b,
            (Piece::Content(a), Piece::Content(b)) => a == b,
            (Piece::Expr(a), Piece::Expr(b)) => a == b,
            (Piece::Function(a), Piece::Function(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Literal CSS fragments interleaved with interpolated values.
///
/// Interpolations are kept as they are given: expressions and functions are
/// only evaluated by the [`Renderer`](crate::Renderer).
///
/// # Example
///
/// ```rust
/// use styled_breakpoint::{Context, Template};
///
/// let template = Template::new()
///     .text("color: ")
///     .function(|ctx: &Context<'_>| {
///         ctx.theme().get_str("accent").unwrap_or("red").into()
///     })
///     .text(";");
///
/// assert_eq!(template.pieces().len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    pub fn new() -> Self {
        Self { pieces: Vec::new() }
    }

    /// Builds a template from literal fragments and the values placed between
    /// them, in the order a tagged template would supply them.
    ///
    /// Values beyond `fragments.len() - 1` are appended after the last fragment.
    pub fn from_parts<S: AsRef<str>>(fragments: &[S], values: Vec<Piece>) -> Self {
        let mut template = Self::new();
        let mut values = values.into_iter();
        for (i, fragment) in fragments.iter().enumerate() {
            if i > 0 {
                if let Some(value) = values.next() {
                    template.pieces.push(value);
                }
            }
            template = template.text(fragment.as_ref());
        }
        template.pieces.extend(values);
        template
    }

    /// Appends literal CSS text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.pieces.push(Piece::Literal(text));
        }
        self
    }

    /// Appends nested content.
    pub fn content(mut self, content: impl Into<StyleContent>) -> Self {
        self.pieces.push(Piece::Content(content.into()));
        self
    }

    /// Appends a template expression evaluated against `theme` and `props`.
    pub fn expr(mut self, expr: impl Into<String>) -> Self {
        self.pieces.push(Piece::Expr(expr.into()));
        self
    }

    /// Appends a function of the render context.
    pub fn function<F>(mut self, f: F) -> Self
    where
        F: Fn(&Context<'_>) -> StyleContent + Send + Sync + 'static,
    {
        self.pieces.push(Piece::Function(Arc::new(f)));
        self
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

/// Content that can be wrapped in a breakpoint and rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleContent {
    /// Fragments and interpolations.
    Template(Template),
    /// A plain CSS string.
    Raw(String),
    /// A property map.
    Object(StyleObject),
}

impl StyleContent {
    /// Content that renders to nothing.
    pub fn empty() -> Self {
        StyleContent::Raw(String::new())
    }

    /// Returns the object when this is [`StyleContent::Object`].
    pub fn as_object(&self) -> Option<&StyleObject> {
        match self {
            StyleContent::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl Default for StyleContent {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for StyleContent {
    fn from(css: &str) -> Self {
        StyleContent::Raw(css.to_string())
    }
}

impl From<String> for StyleContent {
    fn from(css: String) -> Self {
        StyleContent::Raw(css)
    }
}

impl From<Template> for StyleContent {
    fn from(template: Template) -> Self {
        StyleContent::Template(template)
    }
}

impl From<StyleObject> for StyleContent {
    fn from(object: StyleObject) -> Self {
        StyleContent::Object(object)
    }
}
