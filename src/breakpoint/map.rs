//! Responsive values: one value per breakpoint.

use super::resolver::Resolver;
use crate::style::{StyleContent, Template};

/// A value that is either fixed or varies by breakpoint.
///
/// # Example
///
/// ```rust
/// use styled_breakpoint::{BreakpointTable, Renderer, Resolver, Responsive, StyleObject, Theme};
///
/// let resolver = Resolver::new(BreakpointTable::defaults());
/// let columns = Responsive::per_breakpoint([("mobile", 1), ("tablet", 2)]);
///
/// let content = resolver.map(&columns, |n| {
///     StyleObject::new().set("columnCount", n.to_string()).into()
/// });
///
/// let css = Renderer::new(Theme::new()).render(&content).unwrap();
/// assert_eq!(
///     css,
///     "column-count:1;@media screen and (min-width:46.0625em){column-count:2;}",
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Responsive<T> {
    /// The same value at every width.
    Fixed(T),
    /// Values keyed by breakpoint name, applied from that breakpoint upward.
    Breakpoints(Vec<(String, T)>),
}

impl<T> Responsive<T> {
    pub fn fixed(value: T) -> Self {
        Responsive::Fixed(value)
    }

    /// Builds a per-breakpoint value, keeping the given order.
    pub fn per_breakpoint<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, T)>,
    {
        Responsive::Breakpoints(
            entries
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }
}

impl Resolver {
    /// Maps a responsive value to style content.
    ///
    /// A fixed value is passed to `f` and returned unwrapped. Otherwise each
    /// entry's content is wrapped in its breakpoint (from that breakpoint up),
    /// and the results are joined in entry order.
    pub fn map<T, F>(&self, values: &Responsive<T>, f: F) -> StyleContent
    where
        F: Fn(&T) -> StyleContent,
    {
        match values {
            Responsive::Fixed(value) => f(value),
            Responsive::Breakpoints(entries) => entries
                .iter()
                .fold(Template::new(), |template, (name, value)| {
                    template.content(self.up(name).apply(f(value)))
                })
                .into(),
        }
    }
}
