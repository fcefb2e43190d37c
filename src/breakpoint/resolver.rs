//! Breakpoint resolution.

use std::fmt;
use std::sync::Arc;

use super::error::BreakpointError;
use super::query::MediaQuery;
use super::table::BreakpointTable;
use crate::diagnostics::{global_sink, prefixed, DiagnosticSink};
use crate::style::{StyleContent, StyleObject, Template};

/// Creates a resolver for `table`.
///
/// Shorthand for [`Resolver::new`].
pub fn create_resolver(table: BreakpointTable) -> Resolver {
    Resolver::new(table)
}

/// Turns breakpoint names into media queries over a fixed table.
///
/// Unknown names never fail: they are reported through the resolver's
/// [`DiagnosticSink`] and the affected bound is left out of the query.
///
/// # Example
///
/// ```rust
/// use styled_breakpoint::{BreakpointTable, Resolver, StyleContent, StyleObject};
///
/// let resolver = Resolver::new(
///     BreakpointTable::new()
///         .add("mobile", 0.0)
///         .add("tablet", 768.0)
///         .add("desktop", 1024.0),
/// );
///
/// assert_eq!(
///     resolver.up("tablet").media_query().as_deref(),
///     Some("screen and (min-width:48em)"),
/// );
///
/// let wrapped = resolver.up("tablet").apply(StyleObject::new().set("fontSize", "12px"));
/// assert_eq!(
///     wrapped,
///     StyleContent::Object(StyleObject::new().media(
///         "screen and (min-width:48em)",
///         StyleObject::new().set("fontSize", "12px"),
///     )),
/// );
/// ```
#[derive(Clone)]
pub struct Resolver {
    table: Arc<BreakpointTable>,
    sink: Option<Arc<dyn DiagnosticSink>>,
}

impl Resolver {
    /// Creates a resolver that reports through the process-wide sink.
    pub fn new(table: BreakpointTable) -> Self {
        Self {
            table: Arc::new(table),
            sink: None,
        }
    }

    /// Uses `sink` for this resolver's diagnostics instead of the
    /// process-wide one.
    pub fn with_sink<S: DiagnosticSink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    pub fn table(&self) -> &BreakpointTable {
        &self.table
    }

    /// Resolves `from` (and optionally an exclusive upper breakpoint `to`)
    /// into a [`Breakpoint`].
    pub fn breakpoint(&self, from: &str, to: Option<&str>) -> Breakpoint {
        Breakpoint {
            query: self.query(from, to),
        }
    }

    /// Matches viewports from `name` upward.
    pub fn up(&self, name: &str) -> Breakpoint {
        self.breakpoint(name, None)
    }

    /// Matches viewports from `from` up to, but excluding, `to`.
    pub fn between(&self, from: &str, to: &str) -> Breakpoint {
        self.breakpoint(from, Some(to))
    }

    /// Builds the media query for `from` and optional `to`.
    ///
    /// Each unknown name emits one diagnostic.
    pub fn query(&self, from: &str, to: Option<&str>) -> MediaQuery {
        let min = self.lookup(from);
        let upper = to.and_then(|name| self.lookup(name));
        MediaQuery::from_bounds(min, upper)
    }

    fn lookup(&self, name: &str) -> Option<f64> {
        let px = self.table.get(name);
        if px.is_none() {
            self.report(BreakpointError::NotFound {
                name: name.to_string(),
            });
        }
        px
    }

    fn report(&self, error: BreakpointError) {
        let message = prefixed(&error);
        match &self.sink {
            Some(sink) => sink.warn(&message),
            None => global_sink().warn(&message),
        }
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("table", &self.table)
            .field("custom_sink", &self.sink.is_some())
            .finish()
    }
}

/// A resolved breakpoint, ready to wrap style content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    query: MediaQuery,
}

impl Breakpoint {
    pub fn new(query: MediaQuery) -> Self {
        Self { query }
    }

    pub fn query(&self) -> MediaQuery {
        self.query
    }

    /// The media-query string, or `None` when the breakpoint applies
    /// unconditionally.
    pub fn media_query(&self) -> Option<String> {
        if self.query.is_unconditional() {
            None
        } else {
            Some(self.query.to_string())
        }
    }

    /// Wraps `content` in this breakpoint's media query.
    ///
    /// - Templates and raw strings become `@media <query> {<content>}`, with
    ///   the content nested unevaluated.
    /// - Style objects become `{ <query>: <object> }`.
    /// - Unconditional breakpoints return the content unchanged.
    pub fn apply(&self, content: impl Into<StyleContent>) -> StyleContent {
        let content = content.into();
        let Some(query) = self.media_query() else {
            return content;
        };

        match content {
            StyleContent::Object(object) => {
                StyleContent::Object(StyleObject::new().media(query, object))
            }
            other => Template::new()
                .text(format!("@media {} {{", query))
                .content(other)
                .text("}")
                .into(),
        }
    }
}
