//! Breakpoints resolved against the render-time theme.
//!
//! These helpers do not take a table up front. The returned content holds a
//! deferred function that reads the breakpoint table from the theme in the
//! render [`Context`](crate::Context), falling back to
//! [`BreakpointTable::defaults`] when the theme has none.
//!
//! ```rust
//! use styled_breakpoint::{themed, BreakpointTable, Renderer, Theme};
//!
//! let content = themed::up("wide").apply("width:50%;");
//!
//! let theme = Theme::new().with_breakpoints(BreakpointTable::new().add("wide", 1600.0));
//! let css = Renderer::new(theme).render(&content).unwrap();
//! assert_eq!(css, "@media screen and (min-width:100em) {width:50%;}");
//! ```

use super::resolver::Resolver;
use crate::style::{StyleContent, Template};

/// A breakpoint whose table is looked up when the content is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemedBreakpoint {
    from: String,
    to: Option<String>,
}

/// Matches viewports from `from` (up to, but excluding, `to` when given),
/// using the theme's breakpoint table.
pub fn breakpoint(from: &str, to: Option<&str>) -> ThemedBreakpoint {
    ThemedBreakpoint {
        from: from.to_string(),
        to: to.map(str::to_string),
    }
}

/// Matches viewports from `name` upward, using the theme's breakpoint table.
pub fn up(name: &str) -> ThemedBreakpoint {
    breakpoint(name, None)
}

/// Matches viewports from `from` up to, but excluding, `to`, using the theme's
/// breakpoint table.
pub fn between(from: &str, to: &str) -> ThemedBreakpoint {
    breakpoint(from, Some(to))
}

impl ThemedBreakpoint {
    /// Defers wrapping `content` until render time.
    pub fn apply(&self, content: impl Into<StyleContent>) -> StyleContent {
        let content = content.into();
        let from = self.from.clone();
        let to = self.to.clone();

        Template::new()
            .function(move |ctx| {
                Resolver::new(ctx.theme().breakpoints_or_default())
                    .breakpoint(&from, to.as_deref())
                    .apply(content.clone())
            })
            .into()
    }
}
