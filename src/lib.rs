//! # Styled Breakpoint - Responsive media queries for style content
//!
//! `styled-breakpoint` turns named breakpoints into `screen` media queries
//! and wraps style content in them. Widths are authored in pixels and emitted
//! in ems against a 16px root.
//!
//! ## Core Concepts
//!
//! - [`BreakpointTable`]: Ordered breakpoint names and pixel widths
//! - [`Resolver`]: Resolves one name ("from here up") or a pair ("from here
//!   up to there") into a [`Breakpoint`]
//! - [`StyleContent`]: Templates, raw CSS strings or [`StyleObject`]s
//! - [`Renderer`]: Serializes content to CSS, evaluating theme-dependent
//!   pieces against a [`Theme`]
//!
//! ## Quick Start
//!
//! ```rust
//! use styled_breakpoint::{BreakpointTable, Renderer, Resolver, Template, Theme};
//!
//! let resolver = Resolver::new(
//!     BreakpointTable::new()
//!         .add("mobile", 0.0)
//!         .add("tablet", 768.0)
//!         .add("desktop", 1024.0),
//! );
//!
//! let content = Template::new()
//!     .content(resolver.up("mobile").apply("font-size:12px;"))
//!     .content(resolver.between("tablet", "desktop").apply("font-size:16px;"))
//!     .content(resolver.up("desktop").apply("font-size:24px;"));
//!
//! let css = Renderer::new(Theme::new()).render(&content.into()).unwrap();
//! assert_eq!(
//!     css,
//!     "font-size:12px;\
//!      @media screen and (min-width:48em) and (max-width:63.9375em) {font-size:16px;}\
//!      @media screen and (min-width:64em) {font-size:24px;}",
//! );
//! ```
//!
//! ## Unknown Breakpoints
//!
//! Asking for a name that is not in the table never fails. A warning of the
//! form `styled-components-breakpoint: Breakpoint "<name>" was not found.` is
//! sent to the resolver's [`DiagnosticSink`] (the `log` facade by default) and
//! the missing bound is left out of the query.
//!
//! ## Theme-Driven Breakpoints
//!
//! [`themed`] breakpoints read their table from the render-time [`Theme`],
//! falling back to [`BreakpointTable::defaults`].

pub mod breakpoint;
pub mod diagnostics;
pub mod render;
pub mod style;
pub mod theme;
mod util;

pub use breakpoint::{
    create_resolver, themed, Breakpoint, BreakpointError, BreakpointTable, ConfigError,
    MediaQuery, Resolver, Responsive, ThemedBreakpoint, DEFAULT_BREAKPOINTS,
};
pub use diagnostics::{
    reset_diagnostic_sink, set_diagnostic_sink, DiagnosticSink, LogSink, MemorySink,
};
pub use render::{render, RenderError, Renderer};
pub use style::{Piece, StyleContent, StyleFn, StyleObject, StyleValue, Template};
pub use theme::{Context, Theme};
pub use util::{px_to_em, px_to_em_with_base, to_kebab_case, BASE_FONT_SIZE};
