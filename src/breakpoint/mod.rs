//! Named breakpoints and media-query resolution.
//!
//! This module provides:
//!
//! - [`BreakpointTable`]: An ordered name → pixel width mapping
//! - [`Resolver`]: Turns one or two names into a [`Breakpoint`]
//! - [`Breakpoint`]: Wraps style content in its media query
//! - [`MediaQuery`]: The `screen and (min-width:…)` predicate itself
//! - [`Responsive`]: Per-breakpoint values mapped through a style function
//! - [`themed`]: Breakpoints that read their table from the render theme
//!
//! Widths are authored in pixels and emitted in ems against a 16px root.
//! Unknown names are reported as diagnostics and never fail resolution.

mod error;
mod map;
mod query;
mod resolver;
mod table;
pub mod themed;

pub use error::{BreakpointError, ConfigError};
pub use map::Responsive;
pub use query::MediaQuery;
pub use resolver::{create_resolver, Breakpoint, Resolver};
pub use table::{BreakpointTable, DEFAULT_BREAKPOINTS};
pub use themed::ThemedBreakpoint;
