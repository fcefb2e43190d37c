//! Themes and render context.
//!
//! This module provides:
//!
//! - [`Theme`]: Named values plus an optional breakpoint table
//! - [`Context`]: The theme and props handed to deferred style content
//!
//! Themes are consulted lazily: style functions and template expressions only
//! see them when content is rendered.

mod context;
#[allow(clippy::module_inception)]
mod theme;

pub use context::Context;
pub use theme::{Theme, BREAKPOINTS_KEY};
