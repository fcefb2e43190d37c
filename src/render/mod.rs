//! Rendering style content to CSS text.
//!
//! [`Renderer`] walks [`StyleContent`](crate::StyleContent), evaluating
//! deferred pieces against a [`Context`](crate::Context). Template
//! expressions run on a MiniJinja environment with these additions:
//!
//! - `em` filter: pixel value to em string
//! - `kebab` filter: camelCase property name to kebab-case
//! - `breakpoint(from, to=none)` function: media query for the theme's table

mod error;
mod filters;
mod renderer;

pub use error::RenderError;
pub use renderer::{render, Renderer};
