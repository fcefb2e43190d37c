//! Style content model.
//!
//! This module provides the payloads that breakpoints wrap and renderers
//! serialize:
//!
//! - [`StyleContent`]: Template, raw string or object content
//! - [`Template`]: Literal fragments interleaved with interpolations
//! - [`StyleObject`]: An ordered property map with nested blocks
//!
//! Interpolations that depend on the theme are stored unevaluated and only
//! run when the content is rendered.

mod content;
mod object;

pub use content::{Piece, StyleContent, StyleFn, Template};
pub use object::{StyleObject, StyleValue};
