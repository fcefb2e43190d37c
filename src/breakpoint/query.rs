//! Media-query predicates built from breakpoint bounds.

use std::fmt;

use crate::util::px_to_em;

/// A `screen` media query with optional width bounds, in pixels.
///
/// The bounds are stored as given; they are converted to ems only when the
/// query is formatted. A query with neither bound is empty and matches
/// unconditionally.
///
/// # Example
///
/// ```rust
/// use styled_breakpoint::MediaQuery;
///
/// let query = MediaQuery::between(768.0, 1024.0);
/// assert_eq!(query.to_string(), "screen and (min-width:48em) and (max-width:63.9375em)");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MediaQuery {
    min: Option<f64>,
    max: Option<f64>,
}

impl MediaQuery {
    /// A query that places no constraint on the viewport.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Matches viewports at least `min` pixels wide.
    pub fn from_min(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Matches viewports from `min` pixels up to, but excluding, `upper` pixels.
    pub fn between(min: f64, upper: f64) -> Self {
        Self::from_bounds(Some(min), Some(upper))
    }

    /// Builds a query from an inclusive lower bound and an exclusive upper
    /// threshold. The max-width clause uses `upper - 1` pixels.
    pub fn from_bounds(min: Option<f64>, upper: Option<f64>) -> Self {
        Self {
            min,
            max: upper.map(|px| px - 1.0),
        }
    }

    /// Inclusive lower bound in pixels.
    pub fn min(&self) -> Option<f64> {
        self.min
    }

    /// Inclusive upper bound in pixels (already one below the threshold).
    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// True when no bound is present.
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// True when the query matches every viewport.
    ///
    /// A lone `min-width:0` constrains nothing, so it counts as unconditional.
    /// Once an upper bound is present, the lower clause is kept even at zero.
    pub fn is_unconditional(&self) -> bool {
        match (self.min, self.max) {
            (None, None) => true,
            (Some(min), None) => min <= 0.0,
            _ => false,
        }
    }
}

impl fmt::Display for MediaQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }

        f.write_str("screen")?;
        if let Some(min) = self.min {
            write!(f, " and (min-width:{}em)", px_to_em(min))?;
        }
        if let Some(max) = self.max {
            write!(f, " and (max-width:{}em)", px_to_em(max))?;
        }
        Ok(())
    }
}
