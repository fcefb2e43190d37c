//! Theme values available to deferred style content.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::breakpoint::{BreakpointTable, ConfigError};

/// Key under which a theme's breakpoint table is stored in JSON/YAML config.
pub const BREAKPOINTS_KEY: &str = "breakpoints";

/// Named values handed to style functions and template expressions at render
/// time, plus an optional breakpoint table.
///
/// # Example
///
/// ```rust
/// use styled_breakpoint::{BreakpointTable, Theme};
///
/// let theme = Theme::new()
///     .add("accent", "orange")
///     .add("spacing", 4)
///     .with_breakpoints(BreakpointTable::new().add("tablet", 768.0));
///
/// assert_eq!(theme.get_str("accent"), Some("orange"));
/// assert_eq!(theme.breakpoints().and_then(|t| t.get("tablet")), Some(768.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    values: Map<String, Value>,
    breakpoints: Option<BreakpointTable>,
}

impl Theme {
    /// Creates an empty theme with no breakpoint table.
    pub fn new() -> Self {
        Self {
            values: Map::new(),
            breakpoints: None,
        }
    }

    /// Adds a named value, returning an updated theme for chaining.
    pub fn add<V: Into<Value>>(mut self, name: &str, value: V) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    /// Sets the breakpoint table used by themed breakpoints and the
    /// renderer's `breakpoint()` function.
    pub fn with_breakpoints(mut self, table: BreakpointTable) -> Self {
        self.breakpoints = Some(table);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Returns the value for `name` if it is a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(Value::as_str)
    }

    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    pub fn breakpoints(&self) -> Option<&BreakpointTable> {
        self.breakpoints.as_ref()
    }

    /// The theme's breakpoint table, or the default table if none is set.
    pub fn breakpoints_or_default(&self) -> BreakpointTable {
        self.breakpoints
            .clone()
            .unwrap_or_else(BreakpointTable::defaults)
    }

    /// Parses a theme from a JSON object.
    ///
    /// A top-level `breakpoints` object becomes the breakpoint table; every
    /// other key is a theme value.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let raw: RawTheme = serde_json::from_str(source)?;
        raw.into_theme()
    }

    /// Parses a theme from a YAML mapping, with the same layout as
    /// [`Theme::from_json`].
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        let raw: RawTheme = serde_yaml::from_str(source)?;
        raw.into_theme()
    }
}

/// On-disk theme layout: a `breakpoints` table next to arbitrary values.
#[derive(Deserialize)]
struct RawTheme {
    #[serde(default)]
    breakpoints: Option<BreakpointTable>,
    #[serde(flatten)]
    values: Map<String, Value>,
}

impl RawTheme {
    fn into_theme(self) -> Result<Theme, ConfigError> {
        if let Some(table) = &self.breakpoints {
            table.validate()?;
        }
        Ok(Theme {
            values: self.values,
            breakpoints: self.breakpoints,
        })
    }
}
