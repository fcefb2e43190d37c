//! Ordered breakpoint tables.

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;
use std::path::Path;

use super::error::ConfigError;

/// Breakpoints used when no table is supplied.
pub const DEFAULT_BREAKPOINTS: &[(&str, f64)] =
    &[("mobile", 0.0), ("tablet", 737.0), ("desktop", 1195.0)];

/// An ordered mapping from breakpoint name to minimum pixel width.
///
/// Names are unique. Entries keep the order they were added in; values are
/// conventionally increasing but that is not enforced.
///
/// # Example
///
/// ```rust
/// use styled_breakpoint::BreakpointTable;
///
/// let table = BreakpointTable::new()
///     .add("mobile", 0.0)
///     .add("tablet", 768.0)
///     .add("desktop", 1024.0);
///
/// assert_eq!(table.get("tablet"), Some(768.0));
/// assert_eq!(table.names().collect::<Vec<_>>(), ["mobile", "tablet", "desktop"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BreakpointTable {
    entries: Vec<(String, f64)>,
}

impl BreakpointTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The `mobile`/`tablet`/`desktop` table.
    pub fn defaults() -> Self {
        DEFAULT_BREAKPOINTS
            .iter()
            .map(|(name, px)| (*name, *px))
            .collect()
    }

    /// Adds a breakpoint, returning the updated table for chaining.
    ///
    /// Adding a name that already exists replaces its threshold in place.
    pub fn add(mut self, name: impl Into<String>, px: f64) -> Self {
        self.insert(name, px);
        self
    }

    fn insert(&mut self, name: impl Into<String>, px: f64) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = px,
            None => self.entries.push((name, px)),
        }
    }

    /// Returns the threshold, in pixels, for `name`.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, px)| *px)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates over `(name, threshold)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, px)| (name.as_str(), *px))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks that every threshold is a finite, non-negative number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, px) in &self.entries {
            if !px.is_finite() || *px < 0.0 {
                return Err(ConfigError::InvalidThreshold {
                    name: name.clone(),
                    value: *px,
                });
            }
        }
        Ok(())
    }

    /// Parses a table from a JSON object such as `{"mobile": 0, "tablet": 768}`.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let table: Self = serde_json::from_str(source)?;
        table.validate()?;
        Ok(table)
    }

    /// Parses a table from a YAML mapping.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        let table: Self = serde_yaml::from_str(source)?;
        table.validate()?;
        Ok(table)
    }

    /// Loads a table from a `.json`, `.yaml` or `.yml` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, ConfigError> = match extension.as_deref() {
            Some("json") => Self::from_json,
            Some("yaml") | Some("yml") => Self::from_yaml,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };

        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&source)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for BreakpointTable {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, px) in iter {
            table.insert(name, px);
        }
        table
    }
}

impl<'de> Deserialize<'de> for BreakpointTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = BreakpointTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of breakpoint names to pixel widths")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut table = BreakpointTable::new();
                while let Some((name, px)) = map.next_entry::<String, f64>()? {
                    table.insert(name, px);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}
