//! Plain style objects.

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;

/// Key prefix that marks a nested media block in deserialized objects.
const MEDIA_PREFIX: &str = "@media ";

/// A value inside a [`StyleObject`].
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// A declaration value, e.g. `"12px"`.
    Value(String),
    /// A nested rule keyed by selector, rendered as `key{…}`.
    Block(StyleObject),
    /// A conditional rule keyed by media query, rendered as `@media key{…}`.
    Media(StyleObject),
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Value(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Value(value)
    }
}

/// An ordered mapping of CSS property names to values.
///
/// Property names may be written in camelCase (`fontSize`); they are converted
/// to kebab-case when rendered.
///
/// # Example
///
/// ```rust
/// use styled_breakpoint::{StyleObject, StyleValue};
///
/// let style = StyleObject::new()
///     .set("fontSize", "12px")
///     .block("&:hover", StyleObject::new().set("color", "red"));
///
/// assert_eq!(style.get("fontSize"), Some(&StyleValue::from("12px")));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleObject {
    entries: Vec<(String, StyleValue)>,
}

impl StyleObject {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets a property, returning the updated object for chaining.
    ///
    /// Setting an existing key replaces its value in place.
    pub fn set<V: Into<StyleValue>>(mut self, key: impl Into<String>, value: V) -> Self {
        self.insert(key, value.into());
        self
    }

    /// Adds a nested rule under `selector`.
    pub fn block(self, selector: impl Into<String>, style: StyleObject) -> Self {
        self.set(selector, StyleValue::Block(style))
    }

    /// Adds a conditional rule under `query`.
    pub fn media(self, query: impl Into<String>, style: StyleObject) -> Self {
        self.set(query, StyleValue::Media(style))
    }

    pub fn insert(&mut self, key: impl Into<String>, value: StyleValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleObject {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = Self::new();
        for (key, value) in iter {
            object.insert(key, value.into());
        }
        object
    }
}

/// Deserialized shape of a single entry value.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Number(f64),
    Nested(StyleObject),
}

impl<'de> Deserialize<'de> for StyleObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ObjectVisitor;

        impl<'de> Visitor<'de> for ObjectVisitor {
            type Value = StyleObject;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of CSS properties to strings, numbers or nested maps")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut object = StyleObject::new();
                while let Some((key, raw)) = map.next_entry::<String, RawValue>()? {
                    match raw {
                        RawValue::Text(text) => object.insert(key, StyleValue::Value(text)),
                        RawValue::Number(n) => object.insert(key, StyleValue::Value(n.to_string())),
                        RawValue::Nested(nested) => match key.strip_prefix(MEDIA_PREFIX) {
                            Some(query) => object.insert(query, StyleValue::Media(nested)),
                            None => object.insert(key, StyleValue::Block(nested)),
                        },
                    }
                }
                Ok(object)
            }
        }

        deserializer.deserialize_map(ObjectVisitor)
    }
}
