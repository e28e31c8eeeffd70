//! Insertion-ordered CSS style maps.
//!
//! Inline styles are assembled by merging several layers of declarations
//! (layer defaults, layout overrides, background color, caller overrides),
//! and the serialized output must be byte-identical across calls with the
//! same inputs. Both requirements rule out unordered maps: [`StyleMap`] is
//! a thin ordered map where iteration follows insertion order and
//! overwriting a property keeps its original position while replacing the
//! value, the same observable behavior as merging associative arrays where
//! later entries win.
//!
//! Serialization to an inline style string is [`StyleMap::declarations`]:
//! `"prop:value;prop:value"`, joined in map order, no trailing separator.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A CSS property → value map that preserves insertion order.
///
/// Overwriting an existing property updates the value in place; the
/// property keeps the position of its first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property. Last write wins for the value; first write wins for
    /// the position.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }

    /// Builder form of [`set`](Self::set), for literal style tables.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Apply every declaration of `other` onto `self`, in `other`'s order.
    ///
    /// Duplicate properties take `other`'s value but keep their existing
    /// position in `self`; new properties are appended.
    pub fn merge(&mut self, other: &StyleMap) {
        for (property, value) in &other.entries {
            self.set(property.clone(), value.clone());
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Serialize to an inline style string: `"prop:value;prop:value"`,
    /// insertion order, no trailing separator.
    pub fn declarations(&self) -> String {
        self.entries
            .iter()
            .map(|(p, v)| format!("{p}:{v}"))
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl<P: Into<String>, V: Into<String>> FromIterator<(P, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (property, value) in iter {
            map.set(property, value);
        }
        map
    }
}

impl Serialize for StyleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (property, value) in &self.entries {
            map.serialize_entry(property, value)?;
        }
        map.end()
    }
}

/// A CSS value as it appears in caller overrides: a string, or a bare
/// number (`"margin": 0`) which is carried over as its decimal text.
struct CssValue(String);

impl<'de> Deserialize<'de> for CssValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CssValueVisitor;

        impl Visitor<'_> for CssValueVisitor {
            type Value = CssValue;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a CSS value (string or number)")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<CssValue, E> {
                Ok(CssValue(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<CssValue, E> {
                Ok(CssValue(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<CssValue, E> {
                Ok(CssValue(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<CssValue, E> {
                Ok(CssValue(v.to_string()))
            }
        }

        deserializer.deserialize_any(CssValueVisitor)
    }
}

impl<'de> Deserialize<'de> for StyleMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StyleMapVisitor;

        impl<'de> Visitor<'de> for StyleMapVisitor {
            type Value = StyleMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of CSS properties to values")
            }

            // Entries arrive in document order, which becomes the map order.
            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<StyleMap, A::Error> {
                let mut map = StyleMap::new();
                while let Some((property, CssValue(value))) =
                    access.next_entry::<String, CssValue>()?
                {
                    map.set(property, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(StyleMapVisitor)
    }
}
