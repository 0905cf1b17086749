//! Ordered figure metadata
//!
//! Monitoring figures carry a small block of `key : value` lines. The order
//! in which values are added is the order in which they are shown, so the
//! map keeps insertion order and re-inserting a key updates it in place.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single metadata value
///
/// Non-finite floats are written as the strings `"NaN"`, `"inf"` and
/// `"-inf"` and read back as floats, since JSON has no number for them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawValue")]
pub enum FigValue {
    /// Whole number, such as a pixel count
    Int(i64),
    /// Real number, such as a centre or spread
    Float(f64),
    /// Free text
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<RawValue> for FigValue {
    fn from(raw: RawValue) -> Self {
        match raw {
            RawValue::Int(v) => FigValue::Int(v),
            RawValue::Float(v) => FigValue::Float(v),
            RawValue::Text(text) => match text.as_str() {
                "NaN" => FigValue::Float(f64::NAN),
                "inf" => FigValue::Float(f64::INFINITY),
                "-inf" => FigValue::Float(f64::NEG_INFINITY),
                _ => FigValue::Text(text),
            },
        }
    }
}

impl Serialize for FigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FigValue::Int(v) => serializer.serialize_i64(*v),
            FigValue::Float(v) if v.is_finite() => serializer.serialize_f64(*v),
            FigValue::Float(v) => serializer.serialize_str(&v.to_string()),
            FigValue::Text(v) => serializer.serialize_str(v),
        }
    }
}

impl FigValue {
    /// Numeric view of the value, `None` for text
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FigValue::Int(v) => Some(*v as f64),
            FigValue::Float(v) => Some(*v),
            FigValue::Text(_) => None,
        }
    }
}

impl fmt::Display for FigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FigValue::Int(v) => write!(f, "{v}"),
            FigValue::Float(v) => write!(f, "{v}"),
            FigValue::Text(v) => write!(f, "{v}"),
        }
    }
}

impl From<f64> for FigValue {
    fn from(v: f64) -> Self {
        FigValue::Float(v)
    }
}

impl From<i64> for FigValue {
    fn from(v: i64) -> Self {
        FigValue::Int(v)
    }
}

impl From<usize> for FigValue {
    fn from(v: usize) -> Self {
        i64::try_from(v).map_or(FigValue::Float(v as f64), FigValue::Int)
    }
}

impl From<&str> for FigValue {
    fn from(v: &str) -> Self {
        FigValue::Text(v.to_string())
    }
}

impl From<String> for FigValue {
    fn from(v: String) -> Self {
        FigValue::Text(v)
    }
}

/// Insertion-ordered figure metadata
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FigInfo {
    entries: Vec<(String, FigValue)>,
}

impl FigInfo {
    /// Empty metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, or replace it in place when the key already exists
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FigValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FigValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Value stored under `key`
    pub fn get(&self, key: &str) -> Option<&FigValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Numeric value under `key`, `None` when missing or text
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(FigValue::as_f64)
    }

    /// Whether `key` has a value
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry was added
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FigValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// One `key : value` line per entry
impl fmt::Display for FigInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{key} : {value}")?;
        }
        Ok(())
    }
}

impl Serialize for FigInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct FigInfoVisitor;

impl<'de> Visitor<'de> for FigInfoVisitor {
    type Value = FigInfo;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of figure metadata")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<FigInfo, M::Error> {
        let mut info = FigInfo::new();
        while let Some((key, value)) = access.next_entry::<String, FigValue>()? {
            info.insert(key, value);
        }
        Ok(info)
    }
}

impl<'de> Deserialize<'de> for FigInfo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(FigInfoVisitor)
    }
}
