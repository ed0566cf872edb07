use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::ser::{Error as _, Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Decimal(Decimal),
    Document(Document),
}

/// A parsed dictionary block, or the merged root of a config file.
///
/// Keys keep their first-insertion position; re-inserting a key replaces the
/// value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    entries: IndexMap<String, Value>,
}

impl Value {
    pub fn as_document(&self) -> Option<&Document> {
        if let Value::Document(doc) = self {
            Some(doc)
        } else {
            None
        }
    }

    /// The numeric value as a decimal; `None` for documents.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Value::Integer(i) => Some(Decimal::from(*i)),
            Value::Decimal(d) => Some(*d),
            Value::Document(_) => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Decimal(_) => "decimal",
            Value::Document(_) => "document",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::Document(doc) => write!(f, "<document with {} keys>", doc.len()),
        }
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    /// Merge every entry of `other` into `self`; `other` wins on collisions.
    pub fn merge(&mut self, other: Document) {
        self.entries.extend(other.entries);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Value)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Integer(i) => serializer.serialize_i64(*i),
            // Goes through the arbitrary-precision number so the decimal text is kept as-is
            Value::Decimal(d) => serde_json::Number::from_str(&d.to_string())
                .map_err(S::Error::custom)?
                .serialize(serializer),
            Value::Document(doc) => doc.serialize(serializer),
        }
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
