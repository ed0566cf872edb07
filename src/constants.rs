use indexmap::IndexMap;

use crate::ast::Value;

/// Constants declared so far in one parse session.
///
/// Redeclaring a name overwrites it. The parser only stores numbers here,
/// but lookups still hand back a full [`Value`].
#[derive(Debug, Clone, Default)]
pub struct ConstantTable {
    values: IndexMap<String, Value>,
}

impl ConstantTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    pub fn resolve(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Declared constants in first-declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
