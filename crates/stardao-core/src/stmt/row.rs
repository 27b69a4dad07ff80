use super::Value;

use indexmap::IndexMap;

/// Values keyed by entity property name, in result map order.
///
/// The engine hydrates entities from rows. An association property holds the
/// nested entity's row as [`Value::Row`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Row {
    fields: IndexMap<String, Value>,
}

impl Row {
    pub fn new() -> Row {
        Row::default()
    }

    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(property.into(), value.into());
    }

    pub fn get(&self, property: &str) -> Option<&Value> {
        self.fields.get(property)
    }

    /// Removes the value for `property`, returning `Null` if it is absent.
    pub fn take(&mut self, property: &str) -> Value {
        self.fields.shift_remove(property).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for Row {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Row {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
