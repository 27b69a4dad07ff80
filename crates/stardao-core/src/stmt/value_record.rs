use super::Value;

use std::ops;

/// An ordered list of values, such as one row returned by a driver or the
/// parts of a composite key.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValueRecord {
    pub fields: Vec<Value>,
}

impl ValueRecord {
    pub fn from_vec(fields: Vec<Value>) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.fields.iter()
    }
}

impl ops::Index<usize> for ValueRecord {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.fields[index]
    }
}

impl IntoIterator for ValueRecord {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl FromIterator<Value> for ValueRecord {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
