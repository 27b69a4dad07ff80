use super::Value;

/// A conjunction of column equality conditions.
///
/// A condition whose value is `Null` is serialized as `column = NULL`, which
/// never matches. Keyed statements built from an entity without an identity
/// value therefore affect zero rows.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Filter {
    pub conditions: Vec<Condition>,
}

/// `column = value`
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub column: String,
    pub value: Value,
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn eq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push(Condition {
            column: column.into(),
            value: value.into(),
        });
        self
    }
}

impl FromIterator<Condition> for Filter {
    fn from_iter<T: IntoIterator<Item = Condition>>(iter: T) -> Self {
        Filter {
            conditions: iter.into_iter().collect(),
        }
    }
}
