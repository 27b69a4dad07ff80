use super::{Statement, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Table to insert into
    pub table: String,

    /// Columns receiving a value. When empty, the row is inserted with
    /// default values.
    pub columns: Vec<String>,

    /// One value per column, in the same order
    pub values: Vec<Value>,

    /// Columns generated by the store and returned after the insert
    pub returning: Vec<String>,
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}
