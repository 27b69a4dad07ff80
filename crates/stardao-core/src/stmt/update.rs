use super::{Filter, Statement, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// Table to update
    pub table: String,

    /// Column assignments
    pub assignments: Vec<Assignment>,

    /// Which rows to update
    pub filter: Filter,
}

/// `column = value` in a `SET` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: Value,
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}
