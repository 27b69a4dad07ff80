use super::{Filter, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// Table to read from
    pub table: String,

    /// Columns to return, in order
    pub columns: Vec<String>,

    /// Which rows to return. An empty filter returns every row.
    pub filter: Filter,
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Query(value)
    }
}
