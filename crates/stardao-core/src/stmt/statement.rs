use super::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Delete rows matching a filter
    Delete(Delete),

    /// Insert a single row
    Insert(Insert),

    /// Select rows
    Query(Select),

    /// Update rows matching a filter
    Update(Update),
}

impl Statement {
    /// Name of the table the statement targets.
    pub fn table(&self) -> &str {
        match self {
            Statement::Delete(stmt) => &stmt.table,
            Statement::Insert(stmt) => &stmt.table,
            Statement::Query(stmt) => &stmt.table,
            Statement::Update(stmt) => &stmt.table,
        }
    }

    /// Number of columns in each returned row, or `None` when the statement
    /// only reports an affected-row count.
    pub fn returning_width(&self) -> Option<usize> {
        match self {
            Statement::Query(stmt) => Some(stmt.columns.len()),
            Statement::Insert(stmt) if !stmt.returning.is_empty() => Some(stmt.returning.len()),
            _ => None,
        }
    }

    pub fn is_query(&self) -> bool {
        matches!(self, Statement::Query(_))
    }
}
