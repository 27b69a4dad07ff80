use crate::{stmt::ValueRecord, Error, Result};

#[derive(Debug, Clone)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug, Clone)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Operation result, as a materialized list of rows
    Values(Vec<ValueRecord>),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn values(values: Vec<ValueRecord>) -> Self {
        Self {
            rows: Rows::Values(values),
        }
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_values(&self) -> bool {
        matches!(self, Self::Values(_))
    }

    /// Number of rows affected or returned.
    pub fn affected(&self) -> u64 {
        match self {
            Rows::Count(count) => *count,
            Rows::Values(values) => values.len() as u64,
        }
    }

    pub fn into_values(self) -> Result<Vec<ValueRecord>> {
        match self {
            Rows::Values(values) => Ok(values),
            Rows::Count(count) => Err(Error::invalid_result(format!(
                "expected rows, got a count of {count}"
            ))),
        }
    }
}
