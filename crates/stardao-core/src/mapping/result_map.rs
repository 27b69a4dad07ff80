use super::ColumnMapping;

use serde::Deserialize;

/// Ordered property ↔ column correspondences of one entity shape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResultMap {
    /// Identifier, unique within its namespace
    pub id: String,

    pub mappings: Vec<ColumnMapping>,
}

impl ResultMap {
    pub fn new(id: impl Into<String>) -> ResultMap {
        ResultMap {
            id: id.into(),
            mappings: vec![],
        }
    }

    /// Add an identity column.
    pub fn id(mut self, property: impl Into<String>, column: impl Into<String>) -> Self {
        self.mappings.push(ColumnMapping::id(property, column));
        self
    }

    /// Add a value column.
    pub fn result(mut self, property: impl Into<String>, column: impl Into<String>) -> Self {
        self.mappings.push(ColumnMapping::result(property, column));
        self
    }

    /// Add an association column referencing another mapping.
    pub fn association(
        mut self,
        property: impl Into<String>,
        column: impl Into<String>,
        mapping: impl Into<String>,
    ) -> Self {
        self.mappings
            .push(ColumnMapping::association(property, column, mapping));
        self
    }
}
