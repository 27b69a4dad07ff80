use super::ColumnMapping;

/// Resolved metadata for one mapping: the table and its column mappings.
///
/// Built once when a mapper is constructed and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingDescriptor {
    /// The mapping name the descriptor was resolved from
    pub mapping_name: String,

    /// Physical table name, from the `tableName` fragment
    pub table_name: String,

    /// Column mappings, in result map order
    pub columns: Vec<ColumnMapping>,
}

impl MappingDescriptor {
    pub fn new(
        mapping_name: impl Into<String>,
        table_name: impl Into<String>,
        columns: Vec<ColumnMapping>,
    ) -> MappingDescriptor {
        MappingDescriptor {
            mapping_name: mapping_name.into(),
            table_name: table_name.into(),
            columns,
        }
    }

    /// Column mappings flagged as identity.
    pub fn identity_columns(&self) -> impl Iterator<Item = &ColumnMapping> {
        self.columns.iter().filter(|column| column.identity)
    }

    /// Column mappings not flagged as identity.
    pub fn value_columns(&self) -> impl Iterator<Item = &ColumnMapping> {
        self.columns.iter().filter(|column| !column.identity)
    }

    pub fn has_identity(&self) -> bool {
        self.columns.iter().any(|column| column.identity)
    }

    pub fn column_for(&self, property: &str) -> Option<&ColumnMapping> {
        self.columns.iter().find(|column| column.property == property)
    }
}
