use serde::Deserialize;

/// Correspondence between one entity property and one table column.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnMapping {
    /// Entity property name
    pub property: String,

    /// Physical column name
    pub column: String,

    /// True if the column is part of the identity (primary key)
    #[serde(default)]
    pub identity: bool,

    /// For associations, the mapping name of the referenced entity. The
    /// column stores the referenced entity's identity; reads hydrate the
    /// property through that mapping's `selectById`.
    #[serde(default)]
    pub association: Option<String>,
}

impl ColumnMapping {
    pub fn id(property: impl Into<String>, column: impl Into<String>) -> ColumnMapping {
        ColumnMapping {
            property: property.into(),
            column: column.into(),
            identity: true,
            association: None,
        }
    }

    pub fn result(property: impl Into<String>, column: impl Into<String>) -> ColumnMapping {
        ColumnMapping {
            property: property.into(),
            column: column.into(),
            identity: false,
            association: None,
        }
    }

    pub fn association(
        property: impl Into<String>,
        column: impl Into<String>,
        mapping: impl Into<String>,
    ) -> ColumnMapping {
        ColumnMapping {
            property: property.into(),
            column: column.into(),
            identity: false,
            association: Some(mapping.into()),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.identity
    }

    pub fn is_association(&self) -> bool {
        self.association.is_some()
    }
}
