use crate::EntityWrapper;

use stardao_core::{
    mapping::ColumnMapping,
    stmt::{Assignment, Condition, Delete, Filter, Insert, Select, Statement, Update, Value},
    Error, Result,
};

pub const INSERT: &str = "insert";
pub const UPDATE: &str = "update";
pub const DELETE: &str = "delete";
pub const SELECT_ALL: &str = "selectAll";
pub const SELECT_BY_ID: &str = "selectById";

/// A statement template that serves every mapping.
///
/// Templates only know the shape of an [`EntityWrapper`]: the table, the
/// identity and value columns, and the values to bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenericStatement {
    /// Value columns plus identity columns that carry a value. Identity
    /// columns without a value are generated by the store and returned.
    Insert,

    /// Set every value column where every identity column matches.
    Update,

    /// Remove the row whose identity columns match.
    Delete,

    /// Every mapped column of every row.
    SelectAll,

    /// Every mapped column of the row whose identity matches the key.
    SelectById,
}

impl GenericStatement {
    /// Templates registered under the engine-global statement ids.
    pub fn defaults() -> [(&'static str, GenericStatement); 5] {
        [
            (INSERT, GenericStatement::Insert),
            (UPDATE, GenericStatement::Update),
            (DELETE, GenericStatement::Delete),
            (SELECT_ALL, GenericStatement::SelectAll),
            (SELECT_BY_ID, GenericStatement::SelectById),
        ]
    }

    pub fn is_insert(self) -> bool {
        matches!(self, GenericStatement::Insert)
    }

    pub fn is_select(self) -> bool {
        matches!(self, GenericStatement::SelectAll | GenericStatement::SelectById)
    }

    /// What the template does, for error messages.
    pub fn describe(self) -> &'static str {
        match self {
            GenericStatement::Insert => "an insert",
            GenericStatement::Update => "an update",
            GenericStatement::Delete => "a delete",
            GenericStatement::SelectAll => "a select of every row",
            GenericStatement::SelectById => "a select by identity",
        }
    }

    /// Lower the template against `wrapper`.
    pub fn lower(self, wrapper: &EntityWrapper<'_>) -> Result<Statement> {
        let table = wrapper.table_name().to_string();

        let stmt = match self {
            GenericStatement::Insert => {
                let (provided, generated): (Vec<_>, Vec<_>) = wrapper
                    .identity_columns()
                    .partition(|column| !is_unset(wrapper, column));

                let bound = wrapper.value_columns().chain(provided).collect::<Vec<_>>();

                Statement::Insert(Insert {
                    table,
                    columns: bound.iter().map(|column| column.column.clone()).collect(),
                    values: bound.iter().map(|column| bind(wrapper, column)).collect(),
                    returning: generated.iter().map(|column| column.column.clone()).collect(),
                })
            }
            GenericStatement::Update => {
                let assignments = wrapper
                    .value_columns()
                    .map(|column| Assignment {
                        column: column.column.clone(),
                        value: bind(wrapper, column),
                    })
                    .collect::<Vec<_>>();

                if assignments.is_empty() {
                    return Err(Error::invalid_configuration(format!(
                        "mapping `{}` has no value columns to update",
                        wrapper.descriptor().mapping_name
                    )));
                }

                Statement::Update(Update {
                    table,
                    assignments,
                    filter: identity_filter(wrapper)?,
                })
            }
            GenericStatement::Delete => Statement::Delete(Delete {
                table,
                filter: identity_filter(wrapper)?,
            }),
            GenericStatement::SelectAll => Statement::Query(Select {
                table,
                columns: all_columns(wrapper),
                filter: Filter::default(),
            }),
            GenericStatement::SelectById => Statement::Query(Select {
                table,
                columns: all_columns(wrapper),
                filter: identity_filter(wrapper)?,
            }),
        };

        Ok(stmt)
    }
}

fn is_unset(wrapper: &EntityWrapper<'_>, column: &ColumnMapping) -> bool {
    wrapper
        .value(&column.property)
        .map_or(true, |value| value.is_null())
}

fn bind(wrapper: &EntityWrapper<'_>, column: &ColumnMapping) -> Value {
    wrapper.value(&column.property).cloned().unwrap_or_default()
}

fn all_columns(wrapper: &EntityWrapper<'_>) -> Vec<String> {
    wrapper
        .columns()
        .iter()
        .map(|column| column.column.clone())
        .collect()
}

fn identity_filter(wrapper: &EntityWrapper<'_>) -> Result<Filter> {
    let filter = wrapper
        .identity_columns()
        .map(|column| Condition {
            column: column.column.clone(),
            value: bind(wrapper, column),
        })
        .collect::<Filter>();

    if filter.is_empty() {
        return Err(Error::invalid_configuration(format!(
            "mapping `{}` declares no identity column",
            wrapper.descriptor().mapping_name
        )));
    }

    Ok(filter)
}
