mod builder;
pub use builder::Builder;

mod connect;
pub use connect::Connect;

mod hydrate;

pub mod statement;
pub use statement::GenericStatement;

use crate::{Entity, EntityWrapper, IdentityPolicy};

use stardao_core::{
    driver::{Connection, Driver, Response, Rows},
    mapping::{ColumnMapping, MappingDescriptor, Mappings},
    stmt::Statement,
    Error, Result,
};

use indexmap::IndexMap;
use std::sync::{Arc, Mutex, PoisonError};

/// The mapping engine.
///
/// Holds the mapping definitions, the generic statement templates, and one
/// connection to the backing store. Cloning is cheap and clones share the
/// connection.
#[derive(Debug, Clone)]
pub struct Engine {
    inner: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    mappings: Mappings,

    /// Descriptors of association targets, resolved when the engine is built
    associations: IndexMap<String, MappingDescriptor>,

    /// Statement templates by engine-global id
    statements: IndexMap<String, GenericStatement>,

    identity_policy: IdentityPolicy,

    driver: Box<dyn Driver>,

    /// Calls into the store are serialized through this lock
    connection: Mutex<Box<dyn Connection>>,
}

impl Engine {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn mappings(&self) -> &Mappings {
        &self.inner.mappings
    }

    pub fn identity_policy(&self) -> IdentityPolicy {
        self.inner.identity_policy
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.inner.driver
    }

    /// Descriptor used to load associations that reference `mapping`.
    pub fn association(&self, mapping: &str) -> Option<&MappingDescriptor> {
        self.inner.associations.get(mapping)
    }

    /// Column mappings of result map `result_map` in mapping `mapping`.
    pub fn resolve_result_map(&self, mapping: &str, result_map: &str) -> Result<Vec<ColumnMapping>> {
        let qualified = format!("{mapping}.{result_map}");
        Ok(self.inner.mappings.result_map(&qualified)?.mappings.clone())
    }

    /// The table named by the `tableName` fragment of `mapping`.
    pub fn resolve_table_name_fragment(&self, mapping: &str) -> Result<String> {
        Ok(self.inner.mappings.table_name_fragment(mapping)?.to_string())
    }

    /// Resolve both the result map and the table of a mapping.
    pub fn descriptor(&self, mapping: &str, result_map: &str) -> Result<MappingDescriptor> {
        let columns = self.resolve_result_map(mapping, result_map)?;
        let table_name = self.resolve_table_name_fragment(mapping)?;

        tracing::debug!(
            mapping,
            result_map,
            table = %table_name,
            columns = columns.len(),
            "resolved mapping"
        );

        Ok(MappingDescriptor::new(mapping, table_name, columns))
    }

    /// Insert the wrapped entity. Store generated identity values are
    /// assigned back through the wrapper.
    pub fn insert(&self, statement_id: &str, wrapper: &mut EntityWrapper<'_>) -> Result<u64> {
        let template = self.statement(statement_id)?;

        if !template.is_insert() {
            return Err(wrong_kind(statement_id, GenericStatement::Insert));
        }

        let stmt = template.lower(wrapper)?;
        let returning = match &stmt {
            Statement::Insert(insert) => insert.returning.clone(),
            _ => vec![],
        };

        match self.exec(statement_id, stmt)?.rows {
            Rows::Count(count) => Ok(count),
            Rows::Values(records) => {
                let count = records.len() as u64;
                let descriptor = wrapper.descriptor();

                if let Some(record) = records.into_iter().next() {
                    for (column, value) in returning.iter().zip(record) {
                        let Some(mapping) = descriptor.columns.iter().find(|c| c.column == *column)
                        else {
                            continue;
                        };

                        tracing::debug!(
                            mapping = %descriptor.mapping_name,
                            property = %mapping.property,
                            "assigning generated identity"
                        );
                        wrapper.assign(&mapping.property, value)?;
                    }
                }

                Ok(count)
            }
        }
    }

    pub fn update(&self, statement_id: &str, wrapper: &EntityWrapper<'_>) -> Result<u64> {
        self.write(statement_id, GenericStatement::Update, wrapper)
    }

    pub fn delete(&self, statement_id: &str, wrapper: &EntityWrapper<'_>) -> Result<u64> {
        self.write(statement_id, GenericStatement::Delete, wrapper)
    }

    /// Run a select and hydrate every row as `T`.
    pub fn select_list<T: Entity + Default>(
        &self,
        mapping: &str,
        statement_id: &str,
        wrapper: &EntityWrapper<'_>,
    ) -> Result<Vec<T>> {
        let records = self.select(statement_id, GenericStatement::SelectAll, wrapper)?;

        tracing::debug!(mapping, statement = statement_id, rows = records.len(), "selected");

        records
            .into_iter()
            .map(|record| T::load(self.hydrate(wrapper.descriptor(), record, 0)?))
            .collect()
    }

    /// Run a select expected to match at most one row.
    pub fn select_one<T: Entity + Default>(
        &self,
        mapping: &str,
        statement_id: &str,
        wrapper: &EntityWrapper<'_>,
    ) -> Result<Option<T>> {
        let mut records = self.select(statement_id, GenericStatement::SelectById, wrapper)?;

        if records.len() > 1 {
            return Err(Error::too_many_records(format!(
                "`{statement_id}` on mapping `{mapping}` matched {} rows",
                records.len()
            )));
        }

        tracing::debug!(mapping, statement = statement_id, rows = records.len(), "selected");

        match records.pop() {
            Some(record) => Ok(Some(T::load(self.hydrate(wrapper.descriptor(), record, 0)?)?)),
            None => Ok(None),
        }
    }

    /// Run a batch of SQL directly against the store.
    pub fn execute_script(&self, sql: &str) -> Result<()> {
        tracing::debug!(bytes = sql.len(), "executing script");
        self.connection().execute_script(sql)
    }

    fn write(
        &self,
        statement_id: &str,
        expected: GenericStatement,
        wrapper: &EntityWrapper<'_>,
    ) -> Result<u64> {
        let template = self.statement(statement_id)?;

        if template != expected {
            return Err(wrong_kind(statement_id, expected));
        }

        let stmt = template.lower(wrapper)?;
        Ok(self.exec(statement_id, stmt)?.rows.affected())
    }

    fn select(
        &self,
        statement_id: &str,
        expected: GenericStatement,
        wrapper: &EntityWrapper<'_>,
    ) -> Result<Vec<stardao_core::stmt::ValueRecord>> {
        let template = self.statement(statement_id)?;

        if template != expected {
            return Err(wrong_kind(statement_id, expected));
        }

        let stmt = template.lower(wrapper)?;
        self.exec(statement_id, stmt)?.rows.into_values()
    }

    fn statement(&self, statement_id: &str) -> Result<GenericStatement> {
        self.inner
            .statements
            .get(statement_id)
            .copied()
            .ok_or_else(|| {
                Error::invalid_configuration(format!("no statement named `{statement_id}`"))
            })
    }

    fn exec(&self, statement_id: &str, stmt: Statement) -> Result<Response> {
        tracing::debug!(statement = statement_id, table = stmt.table(), "executing");

        self.connection().exec(stmt.into()).inspect_err(|err| {
            tracing::debug!(statement = statement_id, error = %err, "statement failed");
        })
    }

    fn connection(&self) -> std::sync::MutexGuard<'_, Box<dyn Connection>> {
        // A panic while holding the lock leaves the connection itself intact.
        self.inner
            .connection
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

fn wrong_kind(statement_id: &str, expected: GenericStatement) -> Error {
    Error::invalid_configuration(format!(
        "statement `{statement_id}` is not {}",
        expected.describe()
    ))
}
