use super::{statement::SELECT_BY_ID, Engine, GenericStatement};
use crate::EntityWrapper;

use stardao_core::{
    mapping::{ColumnMapping, MappingDescriptor},
    stmt::{Row, Value, ValueRecord},
    Error, Result,
};

/// Associations nested deeper than this fail instead of recursing further.
const MAX_DEPTH: usize = 16;

impl Engine {
    /// Turn a record returned by the store into a row keyed by property.
    /// Association columns are replaced by the referenced entity's row.
    pub(super) fn hydrate(
        &self,
        descriptor: &MappingDescriptor,
        record: ValueRecord,
        depth: usize,
    ) -> Result<Row> {
        if record.len() != descriptor.columns.len() {
            return Err(Error::invalid_result(format!(
                "mapping `{}` has {} columns but the row has {}",
                descriptor.mapping_name,
                descriptor.columns.len(),
                record.len()
            )));
        }

        let mut row = Row::new();

        for (column, value) in descriptor.columns.iter().zip(record) {
            let value = match &column.association {
                Some(target) if !value.is_null() => {
                    self.load_association(descriptor, column, target, value, depth)?
                }
                _ => value,
            };

            row.insert(column.property.clone(), value);
        }

        Ok(row)
    }

    fn load_association(
        &self,
        descriptor: &MappingDescriptor,
        column: &ColumnMapping,
        target: &str,
        key: Value,
        depth: usize,
    ) -> Result<Value> {
        if depth >= MAX_DEPTH {
            return Err(Error::invalid_result(format!(
                "association `{}.{}` nests deeper than {MAX_DEPTH} levels",
                descriptor.mapping_name, column.property
            )));
        }

        let nested = self.association(target).ok_or_else(|| {
            Error::invalid_configuration(format!("association target `{target}` was not resolved"))
        })?;
        let wrapper = EntityWrapper::for_key(nested, key)?;
        let mut records = self.select(SELECT_BY_ID, GenericStatement::SelectById, &wrapper)?;

        if records.len() > 1 {
            return Err(Error::too_many_records(format!(
                "association `{}.{}` matched {} rows of mapping `{target}`",
                descriptor.mapping_name,
                column.property,
                records.len()
            )));
        }

        tracing::trace!(
            mapping = %descriptor.mapping_name,
            property = %column.property,
            target,
            found = !records.is_empty(),
            "loaded association"
        );

        match records.pop() {
            Some(record) => Ok(Value::Row(self.hydrate(nested, record, depth + 1)?)),
            None => Ok(Value::Null),
        }
    }
}
