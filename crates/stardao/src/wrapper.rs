use crate::Entity;

use stardao_core::{
    mapping::{ColumnMapping, MappingDescriptor},
    stmt::Value,
    Error, Result,
};

use indexmap::IndexMap;

/// One entity, or a bare key, viewed through a mapping descriptor.
///
/// Generic statement templates introspect the wrapper for the table name, the
/// identity and value columns, and the property values to bind. A wrapper is
/// built for a single call and never mutates the descriptor.
pub struct EntityWrapper<'a> {
    descriptor: &'a MappingDescriptor,

    /// Present only for writable wrappers
    entity: Option<&'a mut dyn Entity>,

    /// Property values, ordered as the descriptor's columns
    values: IndexMap<String, Value>,
}

impl<'a> EntityWrapper<'a> {
    /// Snapshot the mapped properties of `entity`.
    pub fn snapshot(descriptor: &'a MappingDescriptor, entity: &dyn Entity) -> Result<Self> {
        Ok(EntityWrapper {
            descriptor,
            entity: None,
            values: read_values(descriptor, entity)?,
        })
    }

    /// Snapshot `entity` and keep it writable so generated values can be
    /// assigned back.
    pub fn writable(descriptor: &'a MappingDescriptor, entity: &'a mut dyn Entity) -> Result<Self> {
        let values = read_values(descriptor, entity)?;

        Ok(EntityWrapper {
            descriptor,
            entity: Some(entity),
            values,
        })
    }

    /// Wrap a bare key. A single identity column takes the key as is; a
    /// composite identity takes a [`Value::Record`] bound positionally.
    pub fn for_key(descriptor: &'a MappingDescriptor, key: Value) -> Result<Self> {
        let identity = descriptor.identity_columns().collect::<Vec<_>>();

        let values = match (&identity[..], key) {
            ([], _) => return Err(no_identity(descriptor)),
            ([column], Value::Record(record)) if record.len() == 1 => {
                let value = record.into_iter().next().unwrap_or_default();
                IndexMap::from([(column.property.clone(), value)])
            }
            ([_], key @ Value::Record(_)) => return Err(key_arity(descriptor, key, 1)),
            ([column], key) => IndexMap::from([(column.property.clone(), key)]),
            (columns, Value::Record(record)) if record.len() == columns.len() => columns
                .iter()
                .map(|column| column.property.clone())
                .zip(record)
                .collect(),
            (columns, key) => return Err(key_arity(descriptor, key, columns.len())),
        };

        Ok(EntityWrapper {
            descriptor,
            entity: None,
            values,
        })
    }

    /// Wrap no entity at all, for templates that bind nothing.
    pub fn empty(descriptor: &'a MappingDescriptor) -> Self {
        EntityWrapper {
            descriptor,
            entity: None,
            values: IndexMap::new(),
        }
    }

    pub fn descriptor(&self) -> &'a MappingDescriptor {
        self.descriptor
    }

    pub fn table_name(&self) -> &'a str {
        &self.descriptor.table_name
    }

    pub fn columns(&self) -> &'a [ColumnMapping] {
        &self.descriptor.columns
    }

    pub fn identity_columns(&self) -> impl Iterator<Item = &'a ColumnMapping> {
        self.descriptor.identity_columns()
    }

    pub fn value_columns(&self) -> impl Iterator<Item = &'a ColumnMapping> {
        self.descriptor.value_columns()
    }

    /// The snapshot value of `property`, `None` when the wrapper holds none.
    pub fn value(&self, property: &str) -> Option<&Value> {
        self.values.get(property)
    }

    pub fn is_writable(&self) -> bool {
        self.entity.is_some()
    }

    /// Identity properties whose snapshot value is `Null` or absent.
    pub fn unset_identity(&self) -> impl Iterator<Item = &'a ColumnMapping> + '_ {
        self.identity_columns()
            .filter(|column| self.value(&column.property).map_or(true, |value| value.is_null()))
    }

    /// Record a store generated value for `property`, writing it through to
    /// the entity.
    pub fn assign(&mut self, property: &str, value: Value) -> Result<()> {
        let Some(entity) = self.entity.as_deref_mut() else {
            return Err(Error::invalid_configuration(format!(
                "cannot assign `{property}` on mapping `{}`: wrapper is read-only",
                self.descriptor.mapping_name
            )));
        };

        entity.set(property, value.clone())?;
        self.values.insert(property.to_string(), value);
        Ok(())
    }
}

impl core::fmt::Debug for EntityWrapper<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EntityWrapper")
            .field("mapping", &self.descriptor.mapping_name)
            .field("writable", &self.is_writable())
            .field("values", &self.values)
            .finish()
    }
}

fn read_values(descriptor: &MappingDescriptor, entity: &dyn Entity) -> Result<IndexMap<String, Value>> {
    descriptor
        .columns
        .iter()
        .map(|column| {
            let value = entity.get(&column.property).map_err(|err| {
                err.context(Error::invalid_configuration(format!(
                    "reading property `{}` of mapping `{}`",
                    column.property, descriptor.mapping_name
                )))
            })?;
            Ok((column.property.clone(), value))
        })
        .collect()
}

fn no_identity(descriptor: &MappingDescriptor) -> Error {
    Error::invalid_configuration(format!(
        "mapping `{}` declares no identity column",
        descriptor.mapping_name
    ))
}

fn key_arity(descriptor: &MappingDescriptor, key: Value, expected: usize) -> Error {
    let actual = key.as_record().map_or(1, |record| record.len());
    Error::invalid_configuration(format!(
        "key for mapping `{}` has {actual} values but the mapping has {expected} identity columns",
        descriptor.mapping_name
    ))
}
