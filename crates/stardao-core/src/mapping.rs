//! Mapping definitions: the metadata that drives every generic statement.
//!
//! A [`Namespace`] groups everything known about one mapping name: its SQL
//! fragments (the `tableName` fragment names the physical table) and its
//! result maps. A [`ResultMap`] lists the property ↔ column correspondences
//! of an entity, flagging the identity columns. [`Mappings`] is the registry
//! of all namespaces known to an engine.

mod column_mapping;
pub use column_mapping::ColumnMapping;

mod descriptor;
pub use descriptor::MappingDescriptor;

mod namespace;
pub use namespace::Namespace;

mod result_map;
pub use result_map::ResultMap;

use crate::{Error, Result};
use indexmap::IndexMap;
use serde::Deserialize;

/// Name of the SQL fragment holding a namespace's physical table name.
pub const TABLE_NAME_FRAGMENT: &str = "tableName";

/// Registry of mapping namespaces, keyed by mapping name.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(try_from = "Vec<Namespace>")]
pub struct Mappings {
    namespaces: IndexMap<String, Namespace>,
}

impl Mappings {
    pub fn new() -> Mappings {
        Mappings::default()
    }

    /// Parse mapping definitions from their JSON representation.
    pub fn from_json(src: &str) -> Result<Mappings> {
        serde_json::from_str(src).map_err(|err| {
            Error::invalid_configuration(format!("malformed mapping definitions: {err}"))
        })
    }

    /// Add a namespace. Fails if a namespace with the same name exists.
    pub fn insert(&mut self, namespace: Namespace) -> Result<()> {
        if self.namespaces.contains_key(&namespace.name) {
            return Err(Error::invalid_configuration(format!(
                "mapping `{}` is defined more than once",
                namespace.name
            )));
        }

        self.namespaces.insert(namespace.name.clone(), namespace);
        Ok(())
    }

    pub fn namespace(&self, name: &str) -> Result<&Namespace> {
        self.namespaces
            .get(name)
            .ok_or_else(|| Error::invalid_configuration(format!("no mapping named `{name}`")))
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &Namespace> {
        self.namespaces.values()
    }

    /// Resolve a result map by its qualified id, `mapping + "." + result_map`.
    ///
    /// The mapping name itself may contain periods; the result map id is
    /// everything after the last one.
    pub fn result_map(&self, qualified_id: &str) -> Result<&ResultMap> {
        let Some((namespace, id)) = qualified_id.rsplit_once('.') else {
            return Err(Error::invalid_configuration(format!(
                "result map id `{qualified_id}` is not qualified by a mapping name"
            )));
        };

        self.namespace(namespace)?.find_result_map(id).ok_or_else(|| {
            Error::invalid_configuration(format!("no result map named `{qualified_id}`"))
        })
    }

    /// Resolve the `tableName` fragment of a namespace.
    pub fn table_name_fragment(&self, namespace: &str) -> Result<&str> {
        self.namespace(namespace)?
            .fragment(TABLE_NAME_FRAGMENT)
            .ok_or_else(|| {
                Error::invalid_configuration(format!(
                    "mapping `{namespace}` has no `{TABLE_NAME_FRAGMENT}` fragment"
                ))
            })
    }

    /// Checks that every association points at a namespace with a default
    /// result map and a table name.
    pub fn verify(&self) -> Result<()> {
        for namespace in self.namespaces.values() {
            for result_map in namespace.result_maps() {
                for mapping in &result_map.mappings {
                    let Some(target) = &mapping.association else {
                        continue;
                    };

                    self.result_map(&format!("{target}.{target}"))
                        .and_then(|_| self.table_name_fragment(target))
                        .map_err(|err| {
                            err.context(Error::invalid_configuration(format!(
                                "association `{}.{}` references mapping `{target}`",
                                result_map.id, mapping.property
                            )))
                        })?;
                }
            }
        }

        Ok(())
    }
}

impl TryFrom<Vec<Namespace>> for Mappings {
    type Error = Error;

    fn try_from(namespaces: Vec<Namespace>) -> Result<Mappings> {
        let mut mappings = Mappings::new();
        for namespace in namespaces {
            mappings.insert(namespace)?;
        }
        Ok(mappings)
    }
}
