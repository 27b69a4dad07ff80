use super::{ResultMap, TABLE_NAME_FRAGMENT};

use indexmap::IndexMap;
use serde::Deserialize;

/// All definitions registered under one mapping name.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Namespace {
    /// The mapping name
    #[serde(rename = "namespace")]
    pub name: String,

    /// Named SQL fragments
    #[serde(default)]
    fragments: IndexMap<String, String>,

    #[serde(default)]
    result_maps: Vec<ResultMap>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Namespace {
        Namespace {
            name: name.into(),
            fragments: IndexMap::new(),
            result_maps: vec![],
        }
    }

    /// Set the `tableName` fragment.
    pub fn table_name(self, table: impl Into<String>) -> Self {
        self.fragment_with(TABLE_NAME_FRAGMENT, table)
    }

    pub fn fragment_with(mut self, id: impl Into<String>, sql: impl Into<String>) -> Self {
        self.fragments.insert(id.into(), sql.into());
        self
    }

    /// Add a result map. A result map with the same id is replaced.
    pub fn result_map(mut self, result_map: ResultMap) -> Self {
        self.result_maps.retain(|existing| existing.id != result_map.id);
        self.result_maps.push(result_map);
        self
    }

    pub fn fragment(&self, id: &str) -> Option<&str> {
        self.fragments.get(id).map(String::as_str)
    }

    pub fn result_maps(&self) -> impl Iterator<Item = &ResultMap> {
        self.result_maps.iter()
    }

    pub(super) fn find_result_map(&self, id: &str) -> Option<&ResultMap> {
        self.result_maps.iter().find(|result_map| result_map.id == id)
    }
}
