use super::{Connect, Engine, GenericStatement, Shared};
use crate::{Config, IdentityPolicy};

use stardao_core::{
    driver::Driver,
    mapping::{MappingDescriptor, Mappings, Namespace},
    Result,
};

use indexmap::IndexMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
pub struct Builder {
    /// Namespaces registered so far, checked when the engine is built
    namespaces: Vec<Namespace>,

    /// Statement templates added on top of the generic ones
    statements: IndexMap<String, GenericStatement>,

    config: Config,
}

impl Builder {
    pub fn mapping(&mut self, namespace: Namespace) -> &mut Self {
        self.namespaces.push(namespace);
        self
    }

    pub fn mappings(&mut self, mappings: Mappings) -> &mut Self {
        self.namespaces.extend(mappings.namespaces().cloned());
        self
    }

    pub fn config(&mut self, config: Config) -> &mut Self {
        self.config = config;
        self
    }

    pub fn identity_policy(&mut self, identity_policy: IdentityPolicy) -> &mut Self {
        self.config.identity_policy = identity_policy;
        self
    }

    /// Register `template` under `id`, replacing any template of that id.
    pub fn statement(&mut self, id: impl Into<String>, template: GenericStatement) -> &mut Self {
        self.statements.insert(id.into(), template);
        self
    }

    /// Connect to the store named by the configured URL.
    pub fn open(&mut self) -> Result<Engine> {
        let url = self.config.url.clone();
        self.connect(&url)
    }

    pub fn connect(&mut self, url: &str) -> Result<Engine> {
        self.build(Connect::new(url)?)
    }

    pub fn build(&mut self, driver: impl Driver) -> Result<Engine> {
        let mut mappings = Mappings::new();

        for namespace in self.namespaces.drain(..) {
            mappings.insert(namespace)?;
        }

        mappings.verify()?;
        let associations = resolve_associations(&mappings)?;

        let mut statements = GenericStatement::defaults()
            .into_iter()
            .map(|(id, template)| (id.to_string(), template))
            .collect::<IndexMap<_, _>>();
        statements.extend(self.statements.drain(..));

        let connection = driver.connect()?;

        tracing::debug!(
            url = %driver.url(),
            mappings = mappings.namespaces().count(),
            associations = associations.len(),
            statements = statements.len(),
            identity_policy = ?self.config.identity_policy,
            "engine ready"
        );

        Ok(Engine {
            inner: Arc::new(Shared {
                mappings,
                associations,
                statements,
                identity_policy: self.config.identity_policy,
                driver: Box::new(driver),
                connection: Mutex::new(connection),
            }),
        })
    }
}

/// Descriptors of every mapping some association points at, keyed by
/// mapping name. Each uses the result map named after its mapping.
fn resolve_associations(mappings: &Mappings) -> Result<IndexMap<String, MappingDescriptor>> {
    let mut associations = IndexMap::new();

    let targets = mappings
        .namespaces()
        .flat_map(|namespace| namespace.result_maps())
        .flat_map(|result_map| &result_map.mappings)
        .filter_map(|mapping| mapping.association.as_deref());

    for target in targets {
        if associations.contains_key(target) {
            continue;
        }

        let columns = mappings.result_map(&format!("{target}.{target}"))?.mappings.clone();
        let table_name = mappings.table_name_fragment(target)?;

        associations.insert(
            target.to_string(),
            MappingDescriptor::new(target, table_name, columns),
        );
    }

    Ok(associations)
}
