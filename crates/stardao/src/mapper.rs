use crate::{
    engine::statement::{DELETE, INSERT, SELECT_ALL, SELECT_BY_ID, UPDATE},
    Engine, Entity, EntityWrapper, IdentityPolicy,
};

use stardao_core::{mapping::MappingDescriptor, stmt::Value, Error, Result};

use std::marker::PhantomData;

/// CRUD over one mapping, for any entity type.
///
/// The mapping metadata is resolved once, when the mapper is built. Every
/// operation then wraps the entity (or key) and hands it to the engine under
/// one of the engine-global statement ids, so the same templates serve every
/// entity type.
pub struct GenericMapper<T, K> {
    engine: Engine,
    descriptor: MappingDescriptor,
    _p: PhantomData<fn() -> (T, K)>,
}

impl<T, K> GenericMapper<T, K>
where
    T: Entity + Default,
    K: Into<Value>,
{
    /// Build a mapper for `mapping` using the result map of the same name.
    pub fn new(engine: &Engine, mapping: &str) -> Result<Self> {
        Self::with_result_map(engine, mapping, mapping)
    }

    pub fn with_result_map(engine: &Engine, mapping: &str, result_map: &str) -> Result<Self> {
        let descriptor = engine.descriptor(mapping, result_map)?;

        let declared = T::properties();
        if let Some(column) = descriptor
            .columns
            .iter()
            .find(|column| !declared.contains(&column.property.as_str()))
        {
            return Err(Error::invalid_configuration(format!(
                "result map `{mapping}.{result_map}` maps property `{}` which `{}` does not declare",
                column.property,
                std::any::type_name::<T>()
            )));
        }

        tracing::debug!(
            mapping,
            result_map,
            entity = std::any::type_name::<T>(),
            "mapper ready"
        );

        Ok(GenericMapper {
            engine: engine.clone(),
            descriptor,
            _p: PhantomData,
        })
    }

    pub fn descriptor(&self) -> &MappingDescriptor {
        &self.descriptor
    }

    /// Insert `entity`, filling in identity values generated by the store.
    pub fn insert(&self, entity: &mut T) -> Result<u64> {
        let mut wrapper = EntityWrapper::writable(&self.descriptor, entity)?;
        self.engine.insert(INSERT, &mut wrapper)
    }

    pub fn update(&self, entity: &T) -> Result<u64> {
        let wrapper = EntityWrapper::snapshot(&self.descriptor, entity)?;
        self.check_identity(&wrapper)?;
        self.engine.update(UPDATE, &wrapper)
    }

    pub fn delete(&self, entity: &T) -> Result<u64> {
        let wrapper = EntityWrapper::snapshot(&self.descriptor, entity)?;
        self.check_identity(&wrapper)?;
        self.engine.delete(DELETE, &wrapper)
    }

    /// Fetch the entity with identity `id`, `None` when no row matches.
    pub fn get_by_id(&self, id: K) -> Result<Option<T>> {
        let wrapper = EntityWrapper::for_key(&self.descriptor, id.into())?;
        self.engine
            .select_one(&self.descriptor.mapping_name, SELECT_BY_ID, &wrapper)
    }

    pub fn get_all(&self) -> Result<Vec<T>> {
        let wrapper = EntityWrapper::empty(&self.descriptor);
        self.engine
            .select_list(&self.descriptor.mapping_name, SELECT_ALL, &wrapper)
    }

    fn check_identity(&self, wrapper: &EntityWrapper<'_>) -> Result<()> {
        if self.engine.identity_policy() != IdentityPolicy::Reject {
            return Ok(());
        }

        match wrapper.unset_identity().next() {
            Some(column) => Err(Error::missing_identity(
                &self.descriptor.mapping_name,
                &column.property,
            )),
            None => Ok(()),
        }
    }
}

impl<T, K> core::fmt::Debug for GenericMapper<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GenericMapper")
            .field("entity", &std::any::type_name::<T>())
            .field("descriptor", &self.descriptor)
            .finish()
    }
}
