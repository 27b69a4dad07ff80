use stardao_core::{
    stmt::{Row, Value},
    Error, Result,
};

/// A caller-owned record that a [`GenericMapper`](crate::GenericMapper) can
/// persist.
///
/// Entities expose their properties by name. The mapper reads them while
/// wrapping an entity, the engine writes generated identity values back after
/// an insert, and selects build fresh entities with [`Entity::load`].
///
/// An association property reads as the referenced entity's identity value
/// and is set from the referenced entity's [`Value::Row`] (or `Null` when the
/// reference is empty).
///
/// `#[derive(Entity)]` implements the trait for structs with named fields.
pub trait Entity {
    /// Names of every property this entity declares.
    fn properties() -> &'static [&'static str]
    where
        Self: Sized;

    fn get(&self, property: &str) -> Result<Value>;

    fn set(&mut self, property: &str, value: Value) -> Result<()>;

    /// Build an entity from a hydrated row.
    fn load(row: Row) -> Result<Self>
    where
        Self: Sized + Default,
    {
        let mut entity = Self::default();

        for (property, value) in row {
            entity.set(&property, value)?;
        }

        Ok(entity)
    }
}

/// Error for an entity asked about a property it does not declare.
pub fn unknown_property(entity: &str, property: &str) -> Error {
    Error::invalid_configuration(format!("`{entity}` has no property `{property}`"))
}

/// Value stored in an association column: the `key` property of the
/// referenced entity, or `Null` when there is none.
pub fn association_key<E: Entity>(referenced: Option<&E>, key: &str) -> Result<Value> {
    match referenced {
        Some(entity) => entity.get(key),
        None => Ok(Value::Null),
    }
}

/// Build the referenced entity from a hydrated association value.
pub fn load_association<E: Entity + Default>(value: Value) -> Result<Option<E>> {
    value.to_option_row()?.map(E::load).transpose()
}
