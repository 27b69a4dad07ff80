mod association;
pub(crate) use association::Association;

mod entity;
pub(crate) use entity::Entity;

mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::{Field, FieldTy};
