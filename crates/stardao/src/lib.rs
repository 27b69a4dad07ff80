mod config;
pub use config::{Config, IdentityPolicy};

pub mod engine;
pub use engine::Engine;

mod entity;
pub use entity::{association_key, load_association, unknown_property, Entity};

mod mapper;
pub use mapper::GenericMapper;

mod primitive;
pub use primitive::Primitive;

mod wrapper;
pub use wrapper::EntityWrapper;

pub use stardao_core::{
    bail, driver, err,
    mapping::{self, ColumnMapping, MappingDescriptor, Mappings, Namespace, ResultMap},
    stmt::{self, Row, Value},
    Error, Result,
};

pub use stardao_macros::Entity;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        association_key, load_association, unknown_property, Entity, Primitive, Result, Value,
    };
    pub use std::{boxed::Box, clone::Clone, option::Option, result::Result::Err, result::Result::Ok};
}
