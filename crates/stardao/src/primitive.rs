use stardao_core::{stmt::Value, Result};

/// A field type that reads directly from a column value.
///
/// `#[derive(Entity)]` sets every non-association field through this trait.
pub trait Primitive: Sized {
    fn load(value: Value) -> Result<Self>;
}

impl Primitive for bool {
    fn load(value: Value) -> Result<Self> {
        value.to_bool()
    }
}

impl Primitive for i32 {
    fn load(value: Value) -> Result<Self> {
        value.to_i32()
    }
}

impl Primitive for i64 {
    fn load(value: Value) -> Result<Self> {
        value.to_i64()
    }
}

impl Primitive for f64 {
    fn load(value: Value) -> Result<Self> {
        value.to_f64()
    }
}

impl Primitive for String {
    fn load(value: Value) -> Result<Self> {
        value.to_string()
    }
}

impl Primitive for Vec<u8> {
    fn load(value: Value) -> Result<Self> {
        value.to_bytes()
    }
}

impl Primitive for Value {
    fn load(value: Value) -> Result<Self> {
        Ok(value)
    }
}

impl<T: Primitive> Primitive for Option<T> {
    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }
}
