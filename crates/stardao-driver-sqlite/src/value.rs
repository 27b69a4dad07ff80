use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};
use stardao_core::{stmt::Value as CoreValue, Error, Result};

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this SQLite driver value into the core Stardao value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a SQLite value within a row to a Stardao value.
    ///
    /// Columns carry no declared type in a mapping, so values come back in
    /// their SQLite storage class. Entities narrow them when hydrating.
    pub fn from_sql(row: &Row, index: usize) -> Result<Self> {
        let value = row.get_ref(index).map_err(Error::engine_operation_failed)?;

        let core_value = match value {
            ValueRef::Null => CoreValue::Null,
            ValueRef::Integer(value) => CoreValue::I64(value),
            ValueRef::Real(value) => CoreValue::F64(value),
            ValueRef::Text(value) => CoreValue::String(
                std::str::from_utf8(value)
                    .map_err(Error::engine_operation_failed)?
                    .to_string(),
            ),
            ValueRef::Blob(value) => CoreValue::Bytes(value.to_vec()),
        };

        Ok(Value(core_value))
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use stardao_core::stmt::Value;

        match &self.0 {
            Value::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            Value::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            Value::I32(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            Value::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            Value::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Value::Bytes(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&v[..]))),
            Value::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
            value @ (Value::Record(_) | Value::Row(_)) => {
                Err(rusqlite::Error::ToSqlConversionFailure(Box::new(
                    Error::type_conversion(value.clone(), "SQL parameter"),
                )))
            }
        }
    }
}
