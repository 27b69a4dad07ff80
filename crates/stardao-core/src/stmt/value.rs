use super::{Row, ValueRecord};
use crate::{Error, Result};

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Raw bytes
    Bytes(Vec<u8>),

    /// 64-bit floating point number
    F64(f64),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Null value
    #[default]
    Null,

    /// Positional record, used for composite keys
    Record(ValueRecord),

    /// A hydrated association, keyed by property name
    Row(Row),

    /// String value
    String(String),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    pub fn record_from_vec(fields: Vec<Self>) -> Self {
        ValueRecord::from_vec(fields).into()
    }

    /// Name of the variant, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::Bytes(_) => "Bytes",
            Self::F64(_) => "F64",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::Null => "Null",
            Self::Record(_) => "Record",
            Self::Row(_) => "Row",
            Self::String(_) => "String",
        }
    }

    pub fn to_bool(self) -> Result<bool> {
        match self {
            Self::Bool(v) => Ok(v),
            // SQLite has no boolean storage class
            Self::I32(v) => Ok(v != 0),
            Self::I64(v) => Ok(v != 0),
            _ => Err(Error::type_conversion(self, "bool")),
        }
    }

    pub fn to_i32(self) -> Result<i32> {
        match self {
            Self::I32(v) => Ok(v),
            Self::I64(v) => i32::try_from(v).map_err(|_| Error::type_conversion(self, "i32")),
            _ => Err(Error::type_conversion(self, "i32")),
        }
    }

    pub fn to_i64(self) -> Result<i64> {
        match self {
            Self::I32(v) => Ok(v.into()),
            Self::I64(v) => Ok(v),
            _ => Err(Error::type_conversion(self, "i64")),
        }
    }

    pub fn to_option_i64(self) -> Result<Option<i64>> {
        match self {
            Self::Null => Ok(None),
            value => value.to_i64().map(Some),
        }
    }

    pub fn to_f64(self) -> Result<f64> {
        match self {
            Self::F64(v) => Ok(v),
            Self::I32(v) => Ok(v.into()),
            _ => Err(Error::type_conversion(self, "f64")),
        }
    }

    pub fn to_string(self) -> Result<String> {
        match self {
            Self::String(v) => Ok(v),
            _ => Err(Error::type_conversion(self, "String")),
        }
    }

    pub fn to_option_string(self) -> Result<Option<String>> {
        match self {
            Self::Null => Ok(None),
            value => value.to_string().map(Some),
        }
    }

    pub fn to_bytes(self) -> Result<Vec<u8>> {
        match self {
            Self::Bytes(v) => Ok(v),
            _ => Err(Error::type_conversion(self, "Vec<u8>")),
        }
    }

    pub fn to_record(self) -> Result<ValueRecord> {
        match self {
            Self::Record(record) => Ok(record),
            _ => Err(Error::type_conversion(self, "ValueRecord")),
        }
    }

    pub fn to_option_row(self) -> Result<Option<Row>> {
        match self {
            Self::Null => Ok(None),
            Self::Row(row) => Ok(Some(row)),
            _ => Err(Error::type_conversion(self, "Row")),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(&**v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I32(v) => Some(v.into()),
            Self::I64(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&ValueRecord> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I32(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Self {
        Self::Bytes(src)
    }
}

impl From<ValueRecord> for Value {
    fn from(src: ValueRecord) -> Self {
        Self::Record(src)
    }
}

impl From<Row> for Value {
    fn from(src: Row) -> Self {
        Self::Row(src)
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Value::from(value),
            None => Value::Null,
        }
    }
}

macro_rules! impl_from_tuple {
    ( $( $n:tt : $t:ident ),+ ) => {
        impl< $( $t ),+ > From<( $( $t, )+ )> for Value
        where
            $( Value: From<$t>, )+
        {
            fn from(src: ( $( $t, )+ )) -> Self {
                Value::record_from_vec(vec![ $( Value::from(src.$n), )+ ])
            }
        }
    };
}

impl_from_tuple!(0: T0, 1: T1);
impl_from_tuple!(0: T0, 1: T1, 2: T2);
impl_from_tuple!(0: T0, 1: T1, 2: T2, 3: T3);
