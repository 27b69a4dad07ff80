pub mod serializer;
pub use serializer::{Params, Placeholder, Serializer};

pub use stardao_core::stmt::Statement;
