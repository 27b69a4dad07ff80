mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::Result;

use std::{borrow::Cow, fmt::Debug};

/// A backing store the mapping engine can open connections to.
pub trait Driver: Debug + Send + Sync + 'static {
    /// Connection URL describing the store.
    fn url(&self) -> Cow<'_, str>;

    /// Open a new connection.
    fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// An open connection to a backing store.
///
/// Every call blocks until the store responds.
pub trait Connection: Debug + Send + 'static {
    /// Execute a database operation
    fn exec(&mut self, op: Operation) -> Result<Response>;

    /// Execute a batch of raw SQL statements, such as a schema script.
    fn execute_script(&mut self, sql: &str) -> Result<()>;
}
