use stardao_core::{
    driver::{Connection, Driver, Operation, Response},
    Result,
};
use std::{
    borrow::Cow,
    sync::{Arc, Mutex},
};

#[derive(Debug)]
pub struct LoggingDriver {
    inner: Box<dyn Driver>,

    /// Log of all operations executed through this driver
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl LoggingDriver {
    pub fn new(driver: Box<dyn Driver>) -> Self {
        Self {
            inner: driver,
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<DriverOp>>> {
        self.ops_log.clone()
    }
}

impl Driver for LoggingDriver {
    fn url(&self) -> Cow<'_, str> {
        self.inner.url()
    }

    fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(LoggingConnection {
            inner: self.inner.connect()?,
            ops_log: self.ops_log_handle(),
        }))
    }
}

/// One operation sent to the store, with what the store answered.
#[derive(Debug)]
pub struct DriverOp {
    pub operation: Operation,
    pub response: Result<Response>,
}

/// A connection wrapper that logs all operations for testing purposes
#[derive(Debug)]
pub struct LoggingConnection {
    /// The underlying connection that actually executes operations
    inner: Box<dyn Connection>,

    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl Connection for LoggingConnection {
    fn exec(&mut self, operation: Operation) -> Result<Response> {
        let operation_clone = operation.clone();

        let response = self.inner.exec(operation);

        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(DriverOp {
                operation: operation_clone,
                response: response.clone(),
            });

        response
    }

    fn execute_script(&mut self, sql: &str) -> Result<()> {
        self.inner.execute_script(sql)
    }
}
