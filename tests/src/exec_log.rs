use crate::logging_driver::DriverOp;
use stardao_core::{
    driver::{Operation, Response},
    stmt::Statement,
    Result,
};
use std::sync::{Arc, Mutex};

/// A wrapper around the operations log that provides a clean API for tests
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DriverOp>>>) -> Self {
        Self { ops }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Count operations whose statement matches the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Statement) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| predicate(&statement(&op.operation)))
            .count()
    }

    pub fn count_inserts(&self) -> usize {
        self.count(|stmt| matches!(stmt, Statement::Insert(_)))
    }

    pub fn count_queries(&self) -> usize {
        self.count(|stmt| matches!(stmt, Statement::Query(_)))
    }

    /// Clear the log
    pub fn clear(&mut self) {
        self.ops.lock().unwrap().clear();
    }

    /// Remove and return the first operation from the log
    /// Returns None if the log is empty
    pub fn pop(&mut self) -> Option<(Statement, Result<Response>)> {
        let mut ops = self.ops.lock().unwrap();
        if ops.is_empty() {
            None
        } else {
            let op = ops.remove(0);
            Some((statement(&op.operation), op.response))
        }
    }

    /// Remove the first operation, panicking if the log is empty
    #[track_caller]
    pub fn pop_statement(&mut self) -> Statement {
        match self.pop() {
            Some((stmt, _)) => stmt,
            None => panic!("expected a logged operation; log is empty"),
        }
    }
}

fn statement(operation: &Operation) -> Statement {
    let Operation::QuerySql(op) = operation;
    op.stmt.clone()
}
