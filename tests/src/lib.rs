mod exec_log;
pub use exec_log::ExecLog;

mod logging_driver;
pub use logging_driver::{DriverOp, LoggingDriver};


pub mod prelude;

mod setup;
pub use setup::{Setup, SCHEMA};

pub use std_util::*;
