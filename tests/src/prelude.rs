//! Common imports for test files
//!
//! This module provides a convenient way to import frequently used items
//! in test files with `use tests::prelude::*;`

pub use crate::models::{City, Membership, User};
pub use crate::{ExecLog, Setup};

pub use std_util::prelude::*;

pub use stardao::{stmt, Entity, Error, GenericMapper, IdentityPolicy, Result, Value};
