//! Values and the statement tree handed to drivers.
//!
//! Generic statement templates lower an entity wrapper into one of these
//! statements. The tree only knows physical table and column names; property
//! names never reach a driver.

mod delete;
pub use delete::Delete;

mod filter;
pub use filter::{Condition, Filter};

mod insert;
pub use insert::Insert;

mod row;
pub use row::Row;

mod select;
pub use select::Select;

mod statement;
pub use statement::Statement;

mod update;
pub use update::{Assignment, Update};

mod value;
pub use value::Value;

mod value_record;
pub use value_record::ValueRecord;
