//! Record catalog module.
//!
//! Contains the record type, its condition grading, and the fixed catalog.

mod catalog;
mod record;

pub use catalog::Catalog;
pub use record::{Condition, Record};
