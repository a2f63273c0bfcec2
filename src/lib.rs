//! Generates a synthetic student record and inserts it into a MySQL table.

pub mod config;
pub use config::Config;

pub mod inserter;
pub use inserter::RecordInserter;

pub mod record;
pub use record::Record;

pub mod result;
pub use result::{DbResult, InsertError};
