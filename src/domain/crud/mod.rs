//! CRUD simulation domain - Operation flags and the record table

mod flags;
mod record;
mod repository;

pub use flags::CrudFlags;
pub use record::Record;
pub use repository::{InMemoryRecordRepository, RecordRepository};
