//! Input handling: reading the flat source snapshots into typed tables.

pub mod csv;

pub use self::csv::{read_records, Datasets};
