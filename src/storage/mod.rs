//! Storage layer for the budget tracker
//!
//! Provides JSON file storage with atomic whole-file writes.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_json, write_json_atomic};
pub use ledger::{LedgerStore, LoadOutcome};
