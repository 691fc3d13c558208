//! Display formatting for terminal output

pub mod record;

pub use record::{format_ledger, format_record, format_record_list};
