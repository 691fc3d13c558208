//! Reports module for the budget tracker
//!
//! Provides the ledger summary: totals, balance and monthly rollup.

pub mod summary;

pub use summary::{MonthRow, SummaryReport};
