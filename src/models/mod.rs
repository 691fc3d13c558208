//! Core data models for the budget tracker
//!
//! This module contains the data structures that make up a ledger: money
//! amounts, individual records and the ledger that holds them.

pub mod ledger;
pub mod money;
pub mod record;

pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
pub use record::{Record, DATE_FORMAT, DEFAULT_CATEGORY};
