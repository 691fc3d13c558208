//! Budget Tracker - command-line personal finance ledger
//!
//! Records income and expense entries, keeps them in a single JSON file and
//! reports totals, balance and a per-month net rollup.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory, settings and logging setup
//! - `error`: Custom error types
//! - `models`: Money, records and the ledger
//! - `storage`: JSON file storage layer
//! - `services`: Ledger operations (adding entries, aggregation)
//! - `reports`: Summary report
//! - `display`: Terminal formatting of records
//! - `cli`: Command handlers and the interactive shell
//!
//! # Example
//!
//! ```rust
//! use budget_tracker::models::{Ledger, Money};
//! use budget_tracker::services::{add_expense, add_income, balance};
//!
//! let mut ledger = Ledger::new();
//! add_income(&mut ledger, Money::from_cents(50_000), "salary", "").unwrap();
//! add_expense(&mut ledger, Money::from_cents(12_000), "rent", "").unwrap();
//! assert_eq!(balance(&ledger), Money::from_cents(38_000));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
