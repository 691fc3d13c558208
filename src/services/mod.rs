//! Service layer for the budget tracker
//!
//! The service layer holds the business rules on top of the models:
//! validation of new entries and aggregation.

pub mod ledger;

pub use ledger::{
    add_expense, add_expense_at, add_income, add_income_at, balance, classify, monthly_rollup,
    total_expenses, total_income, BalanceStatus,
};
