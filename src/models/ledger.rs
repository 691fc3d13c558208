//! Ledger model
//!
//! Two ordered sequences of records. Income and expenses live in separate
//! containers; the sign of an amount comes from which one holds it.

use serde::{Deserialize, Serialize};

use super::record::Record;

/// The full set of income and expense records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    income: Vec<Record>,
    #[serde(default)]
    expenses: Vec<Record>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Income records in insertion order
    pub fn income(&self) -> &[Record] {
        &self.income
    }

    /// Expense records in insertion order
    pub fn expenses(&self) -> &[Record] {
        &self.expenses
    }

    /// Total number of records across both sequences
    pub fn len(&self) -> usize {
        self.income.len() + self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expenses.is_empty()
    }

    pub(crate) fn push_income(&mut self, record: Record) -> &Record {
        self.income.push(record);
        &self.income[self.income.len() - 1]
    }

    pub(crate) fn push_expense(&mut self, record: Record) -> &Record {
        self.expenses.push(record);
        &self.expenses[self.expenses.len() - 1]
    }
}
