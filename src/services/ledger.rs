//! Ledger operations
//!
//! Pure functions over an in-memory [`Ledger`]: adding entries and computing
//! totals and monthly rollups. Nothing here touches the filesystem; callers
//! persist the ledger through [`crate::storage::LedgerStore`] after a change.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Ledger, Money, Record};

/// Whether the ledger as a whole earns more than it spends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStatus {
    /// Expenses exceed income
    OverSpending,
    /// Income exceeds expenses
    NetPositive,
    /// Income and expenses are equal
    Neutral,
}

impl BalanceStatus {
    /// Message shown under the summary, if any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            BalanceStatus::OverSpending => Some("WARNING: You are spending more than you earn."),
            BalanceStatus::NetPositive => Some("Nice, you're net positive this period."),
            BalanceStatus::Neutral => None,
        }
    }
}

fn validate_amount(amount: Money) -> BudgetResult<()> {
    if !amount.is_positive() {
        debug!(amount = %amount, "Rejected non-positive amount");
        return Err(BudgetError::InvalidAmount(format!(
            "{} is not positive; amount must be greater than zero",
            amount
        )));
    }
    if amount.exceeds_entry_limit() {
        debug!(amount = %amount, "Rejected oversized amount");
        return Err(BudgetError::InvalidAmount(format!(
            "{} is larger than the maximum entry of {}",
            amount,
            Money::MAX_ENTRY
        )));
    }
    Ok(())
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Record income dated now
pub fn add_income<'a>(
    ledger: &'a mut Ledger,
    amount: Money,
    category: &str,
    description: &str,
) -> BudgetResult<&'a Record> {
    add_income_at(ledger, amount, category, description, now())
}

/// Record income dated `at`
///
/// Fails with [`BudgetError::InvalidAmount`] and leaves the ledger unchanged
/// unless `amount > 0`.
pub fn add_income_at<'a>(
    ledger: &'a mut Ledger,
    amount: Money,
    category: &str,
    description: &str,
    at: NaiveDateTime,
) -> BudgetResult<&'a Record> {
    validate_amount(amount)?;
    let record = ledger.push_income(Record::new(amount, category, description, at));
    info!(amount = %record.amount(), category = record.category(), "Added income");
    Ok(record)
}

/// Record an expense dated now
pub fn add_expense<'a>(
    ledger: &'a mut Ledger,
    amount: Money,
    category: &str,
    description: &str,
) -> BudgetResult<&'a Record> {
    add_expense_at(ledger, amount, category, description, now())
}

/// Record an expense dated `at`
///
/// The amount is stored positive; it is subtracted only when aggregating.
pub fn add_expense_at<'a>(
    ledger: &'a mut Ledger,
    amount: Money,
    category: &str,
    description: &str,
    at: NaiveDateTime,
) -> BudgetResult<&'a Record> {
    validate_amount(amount)?;
    let record = ledger.push_expense(Record::new(amount, category, description, at));
    info!(amount = %record.amount(), category = record.category(), "Added expense");
    Ok(record)
}

pub fn total_income(ledger: &Ledger) -> Money {
    ledger.income().iter().map(Record::amount).sum()
}

pub fn total_expenses(ledger: &Ledger) -> Money {
    ledger.expenses().iter().map(Record::amount).sum()
}

/// Total income minus total expenses; may be negative
pub fn balance(ledger: &Ledger) -> Money {
    total_income(ledger) - total_expenses(ledger)
}

/// Net amount per `YYYY-MM` month, ascending by month
///
/// Only months with at least one record appear.
pub fn monthly_rollup(ledger: &Ledger) -> BTreeMap<String, Money> {
    let mut months: BTreeMap<String, Money> = BTreeMap::new();

    for record in ledger.income() {
        *months.entry(record.month().to_string()).or_default() += record.amount();
    }
    for record in ledger.expenses() {
        *months.entry(record.month().to_string()).or_default() -= record.amount();
    }

    months
}

pub fn classify(balance: Money) -> BalanceStatus {
    if balance.is_negative() {
        BalanceStatus::OverSpending
    } else if balance.is_positive() {
        BalanceStatus::NetPositive
    } else {
        BalanceStatus::Neutral
    }
}
