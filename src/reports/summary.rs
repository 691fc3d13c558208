//! Summary Report
//!
//! Totals, balance and the per-month net rollup for a ledger.

use std::io::Write;

use crate::error::BudgetResult;
use crate::models::{Ledger, Money};
use crate::services::ledger::{
    balance, classify, monthly_rollup, total_expenses, total_income, BalanceStatus,
};

/// Net activity for one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthRow {
    /// Month key (`YYYY-MM`)
    pub month: String,
    /// Income minus expenses for the month
    pub net: Money,
}

/// Summary of a whole ledger
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub total_income: Money,
    pub total_expenses: Money,
    pub balance: Money,
    /// Months with activity, oldest first
    pub months: Vec<MonthRow>,
    pub status: BalanceStatus,
    pub income_count: usize,
    pub expense_count: usize,
}

impl SummaryReport {
    /// Generate a summary report for a ledger
    pub fn generate(ledger: &Ledger) -> Self {
        let balance = balance(ledger);
        let months = monthly_rollup(ledger)
            .into_iter()
            .map(|(month, net)| MonthRow { month, net })
            .collect();

        Self {
            total_income: total_income(ledger),
            total_expenses: total_expenses(ledger),
            balance,
            months,
            status: classify(balance),
            income_count: ledger.income().len(),
            expense_count: ledger.expenses().len(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("========== BUDGET SUMMARY ==========\n");
        output.push_str(&format!(
            "Total Income:    {}\n",
            self.total_income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Total Expenses:  {}\n",
            self.total_expenses.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Balance:         {}\n",
            self.balance.format_with_symbol(symbol)
        ));
        output.push_str(&"=".repeat(35));
        output.push('\n');

        if !self.months.is_empty() {
            output.push_str("\nBy month (income - expenses):\n");
            for row in &self.months {
                output.push_str(&format!(
                    "  {}: {}\n",
                    row.month,
                    row.net.format_with_symbol(symbol)
                ));
            }
        }

        if let Some(message) = self.status.message() {
            output.push('\n');
            output.push_str(message);
            output.push('\n');
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> BudgetResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["Month", "Net"])?;
        for row in &self.months {
            csv_writer.write_record([row.month.clone(), format_decimal(row.net)])?;
        }

        csv_writer.write_record(["Total Income".to_string(), format_decimal(self.total_income)])?;
        csv_writer.write_record([
            "Total Expenses".to_string(),
            format_decimal(self.total_expenses),
        ])?;
        csv_writer.write_record(["Balance".to_string(), format_decimal(self.balance)])?;

        csv_writer.flush()?;
        Ok(())
    }
}

fn format_decimal(amount: Money) -> String {
    format!("{:.2}", amount.to_decimal())
}
