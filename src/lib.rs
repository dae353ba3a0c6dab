//! Spendbook is a single-user expense tracker.
//!
//! This library owns the expense records and per-category monthly budgets,
//! persists them as whole-collection JSON snapshots in a key-value store, and
//! derives the table, chart, and budget-progress views that a front end
//! renders. The companion binary is a small command line front end.

#![warn(missing_docs)]

mod export;
mod ledger;
mod models;
mod stores;
mod views;

pub use export::to_csv;
pub use ledger::Ledger;
pub use models::{Budget, Category, Expense, ExpenseBuilder, ExpenseId};
pub use stores::{BUDGETS_KEY, EXPENSES_KEY, JsonFileStore, KeyValueStore, MemoryStore};
pub use views::{
    BudgetProgress, BudgetStatus, CategoryFilter, ChartKind, ChartSeries, DailyRow, DailySeries,
    DashboardSummary, MonthlyTotal, SortKey, budget_progress, category_totals, chart_series,
    daily_category_series, dashboard_summary, filter_and_sort, monthly_series,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty (or whitespace-only) string was used as an expense name.
    #[error("expense names cannot be empty")]
    EmptyName,

    /// A non-positive or non-finite number was used as an expense amount.
    #[error("{0} is not a valid amount, amounts must be positive and finite")]
    InvalidAmount(f64),

    /// A non-positive or non-finite number was used as a budget limit.
    #[error("{0} is not a valid budget limit, limits must be positive and finite")]
    InvalidBudgetLimit(f64),

    /// A string that is not one of the known category names.
    #[error("\"{0}\" is not a recognised category")]
    UnknownCategory(String),

    /// A string that could not be parsed as a calendar date.
    #[error("could not parse \"{0}\" as a date, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Tried to update an expense that does not exist.
    ///
    /// Deleting a missing expense is deliberately not an error, see
    /// [Ledger::remove](crate::Ledger::remove).
    #[error("there is no expense with the ID {0}")]
    ExpenseNotFound(ExpenseId),

    /// The backing store could not be read from or written to.
    #[error("could not access the backing store: {0}")]
    Storage(String),

    /// A collection could not be serialized as JSON.
    #[error("could not serialize as JSON: {0}")]
    JsonSerialization(String),

    /// The record set could not be written out as CSV text.
    #[error("could not write CSV: {0}")]
    Csv(String),
}
