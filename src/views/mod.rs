//! Pure functions that derive views from ledger state.
//!
//! Everything here operates on a snapshot (`&[Expense]`, `&[Budget]`) and
//! produces plain data structures for the presentation layer to render.
//! Nothing in this module mutates state or touches the backing store.

mod budget;
mod charts;
mod dashboard;
mod table;

pub use budget::{BudgetProgress, BudgetStatus, budget_progress};
pub use charts::{
    ChartKind, ChartSeries, DailyRow, DailySeries, MonthlyTotal, category_totals, chart_series,
    daily_category_series, monthly_series,
};
pub use dashboard::{DashboardSummary, dashboard_summary};
pub use table::{CategoryFilter, SortKey, filter_and_sort};
