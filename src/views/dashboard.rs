//! Derives the dashboard summary: overall total and top spending category.

use time::OffsetDateTime;

use crate::{
    models::{Category, Expense},
    views::category_totals,
};

/// An overview of the whole record set.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    /// The sum of every amount, 0.0 when there are no records.
    pub total: f64,
    /// The category with the largest total. On exactly equal totals the
    /// first-encountered category wins; `None` when there are no records.
    pub top_category: Option<Category>,
    /// When this summary was computed. Not persisted.
    pub last_computed_at: OffsetDateTime,
}

/// Summarize `records` for the dashboard.
pub fn dashboard_summary(records: &[Expense]) -> DashboardSummary {
    let total = records.iter().map(|expense| expense.amount).sum();

    let mut top_category = None;
    let mut top_amount = 0.0;

    // Strict comparison, so the first category to reach the maximum keeps it.
    for (category, subtotal) in category_totals(records) {
        if subtotal > top_amount {
            top_amount = subtotal;
            top_category = Some(category);
        }
    }

    DashboardSummary {
        total,
        top_category,
        last_computed_at: OffsetDateTime::now_local()
            .unwrap_or_else(|_| OffsetDateTime::now_utc()),
    }
}
