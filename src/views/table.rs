//! Derives the filtered and sorted expense table.

use crate::models::{Category, Expense};

/// Which categories to keep in a table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Keep every record.
    #[default]
    All,
    /// Keep only records in the given category.
    Only(Category),
}

/// The order to present expenses in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Most recent first.
    #[default]
    DateDescending,
    /// Oldest first.
    DateAscending,
    /// Largest amount first.
    AmountDescending,
    /// Smallest amount first.
    AmountAscending,
}

/// Produce the table view: `records` narrowed by `filter` and ordered by
/// `sort`.
///
/// The sort is stable, so records that compare equal keep their input
/// order. The input slice is never mutated.
pub fn filter_and_sort(records: &[Expense], filter: CategoryFilter, sort: SortKey) -> Vec<Expense> {
    let mut rows: Vec<Expense> = records
        .iter()
        .filter(|expense| match filter {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => expense.category == category,
        })
        .cloned()
        .collect();

    match sort {
        SortKey::DateDescending => rows.sort_by(|a, b| b.date.cmp(&a.date)),
        SortKey::DateAscending => rows.sort_by(|a, b| a.date.cmp(&b.date)),
        SortKey::AmountDescending => rows.sort_by(|a, b| b.amount.total_cmp(&a.amount)),
        SortKey::AmountAscending => rows.sort_by(|a, b| a.amount.total_cmp(&b.amount)),
    }

    rows
}
