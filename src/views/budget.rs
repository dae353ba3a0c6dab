//! Derives per-category budget progress for a reference month.

use time::Month;

use crate::models::{Budget, Category, Expense};

/// Qualitative budget health derived from the spend percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// Less than 70% of the limit spent.
    Safe,
    /// At least 70% of the limit spent.
    Warning,
    /// At least 90% of the limit spent.
    Danger,
}

impl BudgetStatus {
    /// The status for a spend `percentage`. Boundaries are inclusive: 90 is
    /// already [BudgetStatus::Danger] and 70 is already
    /// [BudgetStatus::Warning].
    fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            BudgetStatus::Danger
        } else if percentage >= 70.0 {
            BudgetStatus::Warning
        } else {
            BudgetStatus::Safe
        }
    }
}

/// Progress against one category budget in the reference month.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetProgress {
    /// The budgeted category.
    pub category: Category,
    /// The sum of this category's amounts within the reference month.
    pub spent: f64,
    /// The monthly limit.
    pub limit: f64,
    /// `spent` as a percentage of `limit`, capped at 100.
    pub percentage: f64,
    /// The qualitative health label for `percentage`.
    pub status: BudgetStatus,
}

/// Compute progress for every budget against the records dated in
/// `year`/`month`.
///
/// Budgets are reported in their definition order. A non-positive limit
/// cannot be created through the ledger, but stored data is not trusted
/// that far: it reports as 100% (capped) instead of dividing.
pub fn budget_progress(
    records: &[Expense],
    budgets: &[Budget],
    year: i32,
    month: Month,
) -> Vec<BudgetProgress> {
    budgets
        .iter()
        .map(|budget| {
            let spent: f64 = records
                .iter()
                .filter(|expense| {
                    expense.category == budget.category
                        && expense.date.year() == year
                        && expense.date.month() == month
                })
                .map(|expense| expense.amount)
                .sum();

            let percentage = if budget.limit <= 0.0 {
                100.0
            } else {
                (spent / budget.limit * 100.0).min(100.0)
            };

            BudgetProgress {
                category: budget.category,
                spent,
                limit: budget.limit,
                percentage,
                status: BudgetStatus::from_percentage(percentage),
            }
        })
        .collect()
}

#[cfg(test)]
mod budget_progress_tests {
    use time::{Month, macros::date};

    use crate::models::{Budget, Category, Expense, ExpenseId};

    use super::{BudgetStatus, budget_progress};

    fn expense(id: ExpenseId, amount: f64, category: Category, date: time::Date) -> Expense {
        Expense {
            id,
            name: format!("expense {id}"),
            amount,
            category,
            date,
        }
    }

    fn food_budget(limit: f64) -> Vec<Budget> {
        vec![Budget {
            category: Category::Food,
            limit,
        }]
    }

    #[test]
    fn spending_95_percent_is_danger() {
        let records = vec![expense(1, 95.0, Category::Food, date!(2024 - 09 - 10))];

        let progress = budget_progress(&records, &food_budget(100.0), 2024, Month::September);

        assert_eq!(95.0, progress[0].percentage);
        assert_eq!(BudgetStatus::Danger, progress[0].status);
    }

    #[test]
    fn overspending_caps_percentage_at_100() {
        let records = vec![expense(1, 150.0, Category::Food, date!(2024 - 09 - 10))];

        let progress = budget_progress(&records, &food_budget(100.0), 2024, Month::September);

        assert_eq!(150.0, progress[0].spent);
        assert_eq!(100.0, progress[0].percentage);
        assert_eq!(BudgetStatus::Danger, progress[0].status);
    }

    #[test]
    fn threshold_boundaries_are_inclusive() {
        let warning = vec![expense(1, 70.0, Category::Food, date!(2024 - 09 - 10))];
        let danger = vec![expense(1, 90.0, Category::Food, date!(2024 - 09 - 10))];

        let progress = budget_progress(&warning, &food_budget(100.0), 2024, Month::September);
        assert_eq!(BudgetStatus::Warning, progress[0].status);

        let progress = budget_progress(&danger, &food_budget(100.0), 2024, Month::September);
        assert_eq!(BudgetStatus::Danger, progress[0].status);
    }

    #[test]
    fn below_warning_threshold_is_safe() {
        let records = vec![expense(1, 69.9, Category::Food, date!(2024 - 09 - 10))];

        let progress = budget_progress(&records, &food_budget(100.0), 2024, Month::September);

        assert_eq!(BudgetStatus::Safe, progress[0].status);
    }

    #[test]
    fn records_outside_the_reference_month_are_ignored() {
        let records = vec![
            expense(1, 50.0, Category::Food, date!(2024 - 08 - 31)),
            expense(2, 50.0, Category::Food, date!(2023 - 09 - 10)),
            expense(3, 10.0, Category::Food, date!(2024 - 09 - 10)),
        ];

        let progress = budget_progress(&records, &food_budget(100.0), 2024, Month::September);

        assert_eq!(10.0, progress[0].spent);
    }

    #[test]
    fn category_with_no_records_spends_zero() {
        let progress = budget_progress(&[], &food_budget(100.0), 2024, Month::September);

        assert_eq!(0.0, progress[0].spent);
        assert_eq!(0.0, progress[0].percentage);
        assert_eq!(BudgetStatus::Safe, progress[0].status);
    }

    #[test]
    fn zero_limit_reports_capped_percentage_instead_of_dividing() {
        let records = vec![expense(1, 10.0, Category::Food, date!(2024 - 09 - 10))];
        let budgets = vec![Budget {
            category: Category::Food,
            limit: 0.0,
        }];

        let progress = budget_progress(&records, &budgets, 2024, Month::September);

        assert_eq!(100.0, progress[0].percentage);
        assert_eq!(BudgetStatus::Danger, progress[0].status);
    }

    #[test]
    fn budgets_are_reported_in_definition_order() {
        let budgets = vec![
            Budget {
                category: Category::Housing,
                limit: 1200.0,
            },
            Budget {
                category: Category::Food,
                limit: 400.0,
            },
        ];

        let progress = budget_progress(&[], &budgets, 2024, Month::September);

        let categories: Vec<_> = progress.iter().map(|entry| entry.category).collect();
        assert_eq!(vec![Category::Housing, Category::Food], categories);
    }
}
