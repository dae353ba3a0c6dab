//! This file defines the type `Expense`, the core record of the application.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, models::Category};

/// Alias for expense IDs.
///
/// IDs are assigned by the ledger from the creation timestamp in
/// milliseconds. Uniqueness matters, the exact value does not.
pub type ExpenseId = i64;

/// A single recorded expense.
///
/// To create a new `Expense`, use [Expense::build] and pass the builder to
/// [Ledger::add](crate::Ledger::add), which validates the fields and assigns
/// the ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID of the expense.
    pub id: ExpenseId,
    /// A text label describing the expense.
    pub name: String,
    /// The amount of money spent.
    pub amount: f64,
    /// The category the expense belongs to.
    pub category: Category,
    /// The date the expense was incurred.
    pub date: Date,
}

impl Expense {
    /// Create a new expense.
    ///
    /// Shortcut for [ExpenseBuilder] for discoverability.
    pub fn build(name: impl Into<String>, amount: f64, category: Category) -> ExpenseBuilder {
        ExpenseBuilder {
            name: name.into(),
            amount,
            category,
            date: None,
        }
    }
}

/// A builder for creating [Expense] instances.
///
/// The date is optional and defaults to today's date when the builder is
/// finalized by the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseBuilder {
    /// A text label describing the expense.
    pub name: String,
    /// The amount of money spent. Must be positive and finite.
    pub amount: f64,
    /// The category the expense belongs to.
    pub category: Category,
    /// The date the expense was incurred, or `None` to use today's date.
    pub date: Option<Date>,
}

impl ExpenseBuilder {
    /// Set the date of the expense.
    pub fn date(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }

    /// Build the final [Expense] instance.
    ///
    /// Leading and trailing whitespace is trimmed from the name. If no date
    /// was set, `fallback_date` is used.
    ///
    /// # Errors
    /// Returns [Error::EmptyName] if the trimmed name is empty, and
    /// [Error::InvalidAmount] if the amount is not a positive finite number.
    pub(crate) fn finalize(self, id: ExpenseId, fallback_date: Date) -> Result<Expense, Error> {
        let name = self.name.trim().to_owned();

        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(Error::InvalidAmount(self.amount));
        }

        Ok(Expense {
            id,
            name,
            amount: self.amount,
            category: self.category,
            date: self.date.unwrap_or(fallback_date),
        })
    }
}

#[cfg(test)]
mod expense_tests {
    use time::macros::date;

    use crate::{Error, models::Category};

    use super::Expense;

    #[test]
    fn finalize_trims_name() {
        let expense = Expense::build("  lunch  ", 12.5, Category::Food)
            .date(date!(2024 - 09 - 15))
            .finalize(1, date!(2024 - 09 - 30))
            .unwrap();

        assert_eq!("lunch", expense.name);
        assert_eq!(12.5, expense.amount);
        assert_eq!(date!(2024 - 09 - 15), expense.date);
    }

    #[test]
    fn finalize_uses_fallback_date_when_unset() {
        let expense = Expense::build("lunch", 12.5, Category::Food)
            .finalize(1, date!(2024 - 09 - 30))
            .unwrap();

        assert_eq!(date!(2024 - 09 - 30), expense.date);
    }

    #[test]
    fn finalize_rejects_empty_name() {
        let result = Expense::build("   ", 12.5, Category::Food).finalize(1, date!(2024 - 09 - 30));

        assert_eq!(Err(Error::EmptyName), result);
    }

    #[test]
    fn finalize_rejects_non_positive_amounts() {
        for amount in [0.0, -5.0] {
            let result =
                Expense::build("lunch", amount, Category::Food).finalize(1, date!(2024 - 09 - 30));

            assert_eq!(Err(Error::InvalidAmount(amount)), result);
        }
    }

    #[test]
    fn finalize_rejects_non_finite_amounts() {
        for amount in [f64::NAN, f64::INFINITY] {
            let result =
                Expense::build("lunch", amount, Category::Food).finalize(1, date!(2024 - 09 - 30));

            assert!(result.is_err());
        }
    }

    #[test]
    fn expense_date_serializes_as_calendar_string() {
        let expense = Expense::build("lunch", 12.5, Category::Food)
            .date(date!(2024 - 09 - 05))
            .finalize(1, date!(2024 - 09 - 30))
            .unwrap();

        let json = serde_json::to_string(&expense).unwrap();

        assert!(json.contains("\"2024-09-05\""), "got: {json}");
    }
}
