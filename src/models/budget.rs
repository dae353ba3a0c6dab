//! This file defines the monthly spending limit for a category.

use serde::{Deserialize, Serialize};

use crate::{Error, models::Category};

/// A monthly spending limit for one category.
///
/// The ledger keeps at most one budget per category; setting a budget for a
/// category that already has one overwrites the limit in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// The category the limit applies to.
    pub category: Category,
    /// The monthly limit.
    pub limit: f64,
}

impl Budget {
    /// Create a budget.
    ///
    /// # Errors
    /// Returns [Error::InvalidBudgetLimit] if `limit` is not a positive
    /// finite number.
    pub fn new(category: Category, limit: f64) -> Result<Self, Error> {
        if !limit.is_finite() || limit <= 0.0 {
            return Err(Error::InvalidBudgetLimit(limit));
        }

        Ok(Self { category, limit })
    }
}
