//! The domain types: expense records, their categories, and budgets.

mod budget;
mod category;
mod expense;

pub use budget::Budget;
pub use category::Category;
pub use expense::{Expense, ExpenseBuilder, ExpenseId};
