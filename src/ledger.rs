//! The ledger owns the canonical expense records and category budgets.
//!
//! Every mutation validates its input, applies the change, and immediately
//! writes both collections back to the key-value store as whole-snapshot
//! JSON. Loading is lenient: missing or unreadable snapshots become empty
//! collections rather than errors.

use time::{Date, OffsetDateTime};

use crate::{
    Error,
    models::{Budget, Category, Expense, ExpenseBuilder, ExpenseId},
    stores::{BUDGETS_KEY, EXPENSES_KEY, KeyValueStore},
};

/// The canonical owner of the expense records and the category budgets.
///
/// The view functions take snapshots of this state ([Ledger::expenses] and
/// [Ledger::budgets]) and never mutate it.
#[derive(Debug)]
pub struct Ledger<S> {
    expenses: Vec<Expense>,
    budgets: Vec<Budget>,
    last_id: ExpenseId,
    store: S,
}

impl<S: KeyValueStore> Ledger<S> {
    /// Load a ledger from `store`.
    ///
    /// A missing or unparseable snapshot yields the corresponding empty
    /// collection. This never fails: corrupt state is logged and discarded
    /// so that startup always succeeds.
    pub fn load(store: S) -> Self {
        let expenses = read_collection::<Expense>(&store, EXPENSES_KEY);
        let budgets = read_collection::<Budget>(&store, BUDGETS_KEY);

        let last_id = expenses.iter().map(|expense| expense.id).max().unwrap_or(0);

        Self {
            expenses,
            budgets,
            last_id,
            store,
        }
    }

    /// The full record set, in insertion order.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// The budgets, in the order their categories were first budgeted.
    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    /// Get an expense by its ID.
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    /// Create an expense from `builder`, append it to the record set, and
    /// persist.
    ///
    /// A builder without a date gets today's date. Returns the created
    /// record with its assigned ID.
    ///
    /// # Errors
    /// Returns [Error::EmptyName] or [Error::InvalidAmount] if validation
    /// fails (the record set is left unchanged), or [Error::Storage] if the
    /// snapshot could not be written.
    pub fn add(&mut self, builder: ExpenseBuilder) -> Result<Expense, Error> {
        let expense = builder.finalize(self.next_id(), today())?;

        self.expenses.push(expense.clone());
        self.save()?;

        tracing::debug!("added expense {}", expense.id);

        Ok(expense)
    }

    /// Replace every field of the expense with `id` except the ID itself,
    /// then persist.
    ///
    /// # Errors
    /// Returns [Error::ExpenseNotFound] if no expense has `id`, the same
    /// validation errors as [Ledger::add], or [Error::Storage] if the
    /// snapshot could not be written.
    pub fn update(&mut self, id: ExpenseId, builder: ExpenseBuilder) -> Result<Expense, Error> {
        let position = self
            .expenses
            .iter()
            .position(|expense| expense.id == id)
            .ok_or(Error::ExpenseNotFound(id))?;

        let updated = builder.finalize(id, today())?;
        self.expenses[position] = updated.clone();
        self.save()?;

        Ok(updated)
    }

    /// Remove the expense with `id` and persist.
    ///
    /// Removing an ID that is not in the record set is a successful no-op,
    /// so deletes are idempotent.
    ///
    /// # Errors
    /// Returns [Error::Storage] if the snapshot could not be written.
    pub fn remove(&mut self, id: ExpenseId) -> Result<(), Error> {
        let count_before = self.expenses.len();
        self.expenses.retain(|expense| expense.id != id);

        if self.expenses.len() == count_before {
            return Ok(());
        }

        self.save()
    }

    /// Set the monthly budget for `category` and persist.
    ///
    /// A category that already has a budget keeps its position in the
    /// budget list and only the limit changes (last write wins).
    ///
    /// # Errors
    /// Returns [Error::InvalidBudgetLimit] unless `limit` is a positive
    /// finite number, or [Error::Storage] if the snapshot could not be
    /// written.
    pub fn set_budget(&mut self, category: Category, limit: f64) -> Result<(), Error> {
        let budget = Budget::new(category, limit)?;

        match self
            .budgets
            .iter_mut()
            .find(|existing| existing.category == category)
        {
            Some(existing) => existing.limit = budget.limit,
            None => self.budgets.push(budget),
        }

        self.save()
    }

    /// Empty both collections and remove their keys from the backing store.
    ///
    /// Missing keys load as empty collections, so this persists the empty
    /// state.
    ///
    /// # Errors
    /// Returns [Error::Storage] if a key could not be removed.
    pub fn clear(&mut self) -> Result<(), Error> {
        self.expenses.clear();
        self.budgets.clear();
        self.last_id = 0;

        self.store.remove(EXPENSES_KEY)?;
        self.store.remove(BUDGETS_KEY)
    }

    /// Consume the ledger and hand back the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// The next expense ID: the current Unix time in milliseconds, bumped
    /// past any ID already handed out so rapid inserts stay unique.
    fn next_id(&mut self) -> ExpenseId {
        let now_ms = (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64;
        let id = now_ms.max(self.last_id + 1);
        self.last_id = id;

        id
    }

    fn save(&mut self) -> Result<(), Error> {
        let expenses = serde_json::to_string(&self.expenses)
            .map_err(|error| Error::JsonSerialization(error.to_string()))?;
        let budgets = serde_json::to_string(&self.budgets)
            .map_err(|error| Error::JsonSerialization(error.to_string()))?;

        self.store.set(EXPENSES_KEY, &expenses)?;
        self.store.set(BUDGETS_KEY, &budgets)
    }
}

fn read_collection<T: serde::de::DeserializeOwned>(
    store: &impl KeyValueStore,
    key: &str,
) -> Vec<T> {
    let Some(raw) = store.get(key) else {
        return Vec::new();
    };

    serde_json::from_str(&raw).unwrap_or_else(|error| {
        tracing::warn!("discarding unreadable \"{key}\" snapshot: {error}");
        Vec::new()
    })
}

fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}
