//! Contains the trait and implementations for the key-value snapshot store
//! that the [Ledger](crate::Ledger) persists its state to.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::Error;

/// The key the expense snapshot is stored under.
pub const EXPENSES_KEY: &str = "expenses";

/// The key the budget snapshot is stored under.
pub const BUDGETS_KEY: &str = "budgets";

/// A synchronous key-value store holding whole-collection snapshots.
///
/// Writes replace the complete value for a key; there are no incremental
/// updates and no transactional guarantees beyond last write wins.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if the key is absent or
    /// unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    /// Returns [Error::Storage] if the value could not be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Error>;

    /// Delete `key` and its value. Removing a key that is absent is a no-op.
    ///
    /// # Errors
    /// Returns [Error::Storage] if the key exists but could not be removed.
    fn remove(&mut self, key: &str) -> Result<(), Error>;
}
