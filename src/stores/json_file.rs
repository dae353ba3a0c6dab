//! Implements a key-value store backed by one JSON file per key.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{Error, stores::KeyValueStore};

/// A key-value store that keeps each key in a `<key>.json` file inside a
/// data directory.
///
/// This is the durable analogue of browser local storage: small
/// whole-snapshot values, replaced on every write.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    /// Returns [Error::Storage] if the directory could not be created.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, Error> {
        let dir = dir.as_ref().to_path_buf();

        fs::create_dir_all(&dir)
            .map_err(|error| Error::Storage(format!("{}: {error}", dir.display())))?;

        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        let path = self.path_for(key);

        fs::write(&path, value).map_err(|error| Error::Storage(format!("{}: {error}", path.display())))
    }

    fn remove(&mut self, key: &str) -> Result<(), Error> {
        let path = self.path_for(key);

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(Error::Storage(format!("{}: {error}", path.display()))),
        }
    }
}

#[cfg(test)]
mod json_file_store_tests {
    use tempfile::tempdir;

    use super::{JsonFileStore, KeyValueStore};

    #[test]
    fn set_then_get_round_trips_through_the_filesystem() {
        let dir = tempdir().expect("tempdir");
        let mut store = JsonFileStore::open(dir.path()).unwrap();

        store.set("expenses", "[{\"id\":1}]").unwrap();

        assert_eq!(Some("[{\"id\":1}]".to_owned()), store.get("expenses"));
        assert!(dir.path().join("expenses.json").exists());
    }

    #[test]
    fn get_missing_key_returns_none() {
        let dir = tempdir().expect("tempdir");
        let store = JsonFileStore::open(dir.path()).unwrap();

        assert_eq!(None, store.get("expenses"));
    }

    #[test]
    fn remove_missing_key_is_a_no_op() {
        let dir = tempdir().expect("tempdir");
        let mut store = JsonFileStore::open(dir.path()).unwrap();

        assert_eq!(Ok(()), store.remove("budgets"));
    }

    #[test]
    fn remove_deletes_the_backing_file() {
        let dir = tempdir().expect("tempdir");
        let mut store = JsonFileStore::open(dir.path()).unwrap();
        store.set("budgets", "[]").unwrap();

        store.remove("budgets").unwrap();

        assert!(!dir.path().join("budgets.json").exists());
    }

    #[test]
    fn open_creates_nested_data_directories() {
        let dir = tempdir().expect("tempdir");

        let store = JsonFileStore::open(dir.path().join("nested").join("data"));

        assert!(store.is_ok());
    }
}
