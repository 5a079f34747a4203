//! Record store abstraction and the in-memory implementation.

use codelist_types::{Dataset, DatasetEntry, DatasetId, EntryId, User, UserId};

use crate::types::StoreResult;

/// The relational store a dataset load writes into.
///
/// All writes issued through one store value belong to a single batch that
/// becomes durable when [`commit`](RecordStore::commit) is called, once, at
/// the end of a load run. A store value dropped without committing
/// persists nothing from that run.
pub trait RecordStore {
    /// Returns any existing user, if the store holds at least one.
    fn find_any_user(&mut self) -> StoreResult<Option<User>>;

    /// Inserts a user and returns its id.
    fn create_user(&mut self, user: &User) -> StoreResult<UserId>;

    /// Inserts a dataset and returns its id.
    fn create_dataset(&mut self, dataset: &Dataset) -> StoreResult<DatasetId>;

    /// Inserts a dataset entry and returns its id.
    fn create_dataset_entry(&mut self, entry: &DatasetEntry) -> StoreResult<EntryId>;

    /// Commits the batch written through this store value.
    fn commit(&mut self) -> StoreResult<()>;
}

/// In-memory record store.
///
/// Backs loader tests and embedded use; every operation succeeds and
/// `commit` is a marker only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Vec<User>,
    datasets: Vec<Dataset>,
    entries: Vec<DatasetEntry>,
    committed: bool,
}

impl MemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored users.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns the stored datasets.
    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    /// Returns the stored dataset entries.
    pub fn entries(&self) -> &[DatasetEntry] {
        &self.entries
    }

    /// Returns true if `commit` has been called.
    pub fn is_committed(&self) -> bool {
        self.committed
    }
}

impl RecordStore for MemoryStore {
    fn find_any_user(&mut self) -> StoreResult<Option<User>> {
        Ok(self.users.first().cloned())
    }

    fn create_user(&mut self, user: &User) -> StoreResult<UserId> {
        self.users.push(user.clone());
        Ok(user.id)
    }

    fn create_dataset(&mut self, dataset: &Dataset) -> StoreResult<DatasetId> {
        self.datasets.push(dataset.clone());
        Ok(dataset.id)
    }

    fn create_dataset_entry(&mut self, entry: &DatasetEntry) -> StoreResult<EntryId> {
        self.entries.push(entry.clone());
        Ok(entry.id)
    }

    fn commit(&mut self) -> StoreResult<()> {
        self.committed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codelist_types::CodeRecord;

    #[test]
    fn test_find_any_user_on_empty_store() {
        let mut store = MemoryStore::new();
        assert!(store.find_any_user().unwrap().is_none());
    }

    #[test]
    fn test_find_any_user_returns_first() {
        let mut store = MemoryStore::new();
        let first = User::placeholder();
        let second = User::placeholder();
        store.create_user(&first).unwrap();
        store.create_user(&second).unwrap();

        let found = store.find_any_user().unwrap().unwrap();
        assert_eq!(found.id, first.id);
    }

    #[test]
    fn test_create_rows_and_commit() {
        let mut store = MemoryStore::new();
        let user = User::placeholder();
        store.create_user(&user).unwrap();
        let dataset = Dataset::new("HCPCS 2025", "test", "hcpcs.txt", user.id);
        store.create_dataset(&dataset).unwrap();
        let entry = DatasetEntry::new(
            dataset.id,
            CodeRecord::new("A0021", "Outside state ambulance service"),
        );
        store.create_dataset_entry(&entry).unwrap();

        assert!(!store.is_committed());
        store.commit().unwrap();
        assert!(store.is_committed());
        assert_eq!(store.entries().len(), 1);
        assert_eq!(store.entries()[0].dataset_id, dataset.id);
    }
}
