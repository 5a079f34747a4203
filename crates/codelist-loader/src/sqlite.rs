//! SQLite-backed record store.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use uuid::Uuid;

use codelist_types::{Dataset, DatasetEntry, DatasetId, EntryId, User, UserId};

use crate::store::RecordStore;
use crate::types::{StoreConfig, StoreError, StoreResult};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS users (
    id            TEXT PRIMARY KEY,
    email         TEXT NOT NULL,
    password_hash TEXT NOT NULL,
    role          TEXT NOT NULL,
    created_at    TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS datasets (
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    description TEXT NOT NULL,
    source_path TEXT NOT NULL,
    uploaded_by TEXT NOT NULL REFERENCES users(id),
    uploaded_at TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS dataset_entries (
    id         TEXT PRIMARY KEY,
    dataset_id TEXT NOT NULL REFERENCES datasets(id),
    data       TEXT NOT NULL,
    created_at TEXT NOT NULL
);
";

/// SQLite implementation of [`RecordStore`].
///
/// `open` creates the schema if absent and starts the transaction for one
/// load run; [`commit`](RecordStore::commit) ends it. The connection is
/// owned by the store value and closed when it drops, on every exit path;
/// dropping without committing rolls the run back.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database at the configured path and begins
    /// the transaction for one load run.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or the schema
    /// cannot be created.
    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        Self::from_connection(Connection::open(&config.path)?)
    }

    /// Opens a transient in-memory database.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(SCHEMA)?;
        conn.execute_batch("BEGIN")?;
        Ok(Self { conn })
    }

    /// Returns the number of stored users.
    pub fn user_count(&self) -> StoreResult<usize> {
        self.count("users")
    }

    /// Returns the number of stored datasets.
    pub fn dataset_count(&self) -> StoreResult<usize> {
        self.count("datasets")
    }

    /// Returns the number of stored dataset entries.
    pub fn entry_count(&self) -> StoreResult<usize> {
        self.count("dataset_entries")
    }

    fn count(&self, table: &str) -> StoreResult<usize> {
        let sql = format!("SELECT COUNT(*) FROM {}", table);
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl RecordStore for SqliteStore {
    fn find_any_user(&mut self) -> StoreResult<Option<User>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, email, password_hash, role, created_at FROM users LIMIT 1")?;
        let mut rows = stmt.query([])?;

        match rows.next()? {
            Some(row) => {
                let id: String = row.get(0)?;
                let created_at: String = row.get(4)?;
                Ok(Some(User {
                    id: parse_id(&id)?,
                    email: row.get(1)?,
                    password_hash: row.get(2)?,
                    role: row.get(3)?,
                    created_at: parse_timestamp(&created_at)?,
                }))
            }
            None => Ok(None),
        }
    }

    fn create_user(&mut self, user: &User) -> StoreResult<UserId> {
        self.conn.execute(
            "INSERT INTO users (id, email, password_hash, role, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                user.id.to_string(),
                user.email,
                user.password_hash,
                user.role,
                user.created_at.to_rfc3339(),
            ],
        )?;
        Ok(user.id)
    }

    fn create_dataset(&mut self, dataset: &Dataset) -> StoreResult<DatasetId> {
        self.conn.execute(
            "INSERT INTO datasets (id, name, description, source_path, uploaded_by, uploaded_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                dataset.id.to_string(),
                dataset.name,
                dataset.description,
                dataset.source_path,
                dataset.uploaded_by.to_string(),
                dataset.uploaded_at.to_rfc3339(),
            ],
        )?;
        Ok(dataset.id)
    }

    fn create_dataset_entry(&mut self, entry: &DatasetEntry) -> StoreResult<EntryId> {
        let data = serde_json::to_string(&entry.payload)?;
        self.conn.execute(
            "INSERT INTO dataset_entries (id, dataset_id, data, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                entry.id.to_string(),
                entry.dataset_id.to_string(),
                data,
                entry.created_at.to_rfc3339(),
            ],
        )?;
        Ok(entry.id)
    }

    fn commit(&mut self) -> StoreResult<()> {
        self.conn.execute_batch("COMMIT")?;
        Ok(())
    }
}

fn parse_id(value: &str) -> StoreResult<Uuid> {
    Uuid::parse_str(value).map_err(|_| StoreError::InvalidId {
        value: value.to_string(),
    })
}

fn parse_timestamp(value: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| StoreError::InvalidTimestamp {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use codelist_types::CodeRecord;

    #[test]
    fn test_user_roundtrip() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        assert!(store.find_any_user().unwrap().is_none());

        let user = User::placeholder();
        store.create_user(&user).unwrap();

        // to_rfc3339 keeps full nanosecond precision, so the roundtrip is exact
        let found = store.find_any_user().unwrap().unwrap();
        assert_eq!(found, user);
    }

    #[test]
    fn test_entry_payload_stored_as_json_object() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let user = User::placeholder();
        store.create_user(&user).unwrap();
        let dataset = Dataset::new("HCPCS 2025", "test", "hcpcs.txt", user.id);
        store.create_dataset(&dataset).unwrap();

        let entry = DatasetEntry::new(
            dataset.id,
            CodeRecord::new("A0021", "Outside state ambulance service"),
        );
        store.create_dataset_entry(&entry).unwrap();

        let data: String = store
            .conn
            .query_row("SELECT data FROM dataset_entries LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&data).unwrap();
        assert_eq!(value["code"], "A0021");
        assert_eq!(value["description"], "Outside state ambulance service");
    }

    #[test]
    fn test_duplicate_entry_id_fails_without_aborting_store() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let user = User::placeholder();
        store.create_user(&user).unwrap();
        let dataset = Dataset::new("HCPCS 2025", "test", "hcpcs.txt", user.id);
        store.create_dataset(&dataset).unwrap();

        let entry = DatasetEntry::new(dataset.id, CodeRecord::new("A0021", "one two three"));
        store.create_dataset_entry(&entry).unwrap();
        assert!(store.create_dataset_entry(&entry).is_err());

        // The batch is still usable after a failed insert
        let other = DatasetEntry::new(dataset.id, CodeRecord::new("A0080", "four five six"));
        store.create_dataset_entry(&other).unwrap();
        store.commit().unwrap();
        assert_eq!(store.entry_count().unwrap(), 2);
    }

    #[test]
    fn test_counts_after_commit() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let user = User::placeholder();
        store.create_user(&user).unwrap();
        let dataset = Dataset::new("ICD-10-CM 2025", "test", "icd.txt", user.id);
        store.create_dataset(&dataset).unwrap();
        store.commit().unwrap();

        assert_eq!(store.user_count().unwrap(), 1);
        assert_eq!(store.dataset_count().unwrap(), 1);
        assert_eq!(store.entry_count().unwrap(), 0);
    }
}
