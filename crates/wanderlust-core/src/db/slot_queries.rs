//! Keyed slot reads and whole-value writes.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const SELECT_SLOT_SQL: &str = "SELECT value FROM slots WHERE key = ?1";
const UPSERT_SLOT_SQL: &str = "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_SLOT_SQL: &str = "DELETE FROM slots WHERE key = ?1";

impl super::Database {
    /// Reads the raw value stored under `key`, if any.
    pub fn read_slot(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_SLOT_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read slot")
    }

    /// Replaces the value stored under `key`.
    pub fn write_slot(&mut self, key: &str, value: &str) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            UPSERT_SLOT_SQL,
            params![key, value, Timestamp::now().to_string()],
        )
        .db_context("Failed to write slot")?;

        tx.commit().db_context("Failed to commit transaction")
    }

    /// Deletes the slot. Returns true if a value was stored.
    pub fn remove_slot(&mut self, key: &str) -> Result<bool> {
        let removed = self
            .connection
            .execute(DELETE_SLOT_SQL, params![key])
            .db_context("Failed to remove slot")?;
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use crate::db::Database;

    #[test]
    fn test_missing_slot_reads_as_none() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.read_slot("nothing").unwrap(), None);
    }

    #[test]
    fn test_write_replaces_previous_value() {
        let mut db = Database::open_in_memory().unwrap();
        db.write_slot("plans", "[1]").unwrap();
        db.write_slot("plans", "[1,2]").unwrap();
        assert_eq!(db.read_slot("plans").unwrap().as_deref(), Some("[1,2]"));
    }

    #[test]
    fn test_remove_slot() {
        let mut db = Database::open_in_memory().unwrap();
        db.write_slot("plans", "[]").unwrap();
        assert!(db.remove_slot("plans").unwrap());
        assert!(!db.remove_slot("plans").unwrap());
        assert_eq!(db.read_slot("plans").unwrap(), None);
    }
}
