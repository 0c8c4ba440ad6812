use wanderlust_core::{Database, PlanStore, PLANS_SLOT};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();
    assert!(temp_file.path().exists());
    assert_eq!(db.read_slot(PLANS_SLOT).unwrap(), None);
}

#[test]
fn test_slot_survives_reopen() {
    let (temp_file, mut db) = create_test_db();
    db.write_slot(PLANS_SLOT, "[]").expect("Failed to write slot");
    drop(db);

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    assert_eq!(db.read_slot(PLANS_SLOT).unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_schema_initialization_is_idempotent() {
    let (temp_file, _db) = create_test_db();
    Database::new(temp_file.path()).expect("Second open should reuse the schema");
}

#[test]
fn test_unreadable_slot_opens_empty_store() {
    let (_temp_file, mut db) = create_test_db();
    db.write_slot(PLANS_SLOT, "not json at all").unwrap();

    let store = PlanStore::open(db).expect("Corrupt data must not fail the load");
    assert!(store.is_empty());
}
