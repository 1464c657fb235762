use rusqlite::Connection;
use rowdesk_types::seed_name;

use crate::{Error, Result};

// Schema version (increment when changing table definitions)
pub const SCHEMA_VERSION: i32 = 1;

// NOTE: Store Design
//
// - AUTOINCREMENT (not plain INTEGER PRIMARY KEY) keeps ids monotonic, so a
//   deleted id is never handed out again.
// - Seeding happens exactly once, inside the same transaction that creates the
//   table. PRAGMA user_version marks the database as initialized.
// - The store is the only copy of user records. A database stamped with any
//   other non-zero version is refused untouched, never dropped.

/// Create the schema if needed. Returns `true` when the table was created
/// and seeded in this call.
pub fn init_schema(conn: &mut Connection, seed_count: usize) -> Result<bool> {
    let current_version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if current_version == SCHEMA_VERSION {
        return Ok(false);
    }

    if current_version != 0 {
        tracing::warn!(
            found = current_version,
            expected = SCHEMA_VERSION,
            "refusing to open record store with unsupported schema version"
        );
        return Err(Error::UnsupportedSchemaVersion {
            found: current_version,
            expected: SCHEMA_VERSION,
        });
    }

    let tx = conn.transaction()?;

    tx.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS records (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        );
        "#,
    )?;

    seed_records(&tx, seed_count)?;

    tx.execute(&format!("PRAGMA user_version = {}", SCHEMA_VERSION), [])?;
    tx.commit()?;

    tracing::info!(seeded = seed_count, "initialized record store");
    Ok(true)
}

fn seed_records(conn: &Connection, seed_count: usize) -> Result<()> {
    let mut stmt = conn.prepare("INSERT INTO records (name) VALUES (?1)")?;
    for n in 1..=seed_count {
        stmt.execute([seed_name(n)])?;
    }
    Ok(())
}

