use rowdesk_types::{Record, RecordId};
use rusqlite::{Connection, OptionalExtension, params};

use crate::{Error, Result};

fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Record> {
    Ok(Record {
        id: RecordId::new(row.get(0)?),
        name: row.get(1)?,
    })
}

pub fn insert(conn: &Connection, name: &str) -> Result<RecordId> {
    conn.execute("INSERT INTO records (name) VALUES (?1)", [name])?;
    Ok(RecordId::new(conn.last_insert_rowid()))
}

pub fn get(conn: &Connection, id: RecordId) -> Result<Option<Record>> {
    let result = conn
        .query_row(
            r#"
        SELECT id, name
        FROM records
        WHERE id = ?1
        "#,
            [id.get()],
            map_row,
        )
        .optional()?;

    Ok(result)
}

/// All records in storage order (ascending id).
pub fn list(conn: &Connection) -> Result<Vec<Record>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT id, name
        FROM records
        ORDER BY id
        "#,
    )?;

    let records = stmt
        .query_map([], map_row)?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(records)
}

pub fn update_name(conn: &Connection, id: RecordId, name: &str) -> Result<()> {
    let changed = conn.execute(
        "UPDATE records SET name = ?2 WHERE id = ?1",
        params![id.get(), name],
    )?;

    if changed == 0 {
        return Err(Error::RecordNotFound(id));
    }
    Ok(())
}

pub fn delete(conn: &Connection, id: RecordId) -> Result<()> {
    let changed = conn.execute("DELETE FROM records WHERE id = ?1", [id.get()])?;

    if changed == 0 {
        return Err(Error::RecordNotFound(id));
    }
    Ok(())
}

pub fn count(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
    Ok(count as usize)
}
