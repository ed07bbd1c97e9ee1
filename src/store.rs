use chrono::{SecondsFormat, Utc};
use rusqlite::types::ToSql;
use rusqlite::{Connection, OptionalExtension, Row};
use tracing::{debug, info};

use crate::error::{XapError, Result};
use crate::models::{DocType, DocumentRecord, DocumentUpdate, Entity, NewDocument};

const COLUMNS: &str =
    "id, vendor, entity, year, month, doc_type, filename, uploaded_at, size, checksum";

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<DocumentRecord> {
    Ok(DocumentRecord {
        id: row.get(0)?,
        vendor: row.get(1)?,
        entity: row.get(2)?,
        year: row.get(3)?,
        month: row.get(4)?,
        doc_type: row.get(5)?,
        filename: row.get(6)?,
        uploaded_at: row.get(7)?,
        size: row.get(8)?,
        checksum: row.get(9)?,
    })
}

pub fn exists(conn: &Connection, id: &str) -> Result<bool> {
    Ok(conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM documents WHERE id = ?1)",
        [id],
        |r| r.get(0),
    )?)
}

/// `doc-<unix millis>`, bumped until unused.
fn next_id(conn: &Connection) -> Result<String> {
    let mut stamp = Utc::now().timestamp_millis();
    loop {
        let id = format!("doc-{stamp}");
        if !exists(conn, &id)? {
            return Ok(id);
        }
        stamp += 1;
    }
}

fn check_month(month: u32) -> Result<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(XapError::InvalidMonth(month))
    }
}

/// Store a complete record as the newest entry, keeping its id and timestamp.
pub fn insert_record(conn: &Connection, doc: &DocumentRecord) -> Result<()> {
    check_month(doc.month)?;
    conn.execute(
        &format!("INSERT INTO documents ({COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)"),
        rusqlite::params![
            doc.id,
            doc.vendor,
            doc.entity,
            doc.year,
            doc.month,
            doc.doc_type,
            doc.filename,
            doc.uploaded_at,
            doc.size,
            doc.checksum,
        ],
    )?;
    debug!(id = %doc.id, "inserted document");
    Ok(())
}

/// Register a new upload. It is stamped with the current time and listed first.
pub fn insert(conn: &Connection, new: &NewDocument) -> Result<DocumentRecord> {
    let doc = DocumentRecord {
        id: next_id(conn)?,
        vendor: new.vendor.clone(),
        entity: new.entity,
        year: new.year,
        month: new.month,
        doc_type: new.doc_type,
        filename: new.filename.clone(),
        uploaded_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        size: new.size.clone(),
        checksum: new.checksum.clone(),
    };
    insert_record(conn, &doc)?;
    info!(id = %doc.id, filename = %doc.filename, "uploaded document");
    Ok(doc)
}

/// All records, newest first.
pub fn list(conn: &Connection) -> Result<Vec<DocumentRecord>> {
    let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM documents ORDER BY seq DESC"))?;
    let rows = stmt
        .query_map([], record_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn get(conn: &Connection, id: &str) -> Result<DocumentRecord> {
    conn.query_row(
        &format!("SELECT {COLUMNS} FROM documents WHERE id = ?1"),
        [id],
        record_from_row,
    )
    .optional()?
    .ok_or_else(|| XapError::UnknownDocument(id.to_string()))
}

pub fn find_by_checksum(conn: &Connection, checksum: &str) -> Result<Option<DocumentRecord>> {
    Ok(conn
        .query_row(
            &format!("SELECT {COLUMNS} FROM documents WHERE checksum = ?1 LIMIT 1"),
            [checksum],
            record_from_row,
        )
        .optional()?)
}

pub fn update(conn: &Connection, id: &str, changes: &DocumentUpdate) -> Result<DocumentRecord> {
    if let Some(month) = changes.month {
        check_month(month)?;
    }

    let mut sets: Vec<String> = Vec::new();
    let mut params: Vec<&dyn ToSql> = Vec::new();
    if let Some(vendor) = &changes.vendor {
        params.push(vendor);
        sets.push(format!("vendor = ?{}", params.len()));
    }
    if let Some(entity) = &changes.entity {
        params.push(entity);
        sets.push(format!("entity = ?{}", params.len()));
    }
    if let Some(year) = &changes.year {
        params.push(year);
        sets.push(format!("year = ?{}", params.len()));
    }
    if let Some(month) = &changes.month {
        params.push(month);
        sets.push(format!("month = ?{}", params.len()));
    }
    if let Some(doc_type) = &changes.doc_type {
        params.push(doc_type);
        sets.push(format!("doc_type = ?{}", params.len()));
    }

    if !sets.is_empty() {
        params.push(&id);
        let sql = format!(
            "UPDATE documents SET {} WHERE id = ?{}",
            sets.join(", "),
            params.len()
        );
        let changed = conn.execute(&sql, params.as_slice())?;
        if changed == 0 {
            return Err(XapError::UnknownDocument(id.to_string()));
        }
        info!(id, "updated document");
    }
    get(conn, id)
}

pub fn delete(conn: &Connection, id: &str) -> Result<DocumentRecord> {
    let doc = get(conn, id)?;
    conn.execute("DELETE FROM documents WHERE id = ?1", [id])?;
    info!(id, "deleted document");
    Ok(doc)
}

/// Remove every record. Returns how many were deleted.
pub fn purge(conn: &Connection) -> Result<usize> {
    let removed = conn.execute("DELETE FROM documents", [])?;
    info!(removed, "purged document store");
    Ok(removed)
}

pub fn count(conn: &Connection) -> Result<usize> {
    let n: i64 = conn.query_row("SELECT count(*) FROM documents", [], |r| r.get(0))?;
    Ok(n as usize)
}

/// Distinct document years, newest first.
pub fn available_years(conn: &Connection) -> Result<Vec<i32>> {
    let mut stmt = conn.prepare("SELECT DISTINCT year FROM documents ORDER BY year DESC")?;
    let years = stmt
        .query_map([], |r| r.get(0))?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(years)
}

pub fn count_by_entity(conn: &Connection) -> Result<Vec<(Entity, usize)>> {
    let mut stmt = conn.prepare("SELECT entity, count(*) FROM documents GROUP BY entity")?;
    let counts: Vec<(Entity, i64)> = stmt
        .query_map([], |r| Ok((r.get(0)?, r.get(1)?)))?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(Entity::ALL
        .into_iter()
        .filter_map(|e| {
            counts
                .iter()
                .find(|(c, _)| *c == e)
                .map(|(_, n)| (e, *n as usize))
        })
        .collect())
}

pub fn count_by_type(conn: &Connection) -> Result<Vec<(DocType, usize)>> {
    let mut stmt = conn.prepare("SELECT doc_type, count(*) FROM documents GROUP BY doc_type")?;
    let counts: Vec<(DocType, i64)> = stmt
        .query_map([], |r| Ok((r.get(0)?, r.get(1)?)))?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(DocType::ALL
        .into_iter()
        .filter_map(|t| {
            counts
                .iter()
                .find(|(c, _)| *c == t)
                .map(|(_, n)| (t, *n as usize))
        })
        .collect())
}
