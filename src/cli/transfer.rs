use rusqlite::Connection;
use tracing::warn;

use crate::db::get_connection;
use crate::error::Result;
use crate::models::DocumentRecord;
use crate::settings::db_path;
use crate::store;

/// Write every record, newest first, as a JSON array.
pub fn export(output: Option<String>) -> Result<()> {
    let conn = get_connection(&db_path()?)?;
    let docs = store::list(&conn)?;
    let json = serde_json::to_string_pretty(&docs)?;

    match output {
        Some(path) => {
            std::fs::write(&path, format!("{json}\n"))?;
            println!("Exported {} documents to {path}", docs.len());
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Insert `docs` (newest first, as exported) in one transaction. Records
/// whose id is already stored are skipped; any other failure rolls the whole
/// batch back. Returns `(imported, skipped)`.
fn import_records(conn: &mut Connection, docs: &[DocumentRecord]) -> Result<(usize, usize)> {
    let tx = conn.transaction()?;
    let mut imported = 0usize;
    let mut skipped = 0usize;
    // Insert from the end so the order survives.
    for doc in docs.iter().rev() {
        if store::exists(&tx, &doc.id)? {
            warn!(id = %doc.id, "document id already stored, skipping");
            skipped += 1;
            continue;
        }
        store::insert_record(&tx, doc)?;
        imported += 1;
    }
    tx.commit()?;
    Ok((imported, skipped))
}

/// Load a JSON array written by `export`.
pub fn import(file: &str) -> Result<()> {
    let content = std::fs::read_to_string(file)?;
    let docs: Vec<DocumentRecord> = serde_json::from_str(&content)?;

    let mut conn = get_connection(&db_path()?)?;
    let (imported, skipped) = import_records(&mut conn, &docs)?;

    println!("Imported {imported} documents ({skipped} skipped).");
    Ok(())
}
