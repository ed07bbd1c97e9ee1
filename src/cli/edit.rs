use crate::db::get_connection;
use crate::error::{XapError, Result};
use crate::models::DocumentUpdate;
use crate::settings::db_path;
use crate::store;

pub fn run(id: &str, changes: DocumentUpdate) -> Result<()> {
    if changes.is_empty() {
        return Err(XapError::Other(
            "Nothing to update (pass --vendor, --entity, --year, --month or --type)".to_string(),
        ));
    }
    if changes.vendor.as_deref().is_some_and(|v| v.trim().is_empty()) {
        return Err(XapError::Other("Vendor cannot be empty".to_string()));
    }

    let conn = get_connection(&db_path()?)?;
    let doc = store::update(&conn, id, &changes)?;
    println!(
        "Updated {}: {} \u{2192} {} {}-{:02} {}",
        doc.id, doc.vendor, doc.entity, doc.year, doc.month, doc.doc_type
    );
    Ok(())
}
