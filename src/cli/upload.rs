use std::path::Path;

use chrono::{Datelike, Local};
use sha2::{Digest, Sha256};

use crate::autofill::smart_autofill;
use crate::db::get_connection;
use crate::error::{XapError, Result};
use crate::fmt::format_size;
use crate::models::{DocType, Entity, NewDocument};
use crate::settings::db_path;
use crate::store;

pub struct UploadArgs {
    pub file: String,
    pub vendor: Option<String>,
    pub entity: Option<Entity>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub doc_type: Option<DocType>,
}

fn compute_checksum(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

pub fn run(args: UploadArgs) -> Result<()> {
    let path = Path::new(&args.file);
    let data = std::fs::read(path)?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| XapError::Other(format!("Not a file: {}", args.file)))?;

    let conn = get_connection(&db_path()?)?;

    let checksum = compute_checksum(&data);
    if let Some(existing) = store::find_by_checksum(&conn, &checksum)? {
        return Err(XapError::DuplicateFile {
            id: existing.id,
            filename: existing.filename,
        });
    }

    let guess = smart_autofill(&filename, Local::now().year());
    let vendor = args.vendor.unwrap_or(guess.vendor);
    if vendor.trim().is_empty() {
        return Err(XapError::Other("A vendor is required (use --vendor)".to_string()));
    }

    let new = NewDocument {
        vendor: vendor.trim().to_string(),
        entity: args.entity.unwrap_or(guess.entity),
        year: args.year.unwrap_or(guess.year),
        month: args.month.unwrap_or(guess.month),
        doc_type: args.doc_type.unwrap_or(DocType::Statement),
        filename,
        size: format_size(data.len() as u64),
        checksum: Some(checksum),
    };
    let doc = store::insert(&conn, &new)?;

    println!("Uploaded {} as {}", doc.filename, doc.id);
    println!("  Vendor: {}", doc.vendor);
    println!("  Entity: {}", doc.entity);
    println!("  Period: {}-{:02}", doc.year, doc.month);
    println!("  Type:   {}", doc.doc_type);
    println!("  Size:   {}", doc.size);
    Ok(())
}
