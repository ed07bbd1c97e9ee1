use chrono::{DateTime, Datelike, Duration, SecondsFormat, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::db::get_connection;
use crate::error::Result;
use crate::models::{DocType, DocumentRecord, Entity};
use crate::settings::db_path;
use crate::store;

const DEMO_COUNT: usize = 45;

/// Days back from today over which demo uploads are spread.
const SPREAD_DAYS: i64 = 60;

const VENDORS: &[&str] = &[
    "TESLA ENERGY",
    "SPACEX LOGISTICS",
    "NEURALINK SUPPLIES",
    "BORING CO",
    "STARLINK SERVICES",
];

/// Random mock records `doc-0` .. `doc-44`, uploaded within the last 60 days.
fn generate_documents<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> Vec<DocumentRecord> {
    (0..DEMO_COUNT)
        .map(|i| {
            let uploaded = now - Duration::days(rng.gen_range(0..SPREAD_DAYS));
            DocumentRecord {
                id: format!("doc-{i}"),
                vendor: VENDORS.choose(rng).copied().unwrap_or("ACME").to_string(),
                entity: *Entity::ALL.choose(rng).unwrap_or(&Entity::Unknown),
                year: uploaded.year(),
                month: uploaded.month(),
                doc_type: *DocType::ALL.choose(rng).unwrap_or(&DocType::Invoice),
                filename: format!("INV_{}.pdf", rng.gen_range(0..10_000)),
                uploaded_at: uploaded.to_rfc3339_opts(SecondsFormat::Millis, true),
                size: format!("{:.1} MB", rng.gen_range(1.0..6.0)),
                checksum: None,
            }
        })
        .collect()
}

pub fn run() -> Result<()> {
    let conn = get_connection(&db_path()?)?;

    // Only seed an empty store; a purged store stays purged unless asked.
    let existing = store::count(&conn)?;
    if existing > 0 {
        println!("Demo data not loaded: the store already holds {existing} documents.");
        println!("Run `xap purge --yes` first to start over.");
        return Ok(());
    }

    let docs = generate_documents(&mut rand::thread_rng(), Utc::now());
    // Inserted oldest-index last so that doc-0 lists first.
    for doc in docs.iter().rev() {
        store::insert_record(&conn, doc)?;
    }

    println!("Demo data loaded!");
    println!("  Documents: {}", docs.len());
    println!();
    println!("Try these next:");
    println!("  xap list");
    println!("  xap search \"tesla andalusia invoice\"");
    println!("  xap status");
    Ok(())
}
