use crate::db::{get_connection, DB_FILE};
use crate::error::Result;
use crate::fmt::format_bytes;
use crate::settings::load_settings;
use crate::store;

pub fn run() -> Result<()> {
    let settings = load_settings();
    let data_dir = std::path::PathBuf::from(&settings.data_dir);
    let db_path = data_dir.join(DB_FILE);

    println!("Data dir:   {}", data_dir.display());
    println!("Database:   {}", db_path.display());

    if db_path.exists() {
        let size = std::fs::metadata(&db_path)?.len();
        println!("DB size:    {}", format_bytes(size));

        let conn = get_connection(&db_path)?;
        let total = store::count(&conn)?;
        let years: Vec<String> = store::available_years(&conn)?
            .iter()
            .map(|y| y.to_string())
            .collect();

        println!();
        println!("Total documents:  {total}");
        println!(
            "Years:            {}",
            if years.is_empty() { "-".to_string() } else { years.join(", ") }
        );

        let by_entity = store::count_by_entity(&conn)?;
        if !by_entity.is_empty() {
            println!();
            println!("By entity:");
            for (entity, n) in by_entity {
                println!("  {:<32} {n}", entity.label());
            }
        }

        let by_type = store::count_by_type(&conn)?;
        if !by_type.is_empty() {
            println!();
            println!("By type:");
            for (doc_type, n) in by_type {
                println!("  {:<32} {n}", doc_type.label());
            }
        }
    } else {
        println!();
        println!("Database not found. Run `xap init` to set up.");
    }

    Ok(())
}
