use crate::db::get_connection;
use crate::error::Result;
use crate::settings::db_path;
use crate::store;

pub fn run(id: &str) -> Result<()> {
    let conn = get_connection(&db_path()?)?;
    let doc = store::delete(&conn, id)?;
    println!("Deleted {} ({})", doc.id, doc.filename);
    Ok(())
}
