use colored::Colorize;

use crate::db::get_connection;
use crate::error::{XapError, Result};
use crate::settings::db_path;
use crate::store;

pub fn run(yes: bool) -> Result<()> {
    if !yes {
        return Err(XapError::Other(
            "This wipes every document. Re-run with --yes to confirm.".to_string(),
        ));
    }
    let conn = get_connection(&db_path()?)?;
    let removed = store::purge(&conn)?;
    println!("{} {removed} documents removed.", "System purged.".red().bold());
    Ok(())
}
