use super::view::{print_documents, print_filter};
use crate::db::get_connection;
use crate::error::Result;
use crate::filter::{self, FilterField};
use crate::pager::paginate;
use crate::search::parse_query;
use crate::settings::{db_path, load_settings};
use crate::store;

pub fn run(query: &str, drop: &[FilterField], page: usize) -> Result<()> {
    let mut parsed = parse_query(query);
    for field in drop {
        parsed.remove(*field);
    }

    let conn = get_connection(&db_path()?)?;
    let docs = store::list(&conn)?;
    let outcome = filter::search_with(&docs, query, parsed);

    match &outcome.filter {
        Some(f) => print_filter(f),
        None if !query.trim().is_empty() => println!("Searching text only..."),
        None => {}
    }

    let page = paginate(&outcome.results, page, load_settings().page_size);
    print_documents(&page);
    Ok(())
}
