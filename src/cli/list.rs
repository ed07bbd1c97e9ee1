use super::parse_date_opt;
use super::view::{print_documents, print_filter};
use crate::db::get_connection;
use crate::error::Result;
use crate::filter::apply;
use crate::models::{DocType, Entity, FilterState};
use crate::pager::paginate;
use crate::search::parse_query;
use crate::settings::{db_path, load_settings};
use crate::store;

pub struct ListArgs {
    pub query: Option<String>,
    pub entity: Option<Entity>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub doc_type: Option<DocType>,
    pub vendor: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub page: usize,
}

pub fn run(args: ListArgs) -> Result<()> {
    let explicit = FilterState {
        vendor: args.vendor.filter(|v| !v.trim().is_empty()),
        entity: args.entity,
        year: args.year,
        month: args.month,
        document_type: args.doc_type,
        start_date: parse_date_opt(args.from_date.as_deref())?,
        end_date: parse_date_opt(args.to_date.as_deref())?,
    };
    let mut filter = args.query.as_deref().map(parse_query).unwrap_or_default();
    filter.merge(&explicit);

    let conn = get_connection(&db_path()?)?;
    let docs = store::list(&conn)?;
    let matched = apply(&docs, &filter);

    if !filter.is_empty() {
        print_filter(&filter);
    }
    let page = paginate(&matched, args.page, load_settings().page_size);
    print_documents(&page);
    Ok(())
}
