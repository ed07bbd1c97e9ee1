use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::autofill::initials;
use crate::fmt::short_date;
use crate::models::{month_label, DocumentRecord, FilterState};
use crate::pager::Page;

pub fn print_filter(filter: &FilterState) {
    let chips: Vec<String> = filter
        .describe()
        .into_iter()
        .map(|(label, value)| format!("{} {}", format!("{label}:").dimmed(), value.bold()))
        .collect();
    println!("{} {}", "FILTERS:".cyan().bold(), chips.join("  "));
}

pub fn print_documents(page: &Page<'_, &DocumentRecord>) {
    if page.total_items == 0 {
        println!("No documents found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["", "ID", "Vendor", "Entity", "Period", "Type", "File", "Uploaded", "Size"]);
    for doc in page.items {
        let period = format!("{} {}", month_label(doc.month).unwrap_or("?"), doc.year);
        table.add_row(vec![
            Cell::new(initials(&doc.filename)),
            Cell::new(&doc.id),
            Cell::new(&doc.vendor),
            Cell::new(doc.entity.label()),
            Cell::new(period),
            Cell::new(doc.doc_type.label()),
            Cell::new(&doc.filename),
            Cell::new(short_date(&doc.uploaded_at)),
            Cell::new(&doc.size),
        ]);
    }
    println!("{table}");
    println!(
        "Showing {} of {} items  {}",
        page.items.len(),
        page.total_items,
        format!("Page {} / {}", page.page, page.total_pages.max(1)).dimmed()
    );
}
