use chrono::{DateTime, NaiveDate};
use tracing::debug;

use crate::models::{month_label, DocType, DocumentRecord, Entity, FilterState};
use crate::search::parse_query;

/// One dimension of a [`FilterState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FilterField {
    Vendor,
    Entity,
    Year,
    Month,
    DocumentType,
    StartDate,
    EndDate,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.vendor.is_none()
            && self.entity.is_none()
            && self.year.is_none()
            && self.month.is_none()
            && self.document_type.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    /// Clear one field. A date bound never survives without its partner, so
    /// removing either end of the range clears both.
    pub fn remove(&mut self, field: FilterField) {
        match field {
            FilterField::Vendor => self.vendor = None,
            FilterField::Entity => self.entity = None,
            FilterField::Year => self.year = None,
            FilterField::Month => self.month = None,
            FilterField::DocumentType => self.document_type = None,
            FilterField::StartDate | FilterField::EndDate => {
                self.start_date = None;
                self.end_date = None;
            }
        }
    }

    /// Set or, with `None`, clear the vendor. A blank vendor clears it too.
    pub fn set_vendor(&mut self, vendor: Option<String>) {
        self.vendor = vendor.filter(|v| !v.trim().is_empty());
    }

    pub fn set_entity(&mut self, entity: Option<Entity>) {
        self.entity = entity;
    }

    pub fn set_year(&mut self, year: Option<i32>) {
        self.year = year;
    }

    pub fn set_month(&mut self, month: Option<u32>) {
        self.month = month;
    }

    pub fn set_document_type(&mut self, doc_type: Option<DocType>) {
        self.document_type = doc_type;
    }

    pub fn set_start_date(&mut self, date: Option<NaiveDate>) {
        self.start_date = date;
    }

    pub fn set_end_date(&mut self, date: Option<NaiveDate>) {
        self.end_date = date;
    }

    /// Overlay every field set in `other` onto `self`.
    pub fn merge(&mut self, other: &FilterState) {
        if other.vendor.is_some() {
            self.set_vendor(other.vendor.clone());
        }
        if other.entity.is_some() {
            self.set_entity(other.entity);
        }
        if other.year.is_some() {
            self.set_year(other.year);
        }
        if other.month.is_some() {
            self.set_month(other.month);
        }
        if other.document_type.is_some() {
            self.set_document_type(other.document_type);
        }
        if other.start_date.is_some() {
            self.set_start_date(other.start_date);
        }
        if other.end_date.is_some() {
            self.set_end_date(other.end_date);
        }
    }

    /// Human-readable `(label, value)` pairs for the active fields. A
    /// complete date range collapses into a single entry.
    pub fn describe(&self) -> Vec<(&'static str, String)> {
        let mut chips = Vec::new();
        if let Some(v) = &self.vendor {
            chips.push(("vendor", v.clone()));
        }
        if let Some(e) = self.entity {
            chips.push(("entity", e.label().to_string()));
        }
        if let Some(y) = self.year {
            chips.push(("year", y.to_string()));
        }
        if let Some(m) = self.month {
            chips.push(("month", month_label(m).map_or_else(|| m.to_string(), str::to_string)));
        }
        if let Some(t) = self.document_type {
            chips.push(("document_type", t.label().to_string()));
        }
        match (self.start_date, self.end_date) {
            (Some(s), Some(e)) => chips.push(("dates", format!("{s} \u{2192} {e}"))),
            (Some(s), None) => chips.push(("from", s.to_string())),
            (None, Some(e)) => chips.push(("to", e.to_string())),
            (None, None) => {}
        }
        chips
    }
}

/// Calendar date of an upload timestamp, in the offset it was written with.
fn upload_date(doc: &DocumentRecord) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(&doc.uploaded_at)
        .ok()
        .map(|dt| dt.date_naive())
}

pub fn matches(doc: &DocumentRecord, filter: &FilterState) -> bool {
    if let Some(vendor) = &filter.vendor {
        if !doc.vendor.to_lowercase().contains(&vendor.to_lowercase()) {
            return false;
        }
    }
    if let Some(entity) = filter.entity {
        let wanted = entity.label().to_lowercase();
        if !doc.entity.label().to_lowercase().contains(&wanted) {
            return false;
        }
    }
    if filter.year.is_some_and(|y| doc.year != y) {
        return false;
    }
    if filter.month.is_some_and(|m| doc.month != m) {
        return false;
    }
    if filter.document_type.is_some_and(|t| doc.doc_type != t) {
        return false;
    }
    if filter.start_date.is_some() || filter.end_date.is_some() {
        let Some(date) = upload_date(doc) else {
            return false;
        };
        if filter.start_date.is_some_and(|start| date < start) {
            return false;
        }
        if filter.end_date.is_some_and(|end| date > end) {
            return false;
        }
    }
    true
}

/// Narrow `docs` to the records satisfying every field of `filter`.
pub fn apply<'a>(docs: &'a [DocumentRecord], filter: &FilterState) -> Vec<&'a DocumentRecord> {
    docs.iter().filter(|d| matches(d, filter)).collect()
}

/// Plain substring search over vendor and filename.
pub fn text_search<'a>(docs: &'a [DocumentRecord], text: &str) -> Vec<&'a DocumentRecord> {
    let needle = text.to_lowercase();
    docs.iter()
        .filter(|d| {
            d.vendor.to_lowercase().contains(&needle) || d.filename.to_lowercase().contains(&needle)
        })
        .collect()
}

pub struct SearchOutcome<'a> {
    /// `None` when the query produced no structured filter.
    pub filter: Option<FilterState>,
    pub results: Vec<&'a DocumentRecord>,
}

/// Smart search: structured filtering when the query parses to anything,
/// text search otherwise.
pub fn search<'a>(docs: &'a [DocumentRecord], query: &str) -> SearchOutcome<'a> {
    search_with(docs, query, parse_query(query))
}

/// Like [`search`] with an already parsed (and possibly edited) filter. An
/// empty filter falls back to text search on `query`.
pub fn search_with<'a>(docs: &'a [DocumentRecord], query: &str, filter: FilterState) -> SearchOutcome<'a> {
    if query.trim().is_empty() && filter.is_empty() {
        return SearchOutcome {
            filter: None,
            results: docs.iter().collect(),
        };
    }

    if filter.is_empty() {
        debug!(query, "no structured filter, falling back to text search");
        return SearchOutcome {
            filter: None,
            results: text_search(docs, query),
        };
    }

    let results = apply(docs, &filter);
    debug!(query, matched = results.len(), "applied smart filter");
    SearchOutcome {
        filter: Some(filter),
        results,
    }
}
