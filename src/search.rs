//! Local natural-language query parser.
//!
//! Turns free text such as `"Tesla Andalusia 2024 June Invoice"` into a
//! [`FilterState`]. Recognition is keyword based and runs in a fixed order:
//! entity, year, month, document type, then vendor residue. The residue is
//! whatever is left of the input query once every recognised token and a
//! small stopword list have been removed.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::models::{DocType, Entity, FilterState};

const ENTITY_KEYWORDS: &[&str] = &[
    "andalusia",
    "andal",
    "porto",
    "petro",
    "marbella",
    "marbel",
    "shm",
    "spanish",
    "holdco",
    "management",
    "ikos",
];

const GENERIC_DOC_WORDS: &[&str] = &[
    "statement",
    "statements",
    "invoice",
    "invoices",
    "credit note",
    "payment",
    "proof",
    "email",
    "emails",
    "spreadsheet",
    "spreadsheets",
];

const STOPWORDS: &[&str] = &["per", "for", "in", "dated", "from", "to", "of", "and", "with"];

/// Substring heuristics used when no display label matched.
const DOC_TYPE_FALLBACK: &[(&str, DocType)] = &[
    ("statement", DocType::Statement),
    ("invoice", DocType::Invoice),
    ("credit", DocType::CreditNote),
    ("payment", DocType::PaymentProof),
    ("email", DocType::Email),
];

const MONTH_NAMES: [(&str, &str); 12] = [
    ("january", "jan"),
    ("february", "feb"),
    ("march", "mar"),
    ("april", "apr"),
    ("may", "may"),
    ("june", "jun"),
    ("july", "jul"),
    ("august", "aug"),
    ("september", "sep"),
    ("october", "oct"),
    ("november", "nov"),
    ("december", "dec"),
];

struct MonthPattern {
    number: u32,
    matcher: Regex,
    name: Regex,
    short: Regex,
}

/// ASCII word boundaries and ASCII-only case folding, so `ſhm` is not `shm`.
fn whole_word(word: &str) -> Regex {
    Regex::new(&format!(r"(?i-u)\b{}\b", regex::escape(word))).unwrap()
}

fn whole_words(words: &[&str]) -> Vec<Regex> {
    words.iter().map(|w| whole_word(w)).collect()
}

lazy_static! {
    static ref YEAR_PATTERN: Regex = Regex::new(r"(?-u)\b(20[0-9]{2})\b").unwrap();

    static ref MONTHS: Vec<MonthPattern> = MONTH_NAMES
        .iter()
        .zip(1u32..)
        .map(|(&(name, short), number)| MonthPattern {
            number,
            matcher: Regex::new(&format!(r"(?i-u)\b(?:{name}|{short})\b")).unwrap(),
            name: whole_word(name),
            short: whole_word(short),
        })
        .collect();

    static ref DOC_TYPE_LABELS: Vec<(DocType, Regex)> = DocType::ALL
        .iter()
        .map(|t| (*t, whole_word(t.label())))
        .collect();

    static ref ENTITY_WORDS: Vec<Regex> = whole_words(ENTITY_KEYWORDS);
    static ref GENERIC_WORDS: Vec<Regex> = whole_words(GENERIC_DOC_WORDS);
    static ref STOPWORD_PATTERNS: Vec<Regex> = whole_words(STOPWORDS);

    static ref NON_ALNUM: Regex = Regex::new(r"[^a-zA-Z0-9\s]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Parse a free-text search query into a structured filter.
///
/// Never fails: text with nothing recognisable yields a filter whose only
/// possible field is `vendor` (the cleaned query itself), and an empty query
/// yields an empty filter. Date bounds are never produced here.
pub fn parse_query(query: &str) -> FilterState {
    let lower = query.to_lowercase();

    let mut filter = FilterState {
        entity: extract_entity(&lower),
        year: extract_year(query),
        month: extract_month(query),
        document_type: extract_doc_type(&lower),
        ..Default::default()
    };
    filter.vendor = extract_vendor(query, &filter);

    trace!(query, ?filter, "parsed search query");
    filter
}

/// Mutually exclusive chain; earlier branches win.
fn extract_entity(lower: &str) -> Option<Entity> {
    let holdco = lower.contains("holdco");
    if lower.contains("andal") {
        Some(Entity::Andalusia)
    } else if lower.contains("porto") || lower.contains("petro") {
        Some(if holdco { Entity::PortoPetroHoldco } else { Entity::PortoPetro })
    } else if lower.contains("marbel") {
        Some(if holdco { Entity::MarbellaHoldco } else { Entity::Marbella })
    } else if lower.contains("shm") || lower.contains("spanish") || lower.contains("management") {
        Some(Entity::Shm)
    } else {
        None
    }
}

fn extract_year(query: &str) -> Option<i32> {
    let caps = YEAR_PATTERN.captures(query)?;
    let year: i32 = caps[1].parse().ok()?;
    (2000..2100).contains(&year).then_some(year)
}

/// First month in calendar order, not in query order.
fn extract_month(query: &str) -> Option<u32> {
    MONTHS
        .iter()
        .find(|m| m.matcher.is_match(query))
        .map(|m| m.number)
}

fn extract_doc_type(lower: &str) -> Option<DocType> {
    DocType::ALL
        .into_iter()
        .find(|t| lower.contains(&t.label().to_lowercase()))
        .or_else(|| {
            // Every fallback test overwrites the previous one, so the last
            // matching needle wins.
            DOC_TYPE_FALLBACK
                .iter()
                .rev()
                .find(|(needle, _)| lower.contains(needle))
                .map(|(_, t)| *t)
        })
}

fn strip_all(text: String, patterns: &[Regex]) -> String {
    patterns
        .iter()
        .fold(text, |acc, re| re.replace_all(&acc, "").into_owned())
}

fn extract_vendor(query: &str, filter: &FilterState) -> Option<String> {
    let mut remaining = query.to_string();

    if let Some(year) = filter.year {
        remaining = remaining.replacen(&year.to_string(), "", 1);
    }

    remaining = strip_all(remaining, &ENTITY_WORDS);

    if let Some(m) = filter.month.and_then(|n| MONTHS.iter().find(|m| m.number == n)) {
        remaining = m.name.replace_all(&remaining, "").into_owned();
        remaining = m.short.replace_all(&remaining, "").into_owned();
    }

    if let Some((_, re)) = filter
        .document_type
        .and_then(|t| DOC_TYPE_LABELS.iter().find(|(label, _)| *label == t))
    {
        remaining = re.replace_all(&remaining, "").into_owned();
    }

    remaining = strip_all(remaining, &GENERIC_WORDS);
    remaining = strip_all(remaining, &STOPWORD_PATTERNS);

    let cleaned = NON_ALNUM.replace_all(&remaining, "");
    let cleaned = WHITESPACE.replace_all(&cleaned, " ");
    let cleaned = cleaned.trim();

    (cleaned.len() > 1).then(|| cleaned.to_string())
}
