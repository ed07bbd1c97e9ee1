//! Filename heuristics used to prefill upload metadata.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::Entity;

lazy_static! {
    static ref YEAR_ANYWHERE: Regex = Regex::new(r"20[0-9]{2}").unwrap();
    static ref EXTENSION: Regex = Regex::new(r"\.[^/.]+$").unwrap();
    static ref NAME_SEPARATORS: Regex = Regex::new(r"[\s_\-]+").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Autofill {
    pub vendor: String,
    pub entity: Entity,
    pub year: i32,
    pub month: u32,
}

/// Guess vendor, entity and year from an uploaded file's name.
///
/// The vendor is everything before the first `-` or `_`, upper-cased. Only
/// the three base resorts are recognised; anything else is `UNKNOWN`. Without
/// a `20xx` run in the name the year defaults to `current_year`. Month is
/// always January, to be corrected by the user.
pub fn smart_autofill(filename: &str, current_year: i32) -> Autofill {
    let clean = filename.to_lowercase().replace(['-', '_'], " ");

    let entity = if clean.contains("andal") {
        Entity::Andalusia
    } else if clean.contains("porto") {
        Entity::PortoPetro
    } else if clean.contains("marbel") {
        Entity::Marbella
    } else {
        Entity::Unknown
    };

    let year = YEAR_ANYWHERE
        .find(&clean)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(current_year);

    let vendor = filename
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_uppercase();

    Autofill {
        vendor,
        entity,
        year,
        month: 1,
    }
}

/// Two-letter badge for a file: initials of the first two name parts, or the
/// first two letters of a single-part name. `DOC` when nothing is left.
pub fn initials(filename: &str) -> String {
    let stem = EXTENSION.replace(filename, "");
    let parts: Vec<&str> = NAME_SEPARATORS
        .split(&stem)
        .filter(|p| !p.is_empty())
        .collect();

    match parts.as_slice() {
        [] => "DOC".to_string(),
        [only] => only.chars().take(2).collect::<String>().to_uppercase(),
        [first, second, ..] => first
            .chars()
            .take(1)
            .chain(second.chars().take(1))
            .collect::<String>()
            .to_uppercase(),
    }
}
