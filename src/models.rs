use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::XapError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Entity {
    #[serde(rename = "IKOS ANDALUSIA")]
    Andalusia,
    #[serde(rename = "IKOS PORTO PETRO")]
    PortoPetro,
    #[serde(rename = "IKOS SPANISH HOTEL MANAGEMENT")]
    Shm,
    #[serde(rename = "IKOS MARBELLA")]
    Marbella,
    #[serde(rename = "IKOS MARBELLA HOLDCO")]
    MarbellaHoldco,
    #[serde(rename = "IKOS PORTO PETRO HOLDCO")]
    PortoPetroHoldco,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl Entity {
    pub const ALL: [Entity; 7] = [
        Self::Andalusia,
        Self::PortoPetro,
        Self::Shm,
        Self::Marbella,
        Self::MarbellaHoldco,
        Self::PortoPetroHoldco,
        Self::Unknown,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Andalusia => "ANDALUSIA",
            Self::PortoPetro => "PORTO_PETRO",
            Self::Shm => "SHM",
            Self::Marbella => "MARBELLA",
            Self::MarbellaHoldco => "MARBELLA_HOLDCO",
            Self::PortoPetroHoldco => "PORTO_PETRO_HOLDCO",
            Self::Unknown => "UNKNOWN",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Andalusia => "IKOS ANDALUSIA",
            Self::PortoPetro => "IKOS PORTO PETRO",
            Self::Shm => "IKOS SPANISH HOTEL MANAGEMENT",
            Self::Marbella => "IKOS MARBELLA",
            Self::MarbellaHoldco => "IKOS MARBELLA HOLDCO",
            Self::PortoPetroHoldco => "IKOS PORTO PETRO HOLDCO",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the display label ("IKOS MARBELLA") or the key ("marbella",
/// "porto-petro-holdco"), case-insensitive.
impl FromStr for Entity {
    type Err = XapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        let as_key = wanted.replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|e| e.label() == wanted || e.key() == as_key)
            .ok_or_else(|| XapError::UnknownEntity(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocType {
    Statement,
    Invoice,
    #[serde(rename = "Credit Note")]
    CreditNote,
    #[serde(rename = "Payment Proof")]
    PaymentProof,
    Email,
    Image,
    Spreadsheet,
}

impl DocType {
    /// Declaration order; the query parser's primary pass depends on it.
    pub const ALL: [DocType; 7] = [
        Self::Statement,
        Self::Invoice,
        Self::CreditNote,
        Self::PaymentProof,
        Self::Email,
        Self::Image,
        Self::Spreadsheet,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Statement => "Statement",
            Self::Invoice => "Invoice",
            Self::CreditNote => "Credit Note",
            Self::PaymentProof => "Payment Proof",
            Self::Email => "Email",
            Self::Image => "Image",
            Self::Spreadsheet => "Spreadsheet",
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DocType {
    type Err = XapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|t| t.label().to_lowercase() == wanted)
            .ok_or_else(|| XapError::UnknownDocType(s.to_string()))
    }
}

pub const MONTH_MAP: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Short month label for 1-based `month`, or `None` outside 1..=12.
pub fn month_label(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_MAP.get(i as usize))
        .copied()
}

/// A stored document. Serialized field names are the export/import format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: String,
    pub vendor: String,
    pub entity: Entity,
    pub year: i32,
    pub month: u32,
    #[serde(rename = "type")]
    pub doc_type: DocType,
    pub filename: String,
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: String,
    pub size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
}

/// Metadata for a new upload, before the store assigns an id.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub vendor: String,
    pub entity: Entity,
    pub year: i32,
    pub month: u32,
    pub doc_type: DocType,
    pub filename: String,
    pub size: String,
    pub checksum: Option<String>,
}

/// Partial edit of a stored document; `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct DocumentUpdate {
    pub vendor: Option<String>,
    pub entity: Option<Entity>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub doc_type: Option<DocType>,
}

impl DocumentUpdate {
    pub fn is_empty(&self) -> bool {
        self.vendor.is_none()
            && self.entity.is_none()
            && self.year.is_none()
            && self.month.is_none()
            && self.doc_type.is_none()
    }
}

/// Structured search filter. Absent fields place no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub vendor: Option<String>,
    pub entity: Option<Entity>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub document_type: Option<DocType>,
    #[serde(rename = "startDate")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "endDate")]
    pub end_date: Option<NaiveDate>,
}
