use thiserror::Error;

#[derive(Error, Debug)]
pub enum XapError {
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown document: {0}")]
    UnknownDocument(String),

    #[error("Unknown entity: {0}")]
    UnknownEntity(String),

    #[error("Unknown document type: {0}")]
    UnknownDocType(String),

    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("Invalid month (expected 1-12): {0}")]
    InvalidMonth(u32),

    #[error("File already uploaded as {id} ({filename})")]
    DuplicateFile { id: String, filename: String },

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, XapError>;
