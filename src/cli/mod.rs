pub mod delete;
pub mod demo;
pub mod edit;
pub mod init;
pub mod list;
pub mod parse;
pub mod purge;
pub mod search;
pub mod status;
pub mod transfer;
pub mod upload;
mod view;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::error::{XapError, Result};
use crate::filter::FilterField;
use crate::models::{DocType, Entity};

pub(crate) fn parse_date_opt(date: Option<&str>) -> Result<Option<NaiveDate>> {
    date.map(|d| {
        NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d")
            .map_err(|_| XapError::InvalidDate(d.to_string()))
    })
    .transpose()
}

#[derive(Parser)]
#[command(name = "xap", version, about = "Accounts-payable document tracker with natural-language search.")]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up xap: choose a data directory and initialize the database.
    Init {
        /// Path for xap data (default: ~/Documents/xap)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Show the structured filter a search query parses to, as JSON.
    Parse {
        /// Free-text query, e.g. "Tesla Andalusia 2024 June invoice"
        query: String,
    },
    /// Smart search: parse the query into filters, or fall back to text search.
    Search {
        /// Free-text query
        query: String,
        /// Drop a recognised field from the parsed filter (repeatable)
        #[arg(long = "drop", value_enum)]
        drop: Vec<FilterField>,
        /// Page number (1-based)
        #[arg(long, default_value = "1")]
        page: usize,
    },
    /// List documents, optionally narrowed by explicit filters.
    List {
        /// Start from the filter parsed from this query; explicit flags override it
        #[arg(long)]
        query: Option<String>,
        /// Entity label or key, e.g. 'IKOS MARBELLA' or marbella
        #[arg(long)]
        entity: Option<Entity>,
        #[arg(long)]
        year: Option<i32>,
        /// Month number: 1-12
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        /// Document type, e.g. invoice, 'credit note'
        #[arg(long = "type")]
        doc_type: Option<DocType>,
        /// Vendor substring
        #[arg(long)]
        vendor: Option<String>,
        /// Uploaded on or after: YYYY-MM-DD
        #[arg(long = "from")]
        from_date: Option<String>,
        /// Uploaded on or before: YYYY-MM-DD
        #[arg(long = "to")]
        to_date: Option<String>,
        #[arg(long, default_value = "1")]
        page: usize,
    },
    /// Register a document file. Missing metadata is guessed from the filename.
    Upload {
        /// Path to the document
        file: String,
        #[arg(long)]
        vendor: Option<String>,
        #[arg(long)]
        entity: Option<Entity>,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        /// Document type (default: Statement)
        #[arg(long = "type")]
        doc_type: Option<DocType>,
    },
    /// Edit a document's metadata.
    Edit {
        /// Document ID (shown in `xap list`)
        id: String,
        #[arg(long)]
        vendor: Option<String>,
        #[arg(long)]
        entity: Option<Entity>,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        #[arg(long = "type")]
        doc_type: Option<DocType>,
    },
    /// Delete a document permanently.
    Delete {
        /// Document ID (shown in `xap list`)
        id: String,
    },
    /// Wipe every document from the store.
    Purge {
        /// Confirm the wipe
        #[arg(long)]
        yes: bool,
    },
    /// Load mock documents into an empty store.
    Demo,
    /// Write all documents as a JSON array.
    Export {
        /// Output file (default: stdout)
        #[arg(long)]
        output: Option<String>,
    },
    /// Load documents from a JSON array written by `xap export`.
    Import {
        /// Path to the JSON file
        file: String,
    },
    /// Show current database and summary statistics.
    Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_opt() {
        assert_eq!(parse_date_opt(None).unwrap(), None);
        assert_eq!(
            parse_date_opt(Some("2024-02-29")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert!(matches!(parse_date_opt(Some("2023-02-29")), Err(XapError::InvalidDate(_))));
        assert!(parse_date_opt(Some("29/02/2024")).is_err());
    }

    #[test]
    fn test_cli_parses_enum_flags() {
        let cli = Cli::try_parse_from(["xap", "list", "--entity", "porto-petro", "--type", "credit note"]).unwrap();
        match cli.command {
            Some(Commands::List { entity, doc_type, .. }) => {
                assert_eq!(entity, Some(Entity::PortoPetro));
                assert_eq!(doc_type, Some(DocType::CreditNote));
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_cli_parses_drop_fields() {
        let cli = Cli::try_parse_from(["xap", "search", "tesla june", "--drop", "month", "--drop", "start-date"]).unwrap();
        match cli.command {
            Some(Commands::Search { drop, .. }) => {
                assert_eq!(drop, vec![FilterField::Month, FilterField::StartDate]);
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_cli_rejects_month_out_of_range() {
        assert!(Cli::try_parse_from(["xap", "list", "--month", "13"]).is_err());
    }
}
