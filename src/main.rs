mod autofill;
mod cli;
mod db;
mod error;
mod filter;
mod fmt;
mod models;
mod pager;
mod search;
mod settings;
mod store;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::list::ListArgs;
use cli::upload::UploadArgs;
use cli::{Cli, Commands};
use models::DocumentUpdate;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("xap=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        None | Some(Commands::Status) => cli::status::run(),
        Some(Commands::Init { data_dir }) => cli::init::run(data_dir),
        Some(Commands::Parse { query }) => cli::parse::run(&query),
        Some(Commands::Search { query, drop, page }) => cli::search::run(&query, &drop, page),
        Some(Commands::List {
            query,
            entity,
            year,
            month,
            doc_type,
            vendor,
            from_date,
            to_date,
            page,
        }) => cli::list::run(ListArgs {
            query,
            entity,
            year,
            month,
            doc_type,
            vendor,
            from_date,
            to_date,
            page,
        }),
        Some(Commands::Upload {
            file,
            vendor,
            entity,
            year,
            month,
            doc_type,
        }) => cli::upload::run(UploadArgs {
            file,
            vendor,
            entity,
            year,
            month,
            doc_type,
        }),
        Some(Commands::Edit {
            id,
            vendor,
            entity,
            year,
            month,
            doc_type,
        }) => cli::edit::run(
            &id,
            DocumentUpdate {
                vendor,
                entity,
                year,
                month,
                doc_type,
            },
        ),
        Some(Commands::Delete { id }) => cli::delete::run(&id),
        Some(Commands::Purge { yes }) => cli::purge::run(yes),
        Some(Commands::Demo) => cli::demo::run(),
        Some(Commands::Export { output }) => cli::transfer::export(output),
        Some(Commands::Import { file }) => cli::transfer::import(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
