use crate::error::Result;
use crate::search::parse_query;

/// Print the parsed filter as pretty JSON.
pub fn run(query: &str) -> Result<()> {
    let filter = parse_query(query);
    println!("{}", serde_json::to_string_pretty(&filter)?);
    Ok(())
}
