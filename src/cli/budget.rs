use colored::Colorize;
use serde_json::Value;

use fundbook::error::Result;
use fundbook::inserter::insert_budget_entries;
use fundbook::record::parse_records;

use super::{open_store, read_input};

pub fn add(file: &str, created_by: &str) -> Result<()> {
    let store = open_store()?;
    let entries = parse_records(&read_input(file)?)?;
    let inserted = insert_budget_entries(&store, &entries, &attribution(created_by))?;
    let noun = if inserted == 1 { "entry" } else { "entries" };
    println!("{} budget {noun} inserted", inserted.to_string().green());
    Ok(())
}

/// Numeric IDs bind as integers, anything else as text.
fn attribution(created_by: &str) -> Value {
    created_by
        .parse::<i64>()
        .map(Value::from)
        .unwrap_or_else(|_| Value::from(created_by))
}
