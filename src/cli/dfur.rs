use colored::Colorize;

use fundbook::error::{FundbookError, Result};
use fundbook::inserter::insert_dfur_ok;
use fundbook::record::parse_records;

use super::{open_store, read_input};

/// Each project is inserted on its own; one bad record does not stop the rest.
pub fn add(file: &str) -> Result<()> {
    let store = open_store()?;
    let projects = parse_records(&read_input(file)?)?;

    let inserted = projects.iter().filter(|p| insert_dfur_ok(&store, p)).count();
    let failed = projects.len() - inserted;

    println!("{} DFUR project(s) inserted", inserted.to_string().green());
    if failed > 0 {
        return Err(FundbookError::Other(format!("{failed} DFUR project(s) failed")));
    }
    Ok(())
}
