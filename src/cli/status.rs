use colored::Colorize;
use comfy_table::{Cell, Table};

use fundbook::db::{get_connection, table_counts};
use fundbook::error::Result;
use fundbook::settings::{load_settings, settings_path};

pub fn run() -> Result<()> {
    let settings = load_settings()?;
    let db_path = settings.database_path();

    println!("Settings:   {}", settings_path().display());
    println!("Database:   {}", db_path.display());
    println!("Parameters: {:?}", settings.placeholder);

    if !db_path.exists() {
        println!();
        println!("{}", "Database not found. Run `fundbook init` to set up.".yellow());
        return Ok(());
    }

    let conn = get_connection(&db_path)?;
    let mut table = Table::new();
    table.set_header(vec!["Table", "Rows"]);
    for (name, count) in table_counts(&conn)? {
        table.add_row(vec![Cell::new(name), Cell::new(count)]);
    }
    println!("\n{table}");
    Ok(())
}
