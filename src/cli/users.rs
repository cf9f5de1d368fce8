use colored::Colorize;
use comfy_table::{Cell, Table};
use rusqlite::types::Value;

use fundbook::db::get_connection;
use fundbook::error::{FundbookError, Result};
use fundbook::inserter::insert_user_ok;
use fundbook::record::parse_records;

use super::{open_store, read_input};

/// Each user is inserted on its own; one bad record does not stop the rest.
pub fn add(file: &str) -> Result<()> {
    let store = open_store()?;
    let users = parse_records(&read_input(file)?)?;

    let mut failed = 0usize;
    for user in &users {
        if !insert_user_ok(&store, user) {
            failed += 1;
            continue;
        }
        let name = user.get("username").and_then(|v| v.as_str()).unwrap_or_default();
        println!("{} {name}", "Added user:".green());
    }

    if failed > 0 {
        return Err(FundbookError::Other(format!(
            "{failed} of {} user(s) failed",
            users.len()
        )));
    }
    Ok(())
}

pub fn list() -> Result<()> {
    let store = open_store()?;
    let conn = get_connection(store.path())?;
    let mut stmt = conn.prepare(
        "SELECT id, username, role, full_name, position, is_active FROM users ORDER BY username",
    )?;
    let rows: Vec<(i64, String, String, String, String, Value)> = stmt
        .query_map([], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
            ))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut table = Table::new();
    table.set_header(vec!["ID", "Username", "Role", "Full Name", "Position", "Active"]);
    for (id, username, role, full_name, position, active) in rows {
        table.add_row(vec![
            Cell::new(id),
            Cell::new(username),
            Cell::new(role),
            Cell::new(full_name),
            Cell::new(position),
            Cell::new(active_label(&active)),
        ]);
    }
    println!("Users\n{table}");
    Ok(())
}

fn active_label(value: &Value) -> String {
    match value {
        Value::Integer(0) | Value::Null => "no".to_string(),
        Value::Integer(_) => "yes".to_string(),
        Value::Text(s) => s.clone(),
        other => format!("{other:?}"),
    }
}
