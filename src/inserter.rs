//! Record inserts for users, DFUR projects, and budget entries.
//!
//! Each insert comes in two flavours: a typed one returning
//! `Result<_, InsertError>` and an `_ok` one that logs the failure and
//! reports a plain `bool` for callers that only need success or failure.

use rusqlite::types::Value as SqlValue;
use serde_json::Value;
use tracing::{debug, error};

use crate::error::InsertError;
use crate::record::{optional, required, to_sql, Record};
use crate::statement::{BUDGET_ENTRIES, DFUR_PROJECTS, USERS};
use crate::store::{execute_query, Store};

pub fn insert_user<S: Store>(store: &S, user: &Record) -> Result<(), InsertError> {
    let table = USERS.table;
    let params = vec![
        required(user, table, "username")?,
        required(user, table, "password")?,
        required(user, table, "role")?,
        required(user, table, "full_name")?,
        required(user, table, "position")?,
        required(user, table, "is_active")?,
    ];
    execute_query(store, &USERS, &params)?;
    Ok(())
}

pub fn insert_dfur<S: Store>(store: &S, project: &Record) -> Result<(), InsertError> {
    let params = DFUR_PROJECTS
        .columns
        .iter()
        .map(|&field| required(project, DFUR_PROJECTS.table, field))
        .collect::<Result<Vec<_>, _>>()?;
    execute_query(store, &DFUR_PROJECTS, &params)?;
    Ok(())
}

fn budget_entry_params(entry: &Record, created_by: &SqlValue) -> Result<Vec<SqlValue>, InsertError> {
    let table = BUDGET_ENTRIES.table;
    Ok(vec![
        required(entry, table, "transaction_id")?,
        required(entry, table, "transaction_date")?,
        required(entry, table, "category")?,
        optional(entry, "subcategory"),
        required(entry, table, "amount")?,
        optional(entry, "fund_source"),
        optional(entry, "payee"),
        optional(entry, "dv_number"),
        optional(entry, "expenditure_program"),
        optional(entry, "program_description"),
        optional(entry, "remarks"),
        optional(entry, "allocation_id"),
        created_by.clone(),
    ])
}

/// Insert a batch of budget entries attributed to `created_by`.
///
/// All rows land in one transaction: either every entry is committed or
/// none is. Required fields are checked for the whole batch before a
/// connection is opened. Returns the number of rows inserted.
pub fn insert_budget_entries<S: Store>(
    store: &S,
    entries: &[Record],
    created_by: &Value,
) -> Result<usize, InsertError> {
    let created_by = to_sql(created_by);
    let rows = entries
        .iter()
        .map(|entry| budget_entry_params(entry, &created_by))
        .collect::<Result<Vec<_>, _>>()?;

    let sql = BUDGET_ENTRIES.render(store.placeholder());
    let inserted = store.with_transaction(|exec| {
        let mut inserted = 0;
        for params in &rows {
            inserted += exec.execute(&sql, params)?;
        }
        Ok(inserted)
    })?;
    debug!(inserted, "budget entries committed");
    Ok(inserted)
}

/// Collapse a typed insert result into success or failure, logging why.
pub fn succeeded<T>(operation: &str, result: Result<T, InsertError>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            error!(operation, error = %e, "insert failed");
            false
        }
    }
}

pub fn insert_user_ok<S: Store>(store: &S, user: &Record) -> bool {
    succeeded("insert_user", insert_user(store, user))
}

pub fn insert_dfur_ok<S: Store>(store: &S, project: &Record) -> bool {
    succeeded("insert_dfur", insert_dfur(store, project))
}

pub fn insert_budget_entries_ok<S: Store>(store: &S, entries: &[Record], created_by: &Value) -> bool {
    succeeded(
        "insert_budget_entries",
        insert_budget_entries(store, entries, created_by),
    )
}
