use rusqlite::types::Value as SqlValue;
use serde_json::{Map, Value};

use crate::error::{FundbookError, InsertError, Result};

/// One row's worth of input, keyed by column name.
pub type Record = Map<String, Value>;

/// Look up a field every row must carry. A key holding JSON `null` counts
/// as present and binds SQL NULL.
pub fn required(
    record: &Record,
    table: &'static str,
    field: &'static str,
) -> std::result::Result<SqlValue, InsertError> {
    record
        .get(field)
        .map(to_sql)
        .ok_or(InsertError::MissingField { table, field })
}

/// Look up a field that may be left out; absent keys bind SQL NULL.
pub fn optional(record: &Record, field: &str) -> SqlValue {
    record.get(field).map(to_sql).unwrap_or(SqlValue::Null)
}

pub fn to_sql(value: &Value) -> SqlValue {
    match value {
        Value::Null => SqlValue::Null,
        Value::Bool(b) => SqlValue::Integer(i64::from(*b)),
        Value::Number(n) if n.is_i64() => n.as_i64().map(SqlValue::Integer).unwrap_or(SqlValue::Null),
        // Beyond i64 range; text keeps every digit.
        Value::Number(n) if n.is_u64() => SqlValue::Text(n.to_string()),
        Value::Number(n) => n.as_f64().map(SqlValue::Real).unwrap_or(SqlValue::Null),
        Value::String(s) => SqlValue::Text(s.clone()),
        other => SqlValue::Text(other.to_string()),
    }
}

/// Parse CLI input: a single JSON object or an array of objects.
pub fn parse_records(text: &str) -> Result<Vec<Record>> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(vec![map]),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(map) => Ok(map),
                _ => Err(FundbookError::Other(format!("Entry {i} is not a JSON object"))),
            })
            .collect(),
        _ => Err(FundbookError::Other(
            "Expected a JSON object or an array of objects".to_string(),
        )),
    }
}
