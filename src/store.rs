//! Storage adapters.
//!
//! Record logic hands over an [`InsertStatement`] plus bind values; the
//! store decides placeholder syntax, owns the connection for the duration
//! of one unit of work, and guarantees commit-or-rollback.

use std::path::{Path, PathBuf};

use rusqlite::types::Value as SqlValue;
use rusqlite::{params_from_iter, Connection};
use tracing::{debug, warn};

use crate::db::get_connection;
use crate::error::InsertError;
use crate::statement::{InsertStatement, Placeholder};

/// Something that can run one parameterized statement.
pub trait Executor {
    fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<usize, InsertError>;
}

pub trait Store {
    fn placeholder(&self) -> Placeholder;

    /// Run `work` inside one transaction on a freshly acquired connection.
    /// Commits when `work` returns `Ok`, rolls back otherwise. The connection
    /// is released before this returns, whichever way it went.
    fn with_transaction<T, F>(&self, work: F) -> Result<T, InsertError>
    where
        F: FnOnce(&dyn Executor) -> Result<T, InsertError>;
}

impl Executor for Connection {
    fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<usize, InsertError> {
        debug!(sql, params = params.len(), "execute");
        let mut stmt = self.prepare_cached(sql)?;
        Ok(stmt.execute(params_from_iter(params.iter()))?)
    }
}

#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
    placeholder: Placeholder,
}

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>, placeholder: Placeholder) -> Self {
        Self {
            path: path.into(),
            placeholder,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Store for SqliteStore {
    fn placeholder(&self) -> Placeholder {
        self.placeholder
    }

    fn with_transaction<T, F>(&self, work: F) -> Result<T, InsertError>
    where
        F: FnOnce(&dyn Executor) -> Result<T, InsertError>,
    {
        let mut conn = get_connection(&self.path).map_err(InsertError::connection)?;
        debug!(path = %self.path.display(), "connection acquired");

        let tx = conn.transaction()?;
        match work(&*tx) {
            Ok(value) => {
                tx.commit()?;
                Ok(value)
            }
            Err(err) => {
                warn!(error = %err, "rolling back");
                if let Err(rollback_err) = tx.rollback() {
                    warn!(error = %rollback_err, "rollback failed");
                }
                Err(err)
            }
        }
    }
}

/// Execute a single statement and commit it as one unit.
pub fn execute_query<S: Store>(
    store: &S,
    statement: &InsertStatement,
    params: &[SqlValue],
) -> Result<usize, InsertError> {
    let sql = statement.render(store.placeholder());
    store.with_transaction(|exec| exec.execute(&sql, params))
}
