use thiserror::Error;

/// Why an insert did not land. Callers that only care about success can
/// collapse this with [`crate::inserter::succeeded`].
#[derive(Error, Debug)]
pub enum InsertError {
    #[error("Connection failure: {0}")]
    ConnectionFailure(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Missing field `{field}` for {table}")]
    MissingField { table: &'static str, field: &'static str },

    #[error("Driver error: {0}")]
    DriverError(String),
}

impl InsertError {
    /// Error raised while acquiring a connection.
    pub fn connection(err: rusqlite::Error) -> Self {
        InsertError::ConnectionFailure(err.to_string())
    }
}

impl From<rusqlite::Error> for InsertError {
    fn from(err: rusqlite::Error) -> Self {
        use rusqlite::ErrorCode;

        match err.sqlite_error_code() {
            Some(ErrorCode::ConstraintViolation) => InsertError::ConstraintViolation(err.to_string()),
            Some(ErrorCode::CannotOpen) | Some(ErrorCode::NotADatabase) => {
                InsertError::ConnectionFailure(err.to_string())
            }
            _ => InsertError::DriverError(err.to_string()),
        }
    }
}

#[derive(Error, Debug)]
pub enum FundbookError {
    #[error(transparent)]
    Insert(#[from] InsertError),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid record input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, FundbookError>;
