//! Stable error codes for diagnostics.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Db(String),

    #[error("Schema setup failed: {0}")]
    Schema(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Db(_) => "DB_ERROR",
            Self::Schema(_) => "SCHEMA_ERROR",
            Self::Query(_) => "QUERY_ERROR",
            Self::Io(_) => "IO_ERROR",
        }
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Db(e.to_string())
    }
}
