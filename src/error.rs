use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum SetupError {
    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Connection failed: {0}")]
    Connection(#[source] SqlxError),

    #[error("Error creating database {database}: {source}")]
    DatabaseCreation {
        database: String,
        #[source]
        source: SqlxError,
    },

    #[error("Error selecting database {database}: {source}")]
    DatabaseSelection {
        database: String,
        #[source]
        source: SqlxError,
    },

    #[error("Error creating {table} table: {source}")]
    TableCreation {
        table: &'static str,
        #[source]
        source: SqlxError,
    },

    #[error("Error inspecting {table} table: {source}")]
    TableInspection {
        table: &'static str,
        #[source]
        source: SqlxError,
    },

    #[error("Existing {table} table has columns {found:?}, expected {expected:?}")]
    ColumnMismatch {
        table: &'static str,
        expected: Vec<String>,
        found: Vec<String>,
    },
}

impl SetupError {
    /// Table the failing step was working on, if any.
    pub fn table(&self) -> Option<&'static str> {
        match self {
            SetupError::TableCreation { table, .. }
            | SetupError::TableInspection { table, .. }
            | SetupError::ColumnMismatch { table, .. } => Some(*table),
            _ => None,
        }
    }
}
