use crate::config::Config;
use crate::db::executor::SchemaExecutor;
use crate::db::mysql::MySqlSession;
use crate::db::schema::{TABLES, TableDef};
use crate::error::SetupError;
use std::fmt;
use tracing::{debug, info, warn};

/// Progress notification emitted after each successful step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusEvent {
    DatabaseReady {
        database: String,
    },
    TableReady {
        table: &'static str,
        label: &'static str,
        created: bool,
    },
    Complete,
}

impl fmt::Display for StatusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusEvent::DatabaseReady { .. } => f.write_str("Database created or already exists"),
            StatusEvent::TableReady { label, .. } => write!(f, "{label} table ready"),
            StatusEvent::Complete => f.write_str("Database setup complete!"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStatus {
    pub name: &'static str,
    /// `false` when the table already existed before this run.
    pub created: bool,
}

/// Outcome of a complete run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub database: String,
    pub tables: Vec<TableStatus>,
}

impl StatusReport {
    pub fn table_names(&self) -> Vec<&'static str> {
        self.tables.iter().map(|t| t.name).collect()
    }

    pub fn created_count(&self) -> usize {
        self.tables.iter().filter(|t| t.created).count()
    }
}

/// Runs the fixed provisioning sequence, halting on the first failure.
/// Nothing is rolled back: tables created before a failing step remain.
pub struct SchemaInitializer<'a> {
    database: &'a str,
    tables: &'a [TableDef],
    verify_columns: bool,
}

impl<'a> SchemaInitializer<'a> {
    pub fn new(database: &'a str) -> Self {
        Self {
            database,
            tables: &TABLES,
            verify_columns: false,
        }
    }

    pub fn from_config(cfg: &'a Config) -> Self {
        Self::new(&cfg.database.name).verify_columns(cfg.verify_columns)
    }

    /// Replace the table list; entries are created in slice order.
    pub fn with_tables(mut self, tables: &'a [TableDef]) -> Self {
        self.tables = tables;
        self
    }

    pub fn verify_columns(mut self, enabled: bool) -> Self {
        self.verify_columns = enabled;
        self
    }

    pub async fn run<E, F>(&self, exec: &mut E, mut on_event: F) -> Result<StatusReport, SetupError>
    where
        E: SchemaExecutor + ?Sized,
        F: FnMut(&StatusEvent),
    {
        exec.create_database(self.database)
            .await
            .map_err(|source| SetupError::DatabaseCreation {
                database: self.database.to_string(),
                source,
            })?;
        info!(database = %self.database, "database ready");
        on_event(&StatusEvent::DatabaseReady {
            database: self.database.to_string(),
        });

        exec.use_database(self.database)
            .await
            .map_err(|source| SetupError::DatabaseSelection {
                database: self.database.to_string(),
                source,
            })?;

        let mut tables = Vec::with_capacity(self.tables.len());
        for table in self.tables {
            let status = self.ensure_table(&mut *exec, table).await?;
            on_event(&StatusEvent::TableReady {
                table: table.name,
                label: table.label,
                created: status.created,
            });
            tables.push(status);
        }

        on_event(&StatusEvent::Complete);
        Ok(StatusReport {
            database: self.database.to_string(),
            tables,
        })
    }

    async fn ensure_table<E>(&self, exec: &mut E, table: &TableDef) -> Result<TableStatus, SetupError>
    where
        E: SchemaExecutor + ?Sized,
    {
        let existed = exec
            .table_exists(self.database, table.name)
            .await
            .map_err(|source| SetupError::TableInspection {
                table: table.name,
                source,
            })?;

        exec.execute_ddl(table.ddl)
            .await
            .map_err(|source| SetupError::TableCreation {
                table: table.name,
                source,
            })?;

        if self.verify_columns {
            self.check_columns(&mut *exec, table).await?;
        }

        info!(table = table.name, created = !existed, "table ready");
        Ok(TableStatus {
            name: table.name,
            created: !existed,
        })
    }

    /// Names only; types and constraints of an existing table are not compared.
    async fn check_columns<E>(&self, exec: &mut E, table: &TableDef) -> Result<(), SetupError>
    where
        E: SchemaExecutor + ?Sized,
    {
        let found = exec
            .table_columns(self.database, table.name)
            .await
            .map_err(|source| SetupError::TableInspection {
                table: table.name,
                source,
            })?;
        let matches = found.len() == table.columns.len()
            && found
                .iter()
                .zip(table.columns)
                .all(|(have, want)| have.eq_ignore_ascii_case(want));
        if !matches {
            return Err(SetupError::ColumnMismatch {
                table: table.name,
                expected: table.columns.iter().map(|c| c.to_string()).collect(),
                found,
            });
        }
        debug!(table = table.name, "columns verified");
        Ok(())
    }
}

/// Connect, provision, and release the connection on every exit path.
pub async fn initialize<F>(cfg: &Config, on_event: F) -> Result<StatusReport, SetupError>
where
    F: FnMut(&StatusEvent),
{
    let mut session = MySqlSession::connect(&cfg.database)
        .await
        .map_err(SetupError::Connection)?;

    let result = SchemaInitializer::from_config(cfg)
        .run(&mut session, on_event)
        .await;

    if let Err(e) = session.close().await {
        warn!(error = %e, "failed to close server connection cleanly");
    }
    result
}
