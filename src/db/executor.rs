use async_trait::async_trait;
use sqlx::Error as SqlxError;

/// Engine-facing operations the initializer needs, one round-trip each.
///
/// `MySqlSession` talks to a real server; tests substitute a recorder.
#[async_trait]
pub trait SchemaExecutor: Send {
    async fn create_database(&mut self, name: &str) -> Result<(), SqlxError>;

    /// Select `name` for the rest of the session.
    async fn use_database(&mut self, name: &str) -> Result<(), SqlxError>;

    async fn table_exists(&mut self, database: &str, table: &str) -> Result<bool, SqlxError>;

    /// Column names in ordinal order; empty when the table is absent.
    async fn table_columns(
        &mut self,
        database: &str,
        table: &str,
    ) -> Result<Vec<String>, SqlxError>;

    async fn execute_ddl(&mut self, sql: &str) -> Result<(), SqlxError>;
}
