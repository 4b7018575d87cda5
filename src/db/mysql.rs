use crate::config::DatabaseConfig;
use crate::db::executor::SchemaExecutor;
use crate::db::schema::{create_database_sql, use_database_sql};
use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{Connection, Error as SqlxError, Executor};
use tracing::debug;

/// A single server connection held for the whole provisioning run.
pub struct MySqlSession {
    conn: MySqlConnection,
}

impl MySqlSession {
    /// Connect to the server without selecting a database.
    pub async fn connect(cfg: &DatabaseConfig) -> Result<Self, SqlxError> {
        let opts = MySqlConnectOptions::new()
            .host(&cfg.host)
            .port(cfg.port)
            .username(&cfg.user)
            .password(&cfg.password);
        let conn = MySqlConnection::connect_with(&opts).await?;
        debug!(host = %cfg.host, port = cfg.port, user = %cfg.user, "connected to server");
        Ok(Self { conn })
    }

    pub fn connection(&mut self) -> &mut MySqlConnection {
        &mut self.conn
    }

    /// Graceful close. Dropping the session also releases the socket.
    pub async fn close(self) -> Result<(), SqlxError> {
        self.conn.close().await
    }
}

#[async_trait]
impl SchemaExecutor for MySqlSession {
    async fn create_database(&mut self, name: &str) -> Result<(), SqlxError> {
        self.conn
            .execute(create_database_sql(name).as_str())
            .await?;
        Ok(())
    }

    async fn use_database(&mut self, name: &str) -> Result<(), SqlxError> {
        // A bare &str goes over the text protocol; USE cannot be prepared.
        self.conn
            .execute(use_database_sql(name).as_str())
            .await?;
        Ok(())
    }

    async fn table_exists(&mut self, database: &str, table: &str) -> Result<bool, SqlxError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM information_schema.TABLES WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ?",
        )
        .bind(database)
        .bind(table)
        .fetch_one(&mut self.conn)
        .await?;
        Ok(count > 0)
    }

    async fn table_columns(
        &mut self,
        database: &str,
        table: &str,
    ) -> Result<Vec<String>, SqlxError> {
        // information_schema reports names as binary on some servers
        sqlx::query_scalar(
            r#"SELECT CAST(COLUMN_NAME AS CHAR) FROM information_schema.COLUMNS
               WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ?
               ORDER BY ORDINAL_POSITION"#,
        )
        .bind(database)
        .bind(table)
        .fetch_all(&mut self.conn)
        .await
    }

    async fn execute_ddl(&mut self, sql: &str) -> Result<(), SqlxError> {
        self.conn.execute(sql).await?;
        Ok(())
    }
}
