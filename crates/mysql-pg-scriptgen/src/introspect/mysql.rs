//! MySQL source schema introspection.
//!
//! Uses SQLx for connection pooling and async query execution.

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::Row;
use tracing::{debug, info};

use crate::config::SourceConfig;
use crate::core::identifier::quote_mysql;
use crate::error::{GenError, Result};

/// Connection pool timeout.
const POOL_CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);

/// MySQL source schema introspector.
pub struct MysqlIntrospector {
    pool: MySqlPool,
}

impl MysqlIntrospector {
    /// Connect to the source database from configuration.
    pub async fn connect(config: &SourceConfig) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(POOL_CONNECTION_TIMEOUT)
            .connect_with(config.connect_options())
            .await?;

        // Test connection
        sqlx::query("SELECT 1").fetch_one(&pool).await?;

        info!(
            "Connected to MySQL source: {}:{}/{}",
            config.host, config.port, config.database
        );

        Ok(Self { pool })
    }

    /// Column names of `table` in declared order.
    ///
    /// Issues `DESCRIBE` and returns the `Field` column. Any failure
    /// (table absent, permission denied, connection lost) is an
    /// introspection error, which aborts the run.
    pub async fn columns(&self, table: &str) -> Result<Vec<String>> {
        let query = format!("DESCRIBE {}", quote_mysql(table)?);

        let rows: Vec<MySqlRow> = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| GenError::introspection(table, e.to_string()))?;

        let mut columns = Vec::with_capacity(rows.len());
        for row in rows {
            let name: String = row
                .try_get("Field")
                .map_err(|e| GenError::introspection(table, e.to_string()))?;
            columns.push(name);
        }

        debug!("Source table {} has {} columns", table, columns.len());
        Ok(columns)
    }

    /// Close the connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
