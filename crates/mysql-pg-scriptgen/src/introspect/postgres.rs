//! PostgreSQL target schema introspection.
//!
//! Collects name, data type, and nullability for every column of a target
//! table, restricted to the configured schema. The catalog is returned as
//! a fresh value per table; nothing is cached across manifest entries.

use tokio_postgres::{Client, NoTls};
use tracing::{debug, info, warn};

use crate::config::TargetConfig;
use crate::core::schema::{TargetCatalog, TargetColumn};
use crate::error::{GenError, Result};

/// PostgreSQL target schema introspector.
pub struct PgIntrospector {
    client: Client,
    schema: String,
}

impl PgIntrospector {
    /// Connect to the target database from configuration.
    pub async fn connect(config: &TargetConfig) -> Result<Self> {
        let (client, connection) = config.pg_config().connect(NoTls).await?;

        // The connection task drives the socket; it ends when the client drops.
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                warn!("PostgreSQL connection error: {}", e);
            }
        });

        // Test connection
        client.simple_query("SELECT 1").await?;

        info!(
            "Connected to PostgreSQL target: {}:{}/{}",
            config.host, config.port, config.database
        );

        Ok(Self {
            client,
            schema: config.schema.clone(),
        })
    }

    /// Full column metadata for `table` in the configured schema.
    ///
    /// Columns come back in ordinal order. An empty result means the
    /// table does not exist in the schema, which is an introspection
    /// error and aborts the run.
    pub async fn catalog(&self, table: &str) -> Result<TargetCatalog> {
        let rows = self
            .client
            .query(
                "SELECT column_name, data_type, is_nullable, ordinal_position::int4 \
                 FROM information_schema.columns \
                 WHERE table_name = $1 AND table_schema = $2 \
                 ORDER BY ordinal_position",
                &[&table, &self.schema],
            )
            .await
            .map_err(|e| GenError::introspection(table, e.to_string()))?;

        if rows.is_empty() {
            return Err(GenError::introspection(
                table,
                format!("no columns found in schema {}", self.schema),
            ));
        }

        let mut columns = Vec::with_capacity(rows.len());
        for row in rows {
            columns.push(TargetColumn {
                name: row.get::<_, String>(0),
                data_type: row.get::<_, String>(1),
                is_nullable: row.get::<_, String>(2) == "YES",
                ordinal_pos: row.get::<_, i32>(3),
            });
        }

        debug!(
            "Target table {}.{} has {} columns",
            self.schema,
            table,
            columns.len()
        );
        Ok(TargetCatalog::new(columns))
    }
}
