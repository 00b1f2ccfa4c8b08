//! Generation run coordinator.
//!
//! Opens both database connections once, then processes manifest entries
//! strictly in order: introspect the source table, build a fresh target
//! catalog, compute the column mapping, render the script, and write it
//! out. Introspection failures abort the whole run; a write failure is
//! logged and the remaining entries are still processed.

use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::config::Config;
use crate::core::identifier::validate_plain;
use crate::error::Result;
use crate::introspect::{MysqlIntrospector, PgIntrospector};
use crate::manifest::ManifestEntry;
use crate::mapping::build_mapping;
use crate::render::render_script;

/// Generation run coordinator.
pub struct Generator {
    config: Config,
    source: MysqlIntrospector,
    target: PgIntrospector,
}

/// Result of a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Total manifest entries processed.
    pub scripts_total: usize,

    /// Scripts successfully written.
    pub scripts_written: usize,

    /// Scripts that failed to write.
    pub scripts_failed: usize,

    /// Output file names that failed to write.
    pub failed_scripts: Vec<String>,

    /// Total duration in seconds.
    pub duration_seconds: f64,
}

impl GenerationResult {
    /// Serialize the result as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Generator {
    /// Create a new generator, opening both database connections.
    pub async fn new(config: Config) -> Result<Self> {
        let source = MysqlIntrospector::connect(&config.source).await?;
        let target = PgIntrospector::connect(&config.target).await?;

        Ok(Self {
            config,
            source,
            target,
        })
    }

    /// Process every manifest entry in order.
    pub async fn run(&self, entries: &[ManifestEntry]) -> Result<GenerationResult> {
        let started = Instant::now();
        let mut written = 0usize;
        let mut failed_scripts: Vec<String> = Vec::new();

        std::fs::create_dir_all(&self.config.gen.out_dir)?;

        for entry in entries {
            info!(
                "Generating {} ({} -> {})",
                entry.output_file, entry.source_table, entry.target_table
            );

            validate_plain(&entry.source_table)?;
            validate_plain(&entry.target_table)?;

            let source_cols = self.source.columns(&entry.source_table).await?;
            // Fresh catalog per entry; stale metadata never crosses tables
            let catalog = self.target.catalog(&entry.target_table).await?;
            for name in catalog.names() {
                validate_plain(name)?;
            }
            for name in &source_cols {
                validate_plain(name)?;
            }

            let mapping = build_mapping(&source_cols, &catalog);
            let script = render_script(
                &entry.source_table,
                &entry.target_table,
                &self.config.target.schema,
                &mapping,
            );

            let path = self.config.gen.out_dir.join(&entry.output_file);
            match write_script(&path, &script) {
                Ok(()) => written += 1,
                Err(e) => {
                    error!("Failed to write {}: {}", path.display(), e);
                    failed_scripts.push(entry.output_file.clone());
                }
            }
        }

        let result = GenerationResult {
            scripts_total: entries.len(),
            scripts_written: written,
            scripts_failed: failed_scripts.len(),
            failed_scripts,
            duration_seconds: started.elapsed().as_secs_f64(),
        };

        info!(
            "Generated {}/{} scripts in {:.2}s",
            result.scripts_written, result.scripts_total, result.duration_seconds
        );

        Ok(result)
    }

    /// Close the source pool. The target client closes when dropped.
    pub async fn close(&self) {
        self.source.close().await;
    }
}

/// Write the script, overwriting any existing file, with full
/// read/write/execute permissions.
fn write_script(path: &Path, script: &str) -> std::io::Result<()> {
    std::fs::write(path, script)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o777))?;
    }

    Ok(())
}
