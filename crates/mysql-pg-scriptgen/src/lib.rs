//! # mysql-pg-scriptgen
//!
//! MySQL to PostgreSQL data-migration script generator.
//!
//! Reads a CSV manifest of (output file, source table, target table)
//! triples, introspects both schemas, and emits one ready-to-run Node.js
//! migration script per entry:
//!
//! - **Column matching** by exact name, preserving source column order
//! - **Default substitution** for non-nullable target columns absent from
//!   the source
//! - **Null coalescing** for non-nullable columns that may hold nulls at
//!   runtime
//! - **Per-row error isolation** inside the emitted scripts: a bad row is
//!   logged and counted, never fatal
//!
//! The generator itself never executes a migration; it only produces the
//! scripts another process runs later.
//!
//! ## Example
//!
//! ```rust,no_run
//! use mysql_pg_scriptgen::{manifest, Config, Generator};
//!
//! #[tokio::main]
//! async fn main() -> mysql_pg_scriptgen::Result<()> {
//!     let config = Config::from_env()?;
//!     let entries = manifest::read_manifest(&config.gen.manifest_path)?;
//!     let generator = Generator::new(config).await?;
//!     let result = generator.run(&entries).await?;
//!     println!("Generated {} scripts", result.scripts_written);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod generator;
pub mod introspect;
pub mod manifest;
pub mod mapping;
pub mod render;

// Re-exports for convenient access
pub use crate::config::{Config, GenConfig, SourceConfig, TargetConfig};
pub use crate::core::schema::{TargetCatalog, TargetColumn};
pub use crate::error::{GenError, Result};
pub use crate::generator::{GenerationResult, Generator};
pub use crate::manifest::ManifestEntry;
pub use crate::mapping::{build_mapping, match_columns, ColumnMapping, ColumnSource, MappedColumn};
pub use crate::render::render_script;
