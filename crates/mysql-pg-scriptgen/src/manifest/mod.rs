//! CSV manifest of migration jobs.
//!
//! The manifest lists one migration job per row:
//!
//! ```text
//! output_filename,source_table,target_table
//! user.js,user,user
//! orders.js,orders,order_history
//! ```
//!
//! The first row is a header and is skipped. Every subsequent row must
//! have exactly three non-empty fields; anything else fails the whole run
//! with a format error naming the offending line.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};

/// One migration job from the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// File name of the generated script, relative to the output directory.
    pub output_file: String,

    /// Table to copy rows from (MySQL).
    pub source_table: String,

    /// Table to copy rows into (PostgreSQL).
    pub target_table: String,
}

/// Read and parse the manifest file.
///
/// A missing or unreadable file is a [`GenError::ManifestRead`]; a
/// malformed row is a [`GenError::ManifestFormat`]. Both abort the run.
pub fn read_manifest(path: &Path) -> Result<Vec<ManifestEntry>> {
    let file = File::open(path)
        .map_err(|e| GenError::ManifestRead(format!("{}: {}", path.display(), e)))?;
    parse_manifest(file)
}

/// Parse manifest rows from a reader.
pub fn parse_manifest<R: Read>(reader: R) -> Result<Vec<ManifestEntry>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut entries = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| GenError::ManifestRead(e.to_string()))?;
        let line = record.position().map_or(0, |p| p.line());

        if record.len() != 3 {
            return Err(GenError::manifest_format(
                line,
                format!("expected 3 fields, found {}", record.len()),
            ));
        }

        let entry = ManifestEntry {
            output_file: record[0].to_string(),
            source_table: record[1].to_string(),
            target_table: record[2].to_string(),
        };

        if entry.output_file.is_empty() {
            return Err(GenError::manifest_format(line, "empty output filename"));
        }
        if entry.source_table.is_empty() {
            return Err(GenError::manifest_format(line, "empty source table"));
        }
        if entry.target_table.is_empty() {
            return Err(GenError::manifest_format(line, "empty target table"));
        }

        entries.push(entry);
    }

    Ok(entries)
}
