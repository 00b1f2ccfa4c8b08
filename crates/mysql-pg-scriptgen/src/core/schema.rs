//! Schema metadata types for target tables.
//!
//! These types carry the column metadata the default-substitution logic
//! needs: name, declared data type, and nullability.

use serde::{Deserialize, Serialize};

/// Column metadata for a target (PostgreSQL) table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetColumn {
    /// Column name.
    pub name: String,

    /// Declared data type (e.g. "integer", "character varying").
    pub data_type: String,

    /// Whether the column allows NULL.
    pub is_nullable: bool,

    /// Ordinal position (1-based).
    pub ordinal_pos: i32,
}

/// Column metadata for every column of one target table.
///
/// Built fresh per manifest entry and passed explicitly into mapping and
/// rendering. Columns keep their catalog (ordinal) order so everything
/// derived from the catalog is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetCatalog {
    columns: Vec<TargetColumn>,
}

impl TargetCatalog {
    /// Create a catalog from columns in ordinal order.
    pub fn new(columns: Vec<TargetColumn>) -> Self {
        Self { columns }
    }

    /// Look up a column by exact name. Linear scan, first match wins.
    pub fn get(&self, name: &str) -> Option<&TargetColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// All columns in ordinal order.
    pub fn columns(&self) -> &[TargetColumn] {
        &self.columns
    }

    /// Column names in ordinal order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the catalog holds no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
