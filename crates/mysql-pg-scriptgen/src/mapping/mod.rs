//! Column matching and default substitution.
//!
//! The mapping stage intersects the source and target column lists and
//! decides, per target column, where its value comes from in the
//! generated script:
//!
//! - present in both and nullable: copied from the source row as-is
//! - present in both but non-nullable: copied with nulls coalesced to the
//!   type default
//! - absent from the source but non-nullable: the type default is
//!   injected as a literal; the column is never read from the row
//!
//! The result is an ordered list: matched columns in source order,
//! followed by synthetic default-only columns in target ordinal order.

mod defaults;

pub use defaults::default_for;

use crate::core::schema::TargetCatalog;

/// How a column of the insert list obtains its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSource {
    /// Read from the source row and passed through unchanged.
    Row,

    /// Read from the source row; null values are replaced with the
    /// type default before insert.
    RowCoalesced {
        /// Literal substituted for null.
        default: &'static str,
    },

    /// Not present in the source; the type default is injected directly
    /// as a literal value.
    Default {
        /// Literal injected into the values list.
        default: &'static str,
    },
}

/// One column of the generated script's insert list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedColumn {
    /// Column name, shared by source and target for matched columns.
    pub name: String,

    /// Where the value comes from.
    pub source: ColumnSource,
}

impl MappedColumn {
    /// Whether the column is read from the source row.
    pub fn reads_row(&self) -> bool {
        !matches!(self.source, ColumnSource::Default { .. })
    }
}

/// Ordered column list for the generated script's select/insert clauses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMapping {
    /// Matched columns first (source order), synthetic columns last
    /// (target ordinal order). Never contains duplicate names.
    pub columns: Vec<MappedColumn>,
}

impl ColumnMapping {
    /// Names selected from the source table (matched columns only).
    pub fn select_list(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.reads_row())
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Names of the full insert list (matched plus synthetic).
    pub fn insert_list(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of columns in the insert list.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the mapping is empty (no column exists in both schemas
    /// and the target has no non-nullable columns).
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Order-preserving, case-sensitive intersection of source columns with
/// the target catalog.
///
/// For each source column, in source order, the name is included when an
/// equal-named column exists in the target. Duplicate names (possible
/// with certain catalog quirks) contribute a single entry, first wins.
pub fn match_columns(source_cols: &[String], catalog: &TargetCatalog) -> Vec<String> {
    let mut matched: Vec<String> = Vec::new();
    for col in source_cols {
        if matched.iter().any(|m| m == col) {
            continue;
        }
        if catalog.get(col).is_some() {
            matched.push(col.clone());
        }
    }
    matched
}

/// Build the full column mapping for one table pair.
pub fn build_mapping(source_cols: &[String], catalog: &TargetCatalog) -> ColumnMapping {
    let matched = match_columns(source_cols, catalog);

    let mut columns = Vec::with_capacity(catalog.len());
    for name in &matched {
        // match_columns only returns catalog members
        let source = match catalog.get(name) {
            Some(col) if !col.is_nullable => ColumnSource::RowCoalesced {
                default: default_for(&col.data_type),
            },
            _ => ColumnSource::Row,
        };
        columns.push(MappedColumn {
            name: name.clone(),
            source,
        });
    }

    for col in catalog.columns() {
        if col.is_nullable {
            continue;
        }
        if columns.iter().any(|c| c.name == col.name) {
            continue;
        }
        columns.push(MappedColumn {
            name: col.name.clone(),
            source: ColumnSource::Default {
                default: default_for(&col.data_type),
            },
        });
    }

    ColumnMapping { columns }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::TargetColumn;

    fn make_test_column(name: &str, data_type: &str, nullable: bool, pos: i32) -> TargetColumn {
        TargetColumn {
            name: name.to_string(),
            data_type: data_type.to_string(),
            is_nullable: nullable,
            ordinal_pos: pos,
        }
    }

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_match_preserves_source_order() {
        let catalog = TargetCatalog::new(vec![
            make_test_column("b", "text", true, 1),
            make_test_column("a", "text", true, 2),
            make_test_column("c", "text", true, 3),
        ]);
        let source = strings(&["c", "a", "b"]);
        assert_eq!(match_columns(&source, &catalog), strings(&["c", "a", "b"]));
    }

    #[test]
    fn test_match_is_case_sensitive_subsequence() {
        let catalog = TargetCatalog::new(vec![
            make_test_column("id", "integer", true, 1),
            make_test_column("Name", "text", true, 2),
        ]);
        let source = strings(&["id", "name", "extra"]);
        assert_eq!(match_columns(&source, &catalog), strings(&["id"]));
    }

    #[test]
    fn test_match_drops_duplicates_first_wins() {
        let catalog = TargetCatalog::new(vec![make_test_column("id", "integer", true, 1)]);
        let source = strings(&["id", "id"]);
        assert_eq!(match_columns(&source, &catalog), strings(&["id"]));
    }

    #[test]
    fn test_target_only_columns_are_not_matched() {
        let catalog = TargetCatalog::new(vec![
            make_test_column("id", "integer", true, 1),
            make_test_column("status", "boolean", true, 2),
        ]);
        let source = strings(&["id"]);
        assert_eq!(match_columns(&source, &catalog), strings(&["id"]));
    }

    #[test]
    fn test_mapping_appends_missing_non_nullable_with_default() {
        // Source [id, name, created], target adds non-nullable boolean
        // status: the mapping covers all four columns and status is a
        // literal default, never a row read.
        let catalog = TargetCatalog::new(vec![
            make_test_column("id", "integer", true, 1),
            make_test_column("name", "text", true, 2),
            make_test_column("created", "date", true, 3),
            make_test_column("status", "boolean", false, 4),
        ]);
        let source = strings(&["id", "name", "created"]);

        let mapping = build_mapping(&source, &catalog);
        assert_eq!(mapping.insert_list(), vec!["id", "name", "created", "status"]);
        assert_eq!(mapping.select_list(), vec!["id", "name", "created"]);
        assert_eq!(
            mapping.columns[3].source,
            ColumnSource::Default { default: "false" }
        );
        assert!(!mapping.columns[3].reads_row());
    }

    #[test]
    fn test_mapping_coalesces_matched_non_nullable() {
        let catalog = TargetCatalog::new(vec![
            make_test_column("id", "integer", false, 1),
            make_test_column("note", "text", true, 2),
        ]);
        let source = strings(&["id", "note"]);

        let mapping = build_mapping(&source, &catalog);
        assert_eq!(
            mapping.columns[0].source,
            ColumnSource::RowCoalesced { default: "0" }
        );
        assert_eq!(mapping.columns[1].source, ColumnSource::Row);
        // Coalesced columns are still part of the select list
        assert_eq!(mapping.select_list(), vec!["id", "note"]);
    }

    #[test]
    fn test_mapping_synthetic_columns_follow_ordinal_order() {
        let catalog = TargetCatalog::new(vec![
            make_test_column("z_flag", "boolean", false, 1),
            make_test_column("id", "integer", true, 2),
            make_test_column("a_count", "bigint", false, 3),
        ]);
        let source = strings(&["id"]);

        let mapping = build_mapping(&source, &catalog);
        assert_eq!(mapping.insert_list(), vec!["id", "z_flag", "a_count"]);
    }

    #[test]
    fn test_mapping_never_duplicates_catalog_quirks() {
        // A catalog reporting the same non-nullable name twice must not
        // produce a duplicate insert column.
        let catalog = TargetCatalog::new(vec![
            make_test_column("status", "boolean", false, 1),
            make_test_column("status", "boolean", false, 2),
        ]);
        let source: Vec<String> = Vec::new();

        let mapping = build_mapping(&source, &catalog);
        assert_eq!(mapping.insert_list(), vec!["status"]);
    }

    #[test]
    fn test_empty_intersection_keeps_non_nullable_targets() {
        let catalog = TargetCatalog::new(vec![
            make_test_column("only_target", "text", false, 1),
            make_test_column("optional", "text", true, 2),
        ]);
        let source = strings(&["only_source"]);

        let mapping = build_mapping(&source, &catalog);
        assert_eq!(mapping.insert_list(), vec!["only_target"]);
        assert!(mapping.select_list().is_empty());
    }
}
