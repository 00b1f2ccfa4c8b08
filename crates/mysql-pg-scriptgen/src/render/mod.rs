//! Migration script rendering.
//!
//! Emits one self-contained Node.js script per table pair. The script
//! reads the same `MYSQL_*`/`PG_*` environment variables as the
//! generator, truncates the target table, streams the matched columns
//! from the source, coalesces nulls in non-nullable columns to their
//! type defaults, inserts row by row with positional placeholders, and
//! tallies successes and failures without aborting on a bad row. Both
//! database handles are released in a `finally` block.
//!
//! Rendering is deterministic: the same table pair and mapping always
//! produce byte-identical output.

mod template;

pub use template::Template;

use crate::mapping::{ColumnMapping, ColumnSource};

/// Skeleton of the emitted script.
///
/// The insert goes through pg-promise, which binds the `$1..$n`
/// placeholders from the values array; the synthetic default-only
/// columns appear in that array as literals rather than row accessors.
const SCRIPT_TEMPLATE: &str = r#"require('dotenv').config();
const mysql = require('mysql2/promise');
const pgp = require('pg-promise')({
    promiseLib: require('bluebird')
});

const sourceConfig = {
    host: process.env.MYSQL_HOST,
    port: process.env.MYSQL_PORT,
    user: process.env.MYSQL_USER,
    password: process.env.MYSQL_PASSWORD,
    database: process.env.MYSQL_DATABASE
}
const destinationConfig = {
    host: process.env.PG_HOST,
    port: process.env.PG_PORT,
    database: process.env.PG_DATABASE,
    user: process.env.PG_USER,
    password: process.env.PG_PASSWORD
}

async function migrate() {
    let sourceDb;
    let destDb;
    try {
        sourceDb = await mysql.createConnection(sourceConfig);
        destDb = pgp(destinationConfig);
    } catch (error) {
        console.error('Migration failed:', error);
        return;
    }

    let success = 0;
    let errors = 0;
    try {
        await truncate(destDb, '{{qualified_target}}');

        console.log('Migrating table {{target_table}}...');
        const [rows] = await sourceDb.execute('SELECT {{select_list}} FROM {{source_table}}');
        for (let row of rows) {
            // Do any field modifications or add additional fields
{{null_handles}}
            await destDb.none('INSERT INTO {{qualified_target}} ({{insert_list}}) VALUES ({{placeholders}})', [{{row_values}}])
                .then(() => {
                    success++;
                })
                .catch((err) => {
                    console.log('INSERT ERROR::', err);
                    errors++;
                });
        }
        console.log('Migration of {{target_table}} table completed!');
        console.log('Success Count::', success);
        console.log('Error Count::', errors);
    } catch (error) {
        console.error('Migration of {{target_table}} failed:', error);
    } finally {
        await sourceDb.end();
        await destDb.$pool.end();
    }
}

async function truncate(dbConn, table) {
    await dbConn.none('truncate table ' + table + ';');
}

migrate();
"#;

/// Render the migration script for one table pair.
pub fn render_script(
    source_table: &str,
    target_table: &str,
    target_schema: &str,
    mapping: &ColumnMapping,
) -> String {
    Template::new(SCRIPT_TEMPLATE)
        .bind("source_table", source_table)
        .bind("target_table", target_table)
        .bind(
            "qualified_target",
            format!("{}.{}", target_schema, target_table),
        )
        .bind("select_list", select_clause(mapping))
        .bind("insert_list", mapping.insert_list().join(", "))
        .bind("placeholders", placeholders(mapping.len()))
        .bind("row_values", row_values(mapping))
        .bind("null_handles", null_handles(mapping))
        .render()
}

/// Select list of matched columns, or `*` when nothing matched and only
/// synthetic defaults remain (the loop still runs once per source row).
fn select_clause(mapping: &ColumnMapping) -> String {
    let cols = mapping.select_list();
    if cols.is_empty() {
        "*".to_string()
    } else {
        cols.join(", ")
    }
}

/// Positional parameter placeholders `$1..$n`.
fn placeholders(len: usize) -> String {
    (1..=len)
        .map(|i| format!("${}", i))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Values array aligned with the insert list: row accessors for matched
/// columns, literals for synthetic defaults.
fn row_values(mapping: &ColumnMapping) -> String {
    mapping
        .columns
        .iter()
        .map(|col| match &col.source {
            ColumnSource::Default { default } => (*default).to_string(),
            _ => format!("row.{}", col.name),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Null-coalescing assignments for non-nullable matched columns.
fn null_handles(mapping: &ColumnMapping) -> String {
    let mut lines = Vec::new();
    for col in &mapping.columns {
        if let ColumnSource::RowCoalesced { default } = &col.source {
            lines.push(format!(
                "            row.{name} = row.{name} == null ? {default} : row.{name};",
                name = col.name,
                default = default,
            ));
        }
    }
    lines.join("\n")
}
