//! Literal default values per target data type.

/// Literal placeholder used when a non-nullable target column has no
/// source value.
///
/// Total over all inputs: known type families map to a fixed literal and
/// anything unrecognized falls back to the empty-string literal. The
/// literals are JavaScript expressions, injected either into the values
/// array (synthetic columns) or into null-coalescing assignments
/// (matched non-nullable columns).
///
/// Includes both the short names ("varchar", "timestamp") and the
/// spellings `information_schema.columns` reports ("character varying",
/// "timestamp without time zone").
pub fn default_for(data_type: &str) -> &'static str {
    match data_type {
        // Numeric families
        "integer" | "int" | "int2" | "int4" | "int8" | "bigint" | "smallint" | "serial"
        | "bigserial" | "smallserial" | "numeric" | "decimal" | "real" | "double precision"
        | "money" => "0",

        // Boolean
        "boolean" | "bool" => "false",

        // Text, identifier, and semi-structured families
        "char" | "character" | "varchar" | "character varying" | "text" | "uuid" | "cidr"
        | "inet" | "macaddr" | "macaddr8" | "tsvector" | "json" | "jsonb" | "xml" => "''",

        // Date/time families: fixed epoch literal
        "date" | "timestamp" | "timestamp without time zone" | "timestamp with time zone"
        | "timestamptz" | "time" | "time without time zone" | "time with time zone" | "timetz"
        | "interval" => "\"1970-01-01\"",

        // Binary: empty bytea
        "bytea" => "'\\\\x'",

        _ => "''",
    }
}
