//! Identifier validation and quoting.
//!
//! Table and column names cannot be passed as parameters in prepared
//! statements, and the generated scripts embed them unquoted in both SQL
//! and JavaScript. Names are therefore validated up front:
//!
//! 1. [`validate_identifier`] rejects empty, null-byte, and overlong names
//!    before they reach a catalog query
//! 2. [`quote_mysql`] applies backtick quoting for the DESCRIBE query
//! 3. [`validate_plain`] restricts names that land verbatim in a generated
//!    script to characters that are valid in both SQL and JavaScript

use crate::error::{GenError, Result};

/// Maximum identifier length (conservative limit across both databases).
/// - PostgreSQL: 63 bytes
/// - MySQL: 64 characters
const MAX_IDENTIFIER_LENGTH: usize = 64;

/// Validate an identifier for basic safety.
///
/// Rejects:
/// - Empty identifiers
/// - Identifiers containing null bytes
/// - Identifiers exceeding maximum length
pub fn validate_identifier(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(GenError::Config("Identifier cannot be empty".to_string()));
    }

    if name.contains('\0') {
        return Err(GenError::Config(format!(
            "Identifier contains null byte (possible injection attempt): {:?}",
            name
        )));
    }

    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(GenError::Config(format!(
            "Identifier exceeds maximum length of {} bytes (got {} bytes): {:?}",
            MAX_IDENTIFIER_LENGTH,
            name.len(),
            name
        )));
    }

    Ok(())
}

/// Quote a MySQL identifier.
///
/// Escapes backticks by doubling them and wraps in backticks. Validates
/// the identifier before quoting.
pub fn quote_mysql(name: &str) -> Result<String> {
    validate_identifier(name)?;
    Ok(format!("`{}`", name.replace('`', "``")))
}

/// Validate a name that is embedded unquoted in a generated script.
///
/// The emitted scripts use the name in SQL clauses (`SELECT a, b FROM t`)
/// and as a JavaScript property accessor (`row.a`), so it must be a plain
/// identifier in both grammars: a leading ASCII letter or underscore
/// followed by ASCII alphanumerics, underscores, or `$`.
pub fn validate_plain(name: &str) -> Result<()> {
    validate_identifier(name)?;

    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => {
            return Err(GenError::Config(format!(
                "Identifier must start with a letter or underscore: {:?}",
                name
            )))
        }
    }
    for c in chars {
        if !c.is_ascii_alphanumeric() && c != '_' && c != '$' {
            return Err(GenError::Config(format!(
                "Identifier contains a character that cannot be embedded in a generated script: {:?}",
                name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty() {
        assert!(validate_identifier("").is_err());
    }

    #[test]
    fn test_validate_rejects_null_byte() {
        assert!(validate_identifier("users\0--").is_err());
    }

    #[test]
    fn test_validate_rejects_overlong() {
        let name = "a".repeat(MAX_IDENTIFIER_LENGTH + 1);
        assert!(validate_identifier(&name).is_err());
    }

    #[test]
    fn test_quote_mysql_doubles_backticks() {
        assert_eq!(quote_mysql("users").unwrap(), "`users`");
        assert_eq!(quote_mysql("odd`name").unwrap(), "`odd``name`");
    }

    #[test]
    fn test_validate_plain_accepts_common_names() {
        assert!(validate_plain("users").is_ok());
        assert!(validate_plain("_internal").is_ok());
        assert!(validate_plain("created_at2").is_ok());
        assert!(validate_plain("price$usd").is_ok());
    }

    #[test]
    fn test_validate_plain_rejects_injection_shapes() {
        assert!(validate_plain("users; DROP TABLE x").is_err());
        assert!(validate_plain("name'--").is_err());
        assert!(validate_plain("1starts_with_digit").is_err());
        assert!(validate_plain("has space").is_err());
    }
}
