//! Error types for the script generator.

use thiserror::Error;

/// Main error type for generation operations.
#[derive(Error, Debug)]
pub enum GenError {
    /// Configuration error (missing environment variable, bad port, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Source database connection or query error
    #[error("Source database error: {0}")]
    Source(#[from] sqlx::Error),

    /// Target database connection or query error
    #[error("Target database error: {0}")]
    Target(#[from] tokio_postgres::Error),

    /// Manifest file missing or unreadable
    #[error("Manifest read error: {0}")]
    ManifestRead(String),

    /// Manifest row malformed (wrong field count, empty field)
    #[error("Manifest format error at line {line}: {message}")]
    ManifestFormat { line: u64, message: String },

    /// Catalog query failed or table absent
    #[error("Introspection failed for table {table}: {message}")]
    Introspection { table: String, message: String },

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GenError {
    /// Create an Introspection error for a table.
    pub fn introspection(table: impl Into<String>, message: impl Into<String>) -> Self {
        GenError::Introspection {
            table: table.into(),
            message: message.into(),
        }
    }

    /// Create a ManifestFormat error for a manifest line.
    pub fn manifest_format(line: u64, message: impl Into<String>) -> Self {
        GenError::ManifestFormat {
            line,
            message: message.into(),
        }
    }

    /// Process exit code for this error class.
    pub fn exit_code(&self) -> u8 {
        match self {
            GenError::Config(_) => 1,
            GenError::ManifestRead(_) | GenError::ManifestFormat { .. } => 2,
            GenError::Introspection { .. } => 3,
            GenError::Source(_) => 4,
            GenError::Target(_) => 5,
            GenError::Json(_) => 6,
            GenError::Io(_) => 7,
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        // Add error chain for wrapped errors
        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, GenError>;
