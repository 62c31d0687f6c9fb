// Load-time error type shared by the loader and the data store.

use thiserror::Error;

/// Any failure while reading, parsing or joining the two source tables.
///
/// A load either produces both tables or fails as a whole; there is no
/// partially loaded state.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("{path} is missing required columns: {}", .columns.join(", "))]
    MissingColumns { path: String, columns: Vec<String> },

    #[error("invalid value in {path} at row {row}, column `{column}`: {message}")]
    InvalidValue {
        path: String,
        row: u64,
        column: &'static str,
        message: String,
    },

    #[error("validation error: {0}")]
    Validation(String),
}

impl LoadError {
    /// Re-label an error produced by a reader-based loader with the file it
    /// came from.
    pub(crate) fn with_path(self, path: &str) -> Self {
        match self {
            LoadError::Io { source, .. } => LoadError::Io {
                path: path.to_string(),
                source,
            },
            LoadError::Csv { source, .. } => LoadError::Csv {
                path: path.to_string(),
                source,
            },
            LoadError::MissingColumns { columns, .. } => LoadError::MissingColumns {
                path: path.to_string(),
                columns,
            },
            LoadError::InvalidValue {
                row,
                column,
                message,
                ..
            } => LoadError::InvalidValue {
                path: path.to_string(),
                row,
                column,
                message,
            },
            other @ LoadError::Validation(_) => other,
        }
    }
}
