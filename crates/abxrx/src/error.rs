//! Error types for the abxrx library.

use std::path::PathBuf;
use thiserror::Error;

use crate::fusion::ReportSource;

/// Main error type for abxrx operations.
#[derive(Debug, Error)]
pub enum AbxError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Empty file or no data to analyze.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// A required input was not supplied or resolves to nothing.
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// A phenotype cell outside the accepted categories.
    #[error(
        "Invalid phenotypic resistance value '{value}' for isolate '{isolate}', antibiotic '{antibiotic}'. Accepted values are: R, I, S, U"
    )]
    UnrecognizedValue {
        isolate: String,
        antibiotic: String,
        value: String,
    },

    /// A genotype report does not have the layout its tool should produce.
    #[error("Unexpected {tool} report layout: {message}")]
    SchemaMismatch {
        tool: ReportSource,
        message: String,
    },

    /// A requested report directory holds no files for its tool.
    #[error("No files detected for {tool} data in '{}'", .dir.display())]
    NoFilesFound { tool: ReportSource, dir: PathBuf },

    /// A profile with this name already exists.
    #[error("Profile '{0}' already exists. Provide a different name or delete the existing profile")]
    NameConflict(String),

    /// The named profile is not in the store.
    #[error("Profile '{0}' not found. See the profile list for available profiles")]
    ProfileNotFound(String),

    /// An export target is already present on disk.
    #[error("Output already exists: {}", .0.display())]
    OutputExists(PathBuf),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure while saving or loading persisted state.
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl AbxError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AbxError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for abxrx operations.
pub type Result<T> = std::result::Result<T, AbxError>;
