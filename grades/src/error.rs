//! Error types for the TMUA grade transformation pipeline.
//!
//! One enum per stage, wrapped by the top-level [`PipelineError`]:
//!
//! - [`CsvError`] - reading and parsing the input file
//! - [`TransformError`] - applying the column plan
//! - [`WriteError`] - persisting the output file
//! - [`ConfigError`] - environment settings
//!
//! Conversion into [`PipelineError`] is automatic via `From`,
//! so `?` works across stage boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// CSV Parsing Errors
// =============================================================================

/// Errors while loading the input CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Input file missing or unreadable.
    #[error("Cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No header row.
    #[error("CSV file is empty")]
    EmptyFile,

    /// Malformed CSV (bad quoting, invalid record).
    #[error("Line {line}: {message}")]
    Parse { line: u64, message: String },

    /// A data row has more fields than the header.
    #[error("Line {line}: expected {expected} fields, found {found}")]
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },
}

// =============================================================================
// Transformation Errors
// =============================================================================

/// Errors while applying a column plan.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Required source columns absent from the header.
    #[error("Missing source column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

// =============================================================================
// Write Errors
// =============================================================================

/// Errors while persisting the output CSV.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Could not create the staging file next to the destination.
    #[error("Cannot create output in '{}': {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization or flush failure.
    #[error("Failed writing '{}': {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Could not move the staged file onto the destination.
    #[error("Cannot write '{}': {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Invalid environment settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key} (expected one of: {expected})")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level error returned by [`crate::transform::pipeline::transform`].
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    #[error("Write error: {0}")]
    Write(#[from] WriteError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

pub type CsvResult<T> = Result<T, CsvError>;

pub type TransformResult<T> = Result<T, TransformError>;

pub type WriteResult<T> = Result<T, WriteError>;

pub type PipelineResult<T> = Result<T, PipelineError>;
