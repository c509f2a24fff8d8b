//! # tmua-grades - TMUA score export reshaping
//!
//! Turns a TMUA score export (`College ID`, `TMUA score`, plus any other
//! columns) into the admissions upload format:
//!
//! ```text
//! CID,Admissions Cycle,TMUA Score
//! 01234567,2024,6.5
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Input CSV  │────▶│   Parser    │────▶│  Executor   │────▶│   Writer    │
//! │ (UTF8/L1)   │     │  (Table)    │     │(ColumnPlan) │     │  (atomic)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tmua_grades::transform;
//!
//! let summary = transform("2024", "in.csv", "out.csv").unwrap();
//! println!("Transformed {} rows", summary.rows);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Per-stage error types
//! - [`config`] - Environment settings
//! - [`logs`] - Progress logging
//! - [`models`] - Table and column typing
//! - [`parser`] - CSV loading with encoding detection
//! - [`transform`] - Column plan, executor and pipeline
//! - [`writer`] - CSV output

// Core modules
pub mod cli;
pub mod config;
pub mod error;
pub mod logs;
pub mod models;

// Input / output
pub mod parser;
pub mod writer;

// Transformation
pub mod transform;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ConfigError, CsvError, PipelineError, TransformError, WriteError};

pub use models::{ScalarKind, Table};

pub use parser::{parse_bytes, parse_csv, parse_csv_file, ParseResult};

pub use writer::{to_csv_string, write_csv_file, write_table};

pub use transform::{
    execute, transform, ColumnPlan, ColumnSource, GradeTransformer, Operation, OutputColumn,
    TransformSummary,
};
