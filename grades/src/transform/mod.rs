//! Transformation module.
//!
//! - Plan: ordered output columns and their sources
//! - Operations: per-cell rewrites applied by the plan
//! - Executor: applies a plan to a table
//! - Pipeline: load, execute, write

pub mod executor;
pub mod operations;
pub mod pipeline;
pub mod plan;

pub use executor::{dropped_columns, execute};
pub use operations::Operation;
pub use pipeline::{transform, GradeTransformer, TransformSummary};
pub use plan::{ColumnPlan, ColumnSource, OutputColumn};
