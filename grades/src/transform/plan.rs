//! Column plan definition.
//!
//! A [`ColumnPlan`] is the ordered list of output columns. Each column reads
//! from a source (an input column or a constant) and runs its operations.
//! Input columns not referenced by the plan are dropped.

use super::operations::Operation;

pub const COLLEGE_ID: &str = "College ID";
pub const TMUA_SCORE_IN: &str = "TMUA score";

pub const CID: &str = "CID";
pub const ADMISSIONS_CYCLE: &str = "Admissions Cycle";
pub const TMUA_SCORE_OUT: &str = "TMUA Score";

/// Where an output column takes its values from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSource {
    /// Input column read as its natural scalar type (see [`crate::models::ScalarKind`]).
    Scalar(String),
    /// Input column copied as text.
    Verbatim(String),
    /// The same value on every row.
    Constant(String),
}

impl ColumnSource {
    /// Input column referenced by this source, if any.
    pub fn input_column(&self) -> Option<&str> {
        match self {
            ColumnSource::Scalar(name) | ColumnSource::Verbatim(name) => Some(name.as_str()),
            ColumnSource::Constant(_) => None,
        }
    }
}

/// One output column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputColumn {
    pub name: String,
    pub source: ColumnSource,
    pub operations: Vec<Operation>,
}

impl OutputColumn {
    pub fn new(name: impl Into<String>, source: ColumnSource) -> Self {
        Self {
            name: name.into(),
            source,
            operations: Vec::new(),
        }
    }

    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    /// `source → name` line used when logging the mapping.
    pub fn describe(&self) -> String {
        let source = match &self.source {
            ColumnSource::Scalar(col) | ColumnSource::Verbatim(col) => col.clone(),
            ColumnSource::Constant(_) => "(constant)".to_string(),
        };
        let ops: Vec<String> = self.operations.iter().map(Operation::describe).collect();
        if ops.is_empty() {
            format!("{} → {}", source, self.name)
        } else {
            format!("{} → {} [{}]", source, self.name, ops.join(", "))
        }
    }
}

/// Ordered output columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnPlan {
    pub columns: Vec<OutputColumn>,
}

impl ColumnPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column(mut self, column: OutputColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Plan for a TMUA score export:
    /// `College ID → CID` (prefixed with `0`), constant `Admissions Cycle`,
    /// `TMUA score → TMUA Score` verbatim.
    pub fn tmua_scores(cycle: impl Into<String>) -> Self {
        Self::new()
            .column(
                OutputColumn::new(CID, ColumnSource::Scalar(COLLEGE_ID.to_string()))
                    .with_operation(Operation::prefix("0")),
            )
            .column(OutputColumn::new(
                ADMISSIONS_CYCLE,
                ColumnSource::Constant(cycle.into()),
            ))
            .column(OutputColumn::new(
                TMUA_SCORE_OUT,
                ColumnSource::Verbatim(TMUA_SCORE_IN.to_string()),
            ))
    }

    /// Input columns the plan reads, in plan order, without duplicates.
    pub fn source_columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = Vec::new();
        for col in self.columns.iter().filter_map(|c| c.source.input_column()) {
            if !columns.contains(&col) {
                columns.push(col);
            }
        }
        columns
    }

    /// Output header, in order.
    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Check that every source column exists in `headers`.
    pub fn validate_headers(&self, headers: &[String]) -> Result<(), Vec<String>> {
        let missing: Vec<String> = self
            .source_columns()
            .into_iter()
            .filter(|col| !headers.iter().any(|h| h == col))
            .map(str::to_string)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }
}
