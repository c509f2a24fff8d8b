//! End-to-end grade transformation: load, apply the plan, write.
//!
//! # Example
//!
//! ```rust,no_run
//! use tmua_grades::transform::pipeline::transform;
//!
//! let summary = transform("2024", "tmua_export.csv", "tmua_upload.csv")?;
//! println!("Wrote {} rows", summary.rows);
//! # Ok::<(), tmua_grades::PipelineError>(())
//! ```

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{PipelineResult, TransformResult};
use crate::logs::{log_info, log_info_indent, log_success, log_warning};
use crate::models::Table;
use crate::parser::parse_csv_file;
use crate::writer::write_csv_file;

use super::executor::{dropped_columns, execute};
use super::plan::ColumnPlan;

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub cycle: String,
    /// Rows written, equal to rows read.
    pub rows: usize,
    /// Encoding the input was decoded from.
    pub encoding: String,
    /// Input columns not carried into the output.
    pub dropped_columns: Vec<String>,
}

/// Reshapes TMUA score exports for one admissions cycle.
#[derive(Debug, Clone)]
pub struct GradeTransformer {
    cycle: String,
    plan: ColumnPlan,
}

impl GradeTransformer {
    pub fn new(cycle: impl Into<String>) -> Self {
        let cycle = cycle.into();
        let plan = ColumnPlan::tmua_scores(cycle.clone());
        Self { cycle, plan }
    }

    pub fn cycle(&self) -> &str {
        &self.cycle
    }

    pub fn plan(&self) -> &ColumnPlan {
        &self.plan
    }

    /// Apply the plan to an in-memory table.
    pub fn transform_table(&self, table: &Table) -> TransformResult<Table> {
        execute(table, &self.plan)
    }

    /// Read `input`, transform it and write `output`.
    ///
    /// Nothing is written unless parsing and transformation both succeed.
    pub fn transform(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> PipelineResult<TransformSummary> {
        let input = input.as_ref();
        let output = output.as_ref();

        log_info(format!("📄 Reading {}", input.display()));
        let parsed = parse_csv_file(input)?;
        log_success(format!("Encoding: {}", parsed.encoding));
        log_success(format!(
            "Read {} rows, {} columns",
            parsed.table.row_count(),
            parsed.table.headers.len()
        ));

        log_info(format!("🗺️  Mapping for cycle \"{}\":", self.cycle));
        for column in &self.plan.columns {
            log_info_indent(column.describe(), 1);
        }

        let dropped = dropped_columns(&parsed.table, &self.plan);
        if !dropped.is_empty() {
            log_warning(format!("Ignoring {} column(s): {}", dropped.len(), dropped.join(", ")));
        }

        let table = self.transform_table(&parsed.table)?;

        write_csv_file(&table, output)?;
        log_success(format!("💾 Wrote {} rows to {}", table.row_count(), output.display()));

        Ok(TransformSummary {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            cycle: self.cycle.clone(),
            rows: table.row_count(),
            encoding: parsed.encoding,
            dropped_columns: dropped,
        })
    }
}

/// Transform the TMUA scores in `input` for `cycle` and write them to `output`.
pub fn transform(
    cycle: &str,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> PipelineResult<TransformSummary> {
    GradeTransformer::new(cycle).transform(input, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CsvError, PipelineError, TransformError, WriteError};
    use std::fs;

    const SAMPLE: &str = "College ID,TMUA score,Extra\n1234567,6.5,ignored\n89,5.0,ignored\n";

    #[test]
    fn test_end_to_end_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        fs::write(&input, SAMPLE).unwrap();

        let summary = transform("2024", &input, &output).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "CID,Admissions Cycle,TMUA Score\n01234567,2024,6.5\n089,2024,5.0\n"
        );
        assert_eq!(summary.rows, 2);
        assert_eq!(summary.cycle, "2024");
        assert_eq!(summary.encoding, "utf-8");
        assert_eq!(summary.dropped_columns, vec!["Extra"]);
    }

    #[test]
    fn test_trailing_whitespace_line_adds_no_row() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        fs::write(&input, "College ID,TMUA score\n1234567,6.5\n   \n").unwrap();

        let summary = transform("2024", &input, &output).unwrap();

        assert_eq!(summary.rows, 1);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "CID,Admissions Cycle,TMUA Score\n01234567,2024,6.5\n"
        );
    }

    #[test]
    fn test_missing_column_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        fs::write(&input, "College ID,Extra\n1,x\n").unwrap();

        let err = transform("2024", &input, &output).unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Transform(TransformError::MissingColumns(ref cols)) if cols == &["TMUA score"]
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.csv");

        let err = transform("2024", dir.path().join("nope.csv"), &output).unwrap_err();

        assert!(matches!(err, PipelineError::Csv(CsvError::Io { .. })));
        assert!(err.to_string().contains("nope.csv"));
        assert!(!output.exists());
    }

    #[test]
    fn test_unwritable_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        fs::write(&input, SAMPLE).unwrap();

        let err = transform("2024", &input, dir.path().join("no/such/dir/out.csv")).unwrap_err();
        assert!(matches!(err, PipelineError::Write(WriteError::Create { .. })));
    }

    #[test]
    fn test_malformed_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        fs::write(&input, "College ID,TMUA score\n1,2,3\n").unwrap();

        let err = transform("2024", &input, &output).unwrap_err();
        assert!(matches!(err, PipelineError::Csv(CsvError::TooManyFields { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn test_latin1_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        let mut bytes = b"College ID,TMUA score,Name\n".to_vec();
        bytes.extend_from_slice(b"1234567,6.5,Ren\xe9e Lef\xe8vre\n");
        fs::write(&input, bytes).unwrap();

        let summary = transform("2024", &input, &output).unwrap();

        assert_eq!(summary.rows, 1);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "CID,Admissions Cycle,TMUA Score\n01234567,2024,6.5\n"
        );
    }

    #[test]
    fn test_transformer_accessors() {
        let transformer = GradeTransformer::new("2025");
        assert_eq!(transformer.cycle(), "2025");
        assert_eq!(transformer.plan(), &ColumnPlan::tmua_scores("2025"));
    }
}
