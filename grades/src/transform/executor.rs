//! Plan executor
//!
//! Applies a [`ColumnPlan`] to a [`Table`], producing a new table with exactly
//! the plan's columns. Row count and row order are preserved.

use crate::error::{TransformError, TransformResult};
use crate::models::{ScalarKind, Table};

use super::plan::{ColumnPlan, ColumnSource};

/// How to read each output column from an input row, resolved once per table.
enum Resolved<'a> {
    Column { index: usize, kind: ScalarKind },
    Constant(&'a str),
}

/// Execute a column plan on a table.
///
/// Fails with [`TransformError::MissingColumns`] naming every source column
/// absent from the table header; nothing is produced in that case.
pub fn execute(table: &Table, plan: &ColumnPlan) -> TransformResult<Table> {
    plan.validate_headers(&table.headers)
        .map_err(TransformError::MissingColumns)?;

    let resolved: Vec<Resolved<'_>> = plan
        .columns
        .iter()
        .map(|column| resolve(table, &column.source))
        .collect::<TransformResult<_>>()?;

    let mut output = Table::new(plan.headers());
    output.rows.reserve(table.row_count());

    for row in &table.rows {
        let cells = plan
            .columns
            .iter()
            .zip(&resolved)
            .map(|(column, source)| {
                let raw = match source {
                    Resolved::Column { index, kind } => {
                        kind.render(row.get(*index).map(String::as_str).unwrap_or(""))
                    }
                    Resolved::Constant(value) => value.to_string(),
                };
                super::operations::apply_all(&column.operations, raw)
            })
            .collect();
        output.push_row(cells);
    }

    Ok(output)
}

/// Input headers the plan does not read.
pub fn dropped_columns(table: &Table, plan: &ColumnPlan) -> Vec<String> {
    let used = plan.source_columns();
    table
        .headers
        .iter()
        .filter(|h| !used.contains(&h.as_str()))
        .cloned()
        .collect()
}

fn resolve<'a>(table: &Table, source: &'a ColumnSource) -> TransformResult<Resolved<'a>> {
    let lookup = |name: &str| {
        table
            .column_index(name)
            .ok_or_else(|| TransformError::MissingColumns(vec![name.to_string()]))
    };

    Ok(match source {
        ColumnSource::Scalar(name) => {
            let index = lookup(name.as_str())?;
            Resolved::Column {
                index,
                kind: ScalarKind::infer(table.column(index)),
            }
        }
        ColumnSource::Verbatim(name) => Resolved::Column {
            index: lookup(name.as_str())?,
            kind: ScalarKind::Text,
        },
        ColumnSource::Constant(value) => Resolved::Constant(value.as_str()),
    })
}
