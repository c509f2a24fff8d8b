//! In-memory table model.
//!
//! - [`Table`] - ordered headers plus ordered rows of text cells
//! - [`ScalarKind`] - whole-column typing used when a column is read as its
//!   natural scalar type (integer, float or text)

use std::fmt;

/// A rectangular table of text cells. Every row has `headers.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding short rows with empty cells and cutting long ones.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of the first header named `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// All cells of the column at `index`, in row order.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(String::as_str).unwrap_or(""))
    }

    /// Look up a cell by row position and header name.
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.column_index(column)?;
        self.rows
            .get(row)
            .map(|r| r.get(index).map(String::as_str).unwrap_or(""))
    }
}

/// Type inferred for a whole column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Integer,
    Float,
    Text,
}

impl ScalarKind {
    /// Infer a column type from its cells. Surrounding whitespace is ignored
    /// when testing for numbers; blank cells are skipped. A column with no
    /// values at all is text.
    pub fn infer<'a, I>(cells: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut kind = None;

        for cell in cells.into_iter().map(str::trim).filter(|c| !c.is_empty()) {
            let cell_kind = if cell.parse::<i128>().is_ok() {
                ScalarKind::Integer
            } else if is_decimal(cell) {
                ScalarKind::Float
            } else {
                return ScalarKind::Text;
            };

            kind = Some(match (kind, cell_kind) {
                (Some(ScalarKind::Float), _) | (_, ScalarKind::Float) => ScalarKind::Float,
                _ => ScalarKind::Integer,
            });
        }

        kind.unwrap_or(ScalarKind::Text)
    }

    /// String form of `cell` when read as this kind. Text cells are kept
    /// verbatim; numeric cells are trimmed and canonicalised.
    pub fn render(self, cell: &str) -> String {
        let trimmed = cell.trim();
        match self {
            ScalarKind::Text => cell.to_string(),
            _ if trimmed.is_empty() => String::new(),
            ScalarKind::Integer => trimmed
                .parse::<i128>()
                .map(|n| n.to_string())
                .unwrap_or_else(|_| cell.to_string()),
            ScalarKind::Float => trimmed
                .parse::<f64>()
                .map(float_repr)
                .unwrap_or_else(|_| cell.to_string()),
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarKind::Integer => "integer",
            ScalarKind::Float => "float",
            ScalarKind::Text => "text",
        };
        f.write_str(name)
    }
}

/// Shortest round-trip form with at least one fractional digit (`12.0`,
/// `6.5`). Exponents below -4 or from 16 up switch to scientific notation
/// with a signed, two-digit exponent (`1e+16`, `1.5e-05`).
fn float_repr(f: f64) -> String {
    if f == 0.0 {
        return format!("{:?}", f);
    }
    let sci = format!("{:e}", f);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return format!("{:?}", f),
    };
    if (-4..16).contains(&exp) {
        format!("{:?}", f)
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exp.abs())
    }
}

/// Finite decimal literal such as `6.5`, `-0.25` or `1e3`. Rejects `inf`/`nan` spellings.
fn is_decimal(cell: &str) -> bool {
    cell.parse::<f64>().map(f64::is_finite).unwrap_or(false)
        && cell.chars().any(|c| c.is_ascii_digit())
}
