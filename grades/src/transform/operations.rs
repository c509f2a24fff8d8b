//! Per-value operations applied by a column plan.

/// Transformation applied to a single cell after it is read from its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Prepend `value` unconditionally, even if the cell already starts with it.
    Prefix { value: String },
}

impl Operation {
    pub fn prefix(value: impl Into<String>) -> Self {
        Operation::Prefix {
            value: value.into(),
        }
    }

    /// Apply this operation to a value
    pub fn apply(&self, value: &str) -> String {
        match self {
            Operation::Prefix { value: prefix } => format!("{}{}", prefix, value),
        }
    }

    /// Short human-readable form for logs.
    pub fn describe(&self) -> String {
        match self {
            Operation::Prefix { value } => format!("prefix \"{}\"", value),
        }
    }
}

/// Apply operations in order.
pub fn apply_all(operations: &[Operation], value: String) -> String {
    operations.iter().fold(value, |acc, op| op.apply(&acc))
}
