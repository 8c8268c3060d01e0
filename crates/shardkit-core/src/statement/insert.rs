use crate::{
    model::Tables,
    statement::segment::{ColumnSegment, ExpressionSegment, SetAssignmentsSegment},
};
use serde::{Deserialize, Serialize};

///
/// InsertValue
///
/// One parsed `VALUES (...)` row, expressions in source order.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct InsertValue {
    pub expressions: Vec<ExpressionSegment>,
}

impl InsertValue {
    #[must_use]
    pub const fn new(expressions: Vec<ExpressionSegment>) -> Self {
        Self { expressions }
    }

    /// Number of placeholder expressions in this row.
    #[must_use]
    pub fn parameter_count(&self) -> usize {
        self.expressions
            .iter()
            .filter(|expr| expr.parameter_index().is_some())
            .count()
    }
}

///
/// InsertStatement
///
/// Parsed INSERT in one of two mutually exclusive shapes: an explicit
/// (or defaulted) column list with VALUES rows, or a SET assignment list.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct InsertStatement {
    pub tables: Tables,
    pub columns: Vec<ColumnSegment>,
    pub values: Vec<InsertValue>,
    pub set_assignment: Option<SetAssignmentsSegment>,
}

impl InsertStatement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// No explicit column list and no SET list: columns come from table metadata.
    #[must_use]
    pub const fn use_default_columns(&self) -> bool {
        self.columns.is_empty() && self.set_assignment.is_none()
    }

    /// Width of the first row (or of the SET list).
    #[must_use]
    pub fn value_size(&self) -> usize {
        if let Some(first) = self.values.first() {
            return first.expressions.len();
        }

        self.set_assignment
            .as_ref()
            .map_or(0, |set| set.assignments.len())
    }
}
