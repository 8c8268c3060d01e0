use crate::{
    model::Tables,
    statement::{predicate::OrPredicateSegment, segment::ExpressionSegment},
};
use serde::{Deserialize, Serialize};

///
/// CommonSelectItem
///
/// A projected expression with its optional alias.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct CommonSelectItem {
    expression: String,
    alias: Option<String>,
}

impl CommonSelectItem {
    #[must_use]
    pub fn new(expression: impl Into<String>, alias: Option<String>) -> Self {
        Self {
            expression: expression.into(),
            alias,
        }
    }

    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Label a result column carries: the alias when present, else the expression.
    #[must_use]
    pub fn column_label(&self) -> &str {
        self.alias().unwrap_or(&self.expression)
    }
}

///
/// PaginationValueSegment
///
/// Offset or row-count as written. `bound_opened` marks a strict comparison
/// (`ROW_NUMBER > n`, `ROWNUM < n`) in the row-number dialects.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PaginationValueSegment {
    pub value: ExpressionSegment,
    pub bound_opened: bool,
}

impl PaginationValueSegment {
    #[must_use]
    pub const fn new(value: ExpressionSegment) -> Self {
        Self {
            value,
            bound_opened: false,
        }
    }

    #[must_use]
    pub const fn opened(value: ExpressionSegment) -> Self {
        Self {
            value,
            bound_opened: true,
        }
    }
}

///
/// PaginationSegment
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PaginationSegment {
    pub offset: Option<PaginationValueSegment>,
    pub row_count: Option<PaginationValueSegment>,
}

///
/// SelectStatement
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SelectStatement {
    pub tables: Tables,
    pub items: Vec<CommonSelectItem>,
    pub where_segment: Option<OrPredicateSegment>,
    pub pagination: Option<PaginationSegment>,
}

impl SelectStatement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
