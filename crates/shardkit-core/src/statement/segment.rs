use crate::{
    statement::parameter::{ParameterError, resolve_parameter},
    value::Value,
};
use serde::{Deserialize, Serialize};

///
/// ExpressionSegment
///
/// A value position in the statement: either an immediate literal or a
/// placeholder pointing into the bound-parameter list. Placeholders are
/// resolved at generation time, never at parse time.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ExpressionSegment {
    Literal(Value),
    /// 0-based index into the bound parameters, in source occurrence order.
    ParameterMarker(usize),
}

impl ExpressionSegment {
    #[must_use]
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    #[must_use]
    pub const fn parameter(index: usize) -> Self {
        Self::ParameterMarker(index)
    }

    #[must_use]
    pub const fn parameter_index(&self) -> Option<usize> {
        match self {
            Self::ParameterMarker(index) => Some(*index),
            Self::Literal(_) => None,
        }
    }

    /// Resolve to a concrete value against the bound parameters.
    pub fn resolve(&self, parameters: &[Value]) -> Result<Value, ParameterError> {
        match self {
            Self::Literal(value) => Ok(value.clone()),
            Self::ParameterMarker(index) => resolve_parameter(parameters, *index).cloned(),
        }
    }
}

///
/// ColumnSegment
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ColumnSegment {
    pub name: String,
    /// Qualifying table name or alias, when written as `owner.name`.
    pub owner: Option<String>,
}

impl ColumnSegment {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: None,
        }
    }

    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }
}

///
/// AssignmentSegment
///
/// One `column = expression` pair of an `INSERT ... SET` list.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AssignmentSegment {
    pub column: ColumnSegment,
    pub value: ExpressionSegment,
}

impl AssignmentSegment {
    #[must_use]
    pub const fn new(column: ColumnSegment, value: ExpressionSegment) -> Self {
        Self { column, value }
    }
}

///
/// SetAssignmentsSegment
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SetAssignmentsSegment {
    pub assignments: Vec<AssignmentSegment>,
}

impl SetAssignmentsSegment {
    #[must_use]
    pub const fn new(assignments: Vec<AssignmentSegment>) -> Self {
        Self { assignments }
    }
}

///
/// TableSegment
///
/// A table reference as written: name, optional alias, optional owner schema.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TableSegment {
    pub name: String,
    pub alias: Option<String>,
    pub owner: Option<String>,
}

impl TableSegment {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            owner: None,
        }
    }

    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }
}
