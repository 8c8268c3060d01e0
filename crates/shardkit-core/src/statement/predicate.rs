use crate::statement::segment::{ColumnSegment, ExpressionSegment};
use serde::{Deserialize, Serialize};

///
/// CompareOperator
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum CompareOperator {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl CompareOperator {
    /// Parse a SQL comparison symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "=" => Some(Self::Eq),
            "<>" | "!=" => Some(Self::Ne),
            "<" => Some(Self::Lt),
            "<=" => Some(Self::Lte),
            ">" => Some(Self::Gt),
            ">=" => Some(Self::Gte),
            _ => None,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "<>",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
        }
    }
}

///
/// PredicateRightValue
///
/// Right-hand side of a WHERE predicate, still holding unresolved placeholders.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum PredicateRightValue {
    Compare(PredicateCompareRightValue),
    In(PredicateInRightValue),
    Between(PredicateBetweenRightValue),
}

impl PredicateRightValue {
    #[must_use]
    pub const fn compare(operator: CompareOperator, expression: ExpressionSegment) -> Self {
        Self::Compare(PredicateCompareRightValue {
            operator,
            expression,
        })
    }

    #[must_use]
    pub const fn in_list(expressions: Vec<ExpressionSegment>) -> Self {
        Self::In(PredicateInRightValue { expressions })
    }

    #[must_use]
    pub const fn between(between: ExpressionSegment, and: ExpressionSegment) -> Self {
        Self::Between(PredicateBetweenRightValue { between, and })
    }
}

///
/// PredicateCompareRightValue
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PredicateCompareRightValue {
    pub operator: CompareOperator,
    pub expression: ExpressionSegment,
}

///
/// PredicateInRightValue
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PredicateInRightValue {
    pub expressions: Vec<ExpressionSegment>,
}

///
/// PredicateBetweenRightValue
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PredicateBetweenRightValue {
    pub between: ExpressionSegment,
    pub and: ExpressionSegment,
}

///
/// PredicateSegment
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PredicateSegment {
    pub column: ColumnSegment,
    pub right_value: PredicateRightValue,
}

impl PredicateSegment {
    #[must_use]
    pub const fn new(column: ColumnSegment, right_value: PredicateRightValue) -> Self {
        Self {
            column,
            right_value,
        }
    }
}

///
/// AndPredicate
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct AndPredicate {
    pub predicates: Vec<PredicateSegment>,
}

impl AndPredicate {
    #[must_use]
    pub const fn new(predicates: Vec<PredicateSegment>) -> Self {
        Self { predicates }
    }
}

///
/// OrPredicateSegment
///
/// WHERE clause in disjunctive normal form: OR of AND groups.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct OrPredicateSegment {
    pub and_predicates: Vec<AndPredicate>,
}

impl OrPredicateSegment {
    #[must_use]
    pub const fn new(and_predicates: Vec<AndPredicate>) -> Self {
        Self { and_predicates }
    }
}
