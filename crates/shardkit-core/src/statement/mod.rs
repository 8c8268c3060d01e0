//! Module: statement
//! Responsibility: the parsed-statement object tree handed over by the SQL
//! parser, plus placeholder resolution against bound parameters.
//! Does not own: SQL text parsing or per-shard SQL generation.

mod filler;
mod insert;
mod parameter;
mod predicate;
mod segment;
mod select;


pub use filler::TableFiller;
pub use insert::{InsertStatement, InsertValue};
pub use parameter::{ParameterError, resolve_parameter};
pub use predicate::{
    AndPredicate, CompareOperator, OrPredicateSegment, PredicateBetweenRightValue,
    PredicateCompareRightValue, PredicateInRightValue, PredicateRightValue, PredicateSegment,
};
pub use segment::{
    AssignmentSegment, ColumnSegment, ExpressionSegment, SetAssignmentsSegment, TableSegment,
};
pub use select::{
    CommonSelectItem, PaginationSegment, PaginationValueSegment, SelectStatement,
};
