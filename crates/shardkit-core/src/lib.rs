//! Core of ShardKit: statement model, route value generation, insert
//! normalization with encryption derivation, and merged-result pagination.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod encrypt;
pub mod error;
pub mod merge;
pub mod model;
pub mod rewrite;
pub mod route;
pub mod statement;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Statement and value vocabulary only.
/// No engines, errors, or encryptor plumbing are re-exported here.
///

pub mod prelude {
    pub use crate::{
        model::{Column, SchemaMetaData, Table, TableMetaData, Tables},
        statement::{
            AndPredicate, AssignmentSegment, ColumnSegment, CommonSelectItem, CompareOperator,
            ExpressionSegment, InsertStatement, InsertValue, OrPredicateSegment,
            PaginationSegment, PaginationValueSegment, PredicateRightValue, PredicateSegment,
            SelectStatement, SetAssignmentsSegment, TableSegment,
        },
        value::{Float64, Value},
    };
}
