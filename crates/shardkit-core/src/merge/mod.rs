//! Module: merge
//! Responsibility: combine per-shard cursors into one logical cursor and
//! apply statement-level row windows over it.
//! Does not own: ordering, grouping, or aggregation merges.
//! Boundary: cursors are pull-based and single-owner; errors from a shard
//! cursor propagate unchanged.

mod engine;
mod merged_result;
mod pagination;
mod query_result;
mod result_set;
mod stream;


pub use engine::MergeEngine;
pub use merged_result::{MergedResult, MergedResultBox};
pub use pagination::{
    Pagination, PaginationDecoratorMergedResult, PaginationDialect, PaginationError,
};
pub use query_result::{QueryResult, VecQueryResult};
pub use result_set::{ColumnLabels, MergedResultSet};
pub use stream::IteratorStreamMergedResult;
