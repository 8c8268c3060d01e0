//! Module: rewrite::insert
//! Responsibility: normalize VALUES / SET inserts into per-row executable units.
//! Does not own: per-shard SQL text generation or execution.
//! Boundary: shape errors are raised before any unit exists.

mod columns;
mod engine;
mod error;
mod normalizer;
mod unit;

#[cfg(test)]
mod tests;

use serde::Serialize;

pub use columns::InsertColumns;
pub use engine::InsertOptimizeEngine;
pub use error::InsertShapeError;
pub use normalizer::InsertNormalizer;
pub use unit::{ColumnEntry, ColumnValues, InsertUnit, ValueSource};

///
/// InsertOptimizeResult
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct InsertOptimizeResult {
    pub table_name: String,
    pub columns: InsertColumns,
    pub units: Vec<InsertUnit>,
}
