//! Module: merge::pagination
//! Responsibility: resolve a statement's pagination into an absolute offset
//! plus relative row count, and apply it over a merged result.
//! Boundary: the per-shard rewrite (`revised_row_count`) and the merge-side
//! window must agree on the same resolved numbers.

mod decorator;

pub use decorator::PaginationDecoratorMergedResult;

use crate::{
    error::{ErrorOrigin, InternalError},
    statement::{PaginationSegment, PaginationValueSegment},
    value::Value,
};
use thiserror::Error as ThisError;

///
/// PaginationError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum PaginationError {
    #[error("pagination value {value} is negative")]
    Negative { value: i64 },

    #[error("pagination value must be an integer, found {kind}")]
    NotInteger { kind: &'static str },
}

///
/// PaginationDialect
///
/// How the statement spelled its row window.
///
/// - `Limit`: `LIMIT count OFFSET offset`, both already relative.
/// - `RowNumber`: `ROW_NUMBER() > offset AND ROW_NUMBER() <= end`.
/// - `TopAndRowNumber`: `TOP end` with `ROW_NUMBER() > offset`.
///
/// The row-number dialects carry absolute row positions; they are turned
/// into a relative count here.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PaginationDialect {
    #[default]
    Limit,
    RowNumber,
    TopAndRowNumber,
}

impl PaginationDialect {
    const fn uses_row_numbers(self) -> bool {
        matches!(self, Self::RowNumber | Self::TopAndRowNumber)
    }
}

///
/// Pagination
///
/// Resolved row window: skip `offset` rows, then yield at most `row_count`.
/// `None` for the row count means unbounded.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Pagination {
    offset: u64,
    row_count: Option<u64>,
}

impl Pagination {
    #[must_use]
    pub const fn new(offset: u64, row_count: Option<u64>) -> Self {
        Self { offset, row_count }
    }

    /// Resolve `segment` against the bound parameters.
    pub fn resolve(
        segment: &PaginationSegment,
        dialect: PaginationDialect,
        parameters: &[Value],
    ) -> Result<Self, InternalError> {
        let offset = segment
            .offset
            .as_ref()
            .map(|value| resolve_bound(value, parameters).map(|raw| (raw, value.bound_opened)))
            .transpose()?;
        let row_count = segment
            .row_count
            .as_ref()
            .map(|value| resolve_bound(value, parameters).map(|raw| (raw, value.bound_opened)))
            .transpose()?;

        if !dialect.uses_row_numbers() {
            return Ok(Self::new(
                offset.map_or(0, |(raw, _)| raw),
                row_count.map(|(raw, _)| raw),
            ));
        }

        // `ROW_NUMBER > k` skips k rows, `ROW_NUMBER >= k` skips k - 1.
        let offset = match offset {
            Some((raw, true)) => raw,
            Some((raw, false)) => raw.saturating_sub(1),
            None => 0,
        };
        // `ROWNUM < n` ends at n - 1, `ROWNUM <= n` and `TOP n` end at n.
        let end = row_count.map(|(raw, opened)| if opened { raw.saturating_sub(1) } else { raw });

        Ok(Self::new(offset, end.map(|end| end.saturating_sub(offset))))
    }

    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    #[must_use]
    pub const fn row_count(&self) -> Option<u64> {
        self.row_count
    }

    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.row_count.is_none()
    }

    /// Row count each shard must return so the merged window is complete:
    /// every shard may hold rows anywhere in `[0, offset + row_count)`.
    #[must_use]
    pub const fn revised_row_count(&self) -> Option<u64> {
        match self.row_count {
            Some(count) => Some(self.offset.saturating_add(count)),
            None => None,
        }
    }
}

fn resolve_bound(
    segment: &PaginationValueSegment,
    parameters: &[Value],
) -> Result<u64, InternalError> {
    let value = segment
        .value
        .resolve(parameters)
        .map_err(|err| InternalError::from_parameter_error(ErrorOrigin::Merge, err))?;

    let resolved = match value {
        Value::Uint(value) => value,
        Value::Int(value) => {
            u64::try_from(value).map_err(|_| PaginationError::Negative { value })?
        }
        other => {
            return Err(PaginationError::NotInteger {
                kind: other.kind_label(),
            }
            .into());
        }
    };

    Ok(resolved)
}
