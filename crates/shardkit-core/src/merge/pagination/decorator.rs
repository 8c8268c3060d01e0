use crate::{
    error::InternalError,
    merge::{MergedResult, pagination::Pagination},
    value::Value,
};

///
/// PaginationDecoratorMergedResult
///
/// Applies an offset/row-count window over an inner merged result.
///
/// The offset is consumed eagerly at construction. When the inner result
/// runs out while skipping, the decorator is terminal and never polls the
/// inner result again. Otherwise a 1-based row counter starts at
/// `offset + 1` and rows are yielded while it stays within
/// `offset + row_count`; the counter is checked before the inner result is
/// advanced, so nothing past the window end is ever pulled. Column access
/// is valid only after `advance` returned `true`.
///

pub struct PaginationDecoratorMergedResult<M> {
    inner: M,
    pagination: Pagination,
    skip_all: bool,
    row_number: u64,
    positioned: bool,
}

impl<M> PaginationDecoratorMergedResult<M>
where
    M: MergedResult,
{
    pub fn new(mut inner: M, pagination: Pagination) -> Result<Self, InternalError> {
        let skip_all = !skip_offset(&mut inner, pagination.offset())?;
        if skip_all {
            tracing::debug!(
                offset = pagination.offset(),
                "pagination offset reaches past merged rows; skipping all"
            );
        }

        Ok(Self {
            inner,
            pagination,
            skip_all,
            row_number: pagination.offset().saturating_add(1),
            positioned: false,
        })
    }

    #[must_use]
    pub const fn is_skip_all(&self) -> bool {
        self.skip_all
    }

    #[must_use]
    pub const fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn into_inner(self) -> M {
        self.inner
    }

    fn advance_window(&mut self) -> Result<bool, InternalError> {
        if self.skip_all {
            return Ok(false);
        }
        let Some(row_count) = self.pagination.row_count() else {
            return self.inner.advance();
        };

        let end = self.pagination.offset().saturating_add(row_count);
        let row_number = self.row_number;
        self.row_number = self.row_number.saturating_add(1);
        if row_number > end {
            return Ok(false);
        }

        self.inner.advance()
    }
}

impl<M> MergedResult for PaginationDecoratorMergedResult<M>
where
    M: MergedResult,
{
    fn advance(&mut self) -> Result<bool, InternalError> {
        self.positioned = false;
        self.positioned = self.advance_window()?;

        Ok(self.positioned)
    }

    fn value(&self, column_index: usize) -> Result<&Value, InternalError> {
        if self.skip_all {
            return Err(InternalError::merge_invariant(
                "paginated result skipped every row",
            ));
        }
        if !self.positioned {
            return Err(InternalError::merge_invariant(
                "paginated result has no current row",
            ));
        }

        self.inner.value(column_index)
    }
}

// Returns false when the inner result ran out before `offset` rows were skipped.
fn skip_offset<M: MergedResult>(inner: &mut M, offset: u64) -> Result<bool, InternalError> {
    for _ in 0..offset {
        if !inner.advance()? {
            return Ok(false);
        }
    }

    Ok(true)
}
