use crate::{
    error::InternalError,
    merge::{MergedResult, QueryResult},
    value::Value,
};

///
/// IteratorStreamMergedResult
///
/// Drains shard cursors one after another in the order given. Exhausted
/// shards are never polled again.
///

pub struct IteratorStreamMergedResult<R> {
    results: Vec<R>,
    current: usize,
    positioned: bool,
}

impl<R> IteratorStreamMergedResult<R>
where
    R: QueryResult,
{
    #[must_use]
    pub const fn new(results: Vec<R>) -> Self {
        Self {
            results,
            current: 0,
            positioned: false,
        }
    }
}

impl<R> MergedResult for IteratorStreamMergedResult<R>
where
    R: QueryResult,
{
    fn advance(&mut self) -> Result<bool, InternalError> {
        while let Some(result) = self.results.get_mut(self.current) {
            if result.advance()? {
                self.positioned = true;
                return Ok(true);
            }
            self.current += 1;
        }
        self.positioned = false;

        Ok(false)
    }

    fn value(&self, column_index: usize) -> Result<&Value, InternalError> {
        match self.results.get(self.current) {
            Some(result) if self.positioned => result.value(column_index),
            _ => Err(InternalError::merge_invariant(
                "merged result has no current row",
            )),
        }
    }
}
