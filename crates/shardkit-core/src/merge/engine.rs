use crate::{
    error::InternalError,
    merge::{
        ColumnLabels, IteratorStreamMergedResult, MergedResultBox, MergedResultSet,
        QueryResult,
        pagination::{Pagination, PaginationDecoratorMergedResult, PaginationDialect},
    },
    statement::SelectStatement,
    value::Value,
};

///
/// MergeEngine
///
/// Builds the merged-result chain for one routed SELECT: shard cursors are
/// streamed in order, then wrapped in the pagination window when the
/// statement carries one.
///

pub struct MergeEngine<'a> {
    statement: &'a SelectStatement,
    dialect: PaginationDialect,
    parameters: &'a [Value],
}

impl<'a> MergeEngine<'a> {
    #[must_use]
    pub const fn new(
        statement: &'a SelectStatement,
        dialect: PaginationDialect,
        parameters: &'a [Value],
    ) -> Self {
        Self {
            statement,
            dialect,
            parameters,
        }
    }

    /// Resolved pagination for the statement, if it has any.
    pub fn pagination(&self) -> Result<Option<Pagination>, InternalError> {
        self.statement
            .pagination
            .as_ref()
            .map(|segment| Pagination::resolve(segment, self.dialect, self.parameters))
            .transpose()
    }

    pub fn merge(
        &self,
        results: Vec<Box<dyn QueryResult>>,
    ) -> Result<MergedResultSet, InternalError> {
        let labels = ColumnLabels::build(&self.statement.items, results.first());
        let pagination = self.pagination()?;
        let stream = IteratorStreamMergedResult::new(results);

        let merged: MergedResultBox = match pagination {
            Some(pagination) => Box::new(PaginationDecoratorMergedResult::new(stream, pagination)?),
            None => Box::new(stream),
        };

        Ok(MergedResultSet::new(merged, labels))
    }
}
