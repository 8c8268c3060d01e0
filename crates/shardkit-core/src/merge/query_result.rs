use crate::{error::InternalError, value::Value};

///
/// QueryResult
///
/// Forward-only row cursor over one shard's result. Column access reads
/// the row the cursor currently points at.
///

pub trait QueryResult {
    /// Move to the next row; `Ok(false)` once the shard is exhausted.
    fn advance(&mut self) -> Result<bool, InternalError>;

    /// 0-based column access on the current row.
    fn value(&self, column_index: usize) -> Result<&Value, InternalError>;

    fn column_count(&self) -> usize;

    fn column_label(&self, column_index: usize) -> Option<&str>;
}

impl<T> QueryResult for Box<T>
where
    T: QueryResult + ?Sized,
{
    fn advance(&mut self) -> Result<bool, InternalError> {
        self.as_mut().advance()
    }

    fn value(&self, column_index: usize) -> Result<&Value, InternalError> {
        self.as_ref().value(column_index)
    }

    fn column_count(&self) -> usize {
        self.as_ref().column_count()
    }

    fn column_label(&self, column_index: usize) -> Option<&str> {
        self.as_ref().column_label(column_index)
    }
}

///
/// VecQueryResult
///
/// Adapter exposing one materialized row vector through `QueryResult`.
///

#[derive(Debug)]
pub struct VecQueryResult {
    labels: Vec<String>,
    rows: std::vec::IntoIter<Vec<Value>>,
    current: Option<Vec<Value>>,
}

impl VecQueryResult {
    #[must_use]
    pub fn new<S>(labels: impl IntoIterator<Item = S>, rows: Vec<Vec<Value>>) -> Self
    where
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            rows: rows.into_iter(),
            current: None,
        }
    }
}

impl QueryResult for VecQueryResult {
    fn advance(&mut self) -> Result<bool, InternalError> {
        self.current = self.rows.next();

        Ok(self.current.is_some())
    }

    fn value(&self, column_index: usize) -> Result<&Value, InternalError> {
        let row = self
            .current
            .as_ref()
            .ok_or_else(|| InternalError::merge_invariant("query result has no current row"))?;

        row.get(column_index).ok_or_else(|| {
            InternalError::merge_invariant(format!(
                "column index {column_index} is out of range for {} columns",
                row.len()
            ))
        })
    }

    fn column_count(&self) -> usize {
        self.labels.len()
    }

    fn column_label(&self, column_index: usize) -> Option<&str> {
        self.labels.get(column_index).map(String::as_str)
    }
}
