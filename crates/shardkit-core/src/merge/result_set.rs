use crate::{
    error::InternalError,
    merge::{MergedResult, MergedResultBox, QueryResult},
    statement::CommonSelectItem,
    value::Value,
};
use std::collections::HashMap;

///
/// MergedResultSet
///
/// Caller-facing view over the final merged result: index access plus
/// case-insensitive lookup by column label.
///

pub struct MergedResultSet {
    merged: MergedResultBox,
    labels: HashMap<String, usize>,
    column_count: usize,
}

impl MergedResultSet {
    #[must_use]
    pub fn new(merged: MergedResultBox, labels: ColumnLabels) -> Self {
        Self {
            merged,
            labels: labels.index,
            column_count: labels.column_count,
        }
    }

    pub fn advance(&mut self) -> Result<bool, InternalError> {
        self.merged.advance()
    }

    pub fn value(&self, column_index: usize) -> Result<&Value, InternalError> {
        self.merged.value(column_index)
    }

    pub fn value_by_label(&self, label: &str) -> Result<&Value, InternalError> {
        let index = self.column_index(label).ok_or_else(|| {
            InternalError::merge_contract(format!("unknown column label '{label}'"))
        })?;

        self.merged.value(index)
    }

    #[must_use]
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.labels.get(&label.to_ascii_lowercase()).copied()
    }

    #[must_use]
    pub const fn column_count(&self) -> usize {
        self.column_count
    }

    /// Drain the remaining rows, materializing `column_count` values each.
    pub fn collect_rows(&mut self) -> Result<Vec<Vec<Value>>, InternalError> {
        let mut rows = Vec::new();
        while self.advance()? {
            let row = (0..self.column_count)
                .map(|index| self.value(index).cloned())
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }

        Ok(rows)
    }
}

///
/// ColumnLabels
///
/// Label → column index map. Labels reported by the first shard win;
/// select-item aliases fill in labels the shard did not report.
///

#[derive(Clone, Debug, Default)]
pub struct ColumnLabels {
    index: HashMap<String, usize>,
    column_count: usize,
}

impl ColumnLabels {
    #[must_use]
    pub fn build<R: QueryResult + ?Sized>(items: &[CommonSelectItem], first: Option<&R>) -> Self {
        let mut labels = Self::default();
        if let Some(result) = first {
            labels.column_count = result.column_count();
            for column_index in 0..result.column_count() {
                if let Some(label) = result.column_label(column_index) {
                    labels.insert(label, column_index);
                }
            }
        }
        for (column_index, item) in items.iter().enumerate() {
            labels.insert(item.column_label(), column_index);
            labels.column_count = labels.column_count.max(column_index + 1);
        }

        labels
    }

    fn insert(&mut self, label: &str, column_index: usize) {
        self.index
            .entry(label.to_ascii_lowercase())
            .or_insert(column_index);
    }
}
