use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// TableMetaData
///
/// Declared column order of one logical table.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct TableMetaData {
    columns: Vec<String>,
}

impl TableMetaData {
    #[must_use]
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn contains_column(&self, column: &str) -> bool {
        self.columns
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(column))
    }
}

///
/// SchemaMetaData
///
/// Table metadata keyed by lower-cased logical table name.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SchemaMetaData {
    tables: BTreeMap<String, TableMetaData>,
}

impl SchemaMetaData {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tables: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, table: impl AsRef<str>, meta: TableMetaData) -> Option<TableMetaData> {
        self.tables.insert(table.as_ref().to_ascii_lowercase(), meta)
    }

    #[must_use]
    pub fn with_table(mut self, table: impl AsRef<str>, meta: TableMetaData) -> Self {
        self.insert(table, meta);
        self
    }

    #[must_use]
    pub fn get(&self, table: &str) -> Option<&TableMetaData> {
        self.tables.get(&table.to_ascii_lowercase())
    }

    #[must_use]
    pub fn contains_table(&self, table: &str) -> bool {
        self.get(table).is_some()
    }
}
