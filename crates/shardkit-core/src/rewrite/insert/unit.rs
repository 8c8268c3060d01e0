use crate::value::Value;
use derive_more::Deref;
use serde::Serialize;
use std::collections::HashMap;

///
/// ValueSource
///
/// Where a unit value is written from when the per-shard SQL is built:
/// inline as a literal, or as the `?` bound at `position` of the unit's
/// residual parameter array.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum ValueSource {
    Literal,
    Parameter { position: usize },
}

///
/// ColumnEntry
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ColumnEntry {
    pub name: String,
    pub value: Value,
    pub source: ValueSource,
}

///
/// ColumnValues
///
/// Ordered column → value association. Iterates in insertion order and
/// looks up by case-insensitive name in O(1).
///

#[derive(Clone, Debug, Default, Deref, Serialize)]
pub struct ColumnValues {
    #[deref]
    entries: Vec<ColumnEntry>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl ColumnValues {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Insert or replace the entry for `entry.name`, keeping its original position.
    pub fn insert(&mut self, entry: ColumnEntry) {
        let key = entry.name.to_ascii_lowercase();
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot] = entry,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ColumnEntry> {
        self.slot(name).map(|slot| &self.entries[slot])
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut ColumnEntry> {
        self.slot(name).map(|slot| &mut self.entries[slot])
    }

    fn slot(&self, name: &str) -> Option<usize> {
        self.index.get(&name.to_ascii_lowercase()).copied()
    }
}

impl PartialEq for ColumnValues {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for ColumnValues {}

///
/// InsertUnit
///
/// One self-contained executable row: resolved column values plus the
/// residual parameters (placeholder-origin values in placeholder order)
/// actually sent to the backend.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct InsertUnit {
    column_values: ColumnValues,
    parameters: Vec<Value>,
}

impl InsertUnit {
    pub(crate) const fn new(column_values: ColumnValues, parameters: Vec<Value>) -> Self {
        Self {
            column_values,
            parameters,
        }
    }

    #[must_use]
    pub const fn column_values(&self) -> &ColumnValues {
        &self.column_values
    }

    #[must_use]
    pub fn column_value(&self, column: &str) -> Option<&Value> {
        self.column_values.get(column).map(|entry| &entry.value)
    }

    #[must_use]
    pub fn parameters(&self) -> &[Value] {
        &self.parameters
    }

    /// Replace the value of an existing column, keeping its parameter slot in sync.
    ///
    /// Returns `false` when the unit has no such column.
    pub(crate) fn set_column_value(&mut self, column: &str, value: Value) -> bool {
        let Some(entry) = self.column_values.get_mut(column) else {
            return false;
        };
        if let ValueSource::Parameter { position } = entry.source
            && let Some(slot) = self.parameters.get_mut(position)
        {
            *slot = value.clone();
        }
        entry.value = value;

        true
    }

    /// Append a derived column.
    ///
    /// A parameterized unit binds the value as an extra trailing parameter;
    /// a literal-only unit inlines it.
    pub(crate) fn add_derived_value(&mut self, column: impl Into<String>, value: Value) {
        let source = if self.parameters.is_empty() {
            ValueSource::Literal
        } else {
            self.parameters.push(value.clone());
            ValueSource::Parameter {
                position: self.parameters.len() - 1,
            }
        };

        self.column_values.insert(ColumnEntry {
            name: column.into(),
            value,
            source,
        });
    }
}
