use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// TablesError
///

#[derive(Debug, ThisError)]
pub enum TablesError {
    #[error("cannot support multiple schemas in one statement: '{existing}' and '{found}'")]
    MultipleSchemas { existing: String, found: String },
}

///
/// Table
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Table {
    name: String,
    alias: Option<String>,
}

impl Table {
    #[must_use]
    pub fn new(name: impl Into<String>, alias: Option<String>) -> Self {
        Self {
            name: name.into(),
            alias,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }
}

///
/// Tables
///
/// Ordered, name-unique set of tables referenced by one statement, plus the
/// single schema the statement may qualify them with.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Tables {
    tables: Vec<Table>,
    schema: Option<String>,
}

impl Tables {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tables: Vec::new(),
            schema: None,
        }
    }

    /// Add a table; a second reference to an already-known name is ignored.
    pub fn add(&mut self, table: Table) {
        if self.find_by_name(table.name()).is_none() {
            self.tables.push(table);
        }
    }

    /// Record the statement schema.
    ///
    /// Re-declaring the same schema (case-insensitive) is a no-op; a second
    /// distinct schema is rejected rather than overriding the first.
    pub fn set_schema(&mut self, schema: impl Into<String>) -> Result<(), TablesError> {
        let schema = schema.into();
        match self.schema.as_deref() {
            Some(existing) if existing.eq_ignore_ascii_case(&schema) => Ok(()),
            Some(existing) => Err(TablesError::MultipleSchemas {
                existing: existing.to_string(),
                found: schema,
            }),
            None => {
                self.schema = Some(schema);
                Ok(())
            }
        }
    }

    #[must_use]
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    /// Find a table by alias first, then by name.
    #[must_use]
    pub fn find(&self, name_or_alias: &str) -> Option<&Table> {
        self.tables
            .iter()
            .find(|table| {
                table
                    .alias()
                    .is_some_and(|alias| alias.eq_ignore_ascii_case(name_or_alias))
            })
            .or_else(|| self.find_by_name(name_or_alias))
    }

    fn find_by_name(&self, name: &str) -> Option<&Table> {
        self.tables
            .iter()
            .find(|table| table.name().eq_ignore_ascii_case(name))
    }

    /// Table names in first-reference order.
    #[must_use]
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(Table::name).collect()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub const fn is_single_table(&self) -> bool {
        self.tables.len() == 1
    }

    /// The only referenced table, if exactly one is referenced.
    #[must_use]
    pub fn single_table_name(&self) -> Option<&str> {
        match self.tables.as_slice() {
            [table] => Some(table.name()),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }
}
