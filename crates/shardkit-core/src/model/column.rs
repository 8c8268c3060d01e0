use serde::{Deserialize, Serialize};
use std::{
    fmt,
    hash::{Hash, Hasher},
};

///
/// Column
///
/// Logical column reference resolved to its owning table.
/// Identity is by name, compared case-insensitively on both parts.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Column {
    name: String,
    table_name: String,
}

impl Column {
    #[must_use]
    pub fn new(name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_name: table_name.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

impl PartialEq for Column {
    fn eq(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
            && self.table_name.eq_ignore_ascii_case(&other.table_name)
    }
}

impl Eq for Column {}

impl Hash for Column {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.to_ascii_lowercase().hash(state);
        self.table_name.to_ascii_lowercase().hash(state);
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table_name, self.name)
    }
}
