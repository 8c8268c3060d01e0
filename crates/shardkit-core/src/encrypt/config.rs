use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// EncryptConfigError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum EncryptConfigError {
    #[error("invalid encrypt rule document: {message}")]
    Parse { message: String },

    #[error("encryptor '{encryptor}': '{value}' is not a table.column reference")]
    InvalidQualifiedColumn { encryptor: String, value: String },

    #[error("encryptor '{encryptor}': expected {expected} {list} columns, found {found}")]
    ColumnCountMismatch {
        encryptor: String,
        list: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("encryptor '{encryptor}': '{column}' belongs to a different table than its plain column")]
    CrossTableColumn { encryptor: String, column: String },

    #[error("encryptor '{encryptor}' has unknown type '{kind}'")]
    UnknownEncryptorType { encryptor: String, kind: String },

    #[error("encryptor '{encryptor}' configures assisted query columns but is not query-assisted")]
    AssistedEncryptorRequired { encryptor: String },

    #[error("column '{table}.{column}' is configured by more than one encryptor")]
    DuplicateColumn { table: String, column: String },
}

///
/// EncryptRuleConfig
///
/// Serialized encrypt rule document. Encryptors keep array order, which
/// fixes the declaration order of derived columns.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EncryptRuleConfig {
    #[serde(default)]
    pub encryptors: Vec<EncryptorRuleConfig>,
}

impl EncryptRuleConfig {
    /// Parse a TOML rule document.
    pub fn from_toml_str(document: &str) -> Result<Self, EncryptConfigError> {
        toml::from_str(document).map_err(|err| EncryptConfigError::Parse {
            message: err.to_string(),
        })
    }
}

///
/// EncryptorRuleConfig
///
/// Column lists are comma-separated `table.column` references; cipher and
/// assisted-query lists pair positionally with `qualified_columns`.
/// Without `cipher_columns`, cipher text replaces the plain column in place.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EncryptorRuleConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub qualified_columns: String,
    #[serde(default)]
    pub cipher_columns: Option<String>,
    #[serde(default)]
    pub assisted_query_columns: Option<String>,
    #[serde(default)]
    pub props: BTreeMap<String, String>,
}

///
/// QualifiedColumn
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct QualifiedColumn {
    pub(crate) table: String,
    pub(crate) column: String,
}

/// Split a comma-separated `table.column` list, trimming whitespace.
pub(crate) fn parse_qualified_columns(
    encryptor: &str,
    list: &str,
) -> Result<Vec<QualifiedColumn>, EncryptConfigError> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            let invalid = || EncryptConfigError::InvalidQualifiedColumn {
                encryptor: encryptor.to_string(),
                value: item.to_string(),
            };
            let (table, column) = item.split_once('.').ok_or_else(invalid)?;
            let (table, column) = (table.trim(), column.trim());
            if table.is_empty() || column.is_empty() || column.contains('.') {
                return Err(invalid());
            }

            Ok(QualifiedColumn {
                table: table.to_string(),
                column: column.to_string(),
            })
        })
        .collect()
}
