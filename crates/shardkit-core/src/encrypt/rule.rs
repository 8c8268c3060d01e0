use crate::encrypt::{
    config::{EncryptConfigError, EncryptRuleConfig, QualifiedColumn, parse_qualified_columns},
    encryptor::{EncryptorFactory, EncryptorKind},
};

///
/// EncryptColumn
///

#[derive(Clone, Debug)]
pub struct EncryptColumn {
    logic: String,
    cipher: String,
    assisted_query: Option<String>,
    encryptor_name: String,
    encryptor: EncryptorKind,
}

impl EncryptColumn {
    #[must_use]
    pub fn logic(&self) -> &str {
        &self.logic
    }

    #[must_use]
    pub fn cipher(&self) -> &str {
        &self.cipher
    }

    #[must_use]
    pub fn assisted_query(&self) -> Option<&str> {
        self.assisted_query.as_deref()
    }

    #[must_use]
    pub fn encryptor_name(&self) -> &str {
        &self.encryptor_name
    }

    #[must_use]
    pub const fn encryptor(&self) -> &EncryptorKind {
        &self.encryptor
    }
}

///
/// EncryptTable
///
/// Encrypted columns of one logical table, in rule-declaration order.
///

#[derive(Clone, Debug)]
pub struct EncryptTable {
    name: String,
    columns: Vec<EncryptColumn>,
}

impl EncryptTable {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn columns(&self) -> &[EncryptColumn] {
        &self.columns
    }

    #[must_use]
    pub fn column(&self, logic: &str) -> Option<&EncryptColumn> {
        self.columns
            .iter()
            .find(|column| column.logic.eq_ignore_ascii_case(logic))
    }
}

///
/// EncryptRule
///

#[derive(Clone, Debug, Default)]
pub struct EncryptRule {
    tables: Vec<EncryptTable>,
}

impl EncryptRule {
    /// Build the rule, instantiating every configured encryptor through `factory`.
    pub fn from_config(
        config: &EncryptRuleConfig,
        factory: &dyn EncryptorFactory,
    ) -> Result<Self, EncryptConfigError> {
        let mut rule = Self::default();

        for encryptor_config in &config.encryptors {
            let name = encryptor_config.name.as_str();
            let encryptor = factory
                .create(&encryptor_config.kind, &encryptor_config.props)
                .ok_or_else(|| EncryptConfigError::UnknownEncryptorType {
                    encryptor: name.to_string(),
                    kind: encryptor_config.kind.clone(),
                })?;

            let plains = parse_qualified_columns(name, &encryptor_config.qualified_columns)?;
            let ciphers = parse_paired(
                name,
                "cipher",
                encryptor_config.cipher_columns.as_deref(),
                &plains,
            )?;
            let assisted = parse_paired(
                name,
                "assisted query",
                encryptor_config.assisted_query_columns.as_deref(),
                &plains,
            )?;
            if assisted.is_some() && !encryptor.is_query_assisted() {
                return Err(EncryptConfigError::AssistedEncryptorRequired {
                    encryptor: name.to_string(),
                });
            }

            for (idx, plain) in plains.iter().enumerate() {
                let cipher = ciphers
                    .as_ref()
                    .map_or_else(|| plain.column.clone(), |list| list[idx].column.clone());
                let assisted_query = assisted.as_ref().map(|list| list[idx].column.clone());

                rule.add_column(
                    &plain.table,
                    EncryptColumn {
                        logic: plain.column.clone(),
                        cipher,
                        assisted_query,
                        encryptor_name: name.to_string(),
                        encryptor: encryptor.clone(),
                    },
                )?;
            }
        }

        Ok(rule)
    }

    #[must_use]
    pub fn table(&self, name: &str) -> Option<&EncryptTable> {
        self.tables
            .iter()
            .find(|table| table.name.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(EncryptTable::name).collect()
    }

    fn add_column(&mut self, table: &str, column: EncryptColumn) -> Result<(), EncryptConfigError> {
        let index = if let Some(index) = self
            .tables
            .iter()
            .position(|candidate| candidate.name.eq_ignore_ascii_case(table))
        {
            index
        } else {
            self.tables.push(EncryptTable {
                name: table.to_string(),
                columns: Vec::new(),
            });
            self.tables.len() - 1
        };

        let entry = &mut self.tables[index];
        if entry.column(&column.logic).is_some() {
            return Err(EncryptConfigError::DuplicateColumn {
                table: entry.name.clone(),
                column: column.logic,
            });
        }
        entry.columns.push(column);

        Ok(())
    }
}

// Parse an optional list that must pair one-to-one with the plain columns,
// on the same tables.
fn parse_paired(
    encryptor: &str,
    list_name: &'static str,
    list: Option<&str>,
    plains: &[QualifiedColumn],
) -> Result<Option<Vec<QualifiedColumn>>, EncryptConfigError> {
    let Some(list) = list else {
        return Ok(None);
    };
    let paired = parse_qualified_columns(encryptor, list)?;
    if paired.len() != plains.len() {
        return Err(EncryptConfigError::ColumnCountMismatch {
            encryptor: encryptor.to_string(),
            list: list_name,
            expected: plains.len(),
            found: paired.len(),
        });
    }
    for (plain, other) in plains.iter().zip(&paired) {
        if !plain.table.eq_ignore_ascii_case(&other.table) {
            return Err(EncryptConfigError::CrossTableColumn {
                encryptor: encryptor.to_string(),
                column: format!("{}.{}", other.table, other.column),
            });
        }
    }

    Ok(Some(paired))
}
