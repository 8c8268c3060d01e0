use crate::{
    encrypt::rule::{EncryptColumn, EncryptRule},
    error::InternalError,
    rewrite::insert::{InsertOptimizeResult, InsertShapeError},
    value::Value,
};

///
/// EncryptValueDeriver
///
/// Folds encryption into normalized insert units: the cipher value replaces
/// the plain value (and its parameter slot), and each query-assisted token
/// is appended as a derived column.
///

pub struct EncryptValueDeriver<'a> {
    rule: &'a EncryptRule,
}

// Per-unit staged values: (logical column, cipher, assisted token).
type StagedUnit<'c> = Vec<(&'c EncryptColumn, Value, Option<Value>)>;

impl<'a> EncryptValueDeriver<'a> {
    #[must_use]
    pub const fn new(rule: &'a EncryptRule) -> Self {
        Self { rule }
    }

    /// Derive encrypted values for every unit of `result`.
    ///
    /// All values are computed before any unit is touched, so an encryptor
    /// failure leaves `result` unchanged.
    pub fn derive(&self, result: &mut InsertOptimizeResult) -> Result<(), InternalError> {
        let Some(table) = self.rule.table(&result.table_name) else {
            return Ok(());
        };
        let encrypted: Vec<&EncryptColumn> = table
            .columns()
            .iter()
            .filter(|column| {
                result
                    .columns
                    .regular_column_names()
                    .iter()
                    .any(|name| name.eq_ignore_ascii_case(column.logic()))
            })
            .collect();
        if encrypted.is_empty() {
            return Ok(());
        }
        for column in &encrypted {
            if let Some(assisted) = column.assisted_query()
                && result.columns.contains(assisted)
            {
                return Err(InsertShapeError::DuplicateColumn {
                    column: assisted.to_string(),
                }
                .into());
            }
        }

        let staged = result
            .units
            .iter()
            .map(|unit| {
                encrypted
                    .iter()
                    .map(|&column| {
                        let plain = unit.column_value(column.logic()).ok_or_else(|| {
                            InternalError::rewrite_invariant(format!(
                                "insert unit is missing encrypted column '{}'",
                                column.logic()
                            ))
                        })?;
                        stage_column(column, plain)
                    })
                    .collect::<Result<StagedUnit<'_>, InternalError>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (unit, values) in result.units.iter_mut().zip(staged) {
            for (column, cipher, assisted) in values {
                unit.set_column_value(column.logic(), cipher);
                if let (Some(name), Some(token)) = (column.assisted_query(), assisted) {
                    unit.add_derived_value(name, token);
                }
            }
        }
        for column in &encrypted {
            result.columns.set_cipher(column.logic(), column.cipher());
            if let Some(assisted) = column.assisted_query() {
                result.columns.add_derived(assisted);
            }
        }

        tracing::debug!(
            table = %result.table_name,
            encrypted = encrypted.len(),
            derived = result.columns.derived_column_names().len(),
            "derived encrypted insert values"
        );

        Ok(())
    }
}

// NULL stays NULL in both the cipher and the assisted column.
fn stage_column<'c>(
    column: &'c EncryptColumn,
    plain: &Value,
) -> Result<(&'c EncryptColumn, Value, Option<Value>), InternalError> {
    if plain.is_null() {
        let assisted = column.assisted_query().map(|_| Value::Null);
        return Ok((column, Value::Null, assisted));
    }

    let cipher = column.encryptor().encrypt(plain)?;
    let assisted = match column.assisted_query() {
        None => None,
        Some(name) => {
            let token = column
                .encryptor()
                .query_assisted_encrypt(plain)
                .ok_or_else(|| {
                    InternalError::rewrite_invariant(format!(
                        "assisted query column '{name}' has no query-assisted encryptor"
                    ))
                })??;
            Some(token)
        }
    };

    Ok((column, cipher, assisted))
}
