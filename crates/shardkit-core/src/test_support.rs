//! Fixture encryptors shared by unit tests.

use crate::{
    encrypt::{
        EncryptError, EncryptRule, EncryptRuleConfig, Encryptor, EncryptorFactory, EncryptorKind,
        QueryAssistedEncryptor,
    },
    value::Value,
};
use std::{collections::BTreeMap, sync::Arc};

///
/// IdentityEncryptor
///

pub(crate) struct IdentityEncryptor;

impl Encryptor for IdentityEncryptor {
    fn encrypt(&self, plain: &Value) -> Result<Value, EncryptError> {
        Ok(plain.clone())
    }
}

impl QueryAssistedEncryptor for IdentityEncryptor {
    fn query_assisted_encrypt(&self, plain: &Value) -> Result<Value, EncryptError> {
        Ok(plain.clone())
    }
}

///
/// TaggingEncryptor
///
/// Renders `<prefix>:<plain>` so cipher and assisted values are distinguishable.
///

pub(crate) struct TaggingEncryptor {
    prefix: String,
}

impl Encryptor for TaggingEncryptor {
    fn encrypt(&self, plain: &Value) -> Result<Value, EncryptError> {
        Ok(Value::Text(format!("{}:{plain}", self.prefix)))
    }
}

impl QueryAssistedEncryptor for TaggingEncryptor {
    fn query_assisted_encrypt(&self, plain: &Value) -> Result<Value, EncryptError> {
        Ok(Value::Text(format!("q:{plain}")))
    }
}

///
/// FailingEncryptor
///

pub(crate) struct FailingEncryptor;

impl Encryptor for FailingEncryptor {
    fn encrypt(&self, _plain: &Value) -> Result<Value, EncryptError> {
        Err(EncryptError::new("failing", "key unavailable"))
    }
}

///
/// FixtureEncryptorFactory
///
/// Types: `test`, `assisted_test`, `tagging` (prop `prefix`), `failing`.
///

pub(crate) struct FixtureEncryptorFactory;

impl EncryptorFactory for FixtureEncryptorFactory {
    fn create(&self, kind: &str, props: &BTreeMap<String, String>) -> Option<EncryptorKind> {
        let encryptor = match kind {
            "test" => EncryptorKind::Standard(Arc::new(IdentityEncryptor)),
            "assisted_test" => EncryptorKind::QueryAssisted(Arc::new(IdentityEncryptor)),
            "tagging" => EncryptorKind::QueryAssisted(Arc::new(TaggingEncryptor {
                prefix: props.get("prefix").cloned().unwrap_or_else(|| "enc".to_string()),
            })),
            "failing" => EncryptorKind::Standard(Arc::new(FailingEncryptor)),
            _ => return None,
        };

        Some(encryptor)
    }
}

/// Rule used across insert tests: `t_encrypt` with a plain encryptor,
/// `t_query_encrypt` with a query-assisted one.
pub(crate) fn encrypt_rule() -> EncryptRule {
    let config = EncryptRuleConfig::from_toml_str(
        r#"
        [[encryptors]]
        name = "order_encryptor"
        type = "test"
        qualified_columns = "t_encrypt.col1, t_encrypt.col2"

        [[encryptors]]
        name = "assisted_encryptor"
        type = "assisted_test"
        qualified_columns = "t_query_encrypt.col1, t_query_encrypt.col2"
        assisted_query_columns = "t_query_encrypt.query1, t_query_encrypt.query2"
        "#,
    )
    .expect("fixture config");

    EncryptRule::from_config(&config, &FixtureEncryptorFactory).expect("fixture rule")
}
