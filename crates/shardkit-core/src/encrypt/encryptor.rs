use crate::value::Value;
use std::{collections::BTreeMap, fmt, sync::Arc};
use thiserror::Error as ThisError;

///
/// EncryptError
///
/// Failure reported by an external encryptor implementation.
///

#[derive(Debug, ThisError)]
#[error("encryptor '{encryptor}' failed: {message}")]
pub struct EncryptError {
    pub encryptor: String,
    pub message: String,
}

impl EncryptError {
    pub fn new(encryptor: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            encryptor: encryptor.into(),
            message: message.into(),
        }
    }
}

///
/// Encryptor
///
/// Plain value → cipher value. The primitive itself lives outside this crate.
///

pub trait Encryptor: Send + Sync {
    fn encrypt(&self, plain: &Value) -> Result<Value, EncryptError>;
}

///
/// QueryAssistedEncryptor
///
/// Encryptor that can also produce a deterministic token stored in a
/// query-assisted column, so equality lookups work on encrypted data.
///

pub trait QueryAssistedEncryptor: Encryptor {
    fn query_assisted_encrypt(&self, plain: &Value) -> Result<Value, EncryptError>;
}

///
/// EncryptorKind
///

#[derive(Clone)]
pub enum EncryptorKind {
    Standard(Arc<dyn Encryptor>),
    QueryAssisted(Arc<dyn QueryAssistedEncryptor>),
}

impl EncryptorKind {
    pub fn encrypt(&self, plain: &Value) -> Result<Value, EncryptError> {
        match self {
            Self::Standard(encryptor) => encryptor.encrypt(plain),
            Self::QueryAssisted(encryptor) => encryptor.encrypt(plain),
        }
    }

    /// The query-assisted token, or `None` for a standard encryptor.
    pub fn query_assisted_encrypt(&self, plain: &Value) -> Option<Result<Value, EncryptError>> {
        match self {
            Self::Standard(_) => None,
            Self::QueryAssisted(encryptor) => Some(encryptor.query_assisted_encrypt(plain)),
        }
    }

    #[must_use]
    pub const fn is_query_assisted(&self) -> bool {
        matches!(self, Self::QueryAssisted(_))
    }
}

impl fmt::Debug for EncryptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard(_) => f.write_str("EncryptorKind::Standard"),
            Self::QueryAssisted(_) => f.write_str("EncryptorKind::QueryAssisted"),
        }
    }
}

///
/// EncryptorFactory
///
/// Builds encryptor instances from their configured type name and props.
///

pub trait EncryptorFactory {
    fn create(&self, kind: &str, props: &BTreeMap<String, String>) -> Option<EncryptorKind>;
}
