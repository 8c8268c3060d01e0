//! Module: encrypt
//! Responsibility: transparent-encryption rule model and derivation of
//! cipher / query-assisted values for insert units.
//! Does not own: cryptographic primitives (supplied through `EncryptorFactory`).

mod config;
mod deriver;
mod encryptor;
mod rule;

#[cfg(test)]
mod tests;

pub use config::{EncryptConfigError, EncryptRuleConfig, EncryptorRuleConfig};
pub use deriver::EncryptValueDeriver;
pub use encryptor::{
    EncryptError, Encryptor, EncryptorFactory, EncryptorKind, QueryAssistedEncryptor,
};
pub use rule::{EncryptColumn, EncryptRule, EncryptTable};
