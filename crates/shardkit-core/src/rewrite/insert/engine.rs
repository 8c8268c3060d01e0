use crate::{
    encrypt::{EncryptRule, EncryptValueDeriver},
    error::InternalError,
    model::SchemaMetaData,
    rewrite::insert::{InsertNormalizer, InsertOptimizeResult},
    statement::InsertStatement,
    value::Value,
};

///
/// InsertOptimizeEngine
///
/// Normalization followed by optional encryption derivation. Either step
/// failing rejects the whole statement; no partial units escape.
///

pub struct InsertOptimizeEngine<'a> {
    metadata: &'a SchemaMetaData,
    encrypt_rule: Option<&'a EncryptRule>,
}

impl<'a> InsertOptimizeEngine<'a> {
    #[must_use]
    pub const fn new(metadata: &'a SchemaMetaData) -> Self {
        Self {
            metadata,
            encrypt_rule: None,
        }
    }

    #[must_use]
    pub const fn with_encrypt_rule(mut self, rule: &'a EncryptRule) -> Self {
        self.encrypt_rule = Some(rule);
        self
    }

    pub fn optimize(
        &self,
        statement: &InsertStatement,
        parameters: &[Value],
    ) -> Result<InsertOptimizeResult, InternalError> {
        let mut result = InsertNormalizer::new(self.metadata).normalize(statement, parameters)?;
        if let Some(rule) = self.encrypt_rule {
            EncryptValueDeriver::new(rule).derive(&mut result)?;
        }

        Ok(result)
    }
}
