use crate::error::Error;
use shardkit_core::{
    self as core,
    encrypt::{EncryptRule, EncryptRuleConfig, EncryptorFactory},
    merge::{MergeEngine, Pagination, PaginationDialect, QueryResult},
    model::SchemaMetaData,
    rewrite::insert::{InsertNormalizer, InsertOptimizeEngine, InsertOptimizeResult},
    route::{ShardingColumnSet, ShardingColumns, ShardingConditionEngine, ShardingConditions},
    statement::{InsertStatement, SelectStatement},
    value::Value,
};

///
/// ShardKit
/// Public entry point tying table metadata, sharding columns, and the
/// encrypt rule to the rewrite, route, and merge engines.
/// Converts core errors into `shardkit::Error`.
///

pub struct ShardKit<S = ShardingColumnSet> {
    metadata: SchemaMetaData,
    sharding_columns: S,
    encrypt_rule: Option<EncryptRule>,
    dialect: PaginationDialect,
}

impl ShardKit {
    #[must_use]
    pub fn new(metadata: SchemaMetaData) -> Self {
        Self {
            metadata,
            sharding_columns: ShardingColumnSet::new(),
            encrypt_rule: None,
            dialect: PaginationDialect::default(),
        }
    }
}

impl<S: ShardingColumns> ShardKit<S> {
    /// Replace the sharding-column source.
    #[must_use]
    pub fn with_sharding_columns<T: ShardingColumns>(self, sharding_columns: T) -> ShardKit<T> {
        ShardKit {
            metadata: self.metadata,
            sharding_columns,
            encrypt_rule: self.encrypt_rule,
            dialect: self.dialect,
        }
    }

    #[must_use]
    pub fn with_encrypt_rule(mut self, rule: EncryptRule) -> Self {
        self.encrypt_rule = Some(rule);
        self
    }

    /// Load the encrypt rule from a TOML document.
    pub fn with_encrypt_config(
        self,
        document: &str,
        factory: &dyn EncryptorFactory,
    ) -> Result<Self, Error> {
        let config = EncryptRuleConfig::from_toml_str(document)
            .map_err(core::error::InternalError::from)?;
        let rule = EncryptRule::from_config(&config, factory)
            .map_err(core::error::InternalError::from)?;
        tracing::debug!(tables = ?rule.table_names(), "loaded encrypt rule");

        Ok(self.with_encrypt_rule(rule))
    }

    #[must_use]
    pub const fn with_dialect(mut self, dialect: PaginationDialect) -> Self {
        self.dialect = dialect;
        self
    }

    #[must_use]
    pub const fn metadata(&self) -> &SchemaMetaData {
        &self.metadata
    }

    #[must_use]
    pub const fn encrypt_rule(&self) -> Option<&EncryptRule> {
        self.encrypt_rule.as_ref()
    }

    //
    // Rewrite
    //

    /// Normalize an INSERT into per-row units, deriving encrypted values
    /// when an encrypt rule is configured.
    pub fn optimize_insert(
        &self,
        statement: &InsertStatement,
        parameters: &[Value],
    ) -> Result<InsertOptimizeResult, Error> {
        let engine = InsertOptimizeEngine::new(&self.metadata);
        let engine = match &self.encrypt_rule {
            Some(rule) => engine.with_encrypt_rule(rule),
            None => engine,
        };

        Ok(engine.optimize(statement, parameters)?)
    }

    //
    // Route
    //

    /// Sharding conditions for each row of an INSERT, taken from plain values.
    pub fn route_insert(
        &self,
        statement: &InsertStatement,
        parameters: &[Value],
    ) -> Result<ShardingConditions, Error> {
        let result = InsertNormalizer::new(&self.metadata).normalize(statement, parameters)?;

        Ok(ShardingConditionEngine::new(&self.sharding_columns)
            .insert_conditions(&result.units, &result.table_name))
    }

    /// Sharding conditions of a SELECT's WHERE clause.
    pub fn route_select(
        &self,
        statement: &SelectStatement,
        parameters: &[Value],
    ) -> Result<ShardingConditions, Error> {
        let Some(where_segment) = &statement.where_segment else {
            tracing::debug!("select has no where clause; broadcasting");
            return Ok(ShardingConditions::default());
        };

        Ok(ShardingConditionEngine::new(&self.sharding_columns).where_conditions(
            where_segment,
            &statement.tables,
            parameters,
        )?)
    }

    //
    // Merge
    //

    /// Resolved pagination of a SELECT; its `revised_row_count` is the row
    /// count each shard must be asked for.
    pub fn pagination(
        &self,
        statement: &SelectStatement,
        parameters: &[Value],
    ) -> Result<Option<Pagination>, Error> {
        Ok(MergeEngine::new(statement, self.dialect, parameters).pagination()?)
    }

    /// Merge per-shard results of a routed SELECT.
    pub fn merge(
        &self,
        statement: &SelectStatement,
        parameters: &[Value],
        results: Vec<Box<dyn QueryResult>>,
    ) -> Result<MergedRows, Error> {
        let inner = MergeEngine::new(statement, self.dialect, parameters).merge(results)?;

        Ok(MergedRows { inner })
    }
}

///
/// MergedRows
/// Public cursor over merged rows.
///

pub struct MergedRows {
    inner: core::merge::MergedResultSet,
}

impl MergedRows {
    pub fn advance(&mut self) -> Result<bool, Error> {
        Ok(self.inner.advance()?)
    }

    pub fn value(&self, column_index: usize) -> Result<&Value, Error> {
        Ok(self.inner.value(column_index)?)
    }

    pub fn value_by_label(&self, label: &str) -> Result<&Value, Error> {
        Ok(self.inner.value_by_label(label)?)
    }

    #[must_use]
    pub const fn column_count(&self) -> usize {
        self.inner.column_count()
    }

    pub fn collect_rows(&mut self) -> Result<Vec<Vec<Value>>, Error> {
        Ok(self.inner.collect_rows()?)
    }
}
