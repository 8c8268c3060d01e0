//! ShardKit: statement rewriting for sharded SQL.
//!
//! This is the public meta-crate. Downstream users depend on **shardkit** only.
//!
//! ## Crate layout
//! - `core`: statement model, routing, insert rewrite, encryption, and merge engines.
//! - `error`: public error type with a stable kind + origin taxonomy.
//!
//! `ShardKit` is the entry point; the `prelude` mirrors the statement
//! vocabulary callers build parsed statements from.

pub use shardkit_core as core;

pub mod error;
mod session;

pub use error::Error;
pub use session::{MergedRows, ShardKit};

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{Error, MergedRows, ShardKit};
    pub use shardkit_core::{
        encrypt::{EncryptError, Encryptor, EncryptorFactory, EncryptorKind, QueryAssistedEncryptor},
        merge::{PaginationDialect, QueryResult, VecQueryResult},
        prelude::*,
        route::{RouteValue, ShardingColumnSet, ShardingColumns},
    };
}
