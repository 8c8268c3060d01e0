//! Module: model
//! Responsibility: statement-scoped identity of tables and columns, and the
//! declared column order of logical tables.
//! Does not own: physical data-node naming or sharding rule configuration.

mod column;
mod metadata;
mod table;


pub use column::Column;
pub use metadata::{SchemaMetaData, TableMetaData};
pub use table::{Table, Tables, TablesError};
