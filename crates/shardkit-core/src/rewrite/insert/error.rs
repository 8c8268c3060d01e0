use thiserror::Error as ThisError;

///
/// InsertShapeError
///
/// The INSERT cannot be normalized as written. Raised before any unit is
/// built, so a rejected statement never reaches a shard.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum InsertShapeError {
    #[error("insert statement does not reference a table")]
    MissingTable,

    #[error("insert statement mixes a column or VALUES list with a SET assignment list")]
    MixedShapes,

    #[error("insert column is qualified with '{table}', which is not the insert table")]
    UnknownTable { table: String },

    #[error("no table metadata for '{table}'; cannot resolve default insert columns")]
    UnknownTableMetaData { table: String },

    #[error("table '{table}' declares no columns")]
    NoColumns { table: String },

    #[error("insert column '{column}' is listed more than once")]
    DuplicateColumn { column: String },

    #[error("insert row {row} has {values} values but {columns} columns")]
    ArityMismatch {
        row: usize,
        columns: usize,
        values: usize,
    },
}
