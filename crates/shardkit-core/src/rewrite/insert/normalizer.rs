use crate::{
    error::{ErrorOrigin, InternalError},
    model::{SchemaMetaData, Tables},
    rewrite::insert::{
        InsertColumns, InsertOptimizeResult, InsertShapeError,
        unit::{ColumnEntry, ColumnValues, InsertUnit, ValueSource},
    },
    statement::{
        ColumnSegment, ExpressionSegment, InsertStatement, ParameterError, resolve_parameter,
    },
    value::Value,
};
use std::collections::HashSet;

///
/// InsertNormalizer
///
/// Converts an INSERT of either shape into one `InsertUnit` per row.
/// The whole statement is validated before the first unit is built.
///

pub struct InsertNormalizer<'a> {
    metadata: &'a SchemaMetaData,
}

impl<'a> InsertNormalizer<'a> {
    #[must_use]
    pub const fn new(metadata: &'a SchemaMetaData) -> Self {
        Self { metadata }
    }

    pub fn normalize(
        &self,
        statement: &InsertStatement,
        parameters: &[Value],
    ) -> Result<InsertOptimizeResult, InternalError> {
        let table = statement
            .tables
            .iter()
            .next()
            .ok_or(InsertShapeError::MissingTable)?
            .name()
            .to_string();
        if statement.set_assignment.is_some()
            && (!statement.values.is_empty() || !statement.columns.is_empty())
        {
            return Err(InsertShapeError::MixedShapes.into());
        }

        let columns = self.resolve_columns(statement, &table)?;
        let rows = collect_rows(statement);
        for (row, expressions) in rows.iter().enumerate() {
            if expressions.len() != columns.len() {
                return Err(InsertShapeError::ArityMismatch {
                    row,
                    columns: columns.len(),
                    values: expressions.len(),
                }
                .into());
            }
        }

        let units = rows
            .iter()
            .map(|expressions| build_unit(&columns, expressions, parameters))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| InternalError::from_parameter_error(ErrorOrigin::Rewrite, err))?;

        tracing::debug!(
            table = %table,
            rows = units.len(),
            columns = columns.len(),
            "normalized insert statement"
        );

        Ok(InsertOptimizeResult {
            table_name: table,
            columns: InsertColumns::new(columns),
            units,
        })
    }

    // SET list, the table's declared order, or the explicit list.
    fn resolve_columns(
        &self,
        statement: &InsertStatement,
        table: &str,
    ) -> Result<Vec<String>, InsertShapeError> {
        let segments: Vec<&ColumnSegment> = if let Some(set) = statement.set_assignment.as_ref() {
            set.assignments
                .iter()
                .map(|assignment| &assignment.column)
                .collect()
        } else if statement.use_default_columns() {
            let meta = self
                .metadata
                .get(table)
                .ok_or_else(|| InsertShapeError::UnknownTableMetaData {
                    table: table.to_string(),
                })?;
            if meta.column_names().is_empty() {
                return Err(InsertShapeError::NoColumns {
                    table: table.to_string(),
                });
            }
            return check_duplicates(meta.column_names().to_vec());
        } else {
            statement.columns.iter().collect()
        };

        for segment in &segments {
            check_owner(segment, &statement.tables, table)?;
        }

        check_duplicates(
            segments
                .into_iter()
                .map(|segment| segment.name.clone())
                .collect(),
        )
    }
}

// A qualified column must name the insert table, by name or alias.
fn check_owner(
    segment: &ColumnSegment,
    tables: &Tables,
    table: &str,
) -> Result<(), InsertShapeError> {
    let Some(owner) = segment.owner.as_deref() else {
        return Ok(());
    };
    match tables.find(owner) {
        Some(found) if found.name().eq_ignore_ascii_case(table) => Ok(()),
        _ => Err(InsertShapeError::UnknownTable {
            table: owner.to_string(),
        }),
    }
}

fn check_duplicates(columns: Vec<String>) -> Result<Vec<String>, InsertShapeError> {
    let mut seen = HashSet::with_capacity(columns.len());
    for column in &columns {
        if !seen.insert(column.to_ascii_lowercase()) {
            return Err(InsertShapeError::DuplicateColumn {
                column: column.clone(),
            });
        }
    }

    Ok(columns)
}

// One expression list per row; a SET list is exactly one implicit row.
fn collect_rows(statement: &InsertStatement) -> Vec<Vec<&ExpressionSegment>> {
    match statement.set_assignment.as_ref() {
        Some(set) => vec![
            set.assignments
                .iter()
                .map(|assignment| &assignment.value)
                .collect(),
        ],
        None => statement
            .values
            .iter()
            .map(|row| row.expressions.iter().collect())
            .collect(),
    }
}

fn build_unit(
    columns: &[String],
    expressions: &[&ExpressionSegment],
    parameters: &[Value],
) -> Result<InsertUnit, ParameterError> {
    let mut entries = Vec::with_capacity(columns.len());
    // (placeholder index, entry slot)
    let mut markers = Vec::new();

    for (column, expression) in columns.iter().zip(expressions) {
        let value = match expression {
            ExpressionSegment::Literal(value) => value.clone(),
            ExpressionSegment::ParameterMarker(index) => {
                markers.push((*index, entries.len()));
                resolve_parameter(parameters, *index)?.clone()
            }
        };
        entries.push(ColumnEntry {
            name: column.clone(),
            value,
            source: ValueSource::Literal,
        });
    }

    // residual parameters follow placeholder order, not column order
    markers.sort_by_key(|(index, _)| *index);
    let mut residual = Vec::with_capacity(markers.len());
    for (position, (_, slot)) in markers.into_iter().enumerate() {
        let entry = &mut entries[slot];
        entry.source = ValueSource::Parameter { position };
        residual.push(entry.value.clone());
    }

    let mut column_values = ColumnValues::with_capacity(entries.len());
    for entry in entries {
        column_values.insert(entry);
    }

    Ok(InsertUnit::new(column_values, residual))
}
