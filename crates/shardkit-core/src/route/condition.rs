use crate::{
    error::InternalError,
    model::{Column, Tables},
    rewrite::insert::InsertUnit,
    route::{ListRouteValue, RangeRouteValue, RouteValue, generator},
    statement::{ColumnSegment, OrPredicateSegment},
    value::Value,
};
use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, collections::HashSet};

///
/// ShardingColumns
///
/// Answers whether a column drives routing. Implemented by the sharding
/// rule; `ShardingColumnSet` is the plain in-memory form.
///

pub trait ShardingColumns {
    fn is_sharding_column(&self, column: &Column) -> bool;
}

///
/// ShardingColumnSet
///

#[derive(Clone, Debug, Default)]
pub struct ShardingColumnSet {
    columns: HashSet<Column>,
}

impl ShardingColumnSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, table: &str, column: &str) -> Self {
        self.insert(table, column);
        self
    }

    pub fn insert(&mut self, table: &str, column: &str) {
        self.columns.insert(Column::new(column, table));
    }
}

impl ShardingColumns for ShardingColumnSet {
    fn is_sharding_column(&self, column: &Column) -> bool {
        self.columns.contains(column)
    }
}

///
/// ShardingCondition
///
/// Route values that hold together (one AND group, or one insert unit).
/// At most one route value per column.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ShardingCondition {
    route_values: Vec<RouteValue>,
}

impl ShardingCondition {
    #[must_use]
    pub const fn new(route_values: Vec<RouteValue>) -> Self {
        Self { route_values }
    }

    #[must_use]
    pub fn route_values(&self) -> &[RouteValue] {
        &self.route_values
    }

    #[must_use]
    pub fn route_value(&self, column: &Column) -> Option<&RouteValue> {
        self.route_values
            .iter()
            .find(|value| value.column() == column)
    }

    // Narrow an existing value for the same column; incomparable bounds
    // keep both values side by side.
    fn push(&mut self, incoming: RouteValue) {
        if let Some(existing) = self
            .route_values
            .iter_mut()
            .find(|value| value.column() == incoming.column())
            && let Some(merged) = intersect(existing, &incoming)
        {
            *existing = merged;
            return;
        }

        self.route_values.push(incoming);
    }
}

///
/// ShardingConditions
///
/// OR of conditions. Empty means the statement is not narrowed by any
/// sharding column and must be broadcast.
///

#[derive(Clone, Debug, Default, Deref, Deserialize, Eq, IntoIterator, PartialEq, Serialize)]
#[into_iterator(owned, ref)]
pub struct ShardingConditions {
    conditions: Vec<ShardingCondition>,
}

impl ShardingConditions {
    #[must_use]
    pub const fn new(conditions: Vec<ShardingCondition>) -> Self {
        Self { conditions }
    }

    #[must_use]
    pub fn is_broadcast(&self) -> bool {
        self.conditions.is_empty()
    }
}

///
/// ShardingConditionEngine
///
/// Collects route values for sharding columns from a WHERE clause or from
/// normalized insert units.
///

pub struct ShardingConditionEngine<'a, S: ?Sized> {
    columns: &'a S,
}

impl<'a, S> ShardingConditionEngine<'a, S>
where
    S: ShardingColumns + ?Sized,
{
    #[must_use]
    pub const fn new(columns: &'a S) -> Self {
        Self { columns }
    }

    /// One condition per AND group. A single group without any sharding
    /// value widens the whole statement to a broadcast.
    pub fn where_conditions(
        &self,
        where_segment: &OrPredicateSegment,
        tables: &Tables,
        parameters: &[Value],
    ) -> Result<ShardingConditions, InternalError> {
        let mut conditions = Vec::with_capacity(where_segment.and_predicates.len());

        for and_predicate in &where_segment.and_predicates {
            let mut condition = ShardingCondition::default();
            for predicate in &and_predicate.predicates {
                let Some(column) = self.resolve_column(&predicate.column, tables) else {
                    continue;
                };
                match generator::generate(&predicate.right_value, &column, parameters)? {
                    Some(route_value) => condition.push(route_value),
                    None => tracing::debug!(
                        column = %column,
                        "predicate does not constrain routing"
                    ),
                }
            }
            if condition.route_values.is_empty() {
                tracing::debug!("and group has no sharding values; broadcasting");
                return Ok(ShardingConditions::default());
            }
            conditions.push(condition);
        }

        Ok(ShardingConditions::new(conditions))
    }

    /// One condition per insert unit, in unit order.
    #[must_use]
    pub fn insert_conditions(&self, units: &[InsertUnit], table_name: &str) -> ShardingConditions {
        let conditions = units
            .iter()
            .map(|unit| {
                let route_values = unit
                    .column_values()
                    .iter()
                    .filter_map(|entry| {
                        let column = Column::new(entry.name.as_str(), table_name);
                        self.columns.is_sharding_column(&column).then(|| {
                            RouteValue::List(ListRouteValue::new(column, vec![entry.value.clone()]))
                        })
                    })
                    .collect();

                ShardingCondition::new(route_values)
            })
            .collect();

        ShardingConditions::new(conditions)
    }

    // Qualified columns resolve through the owner (alias or name); bare
    // columns bind to the single table, or the first table sharding on them.
    fn resolve_column(&self, segment: &ColumnSegment, tables: &Tables) -> Option<Column> {
        let column = match &segment.owner {
            Some(owner) => Column::new(segment.name.as_str(), tables.find(owner)?.name()),
            None => match tables.single_table_name() {
                Some(table) => Column::new(segment.name.as_str(), table),
                None => tables
                    .iter()
                    .map(|table| Column::new(segment.name.as_str(), table.name()))
                    .find(|column| self.columns.is_sharding_column(column))?,
            },
        };

        self.columns.is_sharding_column(&column).then_some(column)
    }
}

fn intersect(existing: &RouteValue, incoming: &RouteValue) -> Option<RouteValue> {
    match (existing, incoming) {
        (RouteValue::List(left), RouteValue::List(right)) => {
            let values = left
                .values()
                .iter()
                .filter(|value| {
                    right
                        .values()
                        .iter()
                        .any(|other| value.compare(other) == Some(Ordering::Equal))
                })
                .cloned()
                .collect();

            Some(RouteValue::List(ListRouteValue::new(
                left.column().clone(),
                values,
            )))
        }
        (RouteValue::Range(left), RouteValue::Range(right)) => {
            let lower = match left.lower().compare(right.lower())? {
                Ordering::Less => right.lower(),
                _ => left.lower(),
            };
            let upper = match left.upper().compare(right.upper())? {
                Ordering::Greater => right.upper(),
                _ => left.upper(),
            };

            Some(RouteValue::Range(RangeRouteValue::new(
                left.column().clone(),
                lower.clone(),
                upper.clone(),
            )))
        }
        (RouteValue::List(list), RouteValue::Range(range))
        | (RouteValue::Range(range), RouteValue::List(list)) => {
            let values = list
                .values()
                .iter()
                .filter(|value| range.contains(value))
                .cloned()
                .collect();

            Some(RouteValue::List(ListRouteValue::new(
                list.column().clone(),
                values,
            )))
        }
    }
}
