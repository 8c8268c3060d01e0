use crate::{model::Column, value::Value};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// RouteValue
///
/// Typed, resolved routing input for one sharding column, consumed by the
/// sharding algorithm to pick physical shards.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum RouteValue {
    List(ListRouteValue),
    Range(RangeRouteValue),
}

impl RouteValue {
    #[must_use]
    pub const fn column(&self) -> &Column {
        match self {
            Self::List(list) => &list.column,
            Self::Range(range) => &range.column,
        }
    }
}

///
/// ListRouteValue
///
/// Exact candidate values, in source order. An empty list routes nowhere.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ListRouteValue {
    column: Column,
    values: Vec<Value>,
}

impl ListRouteValue {
    #[must_use]
    pub const fn new(column: Column, values: Vec<Value>) -> Self {
        Self { column, values }
    }

    #[must_use]
    pub const fn column(&self) -> &Column {
        &self.column
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    #[must_use]
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

///
/// RangeRouteValue
///
/// Closed range `[lower, upper]`. Bounds are passed through as written;
/// `lower > upper` is not rejected and simply contains nothing.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RangeRouteValue {
    column: Column,
    lower: Value,
    upper: Value,
}

impl RangeRouteValue {
    #[must_use]
    pub const fn new(column: Column, lower: Value, upper: Value) -> Self {
        Self {
            column,
            lower,
            upper,
        }
    }

    #[must_use]
    pub const fn column(&self) -> &Column {
        &self.column
    }

    #[must_use]
    pub const fn lower(&self) -> &Value {
        &self.lower
    }

    #[must_use]
    pub const fn upper(&self) -> &Value {
        &self.upper
    }

    /// Whether `value` falls inside the closed range.
    ///
    /// Values incomparable with either bound are outside.
    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        matches!(
            self.lower.compare(value),
            Some(Ordering::Less | Ordering::Equal)
        ) && matches!(
            value.compare(&self.upper),
            Some(Ordering::Less | Ordering::Equal)
        )
    }
}
