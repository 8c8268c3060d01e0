//! Module: route::generator
//! Responsibility: turn one predicate right-hand side into a route value.
//! Does not own: sharding-column selection or shard lookup.
//! Boundary: pure and deterministic; placeholder indexes are checked, not clamped.

mod between;
mod compare;
mod in_list;

use crate::{
    error::{ErrorOrigin, InternalError},
    model::Column,
    route::RouteValue,
    statement::{ParameterError, PredicateRightValue},
    value::Value,
};

pub use between::BetweenRouteValueGenerator;
pub use compare::CompareRouteValueGenerator;
pub use in_list::InRouteValueGenerator;

///
/// RouteValueGenerator
///
/// One generator per predicate shape. `Ok(None)` means the predicate does
/// not constrain routing; it is not a failure.
///

pub trait RouteValueGenerator {
    type RightValue;

    fn generate(
        &self,
        right_value: &Self::RightValue,
        column: &Column,
        parameters: &[Value],
    ) -> Result<Option<RouteValue>, ParameterError>;
}

/// Dispatch `right_value` to the generator for its shape.
pub fn generate(
    right_value: &PredicateRightValue,
    column: &Column,
    parameters: &[Value],
) -> Result<Option<RouteValue>, InternalError> {
    let generated = match right_value {
        PredicateRightValue::Compare(compare) => {
            CompareRouteValueGenerator.generate(compare, column, parameters)
        }
        PredicateRightValue::In(in_list) => {
            InRouteValueGenerator.generate(in_list, column, parameters)
        }
        PredicateRightValue::Between(between) => {
            BetweenRouteValueGenerator.generate(between, column, parameters)
        }
    };

    generated.map_err(|err| InternalError::from_parameter_error(ErrorOrigin::Route, err))
}
