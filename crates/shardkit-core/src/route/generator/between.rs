use crate::{
    model::Column,
    route::{RangeRouteValue, RouteValue, generator::RouteValueGenerator},
    statement::{ParameterError, PredicateBetweenRightValue},
    value::Value,
};

///
/// BetweenRouteValueGenerator
///
/// Bounds are resolved independently and passed through unvalidated.
///

pub struct BetweenRouteValueGenerator;

impl RouteValueGenerator for BetweenRouteValueGenerator {
    type RightValue = PredicateBetweenRightValue;

    fn generate(
        &self,
        right_value: &PredicateBetweenRightValue,
        column: &Column,
        parameters: &[Value],
    ) -> Result<Option<RouteValue>, ParameterError> {
        let lower = right_value.between.resolve(parameters)?;
        let upper = right_value.and.resolve(parameters)?;

        Ok(Some(RouteValue::Range(RangeRouteValue::new(
            column.clone(),
            lower,
            upper,
        ))))
    }
}
