use crate::{
    model::Column,
    route::{ListRouteValue, RouteValue, generator::RouteValueGenerator},
    statement::{ParameterError, PredicateInRightValue},
    value::Value,
};

///
/// InRouteValueGenerator
///

pub struct InRouteValueGenerator;

impl RouteValueGenerator for InRouteValueGenerator {
    type RightValue = PredicateInRightValue;

    fn generate(
        &self,
        right_value: &PredicateInRightValue,
        column: &Column,
        parameters: &[Value],
    ) -> Result<Option<RouteValue>, ParameterError> {
        // source order is kept so per-shard SQL is reproducible
        let values = right_value
            .expressions
            .iter()
            .map(|expr| expr.resolve(parameters))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(RouteValue::List(ListRouteValue::new(
            column.clone(),
            values,
        ))))
    }
}
