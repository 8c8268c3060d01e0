use crate::{
    model::Column,
    route::{ListRouteValue, RouteValue, generator::RouteValueGenerator},
    statement::{CompareOperator, ParameterError, PredicateCompareRightValue},
    value::Value,
};

///
/// CompareRouteValueGenerator
///
/// Only equality is shard-selective. Inequalities yield no route value;
/// no range is inferred from them.
///

pub struct CompareRouteValueGenerator;

impl RouteValueGenerator for CompareRouteValueGenerator {
    type RightValue = PredicateCompareRightValue;

    fn generate(
        &self,
        right_value: &PredicateCompareRightValue,
        column: &Column,
        parameters: &[Value],
    ) -> Result<Option<RouteValue>, ParameterError> {
        if right_value.operator != CompareOperator::Eq {
            return Ok(None);
        }
        let value = right_value.expression.resolve(parameters)?;

        Ok(Some(RouteValue::List(ListRouteValue::new(
            column.clone(),
            vec![value],
        ))))
    }
}
