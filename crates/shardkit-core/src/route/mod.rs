//! Module: route
//! Responsibility: derive typed route values for sharding columns from
//! predicates and insert units.
//! Does not own: sharding algorithms or physical data-node selection.
//! Boundary: an absent route value is a normal outcome and widens routing.

mod condition;
pub mod generator;
mod value;


pub use condition::{
    ShardingColumnSet, ShardingColumns, ShardingCondition, ShardingConditionEngine,
    ShardingConditions,
};
pub use generator::generate;
pub use value::{ListRouteValue, RangeRouteValue, RouteValue};
