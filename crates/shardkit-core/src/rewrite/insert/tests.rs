use crate::{
    error::{ErrorClass, ErrorDetail, ErrorOrigin},
    model::{SchemaMetaData, Table, TableMetaData, Tables},
    rewrite::insert::{InsertNormalizer, InsertShapeError, ValueSource},
    statement::{
        AssignmentSegment, ColumnSegment, ExpressionSegment, InsertStatement, InsertValue,
        SetAssignmentsSegment,
    },
    value::Value,
};
use proptest::prelude::*;

fn tables(name: &str) -> Tables {
    let mut tables = Tables::new();
    tables.add(Table::new(name, None));

    tables
}

fn columns(names: &[&str]) -> Vec<ColumnSegment> {
    names.iter().map(|name| ColumnSegment::new(*name)).collect()
}

fn metadata() -> SchemaMetaData {
    SchemaMetaData::new().with_table("t_order", TableMetaData::new(["order_id", "user_id", "status"]))
}

fn shape_error(statement: &InsertStatement, parameters: &[Value]) -> InsertShapeError {
    let err = InsertNormalizer::new(&metadata())
        .normalize(statement, parameters)
        .expect_err("shape error");
    assert_eq!(err.class, ErrorClass::ShapeViolation);
    assert_eq!(err.origin, ErrorOrigin::Rewrite);

    match err.detail {
        Some(ErrorDetail::InsertShape(shape)) => shape,
        other => panic!("unexpected detail {other:?}"),
    }
}

#[test]
fn multi_row_values_produce_one_unit_per_row() {
    let statement = InsertStatement {
        tables: tables("t_order"),
        columns: columns(&["order_id", "status"]),
        values: vec![
            InsertValue::new(vec![
                ExpressionSegment::parameter(0),
                ExpressionSegment::literal("init"),
            ]),
            InsertValue::new(vec![
                ExpressionSegment::parameter(1),
                ExpressionSegment::parameter(2),
            ]),
        ],
        ..InsertStatement::new()
    };
    let parameters = [Value::Int(1), Value::Int(2), Value::from("paid")];

    let result = InsertNormalizer::new(&metadata())
        .normalize(&statement, &parameters)
        .expect("normalize");

    assert_eq!(result.table_name, "t_order");
    assert_eq!(result.columns.all_column_names(), vec!["order_id", "status"]);
    assert_eq!(result.units.len(), 2);
    assert_eq!(result.units[0].parameters(), &[Value::Int(1)]);
    assert_eq!(result.units[0].column_value("status"), Some(&Value::from("init")));
    assert_eq!(
        result.units[1].parameters(),
        &[Value::Int(2), Value::from("paid")]
    );
}

#[test]
fn residual_parameters_follow_placeholder_order_not_column_order() {
    let statement = InsertStatement {
        tables: tables("t_order"),
        columns: columns(&["order_id", "user_id"]),
        values: vec![InsertValue::new(vec![
            ExpressionSegment::parameter(1),
            ExpressionSegment::parameter(0),
        ])],
        ..InsertStatement::new()
    };

    let result = InsertNormalizer::new(&metadata())
        .normalize(&statement, &[Value::Int(10), Value::Int(20)])
        .expect("normalize");
    let unit = &result.units[0];

    assert_eq!(unit.column_value("order_id"), Some(&Value::Int(20)));
    assert_eq!(unit.column_value("user_id"), Some(&Value::Int(10)));
    assert_eq!(unit.parameters(), &[Value::Int(10), Value::Int(20)]);
    assert_eq!(
        unit.column_values().get("ORDER_ID").map(|entry| entry.source),
        Some(ValueSource::Parameter { position: 1 })
    );
}

#[test]
fn set_assignments_form_a_single_unit() {
    let statement = InsertStatement {
        tables: tables("t_order"),
        set_assignment: Some(SetAssignmentsSegment::new(vec![
            AssignmentSegment::new(ColumnSegment::new("user_id"), ExpressionSegment::parameter(0)),
            AssignmentSegment::new(ColumnSegment::new("status"), ExpressionSegment::literal("new")),
        ])),
        ..InsertStatement::new()
    };

    let result = InsertNormalizer::new(&metadata())
        .normalize(&statement, &[Value::Int(7)])
        .expect("normalize");

    assert_eq!(result.columns.all_column_names(), vec!["user_id", "status"]);
    assert_eq!(result.units.len(), 1);
    assert_eq!(result.units[0].parameters(), &[Value::Int(7)]);
}

#[test]
fn missing_column_list_uses_declared_table_order() {
    let statement = InsertStatement {
        tables: tables("T_ORDER"),
        values: vec![InsertValue::new(vec![
            ExpressionSegment::literal(1_i64),
            ExpressionSegment::literal(2_i64),
            ExpressionSegment::literal("x"),
        ])],
        ..InsertStatement::new()
    };

    let result = InsertNormalizer::new(&metadata())
        .normalize(&statement, &[])
        .expect("normalize");

    assert_eq!(
        result.columns.all_column_names(),
        vec!["order_id", "user_id", "status"]
    );
    assert!(result.units[0].parameters().is_empty());
}

#[test]
fn arity_mismatch_is_reported_with_row_index() {
    let statement = InsertStatement {
        tables: tables("t_order"),
        columns: columns(&["order_id", "user_id"]),
        values: vec![
            InsertValue::new(vec![
                ExpressionSegment::literal(1_i64),
                ExpressionSegment::literal(2_i64),
            ]),
            InsertValue::new(vec![ExpressionSegment::literal(3_i64)]),
        ],
        ..InsertStatement::new()
    };

    assert_eq!(
        shape_error(&statement, &[]),
        InsertShapeError::ArityMismatch {
            row: 1,
            columns: 2,
            values: 1,
        }
    );
}

#[test]
fn mixed_values_and_set_are_rejected() {
    let statement = InsertStatement {
        tables: tables("t_order"),
        values: vec![InsertValue::new(vec![ExpressionSegment::literal(1_i64)])],
        set_assignment: Some(SetAssignmentsSegment::new(vec![AssignmentSegment::new(
            ColumnSegment::new("order_id"),
            ExpressionSegment::literal(1_i64),
        )])),
        ..InsertStatement::new()
    };

    assert_eq!(shape_error(&statement, &[]), InsertShapeError::MixedShapes);
}

#[test]
fn column_list_with_set_assignments_is_rejected() {
    let statement = InsertStatement {
        tables: tables("t_order"),
        columns: columns(&["order_id"]),
        set_assignment: Some(SetAssignmentsSegment::new(vec![AssignmentSegment::new(
            ColumnSegment::new("order_id"),
            ExpressionSegment::literal(1_i64),
        )])),
        ..InsertStatement::new()
    };

    assert_eq!(shape_error(&statement, &[]), InsertShapeError::MixedShapes);
}

#[test]
fn set_assignment_qualified_with_foreign_table_is_rejected() {
    let statement = InsertStatement {
        tables: tables("t_order"),
        set_assignment: Some(SetAssignmentsSegment::new(vec![AssignmentSegment::new(
            ColumnSegment::new("user_id").with_owner("t_other"),
            ExpressionSegment::literal(1_i64),
        )])),
        ..InsertStatement::new()
    };

    assert_eq!(
        shape_error(&statement, &[]),
        InsertShapeError::UnknownTable {
            table: "t_other".to_string()
        }
    );
}

#[test]
fn values_column_qualified_with_foreign_table_is_rejected() {
    let statement = InsertStatement {
        tables: tables("t_order"),
        columns: vec![
            ColumnSegment::new("order_id"),
            ColumnSegment::new("user_id").with_owner("t_other"),
        ],
        values: vec![InsertValue::new(vec![
            ExpressionSegment::literal(1_i64),
            ExpressionSegment::literal(2_i64),
        ])],
        ..InsertStatement::new()
    };

    assert_eq!(
        shape_error(&statement, &[]),
        InsertShapeError::UnknownTable {
            table: "t_other".to_string()
        }
    );
}

#[test]
fn columns_qualified_with_insert_table_name_or_alias_are_accepted() {
    let mut tables = Tables::new();
    tables.add(Table::new("t_order", Some("o".to_string())));
    let statement = InsertStatement {
        tables,
        set_assignment: Some(SetAssignmentsSegment::new(vec![
            AssignmentSegment::new(
                ColumnSegment::new("order_id").with_owner("O"),
                ExpressionSegment::literal(1_i64),
            ),
            AssignmentSegment::new(
                ColumnSegment::new("user_id").with_owner("T_ORDER"),
                ExpressionSegment::literal(2_i64),
            ),
        ])),
        ..InsertStatement::new()
    };

    let result = InsertNormalizer::new(&metadata())
        .normalize(&statement, &[])
        .expect("normalize");

    assert_eq!(result.columns.all_column_names(), vec!["order_id", "user_id"]);
}

#[test]
fn statement_without_table_is_rejected() {
    let statement = InsertStatement {
        columns: columns(&["order_id"]),
        values: vec![InsertValue::new(vec![ExpressionSegment::literal(1_i64)])],
        ..InsertStatement::new()
    };

    assert_eq!(shape_error(&statement, &[]), InsertShapeError::MissingTable);
}

#[test]
fn duplicate_insert_column_is_rejected() {
    let statement = InsertStatement {
        tables: tables("t_order"),
        columns: columns(&["order_id", "ORDER_ID"]),
        values: vec![InsertValue::new(vec![
            ExpressionSegment::literal(1_i64),
            ExpressionSegment::literal(2_i64),
        ])],
        ..InsertStatement::new()
    };

    assert!(matches!(
        shape_error(&statement, &[]),
        InsertShapeError::DuplicateColumn { .. }
    ));
}

#[test]
fn default_columns_need_table_metadata() {
    let statement = InsertStatement {
        tables: tables("t_unknown"),
        values: vec![InsertValue::new(vec![ExpressionSegment::literal(1_i64)])],
        ..InsertStatement::new()
    };

    assert_eq!(
        shape_error(&statement, &[]),
        InsertShapeError::UnknownTableMetaData {
            table: "t_unknown".to_string()
        }
    );
}

#[test]
fn placeholder_beyond_parameters_is_contract_violation() {
    let statement = InsertStatement {
        tables: tables("t_order"),
        columns: columns(&["order_id"]),
        values: vec![InsertValue::new(vec![ExpressionSegment::parameter(4)])],
        ..InsertStatement::new()
    };

    let err = InsertNormalizer::new(&metadata())
        .normalize(&statement, &[Value::Int(1)])
        .expect_err("out of range");

    assert!(err.is_contract_violation());
    assert_eq!(err.origin, ErrorOrigin::Rewrite);
}

proptest! {
    #[test]
    fn unit_parameters_are_sorted_placeholder_values(
        permutation in Just(vec![0usize, 1, 2, 3]).prop_shuffle(),
    ) {
        let statement = InsertStatement {
            tables: tables("t"),
            columns: columns(&["a", "b", "c", "d"]),
            values: vec![InsertValue::new(
                permutation.iter().map(|index| ExpressionSegment::parameter(*index)).collect(),
            )],
            ..InsertStatement::new()
        };
        let parameters: Vec<Value> = (0..4_i64).map(|value| Value::Int(value * 10)).collect();

        let result = InsertNormalizer::new(&SchemaMetaData::new())
            .normalize(&statement, &parameters)
            .expect("normalize");

        prop_assert_eq!(result.units[0].parameters(), parameters.as_slice());
        for (column, index) in ["a", "b", "c", "d"].iter().zip(&permutation) {
            prop_assert_eq!(result.units[0].column_value(column), Some(&parameters[*index]));
        }
    }
}
