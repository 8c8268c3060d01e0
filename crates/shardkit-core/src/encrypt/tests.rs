use crate::{
    encrypt::{EncryptConfigError, EncryptRule, EncryptRuleConfig, EncryptValueDeriver},
    error::{ErrorClass, ErrorOrigin},
    model::{SchemaMetaData, Table, Tables, TableMetaData},
    rewrite::insert::{InsertOptimizeEngine, InsertOptimizeResult, ValueSource},
    statement::{
        AssignmentSegment, ColumnSegment, ExpressionSegment, InsertStatement, InsertValue,
        SetAssignmentsSegment,
    },
    test_support::{FixtureEncryptorFactory, encrypt_rule},
    value::Value,
};

fn tables(name: &str) -> Tables {
    let mut tables = Tables::new();
    tables.add(Table::new(name, None));

    tables
}

fn values_insert(table: &str, expressions: Vec<ExpressionSegment>) -> InsertStatement {
    InsertStatement {
        tables: tables(table),
        columns: vec![ColumnSegment::new("col1"), ColumnSegment::new("col2")],
        values: vec![InsertValue::new(expressions)],
        ..InsertStatement::new()
    }
}

fn set_insert(table: &str, first: ExpressionSegment, second: ExpressionSegment) -> InsertStatement {
    InsertStatement {
        tables: tables(table),
        set_assignment: Some(SetAssignmentsSegment::new(vec![
            AssignmentSegment::new(ColumnSegment::new("col1"), first),
            AssignmentSegment::new(ColumnSegment::new("col2"), second),
        ])),
        ..InsertStatement::new()
    }
}

fn optimize(
    statement: &InsertStatement,
    parameters: &[Value],
) -> InsertOptimizeResult {
    let metadata = SchemaMetaData::new();
    let rule = encrypt_rule();

    InsertOptimizeEngine::new(&metadata)
        .with_encrypt_rule(&rule)
        .optimize(statement, parameters)
        .expect("optimize")
}

fn rule_from(document: &str) -> Result<EncryptRule, EncryptConfigError> {
    let config = EncryptRuleConfig::from_toml_str(document)?;

    EncryptRule::from_config(&config, &FixtureEncryptorFactory)
}

// ---------------------------------------------------------------------
// Insert derivation
// ---------------------------------------------------------------------

#[test]
fn values_placeholders_on_plain_encrypt_table() {
    let statement = values_insert(
        "t_encrypt",
        vec![ExpressionSegment::parameter(0), ExpressionSegment::parameter(1)],
    );

    let result = optimize(&statement, &[Value::Int(1), Value::Int(2)]);

    assert_eq!(result.columns.all_column_names(), vec!["col1", "col2"]);
    assert_eq!(result.units.len(), 1);
    assert_eq!(result.units[0].parameters(), &[Value::Int(1), Value::Int(2)]);
}

#[test]
fn values_literals_on_query_assisted_table_add_derived_columns() {
    let statement = values_insert(
        "t_query_encrypt",
        vec![
            ExpressionSegment::literal(1_i64),
            ExpressionSegment::literal(2_i64),
        ],
    );

    let result = optimize(&statement, &[]);
    let unit = &result.units[0];

    assert_eq!(
        result.columns.all_column_names(),
        vec!["col1", "col2", "query1", "query2"]
    );
    assert!(unit.parameters().is_empty());
    assert_eq!(unit.column_value("col1"), Some(&Value::Int(1)));
    assert_eq!(unit.column_value("col2"), Some(&Value::Int(2)));
    assert_eq!(unit.column_value("query1"), Some(&Value::Int(1)));
    assert_eq!(unit.column_value("query2"), Some(&Value::Int(2)));
    assert_eq!(
        unit.column_values().get("query1").map(|entry| entry.source),
        Some(ValueSource::Literal)
    );
}

#[test]
fn set_literals_on_plain_encrypt_table() {
    let statement = set_insert(
        "t_encrypt",
        ExpressionSegment::literal(1_i64),
        ExpressionSegment::literal(2_i64),
    );

    let result = optimize(&statement, &[]);

    assert_eq!(result.columns.all_column_names().len(), 2);
    assert!(result.units[0].parameters().is_empty());
}

#[test]
fn set_literals_on_query_assisted_table_inline_derived_values() {
    let statement = set_insert(
        "t_query_encrypt",
        ExpressionSegment::literal(1_i64),
        ExpressionSegment::literal(2_i64),
    );

    let result = optimize(&statement, &[]);
    let unit = &result.units[0];

    assert_eq!(
        result.columns.all_column_names(),
        vec!["col1", "col2", "query1", "query2"]
    );
    assert!(unit.parameters().is_empty());
    assert_eq!(unit.column_value("col1"), Some(&Value::Int(1)));
    assert_eq!(unit.column_value("col2"), Some(&Value::Int(2)));
    assert_eq!(unit.column_value("query1"), Some(&Value::Int(1)));
    assert_eq!(unit.column_value("query2"), Some(&Value::Int(2)));
}

#[test]
fn set_placeholders_on_query_assisted_table_append_derived_parameters() {
    let statement = set_insert(
        "t_query_encrypt",
        ExpressionSegment::parameter(0),
        ExpressionSegment::parameter(1),
    );

    let result = optimize(&statement, &[Value::Int(1), Value::Int(2)]);
    let unit = &result.units[0];

    assert_eq!(result.columns.all_column_names().len(), 4);
    assert_eq!(
        unit.parameters(),
        &[Value::Int(1), Value::Int(2), Value::Int(1), Value::Int(2)]
    );
    assert_eq!(
        unit.column_values().get("query2").map(|entry| entry.source),
        Some(ValueSource::Parameter { position: 3 })
    );
}

#[test]
fn cipher_replaces_plain_value_and_its_parameter_slot() {
    let rule = rule_from(
        r#"
        [[encryptors]]
        name = "tagger"
        type = "tagging"
        qualified_columns = "t_user.pwd"
        cipher_columns = "t_user.pwd_cipher"
        assisted_query_columns = "t_user.pwd_query"
        props = { prefix = "aes" }
        "#,
    )
    .expect("rule");
    let metadata = SchemaMetaData::new();
    let statement = InsertStatement {
        tables: tables("t_user"),
        columns: vec![ColumnSegment::new("name"), ColumnSegment::new("pwd")],
        values: vec![InsertValue::new(vec![
            ExpressionSegment::literal("ann"),
            ExpressionSegment::parameter(0),
        ])],
        ..InsertStatement::new()
    };

    let result = InsertOptimizeEngine::new(&metadata)
        .with_encrypt_rule(&rule)
        .optimize(&statement, &[Value::from("secret")])
        .expect("optimize");
    let unit = &result.units[0];

    assert_eq!(result.columns.cipher_column("PWD"), Some("pwd_cipher"));
    assert_eq!(result.columns.cipher_column("name"), None);
    assert_eq!(unit.column_value("name"), Some(&Value::from("ann")));
    assert_eq!(unit.column_value("pwd"), Some(&Value::from("aes:'secret'")));
    assert_eq!(
        unit.parameters(),
        &[Value::from("aes:'secret'"), Value::from("q:'secret'")]
    );
}

#[test]
fn null_plain_values_pass_through_unencrypted() {
    let statement = values_insert(
        "t_query_encrypt",
        vec![ExpressionSegment::literal(Value::Null), ExpressionSegment::literal(2_i64)],
    );

    let result = optimize(&statement, &[]);

    assert_eq!(result.units[0].column_value("col1"), Some(&Value::Null));
    assert_eq!(result.units[0].column_value("query1"), Some(&Value::Null));
}

#[test]
fn table_without_rule_is_left_untouched() {
    let metadata = SchemaMetaData::new()
        .with_table("t_plain", TableMetaData::new(["col1", "col2"]));
    let rule = encrypt_rule();
    let statement = InsertStatement {
        tables: tables("t_plain"),
        values: vec![InsertValue::new(vec![
            ExpressionSegment::literal(1_i64),
            ExpressionSegment::literal(2_i64),
        ])],
        ..InsertStatement::new()
    };

    let result = InsertOptimizeEngine::new(&metadata)
        .with_encrypt_rule(&rule)
        .optimize(&statement, &[])
        .expect("optimize");

    assert!(result.columns.derived_column_names().is_empty());
    assert_eq!(result.units[0].column_value("col1"), Some(&Value::Int(1)));
}

#[test]
fn encryptor_failure_leaves_result_unchanged() {
    let rule = rule_from(
        r#"
        [[encryptors]]
        name = "broken"
        type = "failing"
        qualified_columns = "t_encrypt.col2"
        "#,
    )
    .expect("rule");
    let metadata = SchemaMetaData::new();
    let statement = values_insert(
        "t_encrypt",
        vec![ExpressionSegment::literal(1_i64), ExpressionSegment::literal(2_i64)],
    );
    let mut result = crate::rewrite::insert::InsertNormalizer::new(&metadata)
        .normalize(&statement, &[])
        .expect("normalize");
    let before = result.clone();

    let err = EncryptValueDeriver::new(&rule)
        .derive(&mut result)
        .expect_err("encryptor fails");

    assert_eq!(err.class, ErrorClass::Internal);
    assert_eq!(err.origin, ErrorOrigin::Encrypt);
    assert_eq!(result, before);
}

#[test]
fn explicit_assisted_column_in_insert_is_rejected() {
    let metadata = SchemaMetaData::new();
    let rule = encrypt_rule();
    let statement = InsertStatement {
        tables: tables("t_query_encrypt"),
        columns: vec![ColumnSegment::new("col1"), ColumnSegment::new("query1")],
        values: vec![InsertValue::new(vec![
            ExpressionSegment::literal(1_i64),
            ExpressionSegment::literal(1_i64),
        ])],
        ..InsertStatement::new()
    };

    let err = InsertOptimizeEngine::new(&metadata)
        .with_encrypt_rule(&rule)
        .optimize(&statement, &[])
        .expect_err("duplicate derived column");

    assert!(err.is_shape_violation());
}

// ---------------------------------------------------------------------
// Rule configuration
// ---------------------------------------------------------------------

#[test]
fn rule_keeps_declaration_order_and_cipher_defaults() {
    let rule = encrypt_rule();
    let table = rule.table("T_QUERY_ENCRYPT").expect("table");

    assert_eq!(rule.table_names(), vec!["t_encrypt", "t_query_encrypt"]);
    let logic: Vec<&str> = table.columns().iter().map(|column| column.logic()).collect();
    assert_eq!(logic, vec!["col1", "col2"]);
    let column = table.column("col2").expect("column");
    assert_eq!(column.cipher(), "col2");
    assert_eq!(column.assisted_query(), Some("query2"));
    assert_eq!(column.encryptor_name(), "assisted_encryptor");
}

#[test]
fn unknown_encryptor_type_is_rejected() {
    let err = rule_from(
        r#"
        [[encryptors]]
        name = "mystery"
        type = "rot13"
        qualified_columns = "t.c"
        "#,
    )
    .expect_err("unknown type");

    assert_eq!(
        err,
        EncryptConfigError::UnknownEncryptorType {
            encryptor: "mystery".to_string(),
            kind: "rot13".to_string(),
        }
    );
}

#[test]
fn malformed_qualified_column_is_rejected() {
    let err = rule_from(
        r#"
        [[encryptors]]
        name = "bad"
        type = "test"
        qualified_columns = "no_table_here"
        "#,
    )
    .expect_err("invalid column");

    assert!(matches!(err, EncryptConfigError::InvalidQualifiedColumn { .. }));
}

#[test]
fn assisted_column_count_must_match() {
    let err = rule_from(
        r#"
        [[encryptors]]
        name = "short"
        type = "assisted_test"
        qualified_columns = "t.a, t.b"
        assisted_query_columns = "t.a_q"
        "#,
    )
    .expect_err("count mismatch");

    assert_eq!(
        err,
        EncryptConfigError::ColumnCountMismatch {
            encryptor: "short".to_string(),
            list: "assisted query",
            expected: 2,
            found: 1,
        }
    );
}

#[test]
fn assisted_columns_require_query_assisted_encryptor() {
    let err = rule_from(
        r#"
        [[encryptors]]
        name = "plain"
        type = "test"
        qualified_columns = "t.a"
        assisted_query_columns = "t.a_q"
        "#,
    )
    .expect_err("standard encryptor");

    assert!(matches!(err, EncryptConfigError::AssistedEncryptorRequired { .. }));
}

#[test]
fn cross_table_cipher_column_is_rejected() {
    let err = rule_from(
        r#"
        [[encryptors]]
        name = "split"
        type = "test"
        qualified_columns = "t.a"
        cipher_columns = "u.a_cipher"
        "#,
    )
    .expect_err("cross table");

    assert!(matches!(err, EncryptConfigError::CrossTableColumn { .. }));
}

#[test]
fn column_claimed_by_two_encryptors_is_rejected() {
    let err = rule_from(
        r#"
        [[encryptors]]
        name = "first"
        type = "test"
        qualified_columns = "t.a"

        [[encryptors]]
        name = "second"
        type = "test"
        qualified_columns = "T.A"
        "#,
    )
    .expect_err("duplicate");

    assert!(matches!(err, EncryptConfigError::DuplicateColumn { .. }));
}

#[test]
fn invalid_toml_is_parse_error() {
    let err = EncryptRuleConfig::from_toml_str("[[encryptors]\nname = ").expect_err("parse");

    assert!(matches!(err, EncryptConfigError::Parse { .. }));
}

#[test]
fn config_round_trips_through_json() {
    let config = EncryptRuleConfig::from_toml_str(
        r#"
        [[encryptors]]
        name = "e"
        type = "test"
        qualified_columns = "t.a"
        props = { key = "k1" }
        "#,
    )
    .expect("config");

    let json = serde_json::to_string(&config).expect("serialize");
    let decoded: EncryptRuleConfig = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(decoded, config);
    assert_eq!(decoded.encryptors[0].props.get("key").map(String::as_str), Some("k1"));
}
