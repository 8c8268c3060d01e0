use super::*;
use proptest::prelude::*;

fn float(v: f64) -> Value {
    Value::Float64(Float64::try_new(v).expect("test float should be finite"))
}

#[test]
fn float64_rejects_non_finite() {
    assert!(Float64::try_new(f64::NAN).is_none());
    assert!(Float64::try_new(f64::INFINITY).is_none());
    assert!(Float64::try_from(f64::NEG_INFINITY).is_err());
}

#[test]
fn float64_canonicalizes_negative_zero() {
    let neg = Float64::try_new(-0.0).unwrap();
    let pos = Float64::try_new(0.0).unwrap();

    assert_eq!(neg, pos);
    assert_eq!(neg.get().to_bits(), 0.0f64.to_bits());
}

#[test]
fn compare_crosses_numeric_families() {
    assert_eq!(Value::Int(-1).compare(&Value::Uint(0)), Some(Ordering::Less));
    assert_eq!(Value::Uint(5).compare(&Value::Int(5)), Some(Ordering::Equal));
    assert_eq!(Value::Int(3).compare(&float(2.5)), Some(Ordering::Greater));
    assert_eq!(float(7.0).compare(&Value::Uint(7)), Some(Ordering::Equal));
}

#[test]
fn compare_rejects_null_and_mixed_families() {
    assert_eq!(Value::Null.compare(&Value::Null), None);
    assert_eq!(Value::Int(1).compare(&Value::Null), None);
    assert_eq!(Value::from("1").compare(&Value::Int(1)), None);
    assert_eq!(Value::Bool(true).compare(&Value::Int(1)), None);
}

#[test]
fn to_i64_accepts_integers_in_range_only() {
    assert_eq!(Value::Int(-4).to_i64(), Some(-4));
    assert_eq!(Value::Uint(9).to_i64(), Some(9));
    assert_eq!(Value::Uint(u64::MAX).to_i64(), None);
    assert_eq!(Value::from("9").to_i64(), None);
    assert_eq!(float(1.0).to_i64(), None);
}

#[test]
fn display_renders_sql_literals() {
    assert_eq!(Value::Null.to_string(), "NULL");
    assert_eq!(Value::from("o'neil").to_string(), "'o''neil'");
    assert_eq!(Value::Blob(vec![0x0a, 0xff]).to_string(), "X'0AFF'");
    assert_eq!(Value::from(Option::<i64>::None), Value::Null);
}

#[test]
fn serde_encodes_float_as_plain_number() {
    let json = serde_json::to_string(&float(1.5)).unwrap();
    assert_eq!(json, r#"{"Float64":1.5}"#);

    let decoded: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, float(1.5));
}

proptest! {
    #[test]
    fn int_uint_ordering_matches_i128(a in any::<i64>(), b in any::<u64>()) {
        let expected = i128::from(a).cmp(&i128::from(b));

        prop_assert_eq!(Value::Int(a).compare(&Value::Uint(b)), Some(expected));
        prop_assert_eq!(Value::Uint(b).compare(&Value::Int(a)), Some(expected.reverse()));
    }
}
