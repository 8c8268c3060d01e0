use crate::value::Value;
use std::cmp::Ordering;

/// Compare two values of a comparable family.
///
/// Numeric variants compare across Int/Uint/Float64. NULL and mixed
/// families are incomparable and yield `None`.
pub(crate) fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Uint(a), Value::Uint(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Uint(b)) => Some(compare_int_uint(*a, *b)),
        (Value::Uint(a), Value::Int(b)) => Some(compare_int_uint(*b, *a).reverse()),
        (Value::Float64(a), Value::Float64(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Float64(b)) => int_to_f64(*a).partial_cmp(&b.get()),
        (Value::Float64(a), Value::Int(b)) => a.get().partial_cmp(&int_to_f64(*b)),
        (Value::Uint(a), Value::Float64(b)) => uint_to_f64(*a).partial_cmp(&b.get()),
        (Value::Float64(a), Value::Uint(b)) => a.get().partial_cmp(&uint_to_f64(*b)),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::Blob(a), Value::Blob(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

fn compare_int_uint(left: i64, right: u64) -> Ordering {
    u64::try_from(left).map_or(Ordering::Less, |left| left.cmp(&right))
}

// Integers beyond 2^53 lose precision; ordering stays monotonic, which is
// all range membership needs.
#[expect(clippy::cast_precision_loss)]
const fn int_to_f64(v: i64) -> f64 {
    v as f64
}

#[expect(clippy::cast_precision_loss)]
const fn uint_to_f64(v: u64) -> f64 {
    v as f64
}
