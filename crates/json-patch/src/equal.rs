//! Structural JSON equality.
//!
//! Containers compare recursively; object key order is ignored. Numbers
//! compare by mathematical value across integer and float representations,
//! so `1` equals `1.0` while `1` and `true` stay unequal.

use num_cmp::NumCmp;
use serde_json::{Number, Value};

/// Performs a deep structural equality check between two JSON values.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => number_eq(a, b),
        (Value::String(a), Value::String(b)) => a == b,

        (Value::Array(arr_a), Value::Array(arr_b)) => {
            arr_a.len() == arr_b.len()
                && arr_a.iter().zip(arr_b).all(|(x, y)| deep_equal(x, y))
        }

        (Value::Object(obj_a), Value::Object(obj_b)) => {
            obj_a.len() == obj_b.len()
                && obj_a.iter().all(|(key, val_a)| match obj_b.get(key) {
                    Some(val_b) => deep_equal(val_a, val_b),
                    None => false,
                })
        }

        // Different shapes are never equal.
        _ => false,
    }
}

enum Repr {
    U(u64),
    I(i64),
    F(f64),
}

fn repr(n: &Number) -> Repr {
    if let Some(u) = n.as_u64() {
        Repr::U(u)
    } else if let Some(i) = n.as_i64() {
        Repr::I(i)
    } else {
        Repr::F(n.as_f64().unwrap_or(f64::NAN))
    }
}

/// Number equality by mathematical value, exact across representations.
pub(crate) fn number_eq(a: &Number, b: &Number) -> bool {
    match (repr(a), repr(b)) {
        (Repr::U(x), Repr::U(y)) => x == y,
        (Repr::I(x), Repr::I(y)) => x == y,
        (Repr::F(x), Repr::F(y)) => x == y,
        (Repr::U(x), Repr::I(y)) | (Repr::I(y), Repr::U(x)) => NumCmp::num_eq(x, y),
        (Repr::U(x), Repr::F(y)) | (Repr::F(y), Repr::U(x)) => NumCmp::num_eq(x, y),
        (Repr::I(x), Repr::F(y)) | (Repr::F(y), Repr::I(x)) => NumCmp::num_eq(x, y),
    }
}
