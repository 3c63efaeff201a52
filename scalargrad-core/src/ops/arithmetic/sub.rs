use crate::ops::arithmetic::{add_op, neg_op};
use crate::value::Value;
use std::ops::Sub;

/// Subtracts `b` from `a`, desugared to `a + (-b)` so the derivative rules
/// of `Add` and `Neg` apply unchanged.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &neg_op(b))
}

impl Sub<Value> for Value {
    type Output = Value;

    fn sub(self, other: Value) -> Self::Output {
        sub_op(&self, &other)
    }
}

impl<'b> Sub<&'b Value> for Value {
    type Output = Value;

    fn sub(self, other: &'b Value) -> Self::Output {
        sub_op(&self, other)
    }
}

impl<'a> Sub<Value> for &'a Value {
    type Output = Value;

    fn sub(self, other: Value) -> Self::Output {
        sub_op(self, &other)
    }
}

impl<'a, 'b> Sub<&'b Value> for &'a Value {
    type Output = Value;

    fn sub(self, other: &'b Value) -> Self::Output {
        sub_op(self, other)
    }
}

impl Sub<f64> for Value {
    type Output = Value;

    fn sub(self, other: f64) -> Self::Output {
        sub_op(&self, &Value::new(other))
    }
}

impl Sub<f64> for &Value {
    type Output = Value;

    fn sub(self, other: f64) -> Self::Output {
        sub_op(self, &Value::new(other))
    }
}

impl Sub<Value> for f64 {
    type Output = Value;

    fn sub(self, other: Value) -> Self::Output {
        sub_op(&Value::new(self), &other)
    }
}

impl Sub<&Value> for f64 {
    type Output = Value;

    fn sub(self, other: &Value) -> Self::Output {
        sub_op(&Value::new(self), other)
    }
}
