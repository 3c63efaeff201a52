use crate::value::{Op, Value};
use std::ops::Mul;

/// Multiplies two nodes. Local gradients: d(out)/da = b, d(out)/db = a.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() * b.data(), Op::Mul(a.clone(), b.clone()))
}

impl Mul<Value> for Value {
    type Output = Value;

    fn mul(self, other: Value) -> Self::Output {
        mul_op(&self, &other)
    }
}

impl<'b> Mul<&'b Value> for Value {
    type Output = Value;

    fn mul(self, other: &'b Value) -> Self::Output {
        mul_op(&self, other)
    }
}

impl<'a> Mul<Value> for &'a Value {
    type Output = Value;

    fn mul(self, other: Value) -> Self::Output {
        mul_op(self, &other)
    }
}

impl<'a, 'b> Mul<&'b Value> for &'a Value {
    type Output = Value;

    fn mul(self, other: &'b Value) -> Self::Output {
        mul_op(self, other)
    }
}

impl Mul<f64> for Value {
    type Output = Value;

    fn mul(self, other: f64) -> Self::Output {
        mul_op(&self, &Value::new(other))
    }
}

impl Mul<f64> for &Value {
    type Output = Value;

    fn mul(self, other: f64) -> Self::Output {
        mul_op(self, &Value::new(other))
    }
}

impl Mul<Value> for f64 {
    type Output = Value;

    fn mul(self, other: Value) -> Self::Output {
        mul_op(&Value::new(self), &other)
    }
}

impl Mul<&Value> for f64 {
    type Output = Value;

    fn mul(self, other: &Value) -> Self::Output {
        mul_op(&Value::new(self), other)
    }
}
