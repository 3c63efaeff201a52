use crate::ops::arithmetic::mul_op;
use crate::value::Value;
use std::ops::Div;

/// Divides `a` by `b`, desugared to `a * b^-1` so the derivative rules of
/// `Mul` and `Pow` apply unchanged. Division by zero follows IEEE float
/// semantics (the reciprocal becomes infinite) rather than failing.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &b.powi(-1))
}

impl Div<Value> for Value {
    type Output = Value;

    fn div(self, other: Value) -> Self::Output {
        div_op(&self, &other)
    }
}

impl<'b> Div<&'b Value> for Value {
    type Output = Value;

    fn div(self, other: &'b Value) -> Self::Output {
        div_op(&self, other)
    }
}

impl<'a> Div<Value> for &'a Value {
    type Output = Value;

    fn div(self, other: Value) -> Self::Output {
        div_op(self, &other)
    }
}

impl<'a, 'b> Div<&'b Value> for &'a Value {
    type Output = Value;

    fn div(self, other: &'b Value) -> Self::Output {
        div_op(self, other)
    }
}

impl Div<f64> for Value {
    type Output = Value;

    fn div(self, other: f64) -> Self::Output {
        div_op(&self, &Value::new(other))
    }
}

impl Div<f64> for &Value {
    type Output = Value;

    fn div(self, other: f64) -> Self::Output {
        div_op(self, &Value::new(other))
    }
}

impl Div<Value> for f64 {
    type Output = Value;

    fn div(self, other: Value) -> Self::Output {
        div_op(&Value::new(self), &other)
    }
}

impl Div<&Value> for f64 {
    type Output = Value;

    fn div(self, other: &Value) -> Self::Output {
        div_op(&Value::new(self), other)
    }
}
