use crate::value::{Op, Value};
use std::iter::Sum;
use std::ops::Add;

/// Adds two nodes. Local gradients: d(out)/da = 1, d(out)/db = 1.
pub fn add_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() + b.data(), Op::Add(a.clone(), b.clone()))
}

impl Add<Value> for Value {
    type Output = Value;

    fn add(self, other: Value) -> Self::Output {
        add_op(&self, &other)
    }
}

impl<'b> Add<&'b Value> for Value {
    type Output = Value;

    fn add(self, other: &'b Value) -> Self::Output {
        add_op(&self, other)
    }
}

impl<'a> Add<Value> for &'a Value {
    type Output = Value;

    fn add(self, other: Value) -> Self::Output {
        add_op(self, &other)
    }
}

impl<'a, 'b> Add<&'b Value> for &'a Value {
    type Output = Value;

    fn add(self, other: &'b Value) -> Self::Output {
        add_op(self, other)
    }
}

impl Add<f64> for Value {
    type Output = Value;

    fn add(self, other: f64) -> Self::Output {
        add_op(&self, &Value::new(other))
    }
}

impl Add<f64> for &Value {
    type Output = Value;

    fn add(self, other: f64) -> Self::Output {
        add_op(self, &Value::new(other))
    }
}

impl Add<Value> for f64 {
    type Output = Value;

    fn add(self, other: Value) -> Self::Output {
        add_op(&Value::new(self), &other)
    }
}

impl Add<&Value> for f64 {
    type Output = Value;

    fn add(self, other: &Value) -> Self::Output {
        add_op(&Value::new(self), other)
    }
}

// Folding from a fresh zero leaf keeps the empty sum total; the extra node
// is harmless and disposable like any other intermediate.
impl Sum for Value {
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Self {
        iter.fold(Value::new(0.0), |acc, v| acc + v)
    }
}
