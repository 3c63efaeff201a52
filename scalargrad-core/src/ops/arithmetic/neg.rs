use crate::value::{Op, Value};
use std::ops::Neg;

/// Negates a node. Local gradient: d(out)/da = -1.
pub fn neg_op(a: &Value) -> Value {
    Value::from_op(-a.data(), Op::Neg(a.clone()))
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Self::Output {
        neg_op(&self)
    }
}

impl<'a> Neg for &'a Value {
    type Output = Value;

    fn neg(self) -> Self::Output {
        neg_op(self)
    }
}
