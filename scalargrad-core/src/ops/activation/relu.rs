use crate::value::{Op, Value};

/// Rectified Linear Unit: out = max(0, a).
/// Local gradient: d(out)/da = 1 if a > 0, else 0.
pub fn relu_op(a: &Value) -> Value {
    let a_data = a.data();
    let out = if a_data > 0.0 { a_data } else { 0.0 };
    Value::from_op(out, Op::Relu(a.clone()))
}

impl Value {
    /// Applies the Rectified Linear Unit activation, max(0, x).
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relu_forward() {
        assert_eq!(Value::new(-3.0).relu().data(), 0.0);
        assert_eq!(Value::new(0.0).relu().data(), 0.0);
        assert_eq!(Value::new(4.0).relu().data(), 4.0);
    }

    #[test]
    fn test_relu_backward_positive() {
        let a = Value::new(4.0);
        let c = a.relu();
        c.backward().unwrap();
        assert_eq!(a.grad(), 1.0);
    }

    #[test]
    fn test_relu_backward_clamped() {
        // Gradient is blocked at and below zero.
        let a = Value::new(-3.0);
        let c = a.relu();
        c.backward().unwrap();
        assert_eq!(a.grad(), 0.0);

        let b = Value::new(0.0);
        let d = b.relu();
        d.backward().unwrap();
        assert_eq!(b.grad(), 0.0);
    }

    #[test]
    fn test_relu_backward_chain() {
        // loss = relu(x * 2): dx = 2 when x > 0, 0 otherwise
        let x = Value::new(1.5);
        let loss = (&x * 2.0).relu();
        loss.backward().unwrap();
        assert_eq!(x.grad(), 2.0);

        let y = Value::new(-1.5);
        let loss = (&y * 2.0).relu();
        loss.backward().unwrap();
        assert_eq!(y.grad(), 0.0);
    }
}
