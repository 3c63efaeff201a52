use crate::value::{Op, Value};

/// Hyperbolic tangent: out = tanh(a).
/// Local gradient: d(out)/da = 1 - tanh(a)^2, read off the output value.
pub fn tanh_op(a: &Value) -> Value {
    Value::from_op(a.data().tanh(), Op::Tanh(a.clone()))
}

impl Value {
    /// Applies the hyperbolic tangent activation.
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tanh_forward() {
        assert_eq!(Value::new(0.0).tanh().data(), 0.0);
        assert_relative_eq!(Value::new(1.0).tanh().data(), 1.0_f64.tanh());
        assert_relative_eq!(Value::new(-1.0).tanh().data(), -(1.0_f64.tanh()));
    }

    #[test]
    fn test_tanh_backward_at_zero() {
        // d(tanh)/dx = 1 - tanh(0)^2 = 1
        let a = Value::new(0.0);
        let c = a.tanh();
        c.backward().unwrap();
        assert_eq!(a.grad(), 1.0);
    }

    #[test]
    fn test_tanh_backward() {
        let x = 0.75;
        let a = Value::new(x);
        let c = a.tanh();
        c.backward().unwrap();
        assert_relative_eq!(a.grad(), 1.0 - x.tanh() * x.tanh(), max_relative = 1e-12);
    }

    #[test]
    fn test_tanh_saturates() {
        // Far from the origin the gradient is vanishingly small but nonzero.
        let a = Value::new(10.0);
        let c = a.tanh();
        c.backward().unwrap();
        assert!(a.grad() > 0.0);
        assert!(a.grad() < 1e-6);
    }
}
