use crate::error::ScalarGradError;
use crate::value::{Op, Value};

/// Raises a node to a fixed real exponent. The exponent is a constant, not a
/// node; only the base receives a gradient: d(out)/da = k * a^(k-1).
///
/// Fails with [`ScalarGradError::InvalidPower`] when the base is non-positive
/// and the exponent is non-integer, where the result is undefined in real
/// arithmetic. Integer exponents are always in-domain.
pub fn pow_op(base: &Value, exponent: f64) -> Result<Value, ScalarGradError> {
    let base_data = base.data();
    if base_data <= 0.0 && exponent.fract() != 0.0 {
        return Err(ScalarGradError::InvalidPower {
            base: base_data,
            exponent,
        });
    }
    Ok(Value::from_op(
        base_data.powf(exponent),
        Op::Pow(base.clone(), exponent),
    ))
}

impl Value {
    /// Raises this node to an arbitrary real exponent.
    pub fn powf(&self, exponent: f64) -> Result<Value, ScalarGradError> {
        pow_op(self, exponent)
    }

    /// Raises this node to an integer exponent.
    pub fn powi(&self, exponent: i32) -> Value {
        pow_op(self, f64::from(exponent)).expect("integer exponents are always in-domain")
    }
}
