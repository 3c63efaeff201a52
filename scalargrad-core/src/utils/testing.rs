use crate::value::Value;
use approx::relative_eq;

/// Checks that a node's forward value is within tolerance of `expected`.
/// Panics with a descriptive message on mismatch.
pub fn check_value_near(actual: &Value, expected: f64, tolerance: f64) {
    let data = actual.data();
    if !relative_eq!(data, expected, max_relative = tolerance, epsilon = tolerance) {
        panic!(
            "value mismatch: actual={:?}, expected={:?}, tolerance={:?}",
            data, expected, tolerance
        );
    }
}

/// Checks that a node's accumulated gradient is within tolerance of
/// `expected`. Panics with a descriptive message on mismatch.
pub fn check_grad_near(actual: &Value, expected: f64, tolerance: f64) {
    let grad = actual.grad();
    if !relative_eq!(grad, expected, max_relative = tolerance, epsilon = tolerance) {
        panic!(
            "gradient mismatch: actual={:?}, expected={:?}, tolerance={:?}",
            grad, expected, tolerance
        );
    }
}
