use crate::value::Value;
use std::fmt;
use std::ops::Deref;

/// A wrapper around a leaf [`Value`] marking it as a learnable parameter.
///
/// Parameters are created once at network construction and persist for the
/// network's lifetime; the optimizer mutates their `data` in place between
/// steps. Only fresh leaves are wrapped, so a parameter never carries an
/// operation record.
pub struct Parameter(Value);

impl Parameter {
    /// Creates a new parameter leaf holding `data`.
    pub fn new(data: f64) -> Self {
        Parameter(Value::new(data))
    }

    /// Consumes the wrapper and returns the underlying node handle.
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Borrows the underlying node handle.
    pub fn value(&self) -> &Value {
        &self.0
    }
}

// Allow accessing the underlying Value immutably via Deref.
impl Deref for Parameter {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({:?})", self.0)
    }
}

impl Clone for Parameter {
    /// Cloning a Parameter clones the handle (shallow, via `Rc`); both
    /// clones address the same leaf node.
    fn clone(&self) -> Self {
        Parameter(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_is_leaf() {
        let p = Parameter::new(0.5);
        assert!(p.is_leaf());
        assert_eq!(p.data(), 0.5);
        assert_eq!(p.grad(), 0.0);
    }

    #[test]
    fn test_clone_shares_leaf() {
        let p = Parameter::new(1.0);
        let q = p.clone();
        q.set_data(-1.0);
        assert_eq!(p.data(), -1.0);
    }
}
