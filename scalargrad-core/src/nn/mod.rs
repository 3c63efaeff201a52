// Neural-network building blocks layered on the scalar engine.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module
pub mod parameter; // struct Parameter

// Re-export common items
pub use layers::layer::Layer;
pub use layers::mlp::Mlp;
pub use layers::neuron::Neuron;
pub use losses::mse::{MseLoss, Reduction};
pub use module::Module;
pub use parameter::Parameter;

use crate::value::Value;

/// The nonlinearity applied by a neuron's output.
///
/// A closed set, like the engine's primitive operations: adding a variant
/// forces the `apply` dispatch to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Pass-through; used for output layers that produce raw scores.
    Identity,
    Tanh,
    Relu,
}

impl Activation {
    pub fn apply(&self, value: &Value) -> Value {
        match self {
            Activation::Identity => value.clone(),
            Activation::Tanh => value.tanh(),
            Activation::Relu => value.relu(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_apply() {
        let v = Value::new(-2.0);
        assert_eq!(Activation::Identity.apply(&v).data(), -2.0);
        assert_eq!(Activation::Relu.apply(&v).data(), 0.0);
        assert_eq!(Activation::Tanh.apply(&v).data(), (-2.0_f64).tanh());
    }

    #[test]
    fn test_identity_shares_node() {
        // Identity adds no op node; the result aliases its input.
        let v = Value::new(1.0);
        let out = Activation::Identity.apply(&v);
        out.set_data(9.0);
        assert_eq!(v.data(), 9.0);
    }
}
