use crate::error::ScalarGradError;
use crate::nn::{init, Activation, Parameter};
use crate::value::Value;
use rand::Rng;

/// A single unit: `activation(sum(w_i * x_i) + b)`.
///
/// Owns one weight leaf per input plus a bias leaf. Weights are drawn from
/// U[-1, 1] via the given generator; the bias starts at zero.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
    activation: Activation,
}

impl Neuron {
    pub fn new<R: Rng + ?Sized>(n_inputs: usize, activation: Activation, rng: &mut R) -> Self {
        let weights = init::uniform(rng, n_inputs)
            .into_iter()
            .map(Parameter::new)
            .collect();
        Neuron {
            weights,
            bias: Parameter::new(0.0),
            activation,
        }
    }

    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }

    /// Builds the weighted sum and activation as live graph nodes, so the
    /// result is differentiable w.r.t. both the inputs and this neuron's
    /// weights and bias.
    pub fn forward(&self, inputs: &[Value]) -> Result<Value, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::ShapeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::forward".to_string(),
            });
        }
        let mut pre_activation = self.bias.value().clone();
        for (weight, input) in self.weights.iter().zip(inputs) {
            pre_activation = pre_activation + weight.value() * input;
        }
        Ok(self.activation.apply(&pre_activation))
    }

    /// Weight leaves in input order, then the bias leaf.
    pub fn parameters(&self) -> Vec<Parameter> {
        let mut params: Vec<Parameter> = self.weights.to_vec();
        params.push(self.bias.clone());
        params
    }
}
