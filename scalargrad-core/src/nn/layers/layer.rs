use crate::error::ScalarGradError;
use crate::nn::layers::Neuron;
use crate::nn::{Activation, Module, Parameter};
use crate::value::Value;
use rand::Rng;

/// An ordered group of neurons sharing the same inputs; its output is the
/// sequence of each neuron's output.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
    n_inputs: usize,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        n_inputs: usize,
        n_outputs: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Self {
        let neurons = (0..n_outputs)
            .map(|_| Neuron::new(n_inputs, activation, rng))
            .collect();
        Layer { neurons, n_inputs }
    }

    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    pub fn n_outputs(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        if inputs.len() != self.n_inputs {
            return Err(ScalarGradError::ShapeMismatch {
                expected: self.n_inputs,
                actual: inputs.len(),
                operation: "Layer::forward".to_string(),
            });
        }
        self.neurons
            .iter()
            .map(|neuron| neuron.forward(inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.neurons
            .iter()
            .flat_map(|neuron| neuron.parameters())
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, Parameter)> {
        let mut named = Vec::new();
        for (i, neuron) in self.neurons.iter().enumerate() {
            let params = neuron.parameters();
            let n_weights = neuron.n_inputs();
            for (k, param) in params.into_iter().enumerate() {
                let name = if k < n_weights {
                    format!("neurons.{i}.weight.{k}")
                } else {
                    format!("neurons.{i}.bias")
                };
                named.push((name, param));
            }
        }
        named
    }
}
