use crate::error::ScalarGradError;
use crate::nn::layers::Layer;
use crate::nn::{Activation, Module, Parameter};
use crate::value::Value;
use rand::Rng;

/// A feed-forward network: ordered layers with matching widths.
///
/// `activation` is applied by every hidden layer; the output layer is
/// `Identity`, producing raw scores. All weights come from the passed
/// generator, so a seeded `StdRng` makes construction reproducible.
#[derive(Debug)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Builds a network mapping `n_inputs` features through layers of the
    /// given sizes; `layer_sizes` lists each layer's output width, so
    /// `Mlp::new(2, &[4, 1], ..)` is a 2 -> 4 -> 1 network.
    pub fn new<R: Rng + ?Sized>(
        n_inputs: usize,
        layer_sizes: &[usize],
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if layer_sizes.is_empty() {
            return Err(ScalarGradError::InvalidArchitecture {
                reason: "a network needs at least one layer".to_string(),
            });
        }
        if n_inputs == 0 || layer_sizes.contains(&0) {
            return Err(ScalarGradError::InvalidArchitecture {
                reason: "layer widths must be non-zero".to_string(),
            });
        }

        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut width = n_inputs;
        for (i, &size) in layer_sizes.iter().enumerate() {
            let layer_activation = if i + 1 < layer_sizes.len() {
                activation
            } else {
                Activation::Identity
            };
            layers.push(Layer::new(width, size, layer_activation, rng));
            width = size;
        }
        log::debug!(
            "constructed mlp {} -> {:?} with {} parameters",
            n_inputs,
            layer_sizes,
            layers.iter().map(|l| l.parameters().len()).sum::<usize>()
        );
        Ok(Mlp { layers })
    }

    pub fn n_inputs(&self) -> usize {
        self.layers[0].n_inputs()
    }

    pub fn n_outputs(&self) -> usize {
        self.layers[self.layers.len() - 1].n_outputs()
    }
}

impl Module for Mlp {
    /// Chains layer outputs; the returned sequence is the final layer's
    /// output (often a single node, but not constrained to be).
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.layers
            .iter()
            .flat_map(|layer| layer.parameters())
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, Parameter)> {
        let mut named = Vec::new();
        for (i, layer) in self.layers.iter().enumerate() {
            for (name, param) in layer.named_parameters() {
                named.push((format!("layers.{i}.{name}"), param));
            }
        }
        named
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests; // Link to the test file
