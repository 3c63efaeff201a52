use crate::error::ScalarGradError;
use crate::nn::Parameter;
use crate::value::Value;

/// The base trait for all neural network modules, from a single layer up to
/// a whole network.
///
/// A module maps a sequence of input nodes to a sequence of output nodes
/// built entirely from engine primitives, and exposes its trainable
/// parameter set in a stable order.
pub trait Module {
    /// Performs a forward pass of the module.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::ShapeMismatch`] when the input width does
    /// not match the module's expected width; no nodes are constructed in
    /// that case.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError>;

    /// Returns every learnable parameter of the module, including those of
    /// sub-modules, in a deterministic order that is stable across calls.
    ///
    /// The returned handles share the underlying leaf nodes: zeroing their
    /// gradients or updating their values acts on the live network.
    fn parameters(&self) -> Vec<Parameter>;

    /// Returns all learnable parameters with hierarchical names
    /// (e.g. `layers.0.neurons.1.weight.2`), in the same order as
    /// [`Module::parameters`].
    fn named_parameters(&self) -> Vec<(String, Parameter)>;
}
