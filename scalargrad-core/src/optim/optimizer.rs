use crate::error::ScalarGradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers own handles to a network's parameter leaves and are
/// responsible for updating their values from accumulated gradients.
pub trait Optimizer {
    /// Performs a single optimization step over the managed parameters,
    /// using their accumulated gradients.
    fn step(&mut self) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all managed parameters.
    ///
    /// Call this before every backward pass; without it, gradients from
    /// prior steps accumulate silently instead of failing loudly.
    fn zero_grad(&mut self);
}
