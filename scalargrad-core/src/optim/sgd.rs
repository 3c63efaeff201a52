use crate::error::ScalarGradError;
use crate::nn::Parameter;
use crate::optim::Optimizer;

/// Plain gradient descent: `value -= lr * grad` per parameter.
///
/// Bundles the gradient reset over the whole parameter set into one
/// `zero_grad` call, so the precondition of the backward pass is a single
/// line in the training loop.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Parameter>,
    lr: f64,
}

impl SgdOptimizer {
    /// Creates a new optimizer over the given parameters, typically a
    /// network's `parameters()` result.
    pub fn new(params: impl IntoIterator<Item = Parameter>, lr: f64) -> Self {
        SgdOptimizer {
            params: params.into_iter().collect(),
            lr,
        }
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        log::trace!("sgd step over {} parameters", self.params.len());
        for param in &self.params {
            param.set_data(param.data() - self.lr * param.grad());
        }
        Ok(())
    }

    fn zero_grad(&mut self) {
        crate::autograd::zero_grad(self.params.iter().map(|p| p.value()));
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests; // Link to the test file
