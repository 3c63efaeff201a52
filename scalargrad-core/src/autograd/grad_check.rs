use crate::error::ScalarGradError;
use crate::value::Value;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("gradient check failed for input {input_index}: analytical {analytical} != numerical {numerical} (difference {difference})")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),

    #[error("backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),

    #[error("numerical gradient is NaN or infinite for input {input_index} (loss+: {loss_plus}, loss-: {loss_minus})")]
    NumericalGradNonFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("analytical gradient is NaN or infinite for input {input_index}: {value}")]
    AnalyticalGradNonFinite { input_index: usize, value: f64 },

    #[error("gradient check inputs must be leaf nodes; input {input_index} has an operation record")]
    InputNotLeaf { input_index: usize },
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against central finite differences.
///
/// `func` must rebuild its graph from the given leaves on every call: the
/// checker runs one forward/backward pass to collect analytical gradients,
/// then perturbs each leaf in place by `±epsilon` and re-evaluates the
/// forward value to estimate `(f(x+eps) - f(x-eps)) / (2 * eps)`.
///
/// A mismatch fails only if it exceeds `tolerance` both absolutely and
/// relative to the analytical magnitude, so tiny gradients are not drowned
/// by float noise.
pub fn check_grad<F>(
    func: F,
    inputs: &[Value],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
    }

    // Analytical pass: fresh gradients, one forward, one backward.
    crate::autograd::zero_grad(inputs.iter());
    let output = func(inputs).map_err(GradCheckError::ForwardPassError)?;
    output
        .backward()
        .map_err(GradCheckError::BackwardPassError)?;
    let analytical_grads: Vec<f64> = inputs.iter().map(|v| v.grad()).collect();

    for (i, input) in inputs.iter().enumerate() {
        let analytical = analytical_grads[i];
        if !analytical.is_finite() {
            return Err(GradCheckError::AnalyticalGradNonFinite {
                input_index: i,
                value: analytical,
            });
        }

        // Numerical estimate via in-place perturbation of this leaf.
        let original = input.data();

        input.set_data(original + epsilon);
        let loss_plus = func(inputs)
            .map_err(GradCheckError::ForwardPassError)?
            .data();

        input.set_data(original - epsilon);
        let loss_minus = func(inputs)
            .map_err(GradCheckError::ForwardPassError)?
            .data();

        input.set_data(original);

        let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNonFinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        let difference = (analytical - numerical).abs();
        if difference > tolerance && difference / (analytical.abs() + epsilon) > tolerance {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical,
                numerical,
                difference,
            });
        }
    }

    Ok(())
}
