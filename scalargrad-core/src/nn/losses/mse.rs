use crate::error::ScalarGradError;
use crate::value::Value;

/// Specifies the reduction applied over the per-pair squared errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    Mean,
    Sum,
}

impl Reduction {
    pub fn from_str(s: &str) -> Result<Self, ScalarGradError> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalarGradError::UnsupportedReduction(s.to_string())),
        }
    }
}

/// Squared-error loss between predictions and targets.
///
/// The result is itself a graph node built from engine primitives, so
/// calling `backward` on it propagates into every prediction and, through
/// them, into the network parameters. Targets are ordinary nodes too; when
/// they are leaves they simply collect gradients nothing reads.
#[derive(Debug, Clone)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    pub fn calculate(
        &self,
        predictions: &[Value],
        targets: &[Value],
    ) -> Result<Value, ScalarGradError> {
        if predictions.len() != targets.len() {
            return Err(ScalarGradError::ShapeMismatch {
                expected: targets.len(),
                actual: predictions.len(),
                operation: "MseLoss::calculate".to_string(),
            });
        }
        if predictions.is_empty() {
            return Err(ScalarGradError::EmptyBatch);
        }

        let mut total = Value::new(0.0);
        for (prediction, target) in predictions.iter().zip(targets) {
            total = total + (prediction - target).powi(2);
        }
        Ok(match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => total * (1.0 / predictions.len() as f64),
        })
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mse_test.rs"]
mod tests; // Link to the test file
