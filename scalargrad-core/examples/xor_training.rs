//! # Training a Small MLP on the XOR Table
//!
//! This example walks the full training contract the engine supports:
//! 1. **Model construction**: a 2 -> [4] -> 1 network with tanh hidden
//!    units, built from a seeded generator so runs are reproducible.
//! 2. **Forward pass**: each XOR row produces a prediction node.
//! 3. **Loss**: mean squared error over the batch, itself a graph node.
//! 4. **Gradient reset**: one `zero_grad` call over the parameter set.
//! 5. **Backward pass**: gradients for every parameter in one traversal.
//! 6. **Update**: plain gradient descent through `SgdOptimizer`.
//!
//! Intermediate nodes are dropped at the end of every epoch; only the
//! parameter leaves persist, mutated in place.
//!
//! Run with: `cargo run --example xor_training`

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{Activation, Mlp, Module, MseLoss, Reduction};
use scalargrad_core::optim::{Optimizer, SgdOptimizer};
use scalargrad_core::{ScalarGradError, Value};

fn main() -> Result<(), ScalarGradError> {
    let mut rng = StdRng::seed_from_u64(42);
    let mlp = Mlp::new(2, &[4, 1], Activation::Tanh, &mut rng)?;
    println!(
        "model: 2 -> [4, 1], {} trainable parameters",
        mlp.parameters().len()
    );

    let inputs = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
    let targets = [0.0, 1.0, 1.0, 0.0];

    let loss_fn = MseLoss::new(Reduction::Mean);
    let mut optimizer = SgdOptimizer::new(mlp.parameters(), 0.1);

    for epoch in 0..50 {
        // Forward pass: model output for each row.
        let mut predictions = Vec::new();
        for row in &inputs {
            let row_values: Vec<Value> = row.iter().copied().map(Value::new).collect();
            predictions.push(mlp.forward(&row_values)?.remove(0));
        }

        let target_values: Vec<Value> = targets.iter().copied().map(Value::new).collect();
        let loss = loss_fn.calculate(&predictions, &target_values)?;

        optimizer.zero_grad();
        loss.backward()?;
        optimizer.step()?;

        println!("epoch {epoch}: loss = {}", loss.data());
    }

    println!("\npredictions after training:");
    for (row, target) in inputs.iter().zip(targets.iter()) {
        let row_values: Vec<Value> = row.iter().copied().map(Value::new).collect();
        let prediction = mlp.forward(&row_values)?.remove(0);
        println!(
            "  {:?} -> {:+.4} (target {})",
            row,
            prediction.data(),
            target
        );
    }

    Ok(())
}
