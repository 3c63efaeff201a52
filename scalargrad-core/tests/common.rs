// Shared helpers for integration tests.
// Added allow(dead_code) because usage across different test crates isn't
// detected easily.

/// The four-row XOR table: inputs and targets.
#[allow(dead_code)]
pub fn xor_table() -> (Vec<[f64; 2]>, Vec<f64>) {
    let inputs = vec![[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
    let targets = vec![0.0, 1.0, 1.0, 0.0];
    (inputs, targets)
}
