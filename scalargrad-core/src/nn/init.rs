//! Weight initialization over an explicitly passed random generator.
//!
//! Global random state would make training runs unrepeatable; every
//! constructor that draws weights takes `&mut impl Rng`, and callers seed
//! it (`StdRng::seed_from_u64`) when they need reproducibility.

use rand::distributions::Uniform;
use rand::Rng;
use rand_distr::Normal;

/// Draws `n` samples from U[-1, 1], the conventional range for small
/// feed-forward weight initialization.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<f64> {
    let dist = Uniform::new_inclusive(-1.0, 1.0);
    (0..n).map(|_| rng.sample(dist)).collect()
}

/// Draws `n` samples from N(mean, std^2).
///
/// # Panics
/// Panics if `std` is negative or non-finite.
pub fn normal<R: Rng + ?Sized>(rng: &mut R, n: usize, mean: f64, std: f64) -> Vec<f64> {
    let dist = Normal::new(mean, std).expect("standard deviation must be finite and non-negative");
    (0..n).map(|_| rng.sample(dist)).collect()
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
