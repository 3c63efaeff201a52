// Core modules of the crate
pub mod autograd;
pub mod ops;
pub mod value;

pub mod nn;
pub mod optim;
pub mod utils;

pub mod error;

// Re-export the node type so it is reachable directly via `scalargrad_core::Value`
pub use value::Value;
pub use error::ScalarGradError;
