//! Reverse-mode automatic differentiation over the scalar graph.
//!
//! The backward pass walks the sub-DAG reachable from a root in reverse
//! topological order and accumulates each node's contribution into its
//! operands. All local-derivative rules live in one exhaustive dispatch over
//! [`Op`](crate::value::Op): the primitive set is closed, so a missing rule
//! is a compile error rather than a silent zero gradient.

pub mod grad_check;
pub(crate) mod graph;

use crate::error::ScalarGradError;
use crate::value::{Op, Value};
use std::collections::HashSet;

impl Value {
    /// Computes gradients of `self` with respect to every node reachable
    /// from it via operand edges.
    ///
    /// Seeds `self.grad = 1.0` (d(self)/d(self)), then propagates in reverse
    /// topological order, *adding* each contribution so shared
    /// subexpressions receive the sum over all consuming paths.
    ///
    /// Every reachable gradient must be zero on entry (see [`zero_grad`]);
    /// a non-zero gradient on the root itself is rejected with
    /// [`ScalarGradError::StaleGradient`] to catch double-backward bugs.
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        let starting_grad = self.grad();
        if starting_grad != 0.0 {
            return Err(ScalarGradError::StaleGradient {
                grad: starting_grad,
            });
        }
        if self.is_leaf() {
            log::debug!("backward() called on a leaf value; only its own gradient is seeded");
        }

        let mut visited = HashSet::new();
        let mut ordered = Vec::new();
        graph::build_topo(self, &mut visited, &mut ordered);
        log::trace!("backward pass over {} nodes", ordered.len());

        self.set_grad(1.0);
        for node in ordered.iter().rev() {
            let (data, grad, op) = {
                let guard = node.data.borrow();
                (guard.data, guard.grad, guard.op.clone())
            };
            accumulate_operand_grads(data, grad, &op);
        }
        Ok(())
    }
}

/// The local-derivative table: given a node's forward value, its fully
/// accumulated gradient, and its provenance record, add the chain-rule
/// contribution to each operand.
///
/// Operand values are read before any gradient write, so an operand shared
/// between both slots of a binary op (`x * x`) accumulates correctly.
fn accumulate_operand_grads(data: f64, grad: f64, op: &Op) {
    match op {
        Op::Leaf => {}
        Op::Add(a, b) => {
            a.accumulate_grad(grad);
            b.accumulate_grad(grad);
        }
        Op::Mul(a, b) => {
            let (a_data, b_data) = (a.data(), b.data());
            a.accumulate_grad(b_data * grad);
            b.accumulate_grad(a_data * grad);
        }
        Op::Neg(a) => {
            a.accumulate_grad(-grad);
        }
        Op::Pow(a, exponent) => {
            let base = a.data();
            a.accumulate_grad(exponent * base.powf(exponent - 1.0) * grad);
        }
        // tanh(x) is the node's own forward value: d/dx = 1 - tanh(x)^2
        Op::Tanh(a) => {
            a.accumulate_grad((1.0 - data * data) * grad);
        }
        Op::Relu(a) => {
            if a.data() > 0.0 {
                a.accumulate_grad(grad);
            }
        }
    }
}

/// Resets the gradient of every given node to 0.
///
/// Typically called on a network's `parameters()` before each backward pass;
/// skipping it makes gradients from prior steps accumulate silently.
pub fn zero_grad<'a, I>(values: I)
where
    I: IntoIterator<Item = &'a Value>,
{
    for value in values {
        value.zero_grad();
    }
}
