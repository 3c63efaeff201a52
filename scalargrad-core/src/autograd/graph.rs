use crate::value::{Value, ValueData};
use std::cell::RefCell;
use std::collections::HashSet;

/// Recursively builds a post-order topological sort of the sub-DAG reachable
/// from `node` via operand edges. Used by `backward()` to process nodes in
/// the correct order.
///
/// The visited set is keyed on node identity (pointer address), not value
/// equality: a shared subexpression is reached through every parent but must
/// be ordered exactly once.
pub(crate) fn build_topo(
    node: &Value,
    visited: &mut HashSet<*const RefCell<ValueData>>,
    sorted_list: &mut Vec<Value>,
) {
    if visited.insert(node.node_id()) {
        for operand in node.op().operands() {
            build_topo(&operand, visited, sorted_list);
        }
        sorted_list.push(node.clone());
    }
}
