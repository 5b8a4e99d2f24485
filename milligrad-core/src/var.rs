use crate::autograd::Op;
use crate::graph::{Graph, NodeId};
use std::fmt;

/// A scalar variable: a borrowed handle to one node of a [`Graph`].
///
/// `Var` is `Copy`; arithmetic operators and the elementary functions in
/// [`crate::ops`] take it by value and append a new node to the same graph.
/// Handles are tied to the graph borrow, so they cannot outlive a
/// [`Graph::rewind`].
#[derive(Clone, Copy)]
pub struct Var<'g> {
    graph: &'g Graph,
    id: NodeId,
}

impl<'g> Var<'g> {
    pub(crate) fn new(graph: &'g Graph, id: NodeId) -> Self {
        Var { graph, id }
    }

    /// The graph this variable lives in.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// The stable handle of this variable, for storing past the current borrow.
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn value(&self) -> f64 {
        self.graph.node(self.id).value
    }

    /// The accumulated gradient of the last backward root with respect to this variable.
    pub fn grad(&self) -> f64 {
        self.graph.node(self.id).grad
    }

    pub fn set_value(&self, value: f64) {
        self.graph.update_node(self.id, |node| node.value = value);
    }

    pub fn set_grad(&self, grad: f64) {
        self.graph.update_node(self.id, |node| node.grad = grad);
    }

    /// Resets the gradient to `0.0`.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    pub fn is_leaf(&self) -> bool {
        self.graph.node(self.id).is_leaf()
    }

    /// The operation that produced this variable.
    pub fn op(&self) -> Op {
        self.graph.node(self.id).op
    }

    /// The variables this one was computed from, in operand order.
    pub fn parents(&self) -> Vec<Var<'g>> {
        let parents = self.graph.node(self.id).parents;
        parents
            .iter()
            .flatten()
            .map(|&index| Var::new(self.graph, self.graph.id_at(index)))
            .collect()
    }

    /// Back-propagates from this variable. See [`Graph::backward`].
    pub fn backward(&self) {
        self.graph.backward_unchecked(self.id);
    }

    pub(crate) fn same_graph(&self, other: &Var<'_>) -> bool {
        std::ptr::eq(self.graph, other.graph)
    }
}

impl fmt::Debug for Var<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.graph.node(self.id);
        f.debug_struct("Var")
            .field("index", &self.id.index)
            .field("op", &node.op.name())
            .field("value", &node.value)
            .field("grad", &node.grad)
            .finish()
    }
}

impl fmt::Display for Var<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Var(value={}, grad={})", self.value(), self.grad())
    }
}
