use milligrad_core::{Graph, MilligradError, NodeId, Var};
use std::fmt;
use std::ops::Deref;

/// A learnable scalar of a [`Module`](crate::nn::Module).
///
/// Wraps the [`NodeId`] of a leaf created before any training graph is built, so the
/// leaf survives every [`Graph::rewind`] that discards the per-iteration nodes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parameter(NodeId);

impl Parameter {
    /// Creates a new leaf holding `value` and wraps it as a parameter.
    pub fn new(graph: &Graph, value: f64) -> Self {
        Parameter(graph.leaf(value).id())
    }

    pub fn id(&self) -> NodeId {
        self.0
    }

    /// Attaches the parameter to `graph` so it can take part in operations.
    pub fn var<'g>(&self, graph: &'g Graph) -> Result<Var<'g>, MilligradError> {
        graph.var(self.0)
    }

    pub fn value(&self, graph: &Graph) -> Result<f64, MilligradError> {
        graph.value(self.0)
    }

    pub fn grad(&self, graph: &Graph) -> Result<f64, MilligradError> {
        graph.grad(self.0)
    }
}

impl Deref for Parameter {
    type Target = NodeId;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter(#{})", self.0.index())
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
