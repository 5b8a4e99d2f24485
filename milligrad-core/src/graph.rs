use crate::autograd::{self, Op};
use crate::error::MilligradError;
use crate::node::Node;
use crate::var::Var;
use std::cell::{Ref, RefCell};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(0);

/// Stable handle to a node in a [`Graph`].
///
/// Unlike [`Var`], a `NodeId` carries no borrow of the graph, so long-lived owners
/// (parameters, datasets) store these. The graph stamp lets a graph reject a handle
/// created by another graph, and the generation stamp one whose node was discarded by
/// [`Graph::rewind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) graph: u64,
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Marks the arena length at some point in time. See [`Graph::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    graph: u64,
    len: usize,
    generation: u32,
}

impl Checkpoint {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Arena owning every node of a dynamic computation graph.
///
/// Operations append nodes through a shared reference, so any number of [`Var`]
/// handles can build on the same graph at once. Nodes are only ever removed by
/// [`Graph::rewind`], which takes `&mut self` and therefore cannot run while a `Var`
/// is alive.
#[derive(Debug)]
pub struct Graph {
    id: u64,
    nodes: RefCell<Vec<Node>>,
    generation: u32,
}

impl Default for Graph {
    fn default() -> Self {
        Graph {
            id: NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed),
            nodes: RefCell::new(Vec::new()),
            generation: 0,
        }
    }
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    /// Creates a leaf node (no parents) holding `value`.
    pub fn leaf(&self, value: f64) -> Var<'_> {
        let id = self.push(Node::leaf(value, self.generation));
        Var::new(self, id)
    }

    /// Creates one leaf per value, in order.
    pub fn leaves(&self, values: &[f64]) -> Vec<Var<'_>> {
        values.iter().map(|&v| self.leaf(v)).collect()
    }

    /// Re-attaches a stored handle to this graph.
    ///
    /// # Errors
    /// `StaleNode` if the handle was created by another graph or its node was discarded.
    pub fn var(&self, id: NodeId) -> Result<Var<'_>, MilligradError> {
        self.check(id)?;
        Ok(Var::new(self, id))
    }

    /// Number of nodes currently in the arena.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    pub fn value(&self, id: NodeId) -> Result<f64, MilligradError> {
        self.check(id)?;
        Ok(self.nodes.borrow()[id.index].value)
    }

    pub fn grad(&self, id: NodeId) -> Result<f64, MilligradError> {
        self.check(id)?;
        Ok(self.nodes.borrow()[id.index].grad)
    }

    /// Overwrites the value of a node. Intended for leaves; values of derived nodes are
    /// not recomputed.
    pub fn set_value(&self, id: NodeId, value: f64) -> Result<(), MilligradError> {
        self.check(id)?;
        self.nodes.borrow_mut()[id.index].value = value;
        Ok(())
    }

    pub fn set_grad(&self, id: NodeId, grad: f64) -> Result<(), MilligradError> {
        self.check(id)?;
        self.nodes.borrow_mut()[id.index].grad = grad;
        Ok(())
    }

    pub fn is_leaf(&self, id: NodeId) -> Result<bool, MilligradError> {
        self.check(id)?;
        Ok(self.nodes.borrow()[id.index].is_leaf())
    }

    pub fn op(&self, id: NodeId) -> Result<Op, MilligradError> {
        self.check(id)?;
        Ok(self.nodes.borrow()[id.index].op)
    }

    /// Computes the gradient of `root` with respect to every node it depends on.
    ///
    /// `root`'s own gradient is set to `1.0`; every ancestor's gradient is increased by
    /// its partial derivative. Gradients are accumulated, so callers reusing leaves
    /// across passes must reset them first.
    pub fn backward(&self, root: NodeId) -> Result<(), MilligradError> {
        self.check(root)?;
        self.backward_unchecked(root);
        Ok(())
    }

    /// Resets the gradient of every node in the arena to `0.0`.
    pub fn zero_grads(&self) {
        for node in self.nodes.borrow_mut().iter_mut() {
            node.grad = 0.0;
        }
    }

    /// Records the current arena length.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            graph: self.id,
            len: self.len(),
            generation: self.generation,
        }
    }

    /// Discards every node created after `checkpoint`.
    ///
    /// Nodes created before the checkpoint keep their values, gradients and handles.
    /// Handles to discarded nodes become stale and are rejected from then on.
    ///
    /// # Returns
    /// The number of nodes discarded.
    ///
    /// # Errors
    /// `StaleCheckpoint` if the checkpoint was taken on another graph, or if an earlier
    /// rewind already removed nodes it covered.
    pub fn rewind(&mut self, checkpoint: Checkpoint) -> Result<usize, MilligradError> {
        let nodes = self.nodes.get_mut();
        let covered_still_present = checkpoint.graph == self.id
            && checkpoint.len <= nodes.len()
            && (checkpoint.len == 0 || nodes[checkpoint.len - 1].generation <= checkpoint.generation);
        if !covered_still_present {
            return Err(MilligradError::StaleCheckpoint { len: checkpoint.len });
        }
        let discarded = nodes.len() - checkpoint.len;
        nodes.truncate(checkpoint.len);
        self.generation = self.generation.wrapping_add(1);
        log::trace!("rewound graph to {} nodes, discarded {}", checkpoint.len, discarded);
        Ok(discarded)
    }

    // --- crate-internal plumbing used by `Var` and the ops ---

    pub(crate) fn push(&self, node: Node) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(node);
        NodeId {
            graph: self.id,
            index: nodes.len() - 1,
            generation: self.generation,
        }
    }

    pub(crate) fn derive(&self, value: f64, op: Op, parents: [Option<NodeId>; 2]) -> NodeId {
        let parents = parents.map(|p| p.map(|p| p.index));
        self.push(Node::derived(value, op, parents, self.generation))
    }

    pub(crate) fn var_unchecked(&self, id: NodeId) -> Var<'_> {
        Var::new(self, id)
    }

    pub(crate) fn node(&self, id: NodeId) -> Ref<'_, Node> {
        Ref::map(self.nodes.borrow(), |nodes| &nodes[id.index])
    }

    /// Handle of the node at `index`, which must be present.
    pub(crate) fn id_at(&self, index: usize) -> NodeId {
        NodeId {
            graph: self.id,
            index,
            generation: self.nodes.borrow()[index].generation,
        }
    }

    pub(crate) fn update_node(&self, id: NodeId, f: impl FnOnce(&mut Node)) {
        f(&mut self.nodes.borrow_mut()[id.index]);
    }

    pub(crate) fn backward_unchecked(&self, root: NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        autograd::graph::backward(&mut nodes, root.index);
    }

    fn check(&self, id: NodeId) -> Result<(), MilligradError> {
        match self.nodes.borrow().get(id.index) {
            Some(node) if id.graph == self.id && node.generation == id.generation => Ok(()),
            _ => Err(MilligradError::StaleNode { index: id.index }),
        }
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
