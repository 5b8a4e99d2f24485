use crate::autograd::Op;

/// Storage for one scalar in the computation graph.
///
/// Nodes live inside a [`Graph`](crate::Graph) arena and refer to their parents by
/// arena index. Parents always have a smaller index than the node itself, which keeps
/// the parent relation acyclic.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Node {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) parents: [Option<usize>; 2],
    pub(crate) op: Op,
    /// Traversal marker, only set while a backward pass is running.
    pub(crate) visited: bool,
    /// Generation of the graph when this node was pushed.
    pub(crate) generation: u32,
}

impl Node {
    pub(crate) fn leaf(value: f64, generation: u32) -> Self {
        Node {
            value,
            grad: 0.0,
            parents: [None, None],
            op: Op::Leaf,
            visited: false,
            generation,
        }
    }

    pub(crate) fn derived(value: f64, op: Op, parents: [Option<usize>; 2], generation: u32) -> Self {
        Node {
            value,
            grad: 0.0,
            parents,
            op,
            visited: false,
            generation,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.parents.iter().all(Option::is_none)
    }
}
