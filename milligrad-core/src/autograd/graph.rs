use crate::node::Node;

/// Builds a topological ordering of every node reachable from `root`.
///
/// Depth-first and post-order: a node is recorded only after all of its parents, so
/// each node appears strictly after its inputs. Already-visited nodes are skipped,
/// which keeps the walk linear in the number of nodes even when sub-graphs are shared.
/// An explicit stack replaces recursion so long chains cannot exhaust the call stack.
///
/// Marks every recorded node as visited; [`backward`] clears the markers again.
pub(crate) fn build_topo(nodes: &mut [Node], root: usize) -> Vec<usize> {
    let mut sorted = Vec::new();
    // (index, parents_done)
    let mut stack = vec![(root, false)];

    while let Some((index, parents_done)) = stack.pop() {
        if parents_done {
            sorted.push(index);
            continue;
        }
        if nodes[index].visited {
            continue;
        }
        nodes[index].visited = true;
        stack.push((index, true));
        // Reversed so the first parent is explored first, as the recursive walk would.
        for parent in nodes[index].parents.iter().rev().flatten() {
            if !nodes[*parent].visited {
                stack.push((*parent, false));
            }
        }
    }
    sorted
}

/// Runs the backward sweep from `root` over the arena.
///
/// Sets the root gradient to `1.0`, then walks the topological order in reverse and lets
/// every node push its contribution into its parents. In reverse order every consumer of
/// a node runs before the node itself, so a node's gradient is complete by the time its
/// own rule reads it. Gradients are accumulated, never overwritten.
///
/// Returns the number of nodes processed.
pub(crate) fn backward(nodes: &mut [Node], root: usize) -> usize {
    let sorted = build_topo(nodes, root);
    nodes[root].grad = 1.0;

    for &index in sorted.iter().rev() {
        let Node {
            value,
            grad,
            parents,
            op,
            ..
        } = nodes[index];
        let inputs = parents.map(|p| p.map_or(0.0, |p| nodes[p].value));
        let contributions = op.local_backward(value, grad, inputs);
        for (parent, delta) in parents.iter().zip(contributions) {
            if let Some(parent) = parent {
                nodes[*parent].grad += delta;
            }
        }
        nodes[index].visited = false;
    }

    log::trace!("backward from node {} processed {} nodes", root, sorted.len());
    sorted.len()
}
