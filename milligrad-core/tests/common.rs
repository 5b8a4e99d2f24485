use milligrad_core::{Graph, Var};

/// Builds `d = relu(a) + b * c - 5` over fresh leaves and returns `[a, b, c, d]`.
#[allow(dead_code)]
pub fn diamond(graph: &Graph, a: f64, b: f64, c: f64) -> [Var<'_>; 4] {
    let a = graph.leaf(a);
    let b = graph.leaf(b);
    let c = graph.leaf(c);
    let d = a.relu() + b * c - 5.0;
    [a, b, c, d]
}

/// Collects the gradients of the given variables.
#[allow(dead_code)]
pub fn grads(vars: &[Var<'_>]) -> Vec<f64> {
    vars.iter().map(|v| v.grad()).collect()
}
