use super::*;
use crate::autograd::grad_check::check_grad;
use crate::graph::Graph;

#[test]
fn test_relu_forward_backward() {
    let graph = Graph::new();
    let a = graph.leaf(-2.0);
    let b = graph.leaf(2.0);
    let c = a.relu();
    let d = b.relu();

    c.backward();
    d.backward();

    assert_eq!(c.value(), 0.0);
    assert_eq!(d.value(), 2.0);
    assert_eq!(a.grad(), 0.0);
    assert_eq!(b.grad(), 1.0);
}

#[test]
fn test_relu_at_zero() {
    let graph = Graph::new();
    let a = graph.leaf(0.0);
    let c = a.relu();

    c.backward();

    assert_eq!(c.value(), 0.0);
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn test_relu_backward_chain() {
    // loss = relu(x * 2) for x in {-1, 1, 2}
    let graph = Graph::new();
    let xs = graph.leaves(&[-1.0, 1.0, 2.0]);
    let mut loss = (xs[0] * 2.0).relu();
    loss += (xs[1] * 2.0).relu();
    loss += (xs[2] * 2.0).relu();

    loss.backward();

    assert_eq!(loss.value(), 6.0);
    let grads: Vec<f64> = xs.iter().map(|x| x.grad()).collect();
    assert_eq!(grads, vec![0.0, 2.0, 2.0]);
}

#[test]
fn test_relu_grad_check_away_from_kink() {
    let result = check_grad(|x| x[0].relu() + x[1].relu(), &[1.5, -0.5], 1e-6, 1e-7, 1e-5);
    assert!(result.is_ok(), "ReLU grad check failed: {:?}", result.err());
}
