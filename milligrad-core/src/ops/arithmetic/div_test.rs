use super::*;
use crate::autograd::grad_check::check_grad;
use crate::graph::Graph;
use approx::assert_relative_eq;

#[test]
fn test_div_forward_backward() {
    let graph = Graph::new();
    let a = graph.leaf(10.0);
    let b = graph.leaf(2.0);
    let c = a / b;

    c.backward();

    assert_eq!(c.value(), 5.0);
    assert_eq!(a.grad(), 0.5);
    assert_eq!(b.grad(), -2.5);
}

#[test]
fn test_div_scalar_both_sides() {
    let graph = Graph::new();
    let a = graph.leaf(4.0);
    let left = a / 2.0;
    let right = 2.0 / a;

    assert_eq!(left.value(), 2.0);
    assert_eq!(right.value(), 0.5);

    right.backward();
    // d/da (2/a) = -2/a^2
    assert_relative_eq!(a.grad(), -0.125);
}

#[test]
fn test_div_by_zero_propagates_infinity() {
    let graph = Graph::new();
    let a = graph.leaf(1.0);
    let b = graph.leaf(0.0);
    let c = a / b;

    c.backward();

    assert!(c.value().is_infinite());
    assert!(!b.grad().is_finite());
}

#[test]
fn test_div_grad_check() {
    let result = check_grad(|x| x[0] / x[1], &[1.3, -0.6], 1e-6, 1e-7, 1e-5);
    assert!(result.is_ok(), "Div grad check failed: {:?}", result.err());
}
