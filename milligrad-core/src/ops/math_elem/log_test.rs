use super::*;
use crate::autograd::grad_check::check_grad;
use crate::graph::Graph;
use approx::assert_relative_eq;

#[test]
fn test_ln_of_e() {
    let graph = Graph::new();
    let a = graph.leaf(E);
    let c = a.ln();

    c.backward();

    assert_relative_eq!(c.value(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(a.grad(), 1.0 / E, epsilon = 1e-12);
}

#[test]
fn test_log_custom_base() {
    let graph = Graph::new();
    let a = graph.leaf(8.0);
    let c = a.log2();

    c.backward();

    assert_relative_eq!(c.value(), 3.0, epsilon = 1e-12);
    assert_relative_eq!(a.grad(), 1.0 / (8.0 * 2.0_f64.ln()), epsilon = 1e-12);
    assert_eq!(c.op(), Op::Log(2.0));

    let d = graph.leaf(1000.0).log10();
    assert_relative_eq!(d.value(), 3.0, epsilon = 1e-12);
}

#[test]
fn test_log_of_negative_is_nan() {
    let graph = Graph::new();
    let a = graph.leaf(-1.0);
    let c = a.ln();

    c.backward();

    assert!(c.value().is_nan());
    assert_relative_eq!(a.grad(), -1.0, epsilon = 1e-12);
}

#[test]
fn test_log_grad_check() {
    let result = check_grad(|x| x[0].log(3.0) * x[1], &[2.5, 1.5], 1e-6, 1e-7, 1e-5);
    assert!(result.is_ok(), "Log grad check failed: {:?}", result.err());
}
