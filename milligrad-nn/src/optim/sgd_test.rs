use super::*;
use approx::assert_relative_eq;

#[test]
fn test_step_updates_values() -> Result<(), MilligradError> {
    let graph = Graph::new();
    let w = graph.leaf(1.0);
    let b = graph.leaf(-2.0);
    w.set_grad(0.5);
    b.set_grad(-1.0);

    let mut optimizer = GradientDescent::new([w.id(), b.id()], 0.1)?;
    optimizer.step(&graph)?;

    assert_relative_eq!(w.value(), 0.95);
    assert_relative_eq!(b.value(), -1.9);
    assert_eq!(w.grad(), 0.5, "step leaves gradients untouched");
    Ok(())
}

#[test]
fn test_zero_grad() -> Result<(), MilligradError> {
    let graph = Graph::new();
    let w = graph.leaf(1.0);
    w.set_grad(3.0);

    let mut optimizer = GradientDescent::new([w.id()], 0.1)?;
    optimizer.zero_grad(&graph)?;

    assert_eq!(w.grad(), 0.0);
    assert_eq!(optimizer.params(), &[w.id()]);
    Ok(())
}

#[test]
fn test_descends_quadratic() -> Result<(), MilligradError> {
    let mut graph = Graph::new();
    let x = graph.leaf(5.0).id();
    let mut optimizer = GradientDescent::new([x], 0.25)?;
    let checkpoint = graph.checkpoint();

    for _ in 0..50 {
        optimizer.zero_grad(&graph)?;
        {
            let xv = graph.var(x)?;
            let loss = xv.square();
            loss.backward();
        }
        optimizer.step(&graph)?;
        graph.rewind(checkpoint)?;
    }

    assert!(graph.value(x)?.abs() < 1e-6);
    Ok(())
}

#[test]
fn test_invalid_learning_rate() -> Result<(), MilligradError> {
    for lr in [-0.1, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            GradientDescent::new(Vec::new(), lr),
            Err(MilligradError::InvalidArgument(_))
        ));
    }

    let mut optimizer = GradientDescent::new(Vec::new(), 0.0)?;
    assert!(optimizer.set_lr(-1.0).is_err());
    optimizer.set_lr(0.5)?;
    assert_eq!(optimizer.lr(), 0.5);
    Ok(())
}
