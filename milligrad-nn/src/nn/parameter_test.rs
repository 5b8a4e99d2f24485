use super::*;

#[test]
fn test_parameter_is_leaf() -> Result<(), MilligradError> {
    let graph = Graph::new();
    let p = Parameter::new(&graph, 0.25);

    assert_eq!(p.value(&graph)?, 0.25);
    assert_eq!(p.grad(&graph)?, 0.0);
    assert!(graph.is_leaf(p.id())?);
    assert_eq!(p.index(), 0, "Deref exposes the node handle");
    Ok(())
}

#[test]
fn test_parameter_survives_rewind() -> Result<(), MilligradError> {
    let mut graph = Graph::new();
    let p = Parameter::new(&graph, 2.0);
    let checkpoint = graph.checkpoint();

    {
        let y = p.var(&graph)? * 3.0;
        y.backward();
    }
    graph.rewind(checkpoint)?;

    assert_eq!(p.value(&graph)?, 2.0);
    assert_eq!(p.grad(&graph)?, 3.0);
    assert_eq!(format!("{:?}", p), "Parameter(#0)");
    Ok(())
}
