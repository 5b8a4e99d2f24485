use super::*;
use approx::assert_relative_eq;
use milligrad_core::Op;

#[test]
fn test_network_shapes() -> Result<(), MilligradError> {
    let graph = Graph::new();
    let network = Network::new(&graph, 3, &[4, 4, 1], 42)?;

    assert_eq!(network.input_width(), 3);
    assert_eq!(network.output_width(), 1);
    assert_eq!(network.layers().len(), 3);
    assert_eq!(network.num_params(), 4 * 4 + 4 * 5 + 5);
    assert_eq!(graph.len(), network.num_params());
    Ok(())
}

#[test]
fn test_network_forward_last_layer_linear() -> Result<(), MilligradError> {
    let graph = Graph::new();
    let network = Network::new(&graph, 2, &[3, 2], 1)?;
    let x = graph.leaves(&[0.5, -1.5]);

    let out = network.forward(&graph, &x)?;

    assert_eq!(out.len(), 2);
    for y in &out {
        assert_eq!(y.op(), Op::Add, "output layer has no activation");
        // out = dot + bias, dot = (... + w1 * h1) + w2 * h2
        let hidden = y.parents()[0].parents()[1].parents()[1];
        assert_eq!(hidden.op(), Op::Tanh);
    }
    Ok(())
}

#[test]
fn test_single_layer_network_is_linear() -> Result<(), MilligradError> {
    let graph = Graph::new();
    let network = Network::new(&graph, 1, &[1], 5)?;
    let unit = &network.layers()[0].units()[0];
    let w = unit.weights()[0].value(&graph)?;
    let b = unit.bias().value(&graph)?;

    let x = graph.leaves(&[2.0]);
    let out = network.forward(&graph, &x)?;

    assert_relative_eq!(out[0].value(), w * 2.0 + b);
    Ok(())
}

#[test]
fn test_network_reproducible() -> Result<(), MilligradError> {
    let graph1 = Graph::new();
    let graph2 = Graph::new();
    let a = Network::new(&graph1, 3, &[4, 1], 7)?;
    let b = Network::new(&graph2, 3, &[4, 1], 7)?;

    let values = |graph: &Graph, network: &Network| -> Result<Vec<f64>, MilligradError> {
        network.params().iter().map(|p| p.value(graph)).collect()
    };
    assert_eq!(values(&graph1, &a)?, values(&graph2, &b)?);

    let graph3 = Graph::new();
    let c = Network::new(&graph3, 3, &[4, 1], 8)?;
    assert_ne!(values(&graph1, &a)?, values(&graph3, &c)?);
    Ok(())
}

#[test]
fn test_network_named_params_order() -> Result<(), MilligradError> {
    let graph = Graph::new();
    let network = Network::new(&graph, 2, &[2, 1], 0)?;
    let named = network.named_params();
    let params = network.params();

    assert_eq!(named.len(), params.len());
    assert_eq!(named[0].0, "layer0.unit0.weight0");
    assert_eq!(named[2].0, "layer0.unit0.bias");
    assert_eq!(named[3].0, "layer0.unit1.weight0");
    assert_eq!(named.last().map(|(n, _)| n.as_str()), Some("layer1.unit0.bias"));
    for ((_, a), b) in named.iter().zip(&params) {
        assert_eq!(a.id(), b.id());
    }
    Ok(())
}

#[test]
fn test_network_zero_grad() -> Result<(), MilligradError> {
    let graph = Graph::new();
    let network = Network::new(&graph, 2, &[3, 1], 0)?;
    let x = graph.leaves(&[1.0, 2.0]);

    let out = network.forward(&graph, &x)?;
    out[0].backward();
    assert!(network.params().iter().any(|p| p.grad(&graph).map_or(false, |g| g != 0.0)));

    network.zero_grad(&graph)?;
    for p in network.params() {
        assert_eq!(p.grad(&graph)?, 0.0);
    }
    Ok(())
}

#[test]
fn test_network_rejects_bad_widths() {
    let graph = Graph::new();
    for (input, widths) in [(3, vec![]), (3, vec![4, 0, 1]), (0, vec![1])] {
        assert!(matches!(
            Network::new(&graph, input, &widths, 0),
            Err(MilligradError::InvalidArgument(_))
        ));
    }
}

#[test]
fn test_network_input_mismatch() -> Result<(), MilligradError> {
    let graph = Graph::new();
    let network = Network::new(&graph, 3, &[2, 1], 0)?;
    let x = graph.leaves(&[1.0, 2.0]);

    assert_eq!(
        network.forward(&graph, &x).unwrap_err(),
        MilligradError::DimensionMismatch {
            expected: 3,
            actual: 2
        }
    );
    Ok(())
}
